//! Move verification and application
//!
//! Checks run cheapest first and stop at the first failure. A rejected move
//! never touches the puzzle or the log; an accepted one mutates both in a
//! single step.

use super::{AnyTurn, Rules, TurnPolicy};
use crate::core::{
    IndexedCubeFace, LatticePoint, Move, MoveType, Moves, PlayerIndex, Puzzle, Reaction,
};
use crate::dictionary::{Dictionary, Language};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Why a candidate move was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The face path is shorter than the minimum word length
    TooShort,
    /// A face in the path belongs to a removed (or covered) cube
    FaceNotPlayable(IndexedCubeFace),
    /// Two consecutive faces in the path do not touch
    NotConnected {
        from: IndexedCubeFace,
        to: IndexedCubeFace,
    },
    /// The spelled string is not in the dictionary
    NotAWord(String),
    /// The spelled string was already played in this game
    AlreadyPlayed(String),
    /// The cube is already out of play
    AlreadyRemoved(LatticePoint),
    /// Some face of the cube has not been used enough times
    NotEligibleForRemoval(LatticePoint),
    /// The turn policy refused the move's author
    OutOfTurn,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "Word is too short"),
            Self::FaceNotPlayable(face) => write!(f, "Face {face} is not playable"),
            Self::NotConnected { from, to } => write!(f, "Faces {from} and {to} do not touch"),
            Self::NotAWord(word) => write!(f, "{word} is not a word"),
            Self::AlreadyPlayed(word) => write!(f, "{word} was already played"),
            Self::AlreadyRemoved(point) => write!(f, "Cube {point} was already removed"),
            Self::NotEligibleForRemoval(point) => {
                write!(f, "Cube {point} has faces that are not used up yet")
            }
            Self::OutOfTurn => write!(f, "It is not this player's turn"),
        }
    }
}

impl std::error::Error for MoveError {}

/// A move as submitted by a player, before the kernel scores it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub played_at: DateTime<Utc>,
    pub player_index: Option<PlayerIndex>,
    pub reactions: Option<BTreeMap<PlayerIndex, Reaction>>,
    pub kind: MoveType,
}

impl MoveRequest {
    #[must_use]
    pub const fn played_word(
        played_at: DateTime<Utc>,
        player_index: Option<PlayerIndex>,
        faces: Vec<IndexedCubeFace>,
    ) -> Self {
        Self {
            played_at,
            player_index,
            reactions: None,
            kind: MoveType::PlayedWord(faces),
        }
    }

    #[must_use]
    pub const fn removed_cube(
        played_at: DateTime<Utc>,
        player_index: Option<PlayerIndex>,
        point: LatticePoint,
    ) -> Self {
        Self {
            played_at,
            player_index,
            reactions: None,
            kind: MoveType::RemovedCube(point),
        }
    }

    fn into_move(self, score: i32) -> Move {
        Move {
            played_at: self.played_at,
            player_index: self.player_index,
            reactions: self.reactions,
            score,
            kind: self.kind,
        }
    }
}

impl From<Move> for MoveRequest {
    fn from(logged: Move) -> Self {
        Self {
            played_at: logged.played_at,
            player_index: logged.player_index,
            reactions: logged.reactions,
            kind: logged.kind,
        }
    }
}

/// Decides whether moves are legal and applies the legal ones
///
/// Holds no game state of its own; the puzzle and log are passed in on every
/// call.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use cubeword::core::{IndexedCubeFace, LatticePoint, Moves, Puzzle, Side};
/// use cubeword::dictionary::loader::words_from_slice;
/// use cubeword::rules::{MoveRequest, Verifier};
///
/// let center = LatticePoint::CENTER;
/// let faces = vec![
///     IndexedCubeFace::new(center, Side::Top),
///     IndexedCubeFace::new(center, Side::Left),
///     IndexedCubeFace::new(center, Side::Right),
/// ];
/// let mut puzzle = Puzzle::uniform("E")
///     .with_letter(faces[0], "C")
///     .with_letter(faces[1], "A")
///     .with_letter(faces[2], "B");
/// let mut moves = Moves::new();
/// let dictionary = words_from_slice(&["cab"]);
///
/// let verifier = Verifier::new(&dictionary);
/// let request = MoveRequest::played_word(Utc::now(), None, faces);
/// let score = verifier.apply(request, &mut puzzle, &mut moves).unwrap();
/// assert_eq!(score, 21);
/// assert_eq!(moves.total_score(), 21);
/// ```
#[derive(Debug, Clone)]
pub struct Verifier<'d, D: ?Sized, T = AnyTurn> {
    dictionary: &'d D,
    language: Language,
    rules: Rules,
    turn_policy: T,
}

impl<'d, D: Dictionary + ?Sized> Verifier<'d, D, AnyTurn> {
    /// A solo-play verifier with English and default rules
    #[must_use]
    pub fn new(dictionary: &'d D) -> Self {
        Self {
            dictionary,
            language: Language::En,
            rules: Rules::default(),
            turn_policy: AnyTurn,
        }
    }
}

impl<'d, D: Dictionary + ?Sized, T: TurnPolicy> Verifier<'d, D, T> {
    #[must_use]
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Swap in a different turn-ownership predicate
    #[must_use]
    pub fn with_turn_policy<U: TurnPolicy>(self, turn_policy: U) -> Verifier<'d, D, U> {
        Verifier {
            dictionary: self.dictionary,
            language: self.language,
            rules: self.rules,
            turn_policy,
        }
    }

    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'d D {
        self.dictionary
    }

    /// Check a candidate move without applying it
    ///
    /// Returns the scored move that [`Verifier::apply`] would append.
    ///
    /// # Errors
    /// Returns the first rule the move breaks, as a [`MoveError`].
    pub fn verify(
        &self,
        request: MoveRequest,
        puzzle: &Puzzle,
        moves: &Moves,
    ) -> Result<Move, MoveError> {
        let score = match &request.kind {
            MoveType::PlayedWord(faces) => self.check_played_word(faces, puzzle, moves)?,
            MoveType::RemovedCube(point) => {
                self.check_removed_cube(*point, puzzle)?;
                0
            }
        };

        let candidate = request.into_move(score);
        if !self.turn_policy.is_valid_turn(&candidate, puzzle, moves) {
            return Err(MoveError::OutOfTurn);
        }
        Ok(candidate)
    }

    /// Check a candidate move and, if legal, apply it
    ///
    /// On success the puzzle's use counts or removal flags are updated, the
    /// move is appended to the log, and its score is returned. On failure
    /// nothing is changed.
    ///
    /// # Errors
    /// Returns the first rule the move breaks, as a [`MoveError`].
    pub fn apply(
        &self,
        request: MoveRequest,
        puzzle: &mut Puzzle,
        moves: &mut Moves,
    ) -> Result<i32, MoveError> {
        let accepted = match self.verify(request, puzzle, moves) {
            Ok(accepted) => accepted,
            Err(error) => {
                debug!(%error, "move rejected");
                return Err(error);
            }
        };

        match &accepted.kind {
            MoveType::PlayedWord(faces) => {
                puzzle.record_use(faces);
                debug!(
                    word = %puzzle.string_from(faces),
                    score = accepted.score,
                    "word accepted"
                );
            }
            MoveType::RemovedCube(point) => {
                puzzle.remove_cube(*point);
                debug!(cube = %point, "cube removed");
            }
        }

        let score = accepted.score;
        moves.push(accepted);
        Ok(score)
    }

    fn check_played_word(
        &self,
        faces: &[IndexedCubeFace],
        puzzle: &Puzzle,
        moves: &Moves,
    ) -> Result<i32, MoveError> {
        if faces.len() < self.rules.min_word_length {
            return Err(MoveError::TooShort);
        }

        if let Some(&face) = faces.iter().find(|&&f| !self.rules.face_is_playable(puzzle, f)) {
            return Err(MoveError::FaceNotPlayable(face));
        }

        if let Some(pair) = faces.windows(2).find(|pair| !pair[0].is_touching(pair[1])) {
            return Err(MoveError::NotConnected {
                from: pair[0],
                to: pair[1],
            });
        }

        let word = puzzle.string_from(faces);
        if !self.dictionary.contains(&word, self.language) {
            return Err(MoveError::NotAWord(word));
        }

        if moves.has_played(puzzle, &word) {
            return Err(MoveError::AlreadyPlayed(word));
        }

        Ok(self.rules.letter_values.score(&word))
    }

    fn check_removed_cube(&self, point: LatticePoint, puzzle: &Puzzle) -> Result<(), MoveError> {
        let cube = puzzle.cube(point);
        if cube.was_removed {
            return Err(MoveError::AlreadyRemoved(point));
        }
        if !cube.meets_removal_threshold(self.rules.removal_threshold) {
            return Err(MoveError::NotEligibleForRemoval(point));
        }
        Ok(())
    }
}
