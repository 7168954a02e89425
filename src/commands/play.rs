//! Play command
//!
//! Line-based solo game. Each line is one action:
//!
//! - `111t 111l 111r`: trace faces (`xyz` then `t`, `l` or `r`) and play the word
//! - `remove 111`: remove a used-up cube
//! - `words`: list unplayed words (a hint)
//! - `save <path>`: write the game as JSON for `replay`
//! - `quit`

use crate::core::{IndexedCubeFace, LatticePoint, Moves, Puzzle, Side};
use crate::dictionary::Dictionary;
use crate::output::print_puzzle;
use crate::rules::{GameMode, GameOver, MoveRequest, Rules, Verifier, game_over};
use crate::scoring::prefix_bonus_count;
use crate::selection::Selection;
use crate::snapshot::GameSnapshot;
use crate::solver::Solver;
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::fs;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// One parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(Vec<IndexedCubeFace>),
    Remove(LatticePoint),
    Words,
    Save(String),
    Quit,
}

/// Parse a face like `120l`
///
/// # Examples
/// ```
/// use cubeword::commands::play::parse_face;
/// use cubeword::core::{LatticePoint, Side};
///
/// let face = parse_face("120l").unwrap();
/// assert_eq!(face.index, LatticePoint::new(1, 2, 0).unwrap());
/// assert_eq!(face.side, Side::Left);
/// assert!(parse_face("13t").is_none());
/// ```
#[must_use]
pub fn parse_face(token: &str) -> Option<IndexedCubeFace> {
    let (point, side) = token.split_at_checked(3)?;
    let mut side_chars = side.chars();
    let side = Side::from_code(side_chars.next()?.to_ascii_lowercase())?;
    if side_chars.next().is_some() {
        return None;
    }
    Some(IndexedCubeFace::new(parse_point(point)?, side))
}

/// Parse a lattice point like `021`
#[must_use]
pub fn parse_point(token: &str) -> Option<LatticePoint> {
    let digits: Vec<u8> = token
        .chars()
        .map(|c| c.to_digit(10).and_then(|d| u8::try_from(d).ok()))
        .collect::<Option<_>>()?;
    match digits[..] {
        [x, y, z] => LatticePoint::new(x, y, z).ok(),
        _ => None,
    }
}

/// Parse one input line
///
/// # Errors
/// Returns a message describing what could not be understood.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return Err("Empty input".to_string());
    };

    match first.to_ascii_lowercase().as_str() {
        "quit" | "q" | "exit" => Ok(Command::Quit),
        "words" | "hint" => Ok(Command::Words),
        "save" => tokens
            .next()
            .map(|path| Command::Save(path.to_string()))
            .ok_or_else(|| "Usage: save <path>".to_string()),
        "remove" | "rm" => tokens
            .next()
            .and_then(parse_point)
            .map(Command::Remove)
            .ok_or_else(|| "Usage: remove xyz (e.g. remove 111)".to_string()),
        _ => {
            let faces = line
                .split_whitespace()
                .map(|token| parse_face(token).ok_or_else(|| format!("Not a face: {token}")))
                .collect::<Result<Vec<_>, _>>()?;
            match first_repeated(&faces) {
                Some(face) => Err(format!("Face {face} is used twice")),
                None => Ok(Command::Play(faces)),
            }
        }
    }
}

/// The first face that appears earlier in the path as well
fn first_repeated(faces: &[IndexedCubeFace]) -> Option<IndexedCubeFace> {
    let mut seen = 0u128;
    faces.iter().copied().find(|face| {
        let bit = 1u128 << face.id();
        let repeated = seen & bit != 0;
        seen |= bit;
        repeated
    })
}

/// What handling a command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Scored {
        word: String,
        score: i32,
        /// Shorter words hiding at the start of this one
        prefix_words: usize,
    },
    Removed(LatticePoint),
    Rejected(String),
    Hint(Vec<(String, i32)>),
    Saved(String),
    Finished(Option<GameOver>),
}

/// A solo game in progress
pub struct PlaySession<'d, D: ?Sized> {
    verifier: Verifier<'d, D>,
    puzzle: Puzzle,
    moves: Moves,
    mode: GameMode,
    max_word_length: usize,
}

impl<'d, D: Dictionary + ?Sized> PlaySession<'d, D> {
    #[must_use]
    pub fn new(
        puzzle: Puzzle,
        dictionary: &'d D,
        rules: Rules,
        mode: GameMode,
        max_word_length: usize,
    ) -> Self {
        Self {
            verifier: Verifier::new(dictionary).with_rules(rules),
            puzzle,
            moves: Moves::new(),
            mode,
            max_word_length,
        }
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub const fn moves(&self) -> &Moves {
        &self.moves
    }

    #[must_use]
    pub const fn rules(&self) -> &Rules {
        self.verifier.rules()
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(self.puzzle.clone(), self.moves.clone(), self.mode)
    }

    /// Whether the game has ended after `elapsed_secs`
    #[must_use]
    pub fn game_over(&self, elapsed_secs: u64) -> Option<GameOver> {
        game_over(&self.puzzle, self.mode, elapsed_secs, self.verifier.rules())
    }

    /// Apply one command at `now`
    pub fn handle(&mut self, command: Command, now: DateTime<Utc>) -> Outcome {
        match command {
            Command::Play(faces) => self.play(faces, now),
            Command::Remove(point) => {
                let request = MoveRequest::removed_cube(now, None, point);
                match self.verifier.apply(request, &mut self.puzzle, &mut self.moves) {
                    Ok(_) => Outcome::Removed(point),
                    Err(error) => Outcome::Rejected(error.to_string()),
                }
            }
            Command::Words => {
                let solver = Solver::new(
                    self.verifier.dictionary(),
                    self.verifier.language(),
                    self.verifier.rules(),
                );
                Outcome::Hint(
                    solver
                        .unplayed_words(&self.puzzle, &self.moves, self.max_word_length)
                        .into_iter()
                        .map(|found| (found.word, found.score))
                        .collect(),
                )
            }
            Command::Save(path) => match self.save(&path) {
                Ok(()) => Outcome::Saved(path),
                Err(error) => Outcome::Rejected(format!("Could not save {path}: {error}")),
            },
            Command::Quit => Outcome::Finished(None),
        }
    }

    fn play(&mut self, faces: Vec<IndexedCubeFace>, now: DateTime<Utc>) -> Outcome {
        // typed paths may not repeat a face; `toggle` would truncate them
        if let Some(face) = first_repeated(&faces) {
            return Outcome::Rejected(format!("Face {face} is used twice"));
        }
        let mut selection = Selection::with_rules(self.verifier.rules().clone());
        for face in faces {
            if let Err(error) = selection.toggle(face, &self.puzzle) {
                return Outcome::Rejected(error.to_string());
            }
        }

        let word = selection.word(&self.puzzle);
        let request = selection.into_request(now, None);
        match self.verifier.apply(request, &mut self.puzzle, &mut self.moves) {
            Ok(score) => {
                let dictionary = self.verifier.dictionary();
                let language = self.verifier.language();
                let prefix_words =
                    prefix_bonus_count(&word, |prefix| dictionary.contains(prefix, language));
                Outcome::Scored {
                    word,
                    score,
                    prefix_words,
                }
            }
            Err(error) => Outcome::Rejected(error.to_string()),
        }
    }

    fn save(&self, path: &str) -> io::Result<()> {
        let json = self.snapshot().to_json().map_err(io::Error::other)?;
        fs::write(path, json)
    }
}

/// Run an interactive game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<D: Dictionary + ?Sized>(session: &mut PlaySession<'_, D>) -> io::Result<()> {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CUBEWORD".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("Trace a word with faces like '111t 111l 111r' (x y z then t/l/r).");
    println!("Commands: 'remove xyz', 'words', 'save <path>', 'quit'\n");

    let start = Instant::now();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_puzzle(session.puzzle(), session.rules().removal_threshold);
        println!(
            "Score: {}  Words: {}",
            session.moves().total_score().to_string().bright_yellow().bold(),
            session.moves().word_count()
        );
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message.red());
                continue;
            }
        };

        match session.handle(command, Utc::now()) {
            Outcome::Scored {
                word,
                score,
                prefix_words,
            } => {
                println!("{}", format!("✅ {word} for {score} points").green().bold());
                if prefix_words > 0 {
                    println!("   ✨ {prefix_words} more word(s) hiding inside");
                }
            }
            Outcome::Removed(point) => println!("{}", format!("🧊 Removed cube {point}").green()),
            Outcome::Rejected(reason) => println!("{}", format!("❌ {reason}").red()),
            Outcome::Hint(words) => {
                println!("{} words left:", words.len());
                for (word, score) in words.iter().take(20) {
                    println!("  • {word:<12} {score:>4}");
                }
            }
            Outcome::Saved(path) => println!("💾 Saved to {path}"),
            Outcome::Finished(_) => break,
        }

        if let Some(reason) = session.game_over(start.elapsed().as_secs()) {
            println!("\n{}", format!("🏁 Game over: {reason}").bright_yellow().bold());
            break;
        }
    }

    println!(
        "\nFinal score: {}\n",
        session.moves().total_score().to_string().bright_yellow().bold()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordList;
    use crate::dictionary::loader::words_from_slice;

    fn center(side: Side) -> IndexedCubeFace {
        IndexedCubeFace::new(LatticePoint::CENTER, side)
    }

    fn session(words: &WordList) -> PlaySession<'_, WordList> {
        let puzzle = Puzzle::uniform("E")
            .with_letter(center(Side::Top), "C")
            .with_letter(center(Side::Left), "A")
            .with_letter(center(Side::Right), "B");
        PlaySession::new(puzzle, words, Rules::default(), GameMode::Unlimited, 6)
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            parse_command("111t 111L 111r"),
            Ok(Command::Play(vec![
                center(Side::Top),
                center(Side::Left),
                center(Side::Right),
            ]))
        );
        assert_eq!(parse_command("remove 111"), Ok(Command::Remove(LatticePoint::CENTER)));
        assert_eq!(parse_command(" QUIT "), Ok(Command::Quit));
        assert_eq!(parse_command("save game.json"), Ok(Command::Save("game.json".into())));
        assert!(parse_command("").is_err());
        assert!(parse_command("remove 3").is_err());
        assert!(parse_command("111t 311l").is_err());
        assert!(parse_command("111x").is_err());
    }

    #[test]
    fn repeated_faces_are_rejected() {
        let error = parse_command("111t 111l 111t").unwrap_err();
        assert!(error.contains("111t"), "{error}");

        let words = words_from_slice(&["cac"]);
        let mut game = session(&words);
        let typed = Command::Play(vec![center(Side::Top), center(Side::Left), center(Side::Top)]);
        assert_eq!(
            game.handle(typed, Utc::now()),
            Outcome::Rejected("Face 111t is used twice".to_string())
        );
        assert!(game.moves().is_empty());
    }

    #[test]
    fn session_keeps_its_rules() {
        let words = words_from_slice(&["cab"]);
        let rules = Rules {
            removal_threshold: 1,
            ..Rules::default()
        };
        let game = PlaySession::new(Puzzle::uniform("E"), &words, rules, GameMode::Timed, 6);
        assert_eq!(game.rules().removal_threshold, 1);
    }

    #[test]
    fn rejects_bad_points() {
        assert_eq!(parse_point("222"), LatticePoint::new(2, 2, 2).ok());
        assert!(parse_point("1111").is_none());
        assert!(parse_point("1a1").is_none());
        assert!(parse_face("111tt").is_none());
        assert!(parse_face("11").is_none());
    }

    #[test]
    fn session_scores_and_rejects() {
        let words = words_from_slice(&["cab"]);
        let mut game = session(&words);
        let now = Utc::now();
        let play = || parse_command("111t 111l 111r").unwrap();

        assert_eq!(
            game.handle(play(), now),
            Outcome::Scored {
                word: "CAB".to_string(),
                score: 21,
                prefix_words: 0,
            }
        );
        assert!(matches!(game.handle(play(), now), Outcome::Rejected(_)));
        assert!(matches!(
            game.handle(Command::Remove(LatticePoint::CENTER), now),
            Outcome::Rejected(_)
        ));
        assert_eq!(game.moves().len(), 1);
    }

    #[test]
    fn disconnected_input_is_rejected_before_verifying() {
        let words = words_from_slice(&["cab"]);
        let mut game = session(&words);
        let outcome = game.handle(parse_command("111t 000t 111r").unwrap(), Utc::now());
        assert!(matches!(outcome, Outcome::Rejected(reason) if reason.contains("does not touch")));
        assert!(game.moves().is_empty());
    }

    #[test]
    fn hint_lists_unplayed_words() {
        let words = words_from_slice(&["cab", "bac"]);
        let mut game = session(&words);
        let now = Utc::now();
        game.handle(parse_command("111t 111l 111r").unwrap(), now);

        assert_eq!(
            game.handle(Command::Words, now),
            Outcome::Hint(vec![("BAC".to_string(), 21)])
        );
    }

    #[test]
    fn snapshot_carries_mode_and_moves() {
        let words = words_from_slice(&["cab"]);
        let mut game = session(&words);
        game.handle(parse_command("111t 111l 111r").unwrap(), Utc::now());

        let snapshot = game.snapshot();
        assert_eq!(snapshot.mode, GameMode::Unlimited);
        assert_eq!(snapshot.moves.len(), 1);
        assert_eq!(game.game_over(0), None);
    }
}
