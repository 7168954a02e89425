//! Touching-path word enumeration

use crate::core::{FACE_COUNT, IndexedCubeFace, Moves, Puzzle};
use crate::dictionary::{Dictionary, Language};
use crate::rules::Rules;
use rustc_hash::FxHashSet;
use std::cmp::Reverse;

/// A word that can be traced on the puzzle right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    /// One path that spells the word
    pub faces: Vec<IndexedCubeFace>,
    pub score: i32,
}

/// Enumerates the words playable on a puzzle
///
/// Walks every simple path of touching, playable faces up to `max_len`
/// faces, pruning a branch as soon as no dictionary word starts with the
/// letters traced so far.
pub struct Solver<'a, D: ?Sized> {
    dictionary: &'a D,
    language: Language,
    rules: &'a Rules,
}

impl<'a, D: Dictionary + ?Sized> Solver<'a, D> {
    #[must_use]
    pub const fn new(dictionary: &'a D, language: Language, rules: &'a Rules) -> Self {
        Self {
            dictionary,
            language,
            rules,
        }
    }

    /// Every findable word, best score first (ties alphabetical)
    ///
    /// When a word can be traced along several paths, the first one found in
    /// face id order is kept.
    #[must_use]
    pub fn find_words(&self, puzzle: &Puzzle, max_len: usize) -> Vec<FoundWord> {
        let mut search = Search {
            solver: self,
            puzzle,
            max_len,
            path: Vec::with_capacity(max_len),
            text: String::with_capacity(max_len * 2),
            visited: 0,
            seen: FxHashSet::default(),
            found: Vec::new(),
        };

        for start in IndexedCubeFace::all() {
            if self.rules.face_is_playable(puzzle, start) {
                search.extend(start);
            }
        }

        let mut found = search.found;
        found.sort_by(|a, b| {
            Reverse(a.score)
                .cmp(&Reverse(b.score))
                .then_with(|| a.word.cmp(&b.word))
        });
        found
    }

    /// Findable words that have not been played yet
    #[must_use]
    pub fn unplayed_words(&self, puzzle: &Puzzle, moves: &Moves, max_len: usize) -> Vec<FoundWord> {
        let played: FxHashSet<String> = moves.played_word_strings(puzzle).collect();
        let mut found = self.find_words(puzzle, max_len);
        found.retain(|candidate| !played.contains(&candidate.word));
        found
    }
}

/// Mutable DFS state, kept out of the recursion's argument list
struct Search<'s, 'a, D: ?Sized> {
    solver: &'s Solver<'a, D>,
    puzzle: &'s Puzzle,
    max_len: usize,
    path: Vec<IndexedCubeFace>,
    text: String,
    visited: u128,
    seen: FxHashSet<String>,
    found: Vec<FoundWord>,
}

impl<D: Dictionary + ?Sized> Search<'_, '_, D> {
    fn extend(&mut self, face: IndexedCubeFace) {
        let text_len = self.text.len();
        self.text.push_str(self.puzzle.letter(face));

        let language = self.solver.language;
        if self.solver.dictionary.contains_prefix(&self.text, language) {
            self.path.push(face);
            self.visited |= 1u128 << face.id();

            if self.path.len() >= self.solver.rules.min_word_length
                && !self.seen.contains(&self.text)
                && self.solver.dictionary.contains(&self.text, language)
            {
                self.seen.insert(self.text.clone());
                self.found.push(FoundWord {
                    word: self.text.clone(),
                    faces: self.path.clone(),
                    score: self.solver.rules.letter_values.score(&self.text),
                });
            }

            if self.path.len() < self.max_len {
                for next in face.touching_faces() {
                    if (self.visited >> next.id()) & 1 == 0
                        && self.solver.rules.face_is_playable(self.puzzle, next)
                    {
                        self.extend(next);
                    }
                }
            }

            self.visited &= !(1u128 << face.id());
            self.path.pop();
        }

        self.text.truncate(text_len);
    }
}

/// Free-function form of [`Solver::find_words`]
///
/// # Examples
/// ```
/// use cubeword::core::{IndexedCubeFace, LatticePoint, Puzzle, Side};
/// use cubeword::dictionary::{Language, loader::words_from_slice};
/// use cubeword::rules::Rules;
/// use cubeword::solver::find_words;
///
/// let center = LatticePoint::CENTER;
/// let puzzle = Puzzle::uniform("E")
///     .with_letter(IndexedCubeFace::new(center, Side::Top), "C")
///     .with_letter(IndexedCubeFace::new(center, Side::Left), "A")
///     .with_letter(IndexedCubeFace::new(center, Side::Right), "B");
/// let words = words_from_slice(&["cab", "dog"]);
///
/// let found = find_words(&puzzle, &words, Language::En, &Rules::default(), 8);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].word, "CAB");
/// assert_eq!(found[0].score, 21);
/// ```
#[must_use]
pub fn find_words<D: Dictionary + ?Sized>(
    puzzle: &Puzzle,
    dictionary: &D,
    language: Language,
    rules: &Rules,
    max_len: usize,
) -> Vec<FoundWord> {
    Solver::new(dictionary, language, rules).find_words(puzzle, max_len)
}

const _: () = assert!(FACE_COUNT <= u128::BITS as usize);
