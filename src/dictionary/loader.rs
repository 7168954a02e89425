//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::{Language, WordList};
use std::fs;
use std::io;
use std::path::Path;

/// Load an English word list from a file, one word per line
///
/// Blank lines and entries with non-alphabetic characters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use cubeword::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let content = fs::read_to_string(path)?;
    Ok(WordList::new(Language::En, content.lines()))
}

/// Convert an embedded string slice to an English word list
///
/// # Examples
/// ```
/// use cubeword::dictionary::loader::words_from_slice;
/// use cubeword::dictionary::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> WordList {
    WordList::new(Language::En, slice)
}
