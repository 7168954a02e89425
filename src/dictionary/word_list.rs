//! In-memory word list
//!
//! Exact lookups go through a hash set; prefix lookups binary-search a sorted
//! copy of the same words.

use super::{Dictionary, Language, WORDS};
use rustc_hash::FxHashSet;
use std::borrow::Cow;

/// A sorted, deduplicated set of uppercase words for one language
#[derive(Debug, Clone, Default)]
pub struct WordList {
    language: Language,
    set: FxHashSet<String>,
    sorted: Vec<String>,
}

impl WordList {
    /// Build a list from arbitrary words, keeping only ASCII-alphabetic entries
    ///
    /// # Examples
    /// ```
    /// use cubeword::dictionary::{Dictionary, Language, WordList};
    ///
    /// let words = WordList::new(Language::En, ["cab", "Cabs", "c4b"]);
    /// assert_eq!(words.len(), 2);
    /// assert!(words.contains("CABS", Language::En));
    /// assert!(words.contains_prefix("CA", Language::En));
    /// ```
    pub fn new<I, S>(language: Language, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sorted: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_ascii_uppercase())
            .filter(|word| !word.is_empty() && word.bytes().all(|b| b.is_ascii_uppercase()))
            .collect();
        sorted.sort_unstable();
        sorted.dedup();

        let set = sorted.iter().cloned().collect();
        Self {
            language,
            set,
            sorted,
        }
    }

    /// The word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(Language::En, WORDS)
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Words in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sorted.iter().map(String::as_str)
    }
}

fn normalized(text: &str) -> Cow<'_, str> {
    if text.bytes().any(|b| b.is_ascii_lowercase()) {
        Cow::Owned(text.to_ascii_uppercase())
    } else {
        Cow::Borrowed(text)
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str, language: Language) -> bool {
        language == self.language && self.set.contains(normalized(word).as_ref())
    }

    fn contains_prefix(&self, prefix: &str, language: Language) -> bool {
        if language != self.language {
            return false;
        }
        let prefix = normalized(prefix);
        let start = self
            .sorted
            .partition_point(|word| word.as_str() < prefix.as_ref());
        self.sorted
            .get(start)
            .is_some_and(|word| word.starts_with(prefix.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WordList {
        WordList::new(Language::En, ["cart", "cab", "cabs", "zoo", "cab"])
    }

    #[test]
    fn duplicates_and_case_are_normalized() {
        let words = sample();
        assert_eq!(words.len(), 4);
        assert_eq!(words.iter().collect::<Vec<_>>(), ["CAB", "CABS", "CART", "ZOO"]);
    }

    #[test]
    fn contains_is_case_insensitive() {
        let words = sample();
        assert!(words.contains("cab", Language::En));
        assert!(words.contains("CART", Language::En));
        assert!(!words.contains("CA", Language::En));
    }

    #[test]
    fn prefix_lookup() {
        let words = sample();
        assert!(words.contains_prefix("CA", Language::En));
        assert!(words.contains_prefix("CAB", Language::En));
        assert!(words.contains_prefix("", Language::En));
        assert!(!words.contains_prefix("CAT", Language::En));
        assert!(!words.contains_prefix("ZOOS", Language::En));
    }

    #[test]
    fn empty_list_contains_nothing() {
        let words = WordList::default();
        assert!(words.is_empty());
        assert!(!words.contains("CAB", Language::En));
        assert!(!words.contains_prefix("C", Language::En));
    }

    #[test]
    fn invalid_entries_are_skipped() {
        let words = WordList::new(Language::En, ["ok", "not ok", "", "d0g"]);
        assert_eq!(words.iter().collect::<Vec<_>>(), ["OK"]);
    }
}
