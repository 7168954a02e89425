//! Dictionary oracle
//!
//! The kernel only ever asks two questions of a dictionary: is this a word,
//! and does any word start with this prefix. Both are synchronous and
//! side-effect free from the kernel's point of view. A missing dictionary is
//! simply one that contains nothing, so every word is rejected.

mod embedded;
pub mod loader;
mod word_list;

use serde::{Deserialize, Serialize};

pub use embedded::{WORDS, WORDS_COUNT};
pub use word_list::WordList;

/// Language a dictionary serves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
}

/// Word and prefix membership queries
pub trait Dictionary {
    /// Whether `word` is a valid word in `language`
    fn contains(&self, word: &str, language: Language) -> bool;

    /// Whether some valid word in `language` starts with `prefix`
    fn contains_prefix(&self, prefix: &str, language: Language) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn contains(&self, word: &str, language: Language) -> bool {
        (**self).contains(word, language)
    }

    fn contains_prefix(&self, prefix: &str, language: Language) -> bool {
        (**self).contains_prefix(prefix, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_uppercase_letters() {
        for &word in WORDS {
            assert!(
                !word.is_empty() && word.bytes().all(|b| b.is_ascii_uppercase()),
                "Word '{word}' is not uppercase ASCII"
            );
        }
    }

    #[test]
    fn embedded_list_has_scenario_words() {
        let words = WordList::embedded();
        for word in ["CAB", "CUBE", "CUBES", "QUIZ"] {
            assert!(words.contains(word, Language::En), "missing {word}");
        }
    }

    fn knows_cab<D: Dictionary>(dictionary: D) -> bool {
        dictionary.contains("CAB", Language::En) && dictionary.contains_prefix("CA", Language::En)
    }

    #[test]
    fn references_forward_queries() {
        let words = loader::words_from_slice(&["cab"]);
        assert!(knows_cab(&words));

        let as_dyn: &dyn Dictionary = &words;
        assert!(knows_cab(as_dyn));
    }
}
