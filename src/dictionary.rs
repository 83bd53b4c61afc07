//! Dictionary lookups used by the reality check.
//!
//! The validator only depends on [`DictionaryChecker`]; [`WordListDictionary`] is the
//! bundled implementation, backed by a newline-separated word list.

use crate::error::{GameError, Result};
use crate::info_log;
use crate::wordbank::user_config_file;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Language tag the game checks words against.
pub const LANGUAGE: &str = "en";

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

const DICTIONARY_FILE: &str = "dictionary.txt";

/// Answers whether a word is spelled correctly in a given language.
pub trait DictionaryChecker {
    fn is_misspelled(&self, word: &str, language: &str) -> bool;
}

impl<T: DictionaryChecker + ?Sized> DictionaryChecker for &T {
    fn is_misspelled(&self, word: &str, language: &str) -> bool {
        (**self).is_misspelled(word, language)
    }
}

impl<T: DictionaryChecker + ?Sized> DictionaryChecker for Box<T> {
    fn is_misspelled(&self, word: &str, language: &str) -> bool {
        (**self).is_misspelled(word, language)
    }
}

/// A set of known words for a single language.
///
/// Lookups are case-insensitive. Words asked about in any other language are
/// reported as misspelled, since this dictionary cannot vouch for them.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: HashSet<String>,
}

impl WordListDictionary {
    pub fn new<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            language: language.to_string(),
            words,
        }
    }

    pub fn from_str(language: &str, data: &str) -> Self {
        Self::new(language, data.lines())
    }

    pub fn from_file<P: AsRef<Path>>(language: &str, path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| GameError::WordList {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_str(language, &data);
        info_log!(
            "Loaded {} dictionary words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// The English word list compiled into the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_str(LANGUAGE, EMBEDDED_DICTIONARY)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

impl DictionaryChecker for WordListDictionary {
    fn is_misspelled(&self, word: &str, language: &str) -> bool {
        language != self.language || !self.contains(word)
    }
}

/// Per-user dictionary, `<config dir>/word-scramble/dictionary.txt`.
pub fn get_user_dictionary_path() -> Option<PathBuf> {
    user_config_file(DICTIONARY_FILE)
}
