use crate::dictionary::{DictionaryChecker, LANGUAGE};
use crate::round::RoundState;
use std::collections::HashMap;
use std::fmt;

/// Shortest answer accepted, counted in UTF-16 code units.
pub const MIN_WORD_LENGTH: usize = 3;

/// Outcome of validating one candidate against the current round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted { word: String },
    RejectedNotPossible { word: String, base_word: String },
    RejectedNotOriginal { word: String, base_word: String },
    RejectedNotReal { word: String, base_word: String },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted { .. })
    }

    /// The candidate this verdict was reached for.
    pub fn word(&self) -> &str {
        match self {
            Verdict::Accepted { word }
            | Verdict::RejectedNotPossible { word, .. }
            | Verdict::RejectedNotOriginal { word, .. }
            | Verdict::RejectedNotReal { word, .. } => word,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Verdict::Accepted { .. } => "Word accepted",
            Verdict::RejectedNotPossible { .. } => "Word not possible",
            Verdict::RejectedNotOriginal { .. } => "Word used already",
            Verdict::RejectedNotReal { .. } => "Word not recognised",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Verdict::Accepted { word } => format!("'{word}' added to your answers."),
            Verdict::RejectedNotPossible { base_word, .. } => format!(
                "You can't spell that word from '{}'!",
                base_word.to_lowercase()
            ),
            Verdict::RejectedNotOriginal { .. } => "Be more original!".to_string(),
            Verdict::RejectedNotReal { .. } => "You can't just make them up, you know!".to_string(),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

/// True if every letter of `word` can be matched to a distinct, unused letter of
/// `base_word`. Both sides are compared lowercased.
pub fn is_possible(word: &str, base_word: &str) -> bool {
    let mut available: HashMap<char, usize> = HashMap::new();
    for c in base_word.to_lowercase().chars() {
        *available.entry(c).or_insert(0) += 1;
    }

    for c in word.to_lowercase().chars() {
        match available.get_mut(&c) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }
    true
}

pub fn is_original(word: &str, accepted_words: &[String]) -> bool {
    !accepted_words.iter().any(|used| used == word)
}

pub fn is_real<D: DictionaryChecker + ?Sized>(word: &str, base_word: &str, dictionary: &D) -> bool {
    if word.encode_utf16().count() < MIN_WORD_LENGTH
        || word.to_lowercase() == base_word.to_lowercase()
    {
        return false;
    }
    !dictionary.is_misspelled(word, LANGUAGE)
}

/// Runs the possibility, originality and reality checks in that order and reports
/// the first one that fails. `word` is expected to be lowercased already.
pub fn validate<D: DictionaryChecker + ?Sized>(
    word: &str,
    round: &RoundState,
    dictionary: &D,
) -> Verdict {
    let word = word.to_string();
    let base_word = round.base_word().to_string();

    if !is_possible(&word, &base_word) {
        Verdict::RejectedNotPossible { word, base_word }
    } else if !is_original(&word, round.accepted_words()) {
        Verdict::RejectedNotOriginal { word, base_word }
    } else if !is_real(&word, &base_word, dictionary) {
        Verdict::RejectedNotReal { word, base_word }
    } else {
        Verdict::Accepted { word }
    }
}
