use crate::error::Result;
use crate::info_log;
use crate::wordbank::pick_random;
use rand::Rng;

/// The base word of the active round and the answers accepted against it.
///
/// Accepted words are kept most recent first. Only [`RoundState::start`] and
/// [`RoundState::accept`] change a round; uniqueness of the accepted list is the
/// validator's job, not this container's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    base_word: String,
    accepted_words: Vec<String>,
}

impl RoundState {
    /// Starts the first round with a base word picked from `pool`.
    pub fn new<R: Rng + ?Sized>(pool: &[String], rng: &mut R) -> Result<Self> {
        let mut round = Self::with_base_word("");
        round.start(pool, rng)?;
        Ok(round)
    }

    pub fn with_base_word(base_word: impl Into<String>) -> Self {
        Self {
            base_word: base_word.into(),
            accepted_words: Vec::new(),
        }
    }

    /// Begins a new round: a fresh base word and no accepted answers.
    ///
    /// The word is picked before anything is touched, so on error the current
    /// round is left as it was.
    pub fn start<R: Rng + ?Sized>(&mut self, pool: &[String], rng: &mut R) -> Result<()> {
        let base_word = pick_random(pool, rng)?.to_string();
        self.base_word = base_word;
        self.accepted_words.clear();
        info_log!("Round started with base word '{}'", self.base_word);
        Ok(())
    }

    pub fn accept(&mut self, word: impl Into<String>) {
        self.accepted_words.insert(0, word.into());
    }

    pub fn base_word(&self) -> &str {
        &self.base_word
    }

    pub fn accepted_words(&self) -> &[String] {
        &self.accepted_words
    }
}
