// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod round;
pub mod validator;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use dictionary::{DictionaryChecker, LANGUAGE, WordListDictionary};
pub use error::{GameError, Result};
pub use game_state::{Game, GameInterface, UserAction, game_loop};
pub use round::RoundState;
pub use validator::{Verdict, is_original, is_possible, is_real, validate};
pub use wordbank::{
    DEFAULT_WORD, default_wordbank, load_wordbank, load_wordbank_from_file,
    load_wordbank_from_str, pick_random,
};
