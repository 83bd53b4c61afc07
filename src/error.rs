use std::io;
use std::path::PathBuf;

/// Conditions the game cannot recover from.
///
/// Bad user input is never an error here; see [`crate::validator::Verdict`].
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("word pool is empty, no base word can be chosen")]
    EmptyWordPool,
    #[error("failed to read word list '{}': {}", .path.display(), .source)]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GameError>;
