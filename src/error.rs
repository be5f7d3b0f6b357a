use thiserror::Error;

/// Errors surfaced by the game library.
///
/// Rejected gameplay actions are never errors; they leave the state unchanged.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no word catalog exists for {0}-letter words")]
    InvalidLength(usize),

    #[error("stored data under `{key}` is corrupt")]
    CorruptData {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode data for `{key}`")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("word list is empty")]
    EmptyWordList,

    #[error("word `{word}` has {} letters but {expected} were expected", .word.chars().count())]
    WordLengthMismatch { word: String, expected: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
