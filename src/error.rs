use std::path::PathBuf;

/// Errors that can occur while loading or drawing from a word list.
#[derive(Debug, thiserror::Error)]
pub enum WordSourceError {
    #[error("failed to read word list {path}: {source}")]
    NotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("word list contains no usable words")]
    Empty,

    #[error("invalid target word '{0}' (expected letters A-Z only)")]
    InvalidWord(String),
}

/// Errors that reject a guess without touching the round.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("'{0}' is not a letter from A to Z")]
    NotALetter(char),

    #[error("'{0}' was already guessed")]
    AlreadyGuessed(char),

    #[error("the round is over")]
    RoundOver,
}

/// Errors surfaced by a session while applying an input event.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Guess(#[from] GuessError),

    #[error(transparent)]
    WordSource(#[from] WordSourceError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
