use thiserror::Error;

/// Errors raised at the edges of the builder (I/O, config, path parsing).
///
/// Core store and catalog operations never return these; they degrade to
/// documented defaults instead.
#[derive(Error, Debug)]
pub enum BuilderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Card source returned status {0}")]
    BadStatus(u16),

    #[error("Card source has no card list")]
    NoCardList,

    #[error("Unknown draft field: {0}")]
    UnknownField(String),

    #[error("Invalid blob key: {0}")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, BuilderError>;
