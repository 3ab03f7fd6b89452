use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaltError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Forbidden word '{word}' in copy: {text}")]
    ForbiddenCopy { word: String, text: String },
    #[error("No async runtime available for the debounce timer")]
    NoRuntime,
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SaltError>;
