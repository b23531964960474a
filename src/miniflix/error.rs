use thiserror::Error;

#[derive(Error, Debug)]
pub enum MiniflixError {
    #[error("Unsupported poster format: {0} (expected png, jpg or jpeg)")]
    UnsupportedFormat(String),

    #[error("Invalid feedback: {0}")]
    Validation(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, MiniflixError>;
