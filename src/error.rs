use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("Persistence error: {0}")]
    PersistenceError(String),

    #[error("Invalid entry id: {0}")]
    InvalidId(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Upstream API error: {0}")]
    UpstreamError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
