//! Error types for the folio-core library

use thiserror::Error;

/// Main error type for folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Duplicate key: {0:?} appears more than once in the word list")]
    DuplicateKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

impl PartialEq for FolioError {
    fn eq(&self, other: &Self) -> bool {
        match self {
            FolioError::InvalidConfiguration(msg) => {
                matches!(other, FolioError::InvalidConfiguration(o) if msg == o)
            }
            FolioError::DuplicateKey(key) => {
                matches!(other, FolioError::DuplicateKey(o) if key == o)
            }
            FolioError::Io(err) => {
                matches!(other, FolioError::Io(e) if err.to_string() == e.to_string())
            }
            FolioError::Json(err) => {
                matches!(other, FolioError::Json(e) if err.to_string() == e.to_string())
            }
        }
    }
}
