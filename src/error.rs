//! Error handling for the cv-screener pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document could not be decoded, or yielded too little text to be
    /// considered readable (e.g. a scanned-image PDF with no text layer).
    #[error("Unreadable document: {0}")]
    UnreadableDocument(String),

    /// The candidate profile has neither a name nor an email address.
    /// Matching refuses such profiles; callers may still store them.
    #[error("Incomplete profile: {0}")]
    IncompleteProfile(String),

    /// The job requirement record is missing or violates mandatory fields.
    #[error("Incomparable job requirement: {0}")]
    IncomparableJob(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ScreenerError>;
