//! Error types for level construction and configuration

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LevelError {
    /// Quotation lookup past the end of the supplied list
    #[error("Quotation index {index} out of range (list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LevelError>;
