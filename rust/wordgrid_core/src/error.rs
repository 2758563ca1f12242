//! Error types for grid indexing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordSearchError {
    /// Grid length is not `axis_length²`.
    #[error("invalid grid size: expected {expected} characters for axis length {axis_length}, found {actual}")]
    InvalidGridSize {
        axis_length: usize,
        expected: usize,
        actual: usize,
    },

    /// Grid or inserted sequence holds a byte outside `a`..=`z`.
    #[error("invalid character {byte:#04x} at position {position}")]
    InvalidCharacter { byte: u8, position: usize },

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// Parallel work was requested from a component that has no worker pool.
    #[error("worker invoked before its pool and grid context were set up")]
    UninitializedWorker,

    #[error("worker pool error: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WordSearchError>;
