//! Core error types for the minefolio batch jobs.
//!
//! Per-symbol fetch failures never reach this type: the batch runner
//! downgrades them to strings inside the snapshot error map. What is
//! left is the I/O tier, where a failure aborts the whole run.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for batch runs.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Failed to replace {path}: {message}")]
    Persist { path: String, message: String },
}
