//! Error types for taskdeck
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in taskdeck
#[derive(Debug, Error)]
pub enum TaskdeckError {
    /// Task not found in the store
    #[error("Task not found: {0}")]
    TaskNotFound(i64),

    /// SQLite storage error
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// CSV parse/serialize error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for taskdeck operations
pub type Result<T> = std::result::Result<T, TaskdeckError>;
