//! Error types for safety-rs

use thiserror::Error;

/// Result type alias for safety-rs operations
pub type Result<T> = std::result::Result<T, SafetyError>;

/// Safety service error types
///
/// Scoring itself never fails; these cover the service around it.
#[derive(Error, Debug)]
pub enum SafetyError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Request body could not be read as JSON
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
