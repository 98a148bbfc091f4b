//! Core error types

use thiserror::Error;

/// Core error type for procstate
#[derive(Debug, Error)]
pub enum CoreError {
    /// Event name outside the sub-status vocabulary
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    /// State name outside the master-status vocabulary
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Configuration could not be parsed or validated
    #[error("Config error: {0}")]
    Config(String),

    /// Global subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across procstate crates
pub type Result<T> = std::result::Result<T, CoreError>;
