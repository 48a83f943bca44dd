//! Error types and handling.

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Log directory could not be resolved
    #[error("No writable data directory for log files")]
    NoLogDir,
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;
