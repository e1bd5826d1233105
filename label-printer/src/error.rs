//! Error types for the printer library

use thiserror::Error;

/// Printer error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// IO error while writing a job
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Printer (spool target) is unreachable
    #[error("Printer offline: {0}")]
    Offline(String),

    /// Invalid printer configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;
