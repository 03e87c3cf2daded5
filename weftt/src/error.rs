//! Error handling for the weftt CLI.
//!
//! Structured error types built on `thiserror`, covering IO, output
//! serialization, and lexical failures reported against a source position.

use thiserror::Error;

/// Main error type for the weftt CLI application.
#[derive(Error, Debug)]
pub enum WefttError {
    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when logging setup fails.
    #[error("Logging error: {0}")]
    Logging(String),

    /// A lexical error in the scanned template.
    #[error("{file}:{line}: {message}")]
    Lex {
        /// Template name, typically its file path.
        file: String,
        /// 1-based line number of the offending item.
        line: usize,
        /// The scanner's error message.
        message: String,
    },
}

/// Result type alias using WefttError.
pub type Result<T> = std::result::Result<T, WefttError>;
