//! Error types for the lexpack library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LexpackError`] enum.
//!
//! # Examples
//!
//! ```
//! use lexpack::error::{LexpackError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexpackError::invalid_input("sequence must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lexpack operations.
#[derive(Error, Debug)]
pub enum LexpackError {
    /// Input that violates an operation's contract (empty or unsorted
    /// sequences, values outside the encodable range).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An encoded blob that cannot be decoded (bad hex, missing marker,
    /// truncated bit or byte stream).
    #[error("Malformed encoding: {0}")]
    MalformedEncoding(String),

    /// Unrecognized compression mode token.
    #[error("Unsupported mode: {0}")]
    UnsupportedMode(String),

    /// Text analysis errors
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (file operations, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with LexpackError.
pub type Result<T> = std::result::Result<T, LexpackError>;

impl LexpackError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        LexpackError::InvalidInput(msg.into())
    }

    /// Create a new malformed encoding error.
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        LexpackError::MalformedEncoding(msg.into())
    }

    /// Create a new unsupported mode error.
    pub fn unsupported_mode<S: Into<String>>(mode: S) -> Self {
        LexpackError::UnsupportedMode(mode.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexpackError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LexpackError::Config(msg.into())
    }

    /// Prefix the message of a message-carrying error with `context`.
    ///
    /// I/O and JSON errors are returned unchanged.
    pub fn with_context(self, context: &str) -> Self {
        match self {
            LexpackError::InvalidInput(msg) => {
                LexpackError::InvalidInput(format!("{context}: {msg}"))
            }
            LexpackError::MalformedEncoding(msg) => {
                LexpackError::MalformedEncoding(format!("{context}: {msg}"))
            }
            LexpackError::UnsupportedMode(msg) => {
                LexpackError::UnsupportedMode(format!("{context}: {msg}"))
            }
            LexpackError::Analysis(msg) => LexpackError::Analysis(format!("{context}: {msg}")),
            LexpackError::Config(msg) => LexpackError::Config(format!("{context}: {msg}")),
            other => other,
        }
    }
}
