//! Error types for xwallet-decode
//!
//! Every failure the decoder can hit maps to one variant of [`Error`], and
//! every variant belongs to exactly one [`ErrorKind`]. Nothing in the library
//! recovers from these locally; they propagate to the binary and abort the run.

use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Coarse classification of a decode failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be read (or the report could not be written)
    Io,
    /// The input is not valid JSON
    Parse,
    /// An expected key is missing or has the wrong shape
    Schema,
    /// A byte sequence is not valid UTF-8
    Encoding,
}

/// The main error type for xwallet-decode
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("Failed to read {}: {source}", display_source(.path.as_ref()))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {0}")]
    Output(#[source] std::io::Error),

    // ============================================================================
    // Parse Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    // ============================================================================
    // Schema Errors
    // ============================================================================
    #[error("Missing required field: {path}")]
    MissingField { path: String },

    #[error("Field '{path}' has the wrong type, expected {expected}")]
    WrongType { path: String, expected: &'static str },

    #[error("Field '{path}' element {index} is not a byte value (0-255)")]
    ByteOutOfRange { path: String, index: usize },

    // ============================================================================
    // Encoding Errors
    // ============================================================================
    #[error("Field '{path}' is not valid UTF-8: {source}")]
    InvalidUtf8 {
        path: String,
        #[source]
        source: FromUtf8Error,
    },
}

fn display_source(path: Option<&PathBuf>) -> String {
    match path {
        Some(p) => format!("'{}'", p.display()),
        None => "standard input".to_string(),
    }
}

impl Error {
    /// Create an IO error for a named file
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }

    /// Create an IO error for standard input
    pub fn stdin(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }

    /// Create a missing field error
    pub fn missing_field(path: impl Into<String>) -> Self {
        Self::MissingField { path: path.into() }
    }

    /// Create a wrong type error
    pub fn wrong_type(path: impl Into<String>, expected: &'static str) -> Self {
        Self::WrongType {
            path: path.into(),
            expected,
        }
    }

    /// The kind of failure this error represents
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io { .. } | Error::Output(_) => ErrorKind::Io,
            Error::Parse(_) => ErrorKind::Parse,
            Error::MissingField { .. } | Error::WrongType { .. } | Error::ByteOutOfRange { .. } => {
                ErrorKind::Schema
            }
            Error::InvalidUtf8 { .. } => ErrorKind::Encoding,
        }
    }

    /// Dotted path of the offending field, for schema and encoding errors
    pub fn field_path(&self) -> Option<&str> {
        match self {
            Error::MissingField { path }
            | Error::WrongType { path, .. }
            | Error::ByteOutOfRange { path, .. }
            | Error::InvalidUtf8 { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result type alias for xwallet-decode
pub type Result<T> = std::result::Result<T, Error>;
