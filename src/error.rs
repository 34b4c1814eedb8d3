//! Centralized error types for tracemail.

use std::path::PathBuf;
use thiserror::Error;

use crate::i18n;

/// All errors produced by the tracemail library.
#[derive(Error, Debug)]
pub enum TraceError {
    /// I/O error with the associated file path.
    #[error("I/O error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The specified file does not exist.
    #[error("{}: {}", i18n::err_file_not_found(), .0.display())]
    FileNotFound(PathBuf),

    /// The path exists but is a directory, socket, or similar.
    #[error("{}: {}", i18n::err_not_a_file(), .0.display())]
    NotARegularFile(PathBuf),

    /// None of the accepted timestamp forms occur in a `Received:` field.
    #[error("Unrecognized timestamp in Received field: '{0}'")]
    UnparseableTimestamp(String),

    /// A `Received:` field without a usable `from`/`by` layout.
    #[error("Malformed Received field: '{0}'")]
    MalformedReceivedEntry(String),

    /// A requested header field is absent from the message.
    #[error("Header field not found: {0}")]
    MissingHeaderField(String),
}

/// Convenience alias for `Result<T, TraceError>`.
pub type Result<T> = std::result::Result<T, TraceError>;

impl TraceError {
    /// Create an `Io` variant from a path and an `io::Error`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_message_names_path() {
        let err = TraceError::FileNotFound(PathBuf::from("missing.eml"));
        assert!(err.to_string().ends_with("missing.eml"));
    }

    #[test]
    fn test_timestamp_error_echoes_entry() {
        let err = TraceError::UnparseableTimestamp("Received: by x; yesterday".into());
        assert_eq!(
            err.to_string(),
            "Unrecognized timestamp in Received field: 'Received: by x; yesterday'"
        );
    }
}
