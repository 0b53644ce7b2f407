//! Error types for the probe.

use std::fmt;
use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for probe operations
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Which read-back check failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Bytes,
    Text,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Bytes => f.write_str("byte"),
            ContentKind::Text => f.write_str("text"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ProbeError {
    /// Filesystem operation failed
    #[error("failed to {op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} does not exist", .path.display())]
    Missing { path: PathBuf },

    #[error("{kind} content of {} does not match: expected {expected:?}, found {actual:?}", .path.display())]
    ContentMismatch {
        kind: ContentKind,
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("no input line on standard input")]
    MissingInput,

    #[error("expected 2 integers, found {found} tokens")]
    TokenCount { found: usize },

    #[error("invalid integer {token:?}: {source}")]
    InvalidInteger {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{a} + {b} overflows a 64-bit integer")]
    Overflow { a: i64, b: i64 },
}

impl ProbeError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        ProbeError::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_names_op_and_path() {
        let err = ProbeError::io(
            "create",
            "/ro/test.txt",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("failed to create /ro/test.txt"), "{msg}");
    }

    #[test]
    fn test_mismatch_message() {
        let err = ProbeError::ContentMismatch {
            kind: ContentKind::Bytes,
            path: PathBuf::from("test.txt"),
            expected: "a".into(),
            actual: "b".into(),
        };
        assert_eq!(
            err.to_string(),
            "byte content of test.txt does not match: expected \"a\", found \"b\""
        );
    }

    #[test]
    fn test_token_count_message() {
        assert_eq!(
            ProbeError::TokenCount { found: 3 }.to_string(),
            "expected 2 integers, found 3 tokens"
        );
    }
}
