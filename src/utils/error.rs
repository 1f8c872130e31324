//! Error handling for lexfront
//!
//! The scanner itself never fails; these errors belong to the I/O edge and to
//! consumers of the textual token format.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised around the tokenizer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ==================== I/O Errors ====================

    #[error("IO error on {path}: {message}")]
    Io { path: String, message: String },

    // ==================== Token Format Errors ====================

    #[error("Malformed token line {line:?}: {reason}")]
    MalformedTokenLine { line: String, reason: String },

    #[error("Unknown token kind: {0}")]
    UnknownTokenKind(String),

    #[error("JSON error: {0}")]
    Json(String),
}

impl Error {
    /// Build an I/O error for the given path
    pub fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Build a malformed-line error
    pub fn malformed(line: &str, reason: impl Into<String>) -> Self {
        Self::MalformedTokenLine {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::malformed("Type: X", "missing Value field");
        assert_eq!(
            err.to_string(),
            "Malformed token line \"Type: X\": missing Value field"
        );

        let err = Error::UnknownTokenKind("BOOL_OPERATOR".to_string());
        assert_eq!(err.to_string(), "Unknown token kind: BOOL_OPERATOR");
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::io("sample.txt", &io);
        assert!(matches!(err, Error::Io { ref path, .. } if path == "sample.txt"));
        assert!(err.to_string().contains("no such file"));
    }
}
