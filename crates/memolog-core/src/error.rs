//! Error types for the Memolog engine.
//!
//! Link analysis itself never fails; these errors only surface at the edges
//! (loading a corpus, reading configuration).

use std::io;
use thiserror::Error as ThisError;

/// The core error type for all Memolog operations.
#[derive(ThisError, Debug)]
pub enum Error {
    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed corpus or report JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    /// Memo id outside `[a-zA-Z0-9-]+`
    #[error("Invalid memo id: {id:?}")]
    InvalidMemoId { id: String },

    /// Same id appears twice in one corpus
    #[error("Duplicate memo id in corpus: {id}")]
    DuplicateMemoId { id: String },

    /// Generic unclassified error
    #[error("Error: {0}")]
    Other(String),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config_error(reason: impl Into<String>) -> Self {
        Error::ConfigError {
            reason: reason.into(),
        }
    }

    /// Create an invalid memo id error
    pub fn invalid_memo_id(id: impl Into<String>) -> Self {
        Error::InvalidMemoId { id: id.into() }
    }

    /// Create a duplicate memo id error
    pub fn duplicate_memo_id(id: impl Into<String>) -> Self {
        Error::DuplicateMemoId { id: id.into() }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::invalid_memo_id("bad id");
        assert!(err.to_string().contains("Invalid memo id"));
        assert!(err.to_string().contains("\"bad id\""));

        let err = Error::config_error("context_length must be positive");
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Json(_)));
    }
}
