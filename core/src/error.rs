//! Error types for dictionary loading and lookup.

use thiserror::Error;

/// Failure while building, loading or saving a [`crate::Dictionary`].
///
/// Every variant carries owned strings so the error is `Clone`; the embedded
/// dictionary memoizes its build result and hands the same error back to
/// every caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictError {
    /// A table or snapshot file could not be read or written.
    #[error("i/o error on {path}: {message}")]
    Io { path: String, message: String },

    /// A reading table line could not be parsed.
    #[error("{source_name}:{line}: {message}")]
    Parse {
        source_name: String,
        line: usize,
        message: String,
    },

    /// An entry was rejected when inserted into a builder.
    #[error("invalid entry {key:?}: {message}")]
    InvalidEntry { key: String, message: String },

    /// A dictionary configuration file was malformed.
    #[error("bad config {path}: {message}")]
    Config { path: String, message: String },

    /// The fst index could not be built or opened.
    #[error("index error: {0}")]
    Index(String),

    /// A snapshot was truncated, from another format version, or otherwise
    /// unusable.
    #[error("corrupt dictionary: {0}")]
    Corrupt(String),
}

impl DictError {
    pub(crate) fn io(path: impl AsRef<std::path::Path>, err: std::io::Error) -> Self {
        DictError::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        DictError::InvalidEntry {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl From<fst::Error> for DictError {
    fn from(err: fst::Error) -> Self {
        DictError::Index(err.to_string())
    }
}
