//! Error handling utilities shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Convenient result type used throughout the crate.
pub type Result<T, E = SentibayesError> = std::result::Result<T, E>;

/// Domain-specific error describing failures during configuration, IO, training, or
/// classification.
#[derive(Debug, Error)]
pub enum SentibayesError {
    /// Training or classifier configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The training directory is missing or contains no documents.
    #[error("no training documents found under {path:?}")]
    CorpusNotFound {
        /// Directory that was searched for corpus documents.
        path: PathBuf,
    },
    /// Classification was attempted against an empty frequency table.
    #[error("model not trained: the {class} frequency table is empty")]
    ModelNotTrained {
        /// Name of the class whose table held no counts.
        class: String,
    },
    /// Filesystem IO error with optional context path.
    #[error("io error while processing {path:?}: {source}")]
    Io {
        /// Underlying IO error returned by the standard library.
        source: std::io::Error,
        /// Target path associated with the IO failure if available.
        path: Option<PathBuf>,
    },
    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),
    /// Catch-all variant for invariants that should not occur.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for SentibayesError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl SentibayesError {
    /// Helper constructor that attaches an optional path when wrapping IO errors.
    pub fn io(source: std::io::Error, path: Option<PathBuf>) -> Self {
        Self::Io { source, path }
    }
}
