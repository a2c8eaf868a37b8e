//! Error types for bigo operations.
//!
//! Library code returns [`AnalysisError`]; command handlers convert it into
//! `anyhow::Error` at the CLI boundary.
//!
//! Malformed or empty source text is deliberately *not* an error: extraction
//! degrades to a low-count vector and classification falls through to the
//! constant-time rule.
//!
//! ```rust
//! use bigo::errors::AnalysisError;
//!
//! let err = AnalysisError::config("min_script_patterns must be at least 1");
//! assert_eq!(
//!     err.to_string(),
//!     "Configuration error: min_script_patterns must be at least 1"
//! );
//! ```

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// File system errors while reading snippets or writing reports
    #[error("I/O error{}: {message}", display_path(.path))]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration file could not be parsed or holds invalid values
    #[error("Configuration error{}: {message}", display_path(.path))]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Input rejected before analysis
    #[error("Validation error: {0}")]
    Validation(String),

    /// A positional feature vector did not have the expected length
    #[error("Invalid feature vector: expected {expected} values, got {actual}")]
    InvalidFeatureVector { expected: usize, actual: usize },

    /// Classification requested before the analyzer was initialised
    #[error("Analyzer is not ready: call initialize() before classifying")]
    NotReady,

    /// A complexity label that is not part of the label table
    #[error("Unknown complexity label: {0}")]
    UnknownLabel(String),
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

impl AnalysisError {
    /// Create an I/O error with a message.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create an I/O error carrying the failing path and the underlying error.
    pub fn io_with_path(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            message: source.to_string(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid_vector(actual: usize) -> Self {
        Self::InvalidFeatureVector {
            expected: crate::features::FEATURE_COUNT,
            actual,
        }
    }
}

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
