//! Error types for checksum generation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::codegen::Target;

/// Errors that can occur while collecting, checksumming or emitting
#[derive(Debug, Error)]
pub enum FlysumError {
    #[error("Unable to calculate checksum for {}", path.display())]
    Checksum {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Duplicate constant `{name}`")]
    DuplicateConstant { name: String },

    #[error("`{name}` is not a valid {target} constant name")]
    InvalidConstantName { name: String, target: Target },

    #[error("Invalid type name: `{0}`")]
    InvalidTypeName(String),

    #[error("Failed to render generated code: {0}")]
    Render(String),

    #[error("Failed to write {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read config {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level failure of a generation run
///
/// Always carries the underlying [`FlysumError`] as its source.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct GenerationFailure {
    message: String,
    #[source]
    source: FlysumError,
}

impl GenerationFailure {
    /// Wrap an error with a human-readable message
    #[must_use]
    pub fn new(message: impl Into<String>, source: FlysumError) -> Self {
        Self {
            message: message.into(),
            source,
        }
    }

    /// The error that aborted the run
    #[must_use]
    pub const fn cause(&self) -> &FlysumError {
        &self.source
    }

    /// Unwrap into the underlying error
    #[must_use]
    pub fn into_cause(self) -> FlysumError {
        self.source
    }
}
