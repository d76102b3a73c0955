//! Output languages for the generated enum

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

use super::{is_java_identifier, is_rust_identifier, java, rust, EnumModel};
use crate::error::FlysumError;

/// Language the enum is generated in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Java,
    Rust,
}

/// Rendered source ready to be written below the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub relative_path: PathBuf,
    pub source: String,
}

impl Target {
    /// Check whether `name` is an identifier in this language
    #[must_use]
    pub fn is_identifier(self, name: &str) -> bool {
        match self {
            Self::Java => is_java_identifier(name),
            Self::Rust => is_rust_identifier(name),
        }
    }

    /// Names generated next to the constants that a constant must not reuse
    pub(crate) fn reserved_members(self, model: &EnumModel) -> Vec<String> {
        match self {
            Self::Java => vec![model.field.clone()],
            Self::Rust => vec![
                rust::ALL_CONST.to_string(),
                rust::NAME_FN.to_string(),
                rust::accessor_name(model),
            ],
        }
    }

    /// Validate the model and render it
    ///
    /// # Errors
    /// Returns an error if validation fails or the generated code cannot
    /// be formatted.
    pub fn render(self, model: &EnumModel) -> Result<RenderedArtifact, FlysumError> {
        model.validate(self)?;
        match self {
            Self::Java => Ok(java::render(model)),
            Self::Rust => rust::render(model),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Java => write!(f, "java"),
            Self::Rust => write!(f, "rust"),
        }
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "java" => Ok(Self::Java),
            "rust" | "rs" => Ok(Self::Rust),
            other => Err(format!("unknown target `{other}` (expected java or rust)")),
        }
    }
}
