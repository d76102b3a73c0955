//! Config module: Generator settings
//!
//! Settings load from a JSON file with camelCase keys; any key left out
//! takes its default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::codegen::{Target, DEFAULT_TYPE_NAME};
use crate::error::FlysumError;
use crate::scanner::{DEFAULT_EXTENSION, DEFAULT_LOCATION};

/// Output directory used when none is configured
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "target/generated-sources";

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct GeneratorConfig {
    /// Sub-paths listed under each root; empty falls back to `location`
    pub locations: Vec<String>,
    pub location: String,
    pub output_directory: PathBuf,
    pub extensions: Vec<String>,
    pub compile_source_roots: Vec<PathBuf>,
    /// Fully-qualified name of the generated enum
    pub type_name: String,
    pub target: Target,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            locations: Vec::new(),
            location: DEFAULT_LOCATION.to_string(),
            output_directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            compile_source_roots: Vec::new(),
            type_name: DEFAULT_TYPE_NAME.to_string(),
            target: Target::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load settings from a JSON file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid config.
    pub fn from_file(path: &Path) -> Result<Self, FlysumError> {
        let content = fs::read_to_string(path).map_err(|source| FlysumError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| FlysumError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse settings from a JSON string
    ///
    /// # Errors
    /// Returns an error if the JSON does not describe a valid config.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Locations to scan: `locations` if any, otherwise `location`
    #[must_use]
    pub fn effective_locations(&self) -> Vec<String> {
        if self.locations.is_empty() {
            vec![self.location.clone()]
        } else {
            self.locations.clone()
        }
    }

    /// Extensions to match, falling back to the default when empty
    #[must_use]
    pub fn effective_extensions(&self) -> Vec<String> {
        if self.extensions.is_empty() {
            vec![DEFAULT_EXTENSION.to_string()]
        } else {
            self.extensions.clone()
        }
    }

    /// Set the single location
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the location list
    #[must_use]
    pub fn with_locations(mut self, locations: Vec<String>) -> Self {
        self.locations = locations;
        self
    }

    /// Set the output directory
    #[must_use]
    pub fn with_output_directory(mut self, output_directory: impl Into<PathBuf>) -> Self {
        self.output_directory = output_directory.into();
        self
    }

    /// Set the extensions
    #[must_use]
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Add a source root
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.compile_source_roots.push(root.into());
        self
    }

    /// Set the generated type name
    #[must_use]
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    /// Set the output language
    #[must_use]
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }
}
