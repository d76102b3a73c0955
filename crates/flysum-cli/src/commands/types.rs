//! Command types shared between main and library

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use flysum_core::{GeneratorConfig, Target};

#[derive(Parser)]
#[command(name = "flysum")]
#[command(author, version, about = "Migration checksum generator", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the checksum enum and print the registered source roots
    Generate(GenerateArgs),
    /// List discovered migrations with their checksums
    List(SelectionArgs),
}

/// Which files to pick up
#[derive(Debug, Clone, Default, Args)]
pub struct SelectionArgs {
    /// JSON config file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Source root to scan (repeatable)
    #[arg(long = "root", value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    /// Location under each root, used when no --locations are given
    #[arg(long)]
    pub location: Option<String>,

    /// Locations under each root (repeatable)
    #[arg(long = "locations", value_name = "PATH")]
    pub locations: Vec<String>,

    /// File suffix to include (repeatable)
    #[arg(long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,
}

/// Arguments of `flysum generate`
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Directory the generated source tree is written to
    #[arg(long)]
    pub output_directory: Option<PathBuf>,

    /// Output language: java or rust
    #[arg(long)]
    pub target: Option<Target>,

    /// Fully-qualified name of the generated enum
    #[arg(long)]
    pub type_name: Option<String>,
}

impl SelectionArgs {
    /// Load the config file, if any, and apply the flags on top
    ///
    /// Roots given with `--root` are not added here; they go to the
    /// build context.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be loaded.
    pub fn load_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(location) = &self.location {
            config = config.with_location(location.clone());
        }
        if !self.locations.is_empty() {
            config = config.with_locations(self.locations.clone());
        }
        if !self.extensions.is_empty() {
            config = config.with_extensions(self.extensions.clone());
        }
        Ok(config)
    }
}

impl GenerateArgs {
    /// Build the generator config from the file and all flags
    ///
    /// # Errors
    /// Returns an error if the config file cannot be loaded.
    pub fn load_config(&self) -> Result<GeneratorConfig> {
        let mut config = self.selection.load_config()?;

        if let Some(output_directory) = &self.output_directory {
            config = config.with_output_directory(output_directory.clone());
        }
        if let Some(target) = self.target {
            config = config.with_target(target);
        }
        if let Some(type_name) = &self.type_name {
            config = config.with_type_name(type_name.clone());
        }
        Ok(config)
    }
}
