//! Generator: collect, checksum, emit

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::codegen::{write_artifact, ChecksumRecord, EnumModel};
use crate::config::GeneratorConfig;
use crate::error::{FlysumError, GenerationFailure};
use crate::scanner::{Collector, FileReference};

use super::BuildContext;

const FAILURE_MESSAGE: &str = "Failed to generate migration checksums";

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    /// Generated source file
    pub artifact: PathBuf,
    /// False when the file already held the same content
    pub changed: bool,
    pub constant_count: usize,
    /// Directory registered with the build context
    pub source_root: PathBuf,
}

/// Runs the checksum pipeline for one configuration
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the checksum enum and register its directory
    ///
    /// Roots are the configured ones followed by the context's. Nothing is
    /// written unless every file was checksummed and the enum rendered.
    ///
    /// # Errors
    /// Returns a [`GenerationFailure`] wrapping the first error hit.
    pub fn run<C: BuildContext>(
        &self,
        context: &mut C,
    ) -> Result<GenerationOutcome, GenerationFailure> {
        self.execute(context)
            .map_err(|e| GenerationFailure::new(FAILURE_MESSAGE, e))
    }

    /// Collect and checksum files without writing anything
    ///
    /// # Errors
    /// Returns an error if a file cannot be read.
    pub fn records(
        &self,
        roots: &[PathBuf],
    ) -> Result<Vec<(FileReference, ChecksumRecord)>, FlysumError> {
        self.collector(roots)
            .collect()
            .into_iter()
            .map(|file| -> Result<_, FlysumError> {
                let record = ChecksumRecord::from_file(&file)?;
                debug!(
                    "{} -> {} ({})",
                    file.path.display(),
                    record.identifier,
                    record.checksum
                );
                Ok((file, record))
            })
            .collect()
    }

    fn execute<C: BuildContext>(&self, context: &mut C) -> Result<GenerationOutcome, FlysumError> {
        let roots = self.roots(context);
        info!("Scanning {} source roots for migrations", roots.len());

        let records: Vec<ChecksumRecord> = self
            .records(&roots)?
            .into_iter()
            .map(|(_, record)| record)
            .collect();

        let model = EnumModel::checksums(&self.config.type_name, &records)?;
        let artifact = self.config.target.render(&model)?;

        let output_dir = &self.config.output_directory;
        let written = write_artifact(output_dir, &artifact)?;
        log_written(&written.path, written.changed, records.len());

        context.add_compile_source_root(output_dir.clone());

        Ok(GenerationOutcome {
            artifact: written.path,
            changed: written.changed,
            constant_count: records.len(),
            source_root: output_dir.clone(),
        })
    }

    fn roots<C: BuildContext>(&self, context: &C) -> Vec<PathBuf> {
        let mut roots = self.config.compile_source_roots.clone();
        roots.extend(context.compile_source_roots());
        roots
    }

    fn collector(&self, roots: &[PathBuf]) -> Collector {
        Collector::new(roots.iter().cloned())
            .with_locations(self.config.effective_locations())
            .with_extensions(self.config.effective_extensions())
    }
}

fn log_written(path: &Path, changed: bool, count: usize) {
    if changed {
        info!("✓ Generated {} with {} migrations", path.display(), count);
    } else {
        info!("✓ {} unchanged ({} migrations)", path.display(), count);
    }
}
