//! List command entry point

use std::path::PathBuf;

use anyhow::Result;
use flysum_core::{ChecksumRecord, FileReference, Generator};
use tracing::info;

use crate::commands::SelectionArgs;

/// Run the list command
///
/// # Errors
/// Returns an error if the config cannot be loaded or a file cannot be read.
pub fn run(args: &SelectionArgs) -> Result<Vec<ChecksumRecord>> {
    let config = args.load_config()?;
    let mut roots: Vec<PathBuf> = config.compile_source_roots.clone();
    roots.extend(args.roots.iter().cloned());

    let records = Generator::new(config).records(&roots)?;
    info!("Found {} migrations", records.len());

    for (file, record) in &records {
        println!("{}", format_record(file, record));
    }
    Ok(records.into_iter().map(|(_, record)| record).collect())
}

/// One output line: identifier, signed checksum and path, tab separated
#[must_use]
pub fn format_record(file: &FileReference, record: &ChecksumRecord) -> String {
    format!(
        "{}\t{}\t{}",
        record.identifier,
        record.checksum,
        file.path.display()
    )
}
