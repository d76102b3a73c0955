//! Artifact writer

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::RenderedArtifact;
use crate::error::FlysumError;

/// Where an artifact landed and whether its content changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    pub path: PathBuf,
    pub changed: bool,
}

/// Write an artifact below `output_dir`, creating directories as needed
///
/// An existing file with identical content is left untouched.
///
/// # Errors
/// Returns [`FlysumError::OutputWrite`] if a directory cannot be created
/// or the file cannot be written.
pub fn write_artifact(
    output_dir: &Path,
    artifact: &RenderedArtifact,
) -> Result<WrittenArtifact, FlysumError> {
    let path = output_dir.join(&artifact.relative_path);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| FlysumError::OutputWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let unchanged = fs::read(&path).is_ok_and(|existing| existing == artifact.source.as_bytes());
    if unchanged {
        debug!("{} is up to date", path.display());
    } else {
        fs::write(&path, &artifact.source).map_err(|source| FlysumError::OutputWrite {
            path: path.clone(),
            source,
        })?;
    }

    Ok(WrittenArtifact {
        path,
        changed: !unchanged,
    })
}
