//! Checksum computer: CRC-32 of a file's contents

use std::fs;

use crc::{Crc, CRC_32_ISO_HDLC};

use super::FileReference;
use crate::error::FlysumError;

const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// CRC-32 (gzip/PNG variant) of a byte slice
#[must_use]
pub fn checksum_bytes(bytes: &[u8]) -> u32 {
    CRC32.checksum(bytes)
}

/// Read the whole file and compute its CRC-32
///
/// # Errors
/// Returns [`FlysumError::Checksum`] if the file cannot be opened or read.
pub fn checksum(file: &FileReference) -> Result<u32, FlysumError> {
    let bytes = fs::read(&file.path).map_err(|source| FlysumError::Checksum {
        path: file.path.clone(),
        source,
    })?;
    Ok(checksum_bytes(&bytes))
}

impl FileReference {
    /// Compute the CRC-32 of this file's contents
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn compute_checksum(&self) -> Result<u32, FlysumError> {
        checksum(self)
    }
}
