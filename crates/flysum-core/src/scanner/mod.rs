//! Scanner module: Migration file discovery and checksums
//!
//! Lists configured locations under each source root, keeps the files
//! whose names end with an allowed extension, and computes the CRC-32
//! of each file's contents.

mod checksum;
mod collector;

pub use checksum::{checksum, checksum_bytes};
pub use collector::{
    collect, matches_extension, Collector, FileReference, DEFAULT_EXTENSION, DEFAULT_LOCATION,
};
