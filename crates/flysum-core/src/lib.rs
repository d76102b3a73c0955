//! flysum-core: Build-time checksums for migration files
//!
//! Scans source roots for migration files, computes a CRC-32 of each
//! file's bytes and generates a source file declaring one enum constant
//! per migration, so the checksum is baked in at build time.
//!
//! # Pipeline
//!
//! - **scanner** - collect files by location and extension, checksum them
//! - **codegen** - build the enum model and render it as Java or Rust
//! - **generator** - run the whole thing and register the output root

pub mod codegen;
pub mod config;
pub mod error;
pub mod generator;
pub mod scanner;

// Re-export commonly used types
pub use codegen::{ChecksumRecord, EnumModel, Target};
pub use config::GeneratorConfig;
pub use error::{FlysumError, GenerationFailure};
pub use generator::{BuildContext, GenerationOutcome, Generator, SourceRoots};
pub use scanner::{FileReference, checksum, collect};
