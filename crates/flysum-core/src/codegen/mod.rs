//! Codegen module: Checksum enum model and renderers
//!
//! Checksum records are first collected into an [`EnumModel`], which is
//! validated and then rendered as Java or Rust source for a [`Target`].
//! Rendering never touches the filesystem; [`write_artifact`] does.

mod identifier;
mod java;
mod model;
mod rust;
mod target;
mod writer;

pub use identifier::{is_java_identifier, is_rust_identifier, to_snake_case};
pub use model::{ChecksumRecord, EnumConstant, EnumModel, DEFAULT_TYPE_NAME};
pub use target::{RenderedArtifact, Target};
pub use writer::{write_artifact, WrittenArtifact};

#[cfg(test)]
mod tests;
