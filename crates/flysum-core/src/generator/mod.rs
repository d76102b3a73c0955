//! Generator module: Runs the checksum pipeline
//!
//! Collects migration files from the build context's source roots,
//! checksums them in discovery order, renders the enum and writes it to
//! the output directory, which is then registered as a source root.

mod context;
mod run;

pub use context::{BuildContext, SourceRoots};
pub use run::{GenerationOutcome, Generator};
