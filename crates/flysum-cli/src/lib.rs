//! flysum-cli library
//!
//! Exposes the CLI definition, commands and logging setup so they can be
//! tested without spawning the binary.

pub mod commands;
pub mod logging;

pub use commands::types::{Cli, Commands, GenerateArgs, SelectionArgs};
