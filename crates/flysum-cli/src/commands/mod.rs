//! CLI commands

pub mod generate;
pub mod list;
pub mod types;

pub use types::{GenerateArgs, SelectionArgs};
