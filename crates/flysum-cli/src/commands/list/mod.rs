//! List command: Show migrations and checksums without writing

mod run;

pub use run::{format_record, run};

#[cfg(test)]
mod tests;
