//! Generate command: Write the checksum enum

mod run;

pub use run::run;
