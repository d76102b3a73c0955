//! Generate command entry point

use anyhow::Result;
use flysum_core::{GenerationOutcome, Generator, SourceRoots};
use tracing::info;

use crate::commands::GenerateArgs;

/// Run the generate command
///
/// Prints every source root known after the run, the generated one last.
///
/// # Errors
/// Returns an error if the config cannot be loaded or generation fails.
pub fn run(args: &GenerateArgs) -> Result<GenerationOutcome> {
    let config = args.load_config()?;
    info!(
        "Generating {} ({}) into {}",
        config.type_name,
        config.target,
        config.output_directory.display()
    );

    let mut context = SourceRoots::new(args.selection.roots.iter().cloned());
    let outcome = Generator::new(config).run(&mut context)?;

    for root in context.roots() {
        println!("{}", root.display());
    }
    Ok(outcome)
}
