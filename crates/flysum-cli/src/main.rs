//! flysum: Generate CRC-32 checksum enums for migration files

use clap::Parser;
use flysum_cli::{commands, logging, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    match cli.command {
        Commands::Generate(args) => {
            commands::generate::run(&args)?;
        }
        Commands::List(args) => {
            commands::list::run(&args)?;
        }
    }

    Ok(())
}
