mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            snapshot,
            source,
            mode,
            class,
            search,
        } => {
            commands::list::handle(
                &snapshot,
                &source,
                &mode,
                class.as_deref(),
                search.as_deref(),
            )?;
        }

        Commands::Classify { names } => {
            commands::classify::handle(&names)?;
        }

        Commands::Info { snapshot } => {
            commands::info::handle(&snapshot)?;
        }
    }

    Ok(())
}
