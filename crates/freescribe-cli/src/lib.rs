//! Diagnostic command-line front end for `freescribe-paths`.

#![deny(unused_crate_dependencies)]

// Loaded by the binary before argument parsing
use dotenvy as _;

pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;

use anyhow::Context;
use freescribe_paths::PathResolver;
use tracing::debug;

/// Dispatch a parsed command line.
///
/// Prints help and succeeds when no subcommand was given.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mode = cli.execution_mode();
    debug!(%mode, "Resolving paths");
    let resolver = PathResolver::with_mode(mode);

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Paths { json } => {
            handlers::paths::execute(&resolver, json).context("paths command failed")?;
        }
        Commands::Bundled { segments } => {
            handlers::bundled::execute(&resolver, &segments)
                .context("bundled command failed")?;
        }
        Commands::Resource { filename } => {
            handlers::resource::execute(&resolver, &filename)
                .context("resource command failed")?;
        }
    }

    Ok(())
}
