//! Command implementations

mod config;
mod convert;

use crate::cli::{Cli, Commands, ConvertArgs};
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub fn execute(cli: Cli, output: &OutputWriter) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Commands::Convert(args)) => convert::execute(args, output, config_path, cli.dry_run),
        Some(Commands::Config) => config::execute(output, config_path),
        None => convert::execute(ConvertArgs::default(), output, config_path, cli.dry_run),
    }
}
