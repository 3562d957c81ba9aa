//! CLI module graph.

pub mod check;
pub mod command;
pub mod migrate;
pub mod output;
pub mod serve;

use command::{CheckCommand, Cli, Commands};
use output::OutputConfig;

use crate::error::Result;

/// Dispatch a parsed command line.
///
/// # Errors
/// Returns whatever the selected command fails with.
pub async fn run(cli: Cli) -> Result<()> {
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    match cli.command {
        Commands::Serve(args) => serve::execute(args).await,
        Commands::Migrate(arg) => migrate::execute(arg.config),
        Commands::Check(CheckCommand::Config(arg)) => check::execute_config(arg.config),
    }
}
