//! Command-line surface for the register.

pub mod args;
pub mod commands;
pub mod errors;
pub mod output;

pub use errors::{CliError, CliResult};

use args::Cli;

/// Parses arguments and runs the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    commands::execute(cli.command)
}
