//! Command implementations.

pub mod backends;
pub mod completions;
pub mod init;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;

/// Route a parsed CLI invocation to its command.
pub fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Init(args) => init::run(args),
        Commands::Backends => backends::run(),
        Commands::Completions(args) => completions::run(args),
    }
}
