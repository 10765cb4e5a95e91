//! The `schemagen` command-line tool.
//!
//! The binary in `main.rs` only parses arguments and dispatches here, so the
//! commands and config handling can be tested without spawning a process.

pub mod commands;
pub mod config;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Generate Go types from JSON Schema, OpenRPC and OpenAPI documents.
#[derive(Parser, Debug)]
#[command(name = "schemagen", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a Go source file from a schema
    Generate(commands::generate::GenerateArgs),
    /// Check that a schema can be processed
    Validate(commands::validate::ValidateArgs),
    /// List available generators
    List(commands::list::ListArgs),
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
pub fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run a parsed command line against the built-in generators.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let registry = schemagen_typegen::Registry::with_builtin();
    match cli.command {
        Command::Generate(args) => commands::generate::run(args, &registry),
        Command::Validate(args) => commands::validate::run(args, &registry),
        Command::List(args) => commands::list::run(args, &registry),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::parse_from(["schemagen", "-vv", "list"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::List(_)));
    }
}
