//! CLI command implementations

use anyhow::Result;
use clap::{Args, Subcommand};

pub mod generate_config;
pub mod key;
pub mod sort;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sort a word list, one word per line
    Sort(sort::SortArgs),

    /// Show the canonical form and sort key of individual words
    Key(key::KeyArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Sort(args) => args.execute(),
            Commands::Key(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Verbosity flags shared by all commands
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct LoggingArgs {
    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl LoggingArgs {
    /// Default log filter for the verbosity level
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Initialize logging based on verbosity level. `RUST_LOG` takes
    /// precedence over the flags.
    pub fn init(&self) {
        if self.quiet {
            return;
        }

        // A logger may already be installed when commands run inside tests
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level()),
        )
        .try_init();
    }
}
