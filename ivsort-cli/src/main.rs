//! ivsort: sort pointed Hebrew words consonants first, vowels second

use anyhow::Result;
use clap::Parser;
use ivsort_cli::commands::Commands;

/// Sort pointed Hebrew word lists consonants first, vowels second
#[derive(Debug, Parser)]
#[command(name = "ivsort", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sort_with_file() {
        let cli = Cli::try_parse_from(["ivsort", "sort", "words.txt", "-f", "json"]).unwrap();
        match cli.command {
            Commands::Sort(args) => {
                assert_eq!(args.input.as_deref(), Some(std::path::Path::new("words.txt")));
            }
            other => panic!("expected sort, got {other:?}"),
        }
    }
}
