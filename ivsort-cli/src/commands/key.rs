//! Key command implementation

use super::LoggingArgs;
use crate::output::{create_formatter, OutputFormat};
use anyhow::Result;
use clap::Args;
use ivsort_core::Collator;
use std::io::{self, BufWriter, Write};

/// Arguments for the key command
#[derive(Debug, Args)]
pub struct KeyArgs {
    /// Words to analyze
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "debug")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

impl Default for KeyArgs {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            format: OutputFormat::Debug,
            logging: LoggingArgs::default(),
        }
    }
}

impl KeyArgs {
    /// Execute the key command
    pub fn execute(&self) -> Result<()> {
        self.logging.init();
        self.run(BufWriter::new(io::stdout()))
    }

    /// Write the analysis of each word, in argument order
    pub fn run<W: Write + Send>(&self, writer: W) -> Result<()> {
        let collator = Collator::new();
        let mut formatter = create_formatter(self.format, writer, true);

        for word in &self.words {
            let analysis = collator.analyze(word);
            log::debug!("{word}: {:?}", analysis.key);
            formatter.format_word(word, &analysis)?;
        }

        formatter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(words: &[&str], format: OutputFormat) -> String {
        let args = KeyArgs {
            words: words.iter().map(|w| w.to_string()).collect(),
            format,
            ..Default::default()
        };
        let mut out = Vec::new();
        args.run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_debug_output() {
        let out = run(&["שָׁלוֹם"], OutputFormat::Debug);
        assert!(out.contains("([27, 13, 14], [27, 108, 13, 111, 14])"));
    }

    #[test]
    fn test_keeps_argument_order() {
        let out = run(&["בב", "אא"], OutputFormat::Text);
        assert_eq!(out, "בב\nאא\n");
    }

    #[test]
    fn test_json_output() {
        let out = run(&["אִמָּא"], OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["consonant_key"], serde_json::json!([1, 15, 1]));
        assert_eq!(parsed[0]["full_key"], serde_json::json!([1, 104, 15, 108, 1]));
    }
}
