//! Sort command implementation

use super::LoggingArgs;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{FileReader, InputSource};
use crate::output::{create_formatter, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use ivsort_core::{Collator, CollatorConfig};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the sort command
#[derive(Debug, Default, Args)]
pub struct SortArgs {
    /// Word list, one word per line (default: stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Compute keys in parallel even for short lists
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (0 = one per CPU)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

impl SortArgs {
    /// Execute the sort command
    pub fn execute(&self) -> Result<()> {
        self.logging.init();
        log::debug!("Arguments: {:?}", self);

        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            )),
            None => Box::new(BufWriter::new(io::stdout())),
        };

        self.run(writer)
    }

    /// Read, sort and write the word list into `writer`
    pub fn run<W: Write + Send>(&self, writer: W) -> Result<()> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;

        let source = InputSource::from_arg(self.input.as_deref());
        log::info!("Reading words from {}", source.display_name());
        let words = FileReader::read_words(&source)?;

        let collator = Collator::new().with_config(self.collator_config(&config));
        let threads = match self.threads {
            Some(0) | None => config.performance.effective_threads(),
            Some(n) => n,
        };
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| CliError::ThreadPool(e.to_string()))?;

        log::info!("Sorting {} words with {} thread(s)", words.len(), threads);
        let sorted = pool.install(|| collator.collate_auto(words));

        let format = self.format.unwrap_or(config.output.default_format);
        let mut formatter = create_formatter(format, writer, config.output.pretty_json);
        for word in &sorted {
            formatter.format_word(word, &collator.analyze(word))?;
        }
        formatter.finish()?;

        log::info!("Wrote {} words", sorted.len());
        Ok(())
    }

    fn collator_config(&self, config: &CliConfig) -> CollatorConfig {
        let parallel_threshold = if self.parallel {
            0
        } else {
            config.performance.parallel_threshold
        };
        CollatorConfig { parallel_threshold }
    }
}
