//! Word list reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Where the word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// No path or `-` means standard input
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            None => Self::Stdin,
            Some(p) if p == Path::new("-") => Self::Stdin,
            Some(p) => Self::File(p.to_path_buf()),
        }
    }

    /// Name used in log messages
    pub fn display_name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read all of standard input as UTF-8 text
    pub fn read_stdin() -> Result<String> {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read standard input")?;
        Ok(content)
    }

    /// Read one word per line. Line terminators are not part of the word;
    /// blank lines are kept.
    pub fn read_words(source: &InputSource) -> Result<Vec<String>> {
        let text = match source {
            InputSource::Stdin => Self::read_stdin()?,
            InputSource::File(path) => Self::read_text(path)?,
        };

        Ok(Self::split_words(&text))
    }

    /// Split text into lines, one word per line
    pub fn split_words(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }
}
