//! JSON output formatter

use super::{strip_line_end, OutputFormatter};
use anyhow::Result;
use ivsort_core::{Analysis, Rank};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs words as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    words: Vec<WordData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct WordData {
    /// The word as read
    pub word: String,
    /// Canonical form the key was built from
    pub canonical: String,
    /// First key tier
    pub consonant_key: Vec<Rank>,
    /// Second key tier
    pub full_key: Vec<Rank>,
}

impl WordData {
    pub fn new(word: &str, analysis: &Analysis) -> Self {
        Self {
            word: strip_line_end(word).to_string(),
            canonical: analysis.canonical.clone(),
            consonant_key: analysis.key.consonants.to_vec(),
            full_key: analysis.key.full.to_vec(),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            words: Vec::new(),
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_word(&mut self, word: &str, analysis: &Analysis) -> Result<()> {
        self.words.push(WordData::new(word, analysis));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.words)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.words)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
