//! Plain text output formatter

use super::{strip_line_end, OutputFormatter};
use anyhow::Result;
use ivsort_core::Analysis;
use std::io::Write;

/// Plain text formatter - outputs one word per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn format_word(&mut self, word: &str, _analysis: &Analysis) -> Result<()> {
        writeln!(self.writer, "{}", strip_line_end(word))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
