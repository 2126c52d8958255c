//! Debug output formatter
//!
//! Shows how each word was read: the raw characters, the characters that
//! carry a rank after canonicalization, and the resulting key.

use super::{strip_line_end, OutputFormatter};
use anyhow::Result;
use ivsort_core::{Analysis, CollationTables};
use std::io::Write;
use std::sync::Arc;

const CHAR_SEPARATOR: &str = "  ";

/// Debug formatter - four lines per word
pub struct DebugFormatter<W: Write> {
    writer: W,
    tables: Arc<CollationTables>,
}

impl<W: Write> DebugFormatter<W> {
    /// Create a new debug formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            tables: CollationTables::shared(),
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn spaced(chars: impl Iterator<Item = char>) -> String {
        chars
            .map(String::from)
            .collect::<Vec<_>>()
            .join(CHAR_SEPARATOR)
    }
}

impl<W: Write + Send> OutputFormatter for DebugFormatter<W> {
    fn format_word(&mut self, word: &str, analysis: &Analysis) -> Result<()> {
        let word = strip_line_end(word);
        let ranked = analysis
            .canonical
            .chars()
            .filter(|&ch| self.tables.full_rank(ch).is_some());
        let (consonants, full) = analysis.key.tiers();

        writeln!(self.writer, "{word}")?;
        writeln!(self.writer, "{}", Self::spaced(word.chars()))?;
        writeln!(self.writer, "{}", Self::spaced(ranked))?;
        writeln!(self.writer, "({consonants:?}, {full:?})")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ivsort_core::Collator;

    #[test]
    fn test_four_lines_per_word() {
        let collator = Collator::new();
        let mut formatter = DebugFormatter::new(Vec::new());

        let word = "אִמָּא";
        formatter.format_word(word, &collator.analyze(word)).unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], word);
        assert_eq!(lines[1], "א  \u{05B4}  מ  \u{05B8}  \u{05BC}  א");
        // Dagesh carries no rank
        assert_eq!(lines[2], "א  \u{05B4}  מ  \u{05B8}  א");
        assert_eq!(lines[3], "([1, 15, 1], [1, 104, 15, 108, 1])");
    }

    #[test]
    fn test_composed_forms_shown() {
        let collator = Collator::new();
        let mut formatter = DebugFormatter::new(Vec::new());

        formatter.format_word("שׂוּם\n", &collator.analyze("שׂוּם")).unwrap();
        let out = String::from_utf8(formatter.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "שׂוּם");
        assert_eq!(lines[2], "\u{FB2B}  \u{FB35}  ם");
        assert_eq!(lines[3], "([26, 14], [26, 113, 14])");
    }
}
