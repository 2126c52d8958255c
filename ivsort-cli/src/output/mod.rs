//! Output formatting module

use anyhow::Result;
use ivsort_core::Analysis;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format and output a single word with its canonical form and key
    fn format_word(&mut self, word: &str, analysis: &Analysis) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod debug;
pub mod json;
pub mod text;

pub use debug::DebugFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One word per line
    Text,
    /// JSON array of words with canonical forms and keys
    Json,
    /// Characters, ranked characters and key for each word
    Debug,
}

/// Build the formatter for `format` writing into `writer`
pub fn create_formatter<'a, W>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
) -> Box<dyn OutputFormatter + 'a>
where
    W: Write + Send + 'a,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Debug => Box::new(DebugFormatter::new(writer)),
    }
}

/// Strip trailing line terminators the way the words are printed
pub(crate) fn strip_line_end(word: &str) -> &str {
    word.trim_end_matches(['\r', '\n'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ivsort_core::Collator;
    use std::sync::{Arc, Mutex};

    /// Writer that can be inspected after the formatter is boxed
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_create_formatter_dispatch() {
        let collator = Collator::new();
        let analysis = collator.analyze("אב");

        for (format, expected) in [
            (OutputFormat::Text, "אב\n"),
            (OutputFormat::Json, "[{\"word\":\"אב\",\"canonical\":\"אב\",\"consonant_key\":[1,2],\"full_key\":[1,2]}]\n"),
            (OutputFormat::Debug, "אב\nא  ב\nא  ב\n([1, 2], [1, 2])\n"),
        ] {
            let buf = SharedBuf::default();
            let mut formatter = create_formatter(format, buf.clone(), false);
            formatter.format_word("אב", &analysis).unwrap();
            formatter.finish().unwrap();

            let written = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
            assert_eq!(written, expected, "format {format:?}");
        }
    }

    #[test]
    fn test_strip_line_end() {
        assert_eq!(strip_line_end("שָׁלוֹם\r\n"), "שָׁלוֹם");
        assert_eq!(strip_line_end("אב\n"), "אב");
        assert_eq!(strip_line_end("אב "), "אב ");
    }
}
