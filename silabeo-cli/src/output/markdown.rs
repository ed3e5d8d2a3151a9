//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use silabeo_core::Output;
use std::io::Write;

/// Markdown formatter - a numbered word list per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    separator: String,
    word_count: usize,
    syllable_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, separator: impl Into<String>) -> Self {
        Self {
            writer,
            separator: separator.into(),
            word_count: 0,
            syllable_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;

        let words = output.words.iter().filter(|w| !w.is_punctuation_only());
        for (n, word) in words.enumerate() {
            writeln!(
                self.writer,
                "{}. **{}** {}",
                n + 1,
                word.original,
                word.syllables.join(self.separator.as_str())
            )?;
        }
        writeln!(self.writer)?;

        self.word_count += output.metadata.stats.word_count;
        self.syllable_count += output.metadata.stats.syllable_count;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total words: {}, syllables: {}*",
            self.word_count, self.syllable_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
