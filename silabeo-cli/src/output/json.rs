//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use silabeo_core::{Output, ProcessingStats, Word};
use std::io::Write;

/// JSON formatter - outputs documents as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Where the text came from
    pub source: String,
    /// Syllabified text
    pub text: String,
    /// Per-word syllables
    pub words: Vec<Word>,
    /// Counters for the document
    pub stats: ProcessingStats,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.to_string(),
            text: output.text.clone(),
            words: output.words.clone(),
            stats: output.metadata.stats.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{process, SharedBuffer};

    #[test]
    fn test_json_output() {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(buffer.clone(), false);

        formatter.format_document("<text>", &process("aire puro.")).unwrap();
        formatter.finish().unwrap();

        let parsed: Vec<DocumentData> = serde_json::from_str(&buffer.contents()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].source, "<text>");
        assert_eq!(parsed[0].text, "ai·re pu·ro.");
        assert_eq!(parsed[0].words[1].syllables, vec!["pu", "ro"]);
        assert_eq!(parsed[0].words[1].trailing_punctuation, ".");
        assert_eq!(parsed[0].stats.syllable_count, 4);
    }

    #[test]
    fn test_empty_json_array() {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(buffer.clone(), true);
        formatter.finish().unwrap();
        assert_eq!(buffer.contents().trim(), "[]");
    }
}
