//! Trailing punctuation detection with O(1) lookup
//!
//! ASCII fast-path table plus a short list for the Spanish inverted marks.

/// Punctuation stripped from the end of a word before syllabification
pub static TRAILING_PUNCTUATION: PunctTable =
    PunctTable::new(b".,!?;:\"'()", &['¡', '¿']);

/// Fast punctuation lookup table
#[derive(Debug, Clone)]
pub struct PunctTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// Non-ASCII punctuation (rare)
    non_ascii: &'static [char],
}

impl PunctTable {
    /// Build the table at compile time
    pub const fn new(ascii: &[u8], non_ascii: &'static [char]) -> Self {
        let mut ascii_table = [false; 128];
        let mut i = 0;
        while i < ascii.len() {
            if ascii[i] < 128 {
                ascii_table[ascii[i] as usize] = true;
            }
            i += 1;
        }

        Self {
            ascii_table,
            non_ascii,
        }
    }

    /// Check if character is punctuation - hot path
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }

    /// Byte offset where the maximal trailing punctuation run of `word` starts
    pub fn trailing_run_start(&self, word: &str) -> usize {
        word.char_indices()
            .rev()
            .take_while(|&(_, ch)| self.contains(ch))
            .last()
            .map_or(word.len(), |(idx, _)| idx)
    }
}
