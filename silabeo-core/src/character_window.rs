//! Three-character lookahead window for the syllable scanner
//!
//! The breaker never looks behind the current character, so the window holds
//! exactly `[current, next, next_next]` plus the byte offset just past
//! `current`, which is where a boundary after `current` is cut.

/// Sliding window of characters over one word
#[derive(Debug, Clone, Default)]
pub struct CharacterWindow {
    /// `[c1, c2, c3]`
    chars: [Option<char>; 3],
    /// Byte offset just past the current character
    byte_end: usize,
}

impl CharacterWindow {
    /// Create an empty window positioned before the first character
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance window by one character with lookahead
    ///
    /// # Arguments
    /// * `current_char` - The character being consumed
    /// * `next_char` - Optional lookahead character (pos+1)
    /// * `next_next_char` - Optional second lookahead character (pos+2)
    pub fn advance(
        &mut self,
        current_char: char,
        next_char: Option<char>,
        next_next_char: Option<char>,
    ) {
        self.chars = [Some(current_char), next_char, next_next_char];
        self.byte_end += current_char.len_utf8();
    }

    /// Byte offset just past the current character
    pub fn byte_end(&self) -> usize {
        self.byte_end
    }

    /// `(c1, c2, c3)` for pattern matching
    pub fn triple(&self) -> (Option<char>, Option<char>, Option<char>) {
        (self.chars[0], self.chars[1], self.chars[2])
    }
}
