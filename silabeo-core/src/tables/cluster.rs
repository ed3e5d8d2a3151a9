//! Inseparable consonant clusters

/// Consonant pairs that never split across a syllable boundary
pub static INSEPARABLE_CLUSTERS: ClusterTable = ClusterTable::new(&[
    ('b', 'l'),
    ('b', 'r'),
    ('c', 'l'),
    ('c', 'r'),
    ('d', 'r'),
    ('f', 'l'),
    ('f', 'r'),
    ('g', 'l'),
    ('g', 'r'),
    ('p', 'l'),
    ('p', 'r'),
    ('t', 'r'),
    ('c', 'h'),
    ('l', 'l'),
    ('r', 'r'),
]);

/// Table of two-letter consonant digraphs, stored lower-case
#[derive(Debug, Clone, Copy)]
pub struct ClusterTable {
    pairs: &'static [(char, char)],
}

impl ClusterTable {
    /// Create a table from lower-case pairs
    pub const fn new(pairs: &'static [(char, char)]) -> Self {
        Self { pairs }
    }

    /// Check if `first` followed by `second` is inseparable, ignoring ASCII case
    #[inline]
    pub fn is_inseparable(&self, first: char, second: char) -> bool {
        let first = first.to_ascii_lowercase();
        let second = second.to_ascii_lowercase();
        self.pairs.iter().any(|&(a, b)| a == first && b == second)
    }

    /// Number of pairs in the table
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if the table has no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
