//! Static lookup tables for syllabification
//!
//! All tables are built at compile time and are allocation-free during lookup.

pub mod cluster;
pub mod punctuation;

pub use cluster::{ClusterTable, INSEPARABLE_CLUSTERS};
pub use punctuation::{PunctTable, TRAILING_PUNCTUATION};
