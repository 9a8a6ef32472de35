//! I/O around the simulation: finding the vocabulary on disk and writing
//! machine-readable progress reports.

pub mod error;
pub mod report;
pub mod vocabulary;

pub use error::{IoError, Result};
pub use report::JsonLinesSink;
pub use vocabulary::{find_words, load_first, load_oracle, Vocabulary};
