//! Error types for evolve_words_core.

use evolve_words_data::WordError;
use thiserror::Error;

/// Reasons a simulation cannot be set up or started.
#[derive(Error, Debug)]
pub enum SimError {
    /// Target population below one
    #[error("Target population must be at least 1, got {0}")]
    InvalidTarget(usize),

    /// Progenitor is not a usable word
    #[error("Invalid progenitor: {0}")]
    InvalidProgenitor(#[from] WordError),

    /// Vocabulary offers nothing to start from
    #[error("The vocabulary has no one-letter word to use as a progenitor")]
    NoProgenitor,

    /// Background thread could not be spawned
    #[error("Failed to start simulation worker: {0}")]
    Worker(#[from] std::io::Error),
}

/// Result type alias for evolve_words_core operations.
pub type Result<T> = std::result::Result<T, SimError>;
