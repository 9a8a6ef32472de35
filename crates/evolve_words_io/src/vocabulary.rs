//! Locating and loading the word list that backs the fitness oracle.

use crate::error::{IoError, Result};
use evolve_words_core::FitnessOracle;
use std::fs;
use std::path::{Path, PathBuf};

/// A loaded word list and where it came from.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub source: PathBuf,
    pub oracle: FitnessOracle,
}

/// Returns the first candidate that is a regular file.
pub fn find_words<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(AsRef::as_ref)
        .find(|path| path.is_file())
        .map(Path::to_path_buf)
}

/// Reads a whitespace-separated word list into an oracle.
pub fn load_oracle<P: AsRef<Path>>(path: P) -> Result<FitnessOracle> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| IoError::from(e).with_context(format!("reading {}", path.display())))?;
    let oracle = FitnessOracle::from_text(&text);
    if oracle.is_empty() {
        return Err(IoError::EmptyVocabulary(path.to_path_buf()));
    }
    Ok(oracle)
}

/// Finds the first existing candidate and loads it.
pub fn load_first<P: AsRef<Path>>(candidates: &[P]) -> Result<Vocabulary> {
    let source = find_words(candidates).ok_or_else(|| IoError::NoWordSource {
        tried: candidates.iter().map(|p| p.as_ref().to_path_buf()).collect(),
    })?;
    let oracle = load_oracle(&source)?;
    tracing::info!(
        source = %source.display(),
        words = oracle.len(),
        "Vocabulary loaded"
    );
    Ok(Vocabulary { source, oracle })
}
