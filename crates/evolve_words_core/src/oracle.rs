//! The fitness landscape: a fixed vocabulary that decides who survives.

use evolve_words_data::Word;
use rand::Rng;
use std::collections::HashSet;

/// Read-only set of known-good words.
///
/// Entries are stored lower-cased and lookups are case-normalized, so the
/// oracle answers the same for `"Cat"` and `"cat"`.
#[derive(Debug, Clone, Default)]
pub struct FitnessOracle {
    words: HashSet<String>,
}

impl FitnessOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an oracle from whitespace-separated vocabulary text.
    ///
    /// Tokens are kept as read apart from lower-casing; entries with
    /// punctuation are harmless because mutation never produces them.
    pub fn from_text(text: &str) -> Self {
        text.split_whitespace().collect()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// One-letter entries usable as a progenitor, sorted.
    #[must_use]
    pub fn single_letter_words(&self) -> Vec<Word> {
        let mut words: Vec<Word> = self
            .words
            .iter()
            .filter(|w| w.chars().count() == 1)
            .filter_map(|w| Word::new(w.as_str()).ok())
            .collect();
        words.sort();
        words
    }

    /// Picks a random one-letter word from the vocabulary.
    ///
    /// Candidates are sorted before choosing so the pick only depends on the
    /// RNG, not on hash ordering.
    pub fn choose_progenitor<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Word> {
        let candidates = self.single_letter_words();
        if candidates.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..candidates.len());
        candidates.into_iter().nth(index)
    }
}

impl<S: AsRef<str>> FromIterator<S> for FitnessOracle {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }
}
