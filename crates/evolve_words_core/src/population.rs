use crate::oracle::FitnessOracle;
use evolve_words_data::Word;
use std::collections::BTreeSet;

/// Candidate counts around one cull.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cull {
    pub before: usize,
    pub after: usize,
}

impl Cull {
    #[must_use]
    pub fn removed(&self) -> usize {
        self.before - self.after
    }

    /// Percentage of candidates that survived; `0` when there were none.
    #[must_use]
    pub fn survival_rate(&self) -> f64 {
        if self.before == 0 {
            0.0
        } else {
            100.0 * self.after as f64 / self.before as f64
        }
    }
}

/// The living members of one generation, in insertion order.
///
/// Duplicates are kept: two parents that happen to produce the same word
/// both count toward the population size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Population {
    members: Vec<String>,
}

impl Population {
    /// A generation-zero population holding only the progenitor.
    pub fn founded_by(progenitor: &Word) -> Self {
        Self {
            members: vec![progenitor.as_str().to_owned()],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Appends offspring after the existing members.
    pub fn extend<I: IntoIterator<Item = String>>(&mut self, offspring: I) {
        self.members.extend(offspring);
    }

    /// Builds the next population from the members the oracle accepts.
    #[must_use]
    pub fn cull(self, oracle: &FitnessOracle) -> (Population, Cull) {
        let before = self.members.len();
        let members: Vec<String> = self
            .members
            .into_iter()
            .filter(|word| oracle.contains(word))
            .collect();
        let after = members.len();
        (Population { members }, Cull { before, after })
    }

    /// Distinct members, sorted.
    #[must_use]
    pub fn unique_words(&self) -> BTreeSet<String> {
        self.members.iter().cloned().collect()
    }

    #[must_use]
    pub fn unique_count(&self) -> usize {
        self.members.iter().collect::<BTreeSet<_>>().len()
    }
}
