use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Per-generation survival percentages for a whole run, oldest first.
pub type SurvivalHistory = Vec<f64>;

/// Snapshot of one completed generation.
///
/// Owned by whoever receives it; the engine keeps no reference.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProgressEvent {
    /// Population size once the generation was culled.
    pub population_size: usize,
    /// Distinct surviving words, sorted.
    pub unique_words: BTreeSet<String>,
    /// Zero-based generation index.
    pub generation: u64,
    /// How many candidates the cull removed.
    pub last_cull: usize,
    /// Survival rate of every generation so far, this one included.
    pub survival_history: SurvivalHistory,
}

impl ProgressEvent {
    /// Survival rate of this generation.
    #[must_use]
    pub fn survival_rate(&self) -> f64 {
        self.survival_history.last().copied().unwrap_or(0.0)
    }

    /// `(word length, number of unique words of that length)`, ascending by length.
    #[must_use]
    pub fn size_counts(&self) -> Vec<(usize, usize)> {
        let mut counts = std::collections::BTreeMap::new();
        for word in &self.unique_words {
            *counts.entry(word.len()).or_insert(0usize) += 1;
        }
        counts.into_iter().collect()
    }
}

/// How loudly an outcome should be presented.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Information,
    Warning,
}

/// How a run that was not cancelled came to an end.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "outcome")]
pub enum Outcome {
    /// The population grew to at least the target size.
    Reached {
        unique_words: usize,
        generations: u64,
    },
    /// A cull left nobody alive.
    Collapsed { generations: u64 },
}

impl Outcome {
    #[must_use]
    pub fn generations(&self) -> u64 {
        match self {
            Self::Reached { generations, .. } | Self::Collapsed { generations } => *generations,
        }
    }

    /// Distinct words alive at the end; nobody is left after a collapse.
    #[must_use]
    pub fn unique_words(&self) -> usize {
        match self {
            Self::Reached { unique_words, .. } => *unique_words,
            Self::Collapsed { .. } => 0,
        }
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::Reached { .. } => Severity::Information,
            Self::Collapsed { .. } => Severity::Warning,
        }
    }

    #[must_use]
    pub fn is_collapse(&self) -> bool {
        matches!(self, Self::Collapsed { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reached {
                unique_words,
                generations,
            } => write!(
                f,
                "Generated {unique_words} unique words in {generations} generations."
            ),
            Self::Collapsed { .. } => f.write_str("The population collapsed; nobody is left."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(words: &[&str]) -> ProgressEvent {
        ProgressEvent {
            population_size: words.len(),
            unique_words: words.iter().map(|w| w.to_string()).collect(),
            generation: 2,
            last_cull: 1,
            survival_history: vec![50.0, 100.0, 75.0],
        }
    }

    #[test]
    fn test_size_counts_grouped_by_length() {
        let e = event(&["a", "i", "an", "at", "cat"]);
        assert_eq!(e.size_counts(), vec![(1, 2), (2, 2), (3, 1)]);
    }

    #[test]
    fn test_survival_rate_is_latest_entry() {
        assert_eq!(event(&["a"]).survival_rate(), 75.0);
    }

    #[test]
    fn test_outcome_summaries_are_distinct() {
        let reached = Outcome::Reached {
            unique_words: 12,
            generations: 4,
        };
        let collapsed = Outcome::Collapsed { generations: 1 };
        assert_eq!(
            reached.to_string(),
            "Generated 12 unique words in 4 generations."
        );
        assert_eq!(
            collapsed.to_string(),
            "The population collapsed; nobody is left."
        );
        assert_eq!(reached.severity(), Severity::Information);
        assert_eq!(reached.unique_words(), 12);
        assert_eq!(collapsed.unique_words(), 0);
        assert_eq!(collapsed.severity(), Severity::Warning);
        assert!(collapsed.is_collapse());
        assert_eq!(collapsed.generations(), 1);
    }

    #[test]
    fn test_event_json_shape() {
        let json = serde_json::to_value(event(&["an", "a"])).unwrap();
        assert_eq!(json["generation"], 2);
        assert_eq!(json["unique_words"], serde_json::json!(["a", "an"]));
    }
}
