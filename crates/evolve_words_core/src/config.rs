//! Configuration management for simulation runs.
//!
//! Strongly-typed structures mapping to `config.toml`. Command line flags are
//! applied on top by the binary.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [simulation]
//! target_population = 3000
//! seed = 42
//! progenitor = "a"
//!
//! [vocabulary]
//! path = "/usr/share/dict/words"
//!
//! [ui]
//! tick_rate_ms = 50
//! max_log_lines = 500
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Target population used when none (or a nonsensical one) is supplied.
pub const DEFAULT_TARGET: usize = 3_000;

/// Well-known locations of a system word list, tried in order.
pub const DEFAULT_WORD_FILES: [&str; 2] = ["/usr/share/dict/words", "/usr/dict/words"];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub target_population: usize,
    /// Seed for mutation and progenitor choice; entropy when unset.
    pub seed: Option<u64>,
    /// Fixed starting word; a random one-letter word when unset.
    pub progenitor: Option<String>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            target_population: DEFAULT_TARGET,
            seed: None,
            progenitor: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Explicit word list; takes precedence over `candidates`.
    pub path: Option<PathBuf>,
    pub candidates: Vec<PathBuf>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            path: None,
            candidates: DEFAULT_WORD_FILES.iter().map(PathBuf::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub tick_rate_ms: u64,
    pub max_log_lines: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            max_log_lines: 500,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub vocabulary: VocabularyConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// # Validation Rules
    /// - Target population must be at least 1
    /// - A configured progenitor must be a lowercase ASCII word
    /// - The UI must refresh between 1ms and 1s
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.simulation.target_population >= 1,
            "Target population must be at least 1"
        );
        if let Some(progenitor) = &self.simulation.progenitor {
            evolve_words_data::Word::new(progenitor.as_str())
                .map_err(|e| anyhow::anyhow!("Invalid progenitor: {e}"))?;
        }
        anyhow::ensure!(
            self.vocabulary.path.is_some() || !self.vocabulary.candidates.is_empty(),
            "No vocabulary path or candidates configured"
        );
        anyhow::ensure!(self.ui.tick_rate_ms > 0, "Tick rate must be positive");
        anyhow::ensure!(
            self.ui.tick_rate_ms <= 1000,
            "Tick rate too slow (max 1000ms)"
        );
        anyhow::ensure!(self.ui.max_log_lines > 0, "Log must keep at least one line");
        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Word lists to try, most specific first.
    #[must_use]
    pub fn word_file_candidates(&self) -> Vec<PathBuf> {
        self.vocabulary
            .path
            .iter()
            .chain(self.vocabulary.candidates.iter())
            .cloned()
            .collect()
    }
}
