use evolve_words_lib::model::mutation::Mutator;
use evolve_words_lib::model::oracle::FitnessOracle;
use evolve_words_lib::model::simulation::{Simulation, SimulationParams};
use std::collections::VecDeque;
use std::sync::Arc;

/// Builds an oracle from a handful of words.
#[allow(dead_code)]
pub fn oracle(words: &[&str]) -> Arc<FitnessOracle> {
    Arc::new(words.iter().collect())
}

/// Hands out offspring from a fixed list, then repeats the parent.
#[allow(dead_code)]
pub struct ScriptedMutator {
    pub script: VecDeque<String>,
}

#[allow(dead_code)]
impl ScriptedMutator {
    pub fn new(script: &[&str]) -> Self {
        Self {
            script: script.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Mutator for ScriptedMutator {
    fn mutate(&mut self, word: &str) -> String {
        self.script.pop_front().unwrap_or_else(|| word.to_string())
    }
}

/// Every offspring is a copy of its parent.
#[allow(dead_code)]
pub struct CloneMutator;

impl Mutator for CloneMutator {
    fn mutate(&mut self, word: &str) -> String {
        word.to_string()
    }
}

/// Every offspring is unspellable.
#[allow(dead_code)]
pub struct GarbleMutator;

impl Mutator for GarbleMutator {
    fn mutate(&mut self, word: &str) -> String {
        format!("{word}qqq")
    }
}

#[allow(dead_code)]
pub struct SimulationBuilder {
    words: Vec<String>,
    progenitor: String,
    target: usize,
}

#[allow(dead_code)]
impl SimulationBuilder {
    pub fn new() -> Self {
        Self {
            words: vec!["a".to_string()],
            progenitor: "a".to_string(),
            target: 8,
        }
    }

    pub fn with_words(mut self, words: &[&str]) -> Self {
        self.words = words.iter().map(|w| w.to_string()).collect();
        self
    }

    pub fn with_progenitor(mut self, progenitor: &str) -> Self {
        self.progenitor = progenitor.to_string();
        self
    }

    pub fn with_target(mut self, target: usize) -> Self {
        self.target = target;
        self
    }

    fn parts(&self) -> (Arc<FitnessOracle>, SimulationParams) {
        let oracle = Arc::new(self.words.iter().collect::<FitnessOracle>());
        let params = SimulationParams::parse(&self.progenitor, self.target)
            .expect("builder params must be valid");
        (oracle, params)
    }

    pub fn build<M: Mutator>(self, mutator: M) -> Simulation<M> {
        let (oracle, params) = self.parts();
        Simulation::new(oracle, params, mutator)
    }

    pub fn build_seeded(
        self,
        seed: u64,
    ) -> Simulation<evolve_words_lib::model::mutation::RandomMutator<rand_chacha::ChaCha8Rng>> {
        let (oracle, params) = self.parts();
        Simulation::seeded(oracle, params, Some(seed))
    }
}
