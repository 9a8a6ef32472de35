//! The generational expand-then-cull loop.
//!
//! Each generation every member produces one mutated offspring, offspring
//! join their parents, and the oracle culls whatever is not a word. Parents
//! are not retired: a survivor competes again in every later cull.

use crate::cancel::CancellationToken;
use crate::error::{Result, SimError};
use crate::metrics::Metrics;
use crate::mutation::{Mutator, RandomMutator};
use crate::oracle::FitnessOracle;
use crate::population::Population;
use crate::sink::ProgressSink;
use evolve_words_data::{Outcome, ProgressEvent, SurvivalHistory, Word};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

/// Validated inputs of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationParams {
    progenitor: Word,
    target_population: usize,
}

impl SimulationParams {
    pub fn new(progenitor: Word, target_population: usize) -> Result<Self> {
        if target_population < 1 {
            return Err(SimError::InvalidTarget(target_population));
        }
        Ok(Self {
            progenitor,
            target_population,
        })
    }

    /// Like [`SimulationParams::new`], validating a raw progenitor string.
    pub fn parse(progenitor: &str, target_population: usize) -> Result<Self> {
        Self::new(Word::new(progenitor)?, target_population)
    }

    #[must_use]
    pub fn progenitor(&self) -> &Word {
        &self.progenitor
    }

    #[must_use]
    pub fn target_population(&self) -> usize {
        self.target_population
    }
}

/// How [`Simulation::run`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunResult {
    Finished(Outcome),
    /// Stopped on request; the sink heard nothing about it.
    Cancelled,
}

/// The mutation loop of a single run.
pub struct Simulation<M> {
    oracle: Arc<FitnessOracle>,
    mutator: M,
    params: SimulationParams,
    population: Population,
    generation: u64,
    survival: SurvivalHistory,
    metrics: Metrics,
}

impl Simulation<RandomMutator<ChaCha8Rng>> {
    /// Builds a simulation driven by `ChaCha8Rng`, seeded when `seed` is given.
    pub fn seeded(
        oracle: Arc<FitnessOracle>,
        params: SimulationParams,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::new(oracle, params, RandomMutator::new(rng))
    }
}

impl<M: Mutator> Simulation<M> {
    pub fn new(oracle: Arc<FitnessOracle>, params: SimulationParams, mutator: M) -> Self {
        let population = Population::founded_by(&params.progenitor);
        Self {
            oracle,
            mutator,
            params,
            population,
            generation: 0,
            survival: SurvivalHistory::new(),
            metrics: Metrics::new(),
        }
    }

    #[must_use]
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    #[must_use]
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Number of generations completed so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn survival_history(&self) -> &[f64] {
        &self.survival
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// True once the population has reached the target or died out.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.population.is_empty() || self.population.len() >= self.params.target_population
    }

    /// The outcome the run would report if it stopped now.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.population.is_empty() {
            Outcome::Collapsed {
                generations: self.generation,
            }
        } else {
            Outcome::Reached {
                unique_words: self.population.unique_count(),
                generations: self.generation,
            }
        }
    }

    /// Runs one generation.
    ///
    /// Returns `None` if `cancel` fired before the generation completed, in
    /// which case the population is left as it was.
    pub fn step(&mut self, cancel: &CancellationToken) -> Option<ProgressEvent> {
        let mut offspring = Vec::with_capacity(self.population.len());
        for word in self.population.iter() {
            if cancel.is_cancelled() {
                return None;
            }
            offspring.push(self.mutator.mutate(word));
        }
        if cancel.is_cancelled() {
            return None;
        }

        let mut candidates = std::mem::take(&mut self.population);
        candidates.extend(offspring);
        let (survivors, cull) = candidates.cull(&self.oracle);
        self.survival.push(cull.survival_rate());
        self.metrics.record_generation(cull.before, cull.after);

        let event = ProgressEvent {
            population_size: cull.after,
            unique_words: survivors.unique_words(),
            generation: self.generation,
            last_cull: cull.removed(),
            survival_history: self.survival.clone(),
        };
        tracing::debug!(
            generation = self.generation,
            before = cull.before,
            after = cull.after,
            unique = event.unique_words.len(),
            "Generation complete"
        );

        self.population = survivors;
        self.generation += 1;
        Some(event)
    }

    /// Runs generations until the target is reached, the population
    /// collapses, or `cancel` fires.
    pub fn run<S: ProgressSink + ?Sized>(
        &mut self,
        sink: &mut S,
        cancel: &CancellationToken,
    ) -> RunResult {
        tracing::info!(
            progenitor = %self.params.progenitor,
            target = self.params.target_population,
            vocabulary = self.oracle.len(),
            "Simulation started"
        );

        while !self.is_finished() {
            match self.step(cancel) {
                Some(event) => sink.progress(event),
                None => {
                    tracing::info!(generation = self.generation, "Simulation cancelled");
                    return RunResult::Cancelled;
                }
            }
        }

        let outcome = self.outcome();
        if outcome.is_collapse() {
            tracing::warn!(generations = self.generation, "Population collapsed");
        } else {
            tracing::info!(
                generations = self.generation,
                population = self.population.len(),
                candidates = self.metrics.candidates(),
                culled = self.metrics.culled(),
                elapsed_ms = self.metrics.elapsed().as_millis() as u64,
                "Simulation reached target"
            );
        }
        sink.finished(&outcome);
        RunResult::Finished(outcome)
    }
}
