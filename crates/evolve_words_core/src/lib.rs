//! # Evolve Words Core
//!
//! The simulation engine behind Evolve Words: evolution by mutation alone,
//! with a fixed vocabulary acting as the fitness function.
//!
//! This crate contains:
//! - Word mutation operators (point, deletion, insertion)
//! - The fitness oracle and population types
//! - The generational expand-then-cull loop
//! - Progress reporting and cooperative cancellation
//! - A single-run background worker
//! - Configuration and logging setup
//!
//! ## Example
//!
//! ```
//! use evolve_words_core::{
//!     CancellationToken, FitnessOracle, RecordingSink, Simulation, SimulationParams,
//! };
//! use std::sync::Arc;
//!
//! let oracle = Arc::new(FitnessOracle::from_text("a an at ant tan"));
//! let params = SimulationParams::parse("a", 4).unwrap();
//! let mut simulation = Simulation::seeded(oracle, params, Some(42));
//!
//! let mut sink = RecordingSink::new();
//! simulation.run(&mut sink, &CancellationToken::new());
//! assert!(sink.outcome.is_some());
//! ```

/// Cooperative cancellation token
pub mod cancel;
/// Configuration management for simulation parameters
pub mod config;
/// Error types
pub mod error;
/// Run statistics and structured logging
pub mod metrics;
/// Word mutation operators
pub mod mutation;
/// Vocabulary-backed fitness oracle
pub mod oracle;
/// Population of one generation
pub mod population;
/// Progress reporting interface
pub mod sink;
/// The generational simulation loop
pub mod simulation;
/// Exclusive background worker
pub mod worker;

pub use cancel::CancellationToken;
pub use error::{Result, SimError};
pub use metrics::{init_logging, init_logging_with, Metrics};
pub use mutation::{MutationKind, Mutator, RandomMutator};
pub use oracle::FitnessOracle;
pub use population::{Cull, Population};
pub use simulation::{RunResult, Simulation, SimulationParams};
pub use sink::{ProgressSink, RecordingSink};
pub use worker::{ChannelSink, ExclusiveWorker, RunId, WorkerMessage};
