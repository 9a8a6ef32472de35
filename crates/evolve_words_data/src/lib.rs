//! Plain data shared across the Evolve Words crates.
//!
//! Nothing in here knows how a simulation runs; these are the values that
//! travel between the engine, the vocabulary loader and the presentation
//! layers.

pub mod data;

pub use data::progress::{Outcome, ProgressEvent, Severity, SurvivalHistory};
pub use data::word::{Word, WordError};
