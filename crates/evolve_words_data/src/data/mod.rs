//! Core data structures for the Evolve Words simulation.

pub mod progress;
pub mod word;
