//! Run statistics and logging setup.

use std::time::{Duration, Instant};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Counters for a single simulation run.
#[derive(Debug, Clone)]
pub struct Metrics {
    generations: u64,
    candidates: u64,
    culled: u64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generations: 0,
            candidates: 0,
            culled: 0,
            start_time: Instant::now(),
        }
    }

    /// Records a completed generation.
    pub fn record_generation(&mut self, before: usize, after: usize) {
        self.generations += 1;
        self.candidates += before as u64;
        self.culled += (before - after) as u64;

        // Log at info level every 100 generations
        if self.generations % 100 == 0 {
            tracing::info!(
                generations = self.generations,
                population = after,
                culled = self.culled,
                elapsed_ms = self.elapsed().as_millis() as u64,
                "Simulation progress"
            );
        }
    }

    #[must_use]
    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Total candidates examined by every cull so far.
    #[must_use]
    pub fn candidates(&self) -> u64 {
        self.candidates
    }

    #[must_use]
    pub fn culled(&self) -> u64 {
        self.culled
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize tracing subscriber for logging to stderr.
pub fn init_logging() {
    init_logging_with(std::io::stderr);
}

/// Initialize tracing subscriber with a custom writer.
///
/// Only the first call installs a subscriber; later calls are ignored.
pub fn init_logging_with<W>(writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(writer)
            .with_ansi(false)
            .finish(),
    )
    .ok();
}
