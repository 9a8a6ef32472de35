//! Running a single simulation without the dashboard.

use anyhow::{Context, Result};
use evolve_words_core::config::AppConfig;
use evolve_words_core::{
    ExclusiveWorker, Mutator, ProgressSink, SimError, Simulation, SimulationParams, WorkerMessage,
};
use evolve_words_data::{Outcome, ProgressEvent, Severity, Word};
use evolve_words_io::JsonLinesSink;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

/// Human readable progress, one line per generation.
///
/// Like [`JsonLinesSink`], the first write failure is kept and later output
/// is skipped; [`TextReporter::finish`] surfaces it.
pub struct TextReporter<W: Write> {
    writer: W,
    error: Option<std::io::Error>,
}

impl<W: Write> TextReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    fn write_line(&mut self, line: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.writer, "{line}") {
            tracing::warn!("Failed to write report: {e}");
            self.error = Some(e);
        }
    }

    /// Flushes and returns the writer, or the first error seen.
    pub fn finish(mut self) -> std::io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> ProgressSink for TextReporter<W> {
    fn progress(&mut self, event: ProgressEvent) {
        self.write_line(format_args!(
            "Generation #{}: {} mutations culled. Population size is now {} ({:.1}% survived)",
            event.generation,
            event.last_cull,
            event.population_size,
            event.survival_rate()
        ));
    }

    fn finished(&mut self, outcome: &Outcome) {
        let prefix = match outcome.severity() {
            Severity::Information => "",
            Severity::Warning => "WARNING: ",
        };
        self.write_line(format_args!("{prefix}{outcome}"));
    }
}

/// Forwards a worker message to `sink`; returns true once the run is over.
pub fn forward<S: ProgressSink + ?Sized>(message: WorkerMessage, sink: &mut S) -> bool {
    match message {
        WorkerMessage::Started { .. } => false,
        WorkerMessage::Progress { event, .. } => {
            sink.progress(event);
            false
        }
        WorkerMessage::Finished { outcome, .. } => {
            sink.finished(&outcome);
            true
        }
    }
}

/// Loads the vocabulary, runs one simulation on the worker thread and
/// reports to stdout until it finishes or `shutdown` is raised.
pub fn run(config: &AppConfig, json: bool, shutdown: Arc<AtomicBool>) -> Result<Option<Outcome>> {
    run_to(config, json, &shutdown, std::io::stdout())
}

/// Like [`run`], reporting to `writer`. Fails if the report could not be
/// written completely.
pub fn run_to<W: Write>(
    config: &AppConfig,
    json: bool,
    shutdown: &AtomicBool,
    writer: W,
) -> Result<Option<Outcome>> {
    let vocabulary = evolve_words_io::load_first(&config.word_file_candidates())?;
    let mut rng = match config.simulation.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let progenitor = match &config.simulation.progenitor {
        Some(word) => Word::new(word.as_str()).map_err(SimError::from)?,
        None => vocabulary
            .oracle
            .choose_progenitor(&mut rng)
            .ok_or(SimError::NoProgenitor)?,
    };
    eprintln!("Progenitor selected: {progenitor}");

    let params = SimulationParams::new(progenitor, config.simulation.target_population)?;
    let simulation = Simulation::seeded(Arc::new(vocabulary.oracle), params, Some(rng.gen()));

    if json {
        let mut sink = JsonLinesSink::new(writer);
        let outcome = drive(simulation, &mut sink, shutdown)?;
        sink.finish().context("writing JSON report")?;
        Ok(outcome)
    } else {
        let mut sink = TextReporter::new(writer);
        let outcome = drive(simulation, &mut sink, shutdown)?;
        sink.finish().context("writing report")?;
        Ok(outcome)
    }
}

fn drive<M, S>(
    simulation: Simulation<M>,
    sink: &mut S,
    shutdown: &AtomicBool,
) -> Result<Option<Outcome>>
where
    M: Mutator + Send + 'static,
    S: ProgressSink,
{
    let (mut worker, messages) = ExclusiveWorker::new();
    let run_id = worker.start(simulation).context("starting simulation")?;

    loop {
        if shutdown.load(Ordering::SeqCst) {
            worker.stop();
            tracing::info!("Headless run interrupted");
            return Ok(None);
        }
        match messages.recv_timeout(Duration::from_millis(100)) {
            Ok(message) if message.run_id() == run_id => {
                let outcome = match &message {
                    WorkerMessage::Finished { outcome, .. } => Some(outcome.clone()),
                    _ => None,
                };
                forward(message, sink);
                if outcome.is_some() {
                    worker.stop();
                    return Ok(outcome);
                }
            }
            Ok(_) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                anyhow::bail!("Simulation worker disconnected")
            }
        }
    }
}
