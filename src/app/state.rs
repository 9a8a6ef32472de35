use anyhow::Result;
use chrono::Local;
use evolve_words_core::config::{AppConfig, DEFAULT_TARGET};
use evolve_words_core::{
    ExclusiveWorker, FitnessOracle, RunId, SimError, Simulation, SimulationParams, WorkerMessage,
};
use evolve_words_data::{Outcome, ProgressEvent, Severity, Word};
use evolve_words_tui::views::LogEntry;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ratatui::style::Color;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;
use std::sync::Arc;

/// Longest target the input field accepts.
pub const MAX_TARGET_DIGITS: usize = 9;

pub struct App {
    pub running: bool,
    pub config: AppConfig,
    // Vocabulary
    pub oracle: Option<Arc<FitnessOracle>>,
    pub vocabulary_source: Option<PathBuf>,
    // Worker
    pub worker: ExclusiveWorker,
    pub messages: Receiver<WorkerMessage>,
    pub current_run: Option<RunId>,
    pub rng: ChaCha8Rng,
    // Input
    pub target_input: String,
    // Live Data
    pub progenitor: Option<Word>,
    pub generation: u64,
    pub latest: Option<ProgressEvent>,
    pub size_counts: Vec<(usize, usize)>,
    pub last_outcome: Option<Outcome>,
    pub event_log: VecDeque<LogEntry>,
    pub words_scroll: u16,
}

/// Reads `path`, falling back to defaults.
///
/// A missing file is created with the default configuration so it can be
/// edited for the next run.
pub fn load_config(path: &Path) -> AppConfig {
    if let Ok(content) = std::fs::read_to_string(path) {
        match AppConfig::from_toml(&content) {
            Ok(config) => return config,
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", path.display(), e);
            }
        }
    }
    let default = AppConfig::default();
    if !path.exists() {
        if let Ok(toml_str) = toml::to_string(&default) {
            let _ = std::fs::write(path, toml_str);
        }
    }
    default
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let rng = match config.simulation.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let (worker, messages) = ExclusiveWorker::new();
        let target_input = config.simulation.target_population.to_string();

        let mut app = Self {
            running: true,
            config,
            oracle: None,
            vocabulary_source: None,
            worker,
            messages,
            current_run: None,
            rng,
            target_input,
            progenitor: None,
            generation: 0,
            latest: None,
            size_counts: Vec::new(),
            last_outcome: None,
            event_log: VecDeque::new(),
            words_scroll: 0,
        };
        app.load_words();
        app
    }

    /// Loads the vocabulary named by the configuration.
    pub fn load_words(&mut self) {
        match evolve_words_io::load_first(&self.config.word_file_candidates()) {
            Ok(vocabulary) => {
                self.log(
                    format!(
                        "Loaded {} words from {}",
                        vocabulary.oracle.len(),
                        vocabulary.source.display()
                    ),
                    Color::Green,
                );
                self.vocabulary_source = Some(vocabulary.source);
                self.oracle = Some(Arc::new(vocabulary.oracle));
            }
            Err(e) => {
                tracing::error!("{e}");
                self.log(e.to_string(), Color::Red);
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.oracle.is_some()
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_running()
    }

    pub fn log(&mut self, message: impl Into<String>, color: Color) {
        self.event_log.push_back(LogEntry {
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            message: message.into(),
            color,
        });
        while self.event_log.len() > self.config.ui.max_log_lines {
            self.event_log.pop_front();
        }
    }

    /// The target typed by the user, or `None` if it is not a usable number.
    pub fn parsed_target(&self) -> Option<usize> {
        self.target_input
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|n| *n >= 1)
    }

    fn choose_progenitor(&mut self, oracle: &FitnessOracle) -> Result<Word, SimError> {
        match &self.config.simulation.progenitor {
            Some(word) => Ok(Word::new(word.as_str())?),
            None => oracle
                .choose_progenitor(&mut self.rng)
                .ok_or(SimError::NoProgenitor),
        }
    }

    /// Kicks off a new evolution, replacing any run in progress.
    pub fn start_world(&mut self) -> Result<()> {
        let Some(oracle) = self.oracle.clone() else {
            self.log("Could not find a source of words", Color::Red);
            return Ok(());
        };

        let target = match self.parsed_target() {
            Some(target) => target,
            None => {
                tracing::warn!(input = %self.target_input, "Invalid target; using default");
                self.target_input = DEFAULT_TARGET.to_string();
                DEFAULT_TARGET
            }
        };

        let progenitor = match self.choose_progenitor(&oracle) {
            Ok(word) => word,
            Err(e) => {
                self.log(e.to_string(), Color::Red);
                return Ok(());
            }
        };

        self.clear_progress();
        self.log(format!("Progenitor selected: {progenitor}"), Color::Cyan);
        self.progenitor = Some(progenitor.clone());

        let params = SimulationParams::new(progenitor, target)?;
        let simulation = Simulation::seeded(oracle, params, Some(self.rng.gen()));
        self.current_run = Some(self.worker.start(simulation)?);
        Ok(())
    }

    fn clear_progress(&mut self) {
        self.generation = 0;
        self.latest = None;
        self.size_counts.clear();
        self.last_outcome = None;
        self.words_scroll = 0;
    }

    /// Applies every queued worker message belonging to the current run.
    pub fn drain_messages(&mut self) {
        while let Ok(message) = self.messages.try_recv() {
            self.handle_message(message);
        }
    }

    pub fn handle_message(&mut self, message: WorkerMessage) {
        if Some(message.run_id()) != self.current_run {
            return;
        }
        match message {
            WorkerMessage::Started {
                target_population, ..
            } => {
                self.log(
                    format!("Evolving towards a population of {target_population}"),
                    Color::Gray,
                );
            }
            WorkerMessage::Progress { event, .. } => self.update_progress(event),
            WorkerMessage::Finished { outcome, .. } => {
                let color = match outcome.severity() {
                    Severity::Information => Color::Green,
                    Severity::Warning => Color::Yellow,
                };
                tracing::info!(
                    generations = outcome.generations(),
                    unique_words = outcome.unique_words(),
                    "Run finished"
                );
                self.log(outcome.to_string(), color);
                self.last_outcome = Some(outcome);
                print!("\x07");
            }
        }
    }

    fn update_progress(&mut self, event: ProgressEvent) {
        self.generation = event.generation;
        self.size_counts = event.size_counts();
        self.log(
            format!(
                "Generation #{}: {} mutations culled. Population size is now {}",
                event.generation, event.last_cull, event.population_size
            ),
            Color::White,
        );
        self.latest = Some(event);
    }

    /// Stops any active run before exiting.
    pub fn shutdown(&mut self) {
        if self.worker.stop().is_some() {
            tracing::info!("Stopped running simulation");
        }
        self.current_run = None;
    }
}
