use anyhow::{Context, Result};
use clap::Parser;
use evolve_words_core::config::AppConfig;
use evolve_words_data::Word;
use evolve_words_lib::app::{load_config, App};
use evolve_words_tui::Tui;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Evolution through mutation, with a dictionary as the fitness function",
    long_about = None
)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "standard")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Word list to use as the fitness landscape
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Target population size
    #[arg(short, long)]
    target: Option<usize>,

    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Starting word instead of a random one-letter word
    #[arg(short, long)]
    progenitor: Option<String>,

    /// Emit JSON lines in headless mode
    #[arg(long)]
    json: bool,

    /// Log file used while the dashboard owns the terminal
    #[arg(long, default_value = "evolve_words.log")]
    log_file: PathBuf,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Standard,
    Headless,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) -> Result<()> {
        if let Some(words) = &self.words {
            config.vocabulary.path = Some(words.clone());
        }
        if let Some(target) = self.target {
            config.simulation.target_population = target;
        }
        if let Some(seed) = self.seed {
            config.simulation.seed = Some(seed);
        }
        if let Some(progenitor) = &self.progenitor {
            let word = Word::normalized(progenitor).context("invalid --progenitor")?;
            config.simulation.progenitor = Some(word.into_string());
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(&args.config);
    args.apply(&mut config)?;
    config.validate()?;

    match args.mode {
        Mode::Headless => {
            evolve_words_core::init_logging();

            let shutdown = Arc::new(AtomicBool::new(false));
            let shutdown_clone = shutdown.clone();
            tokio::spawn(async move {
                tokio::signal::ctrl_c().await.ok();
                tracing::info!("Ctrl+C received, cancelling simulation...");
                shutdown_clone.store(true, Ordering::SeqCst);
            });

            let json = args.json;
            let outcome = tokio::task::spawn_blocking(move || {
                evolve_words_lib::headless::run(&config, json, shutdown)
            })
            .await??;
            if outcome.is_none() {
                eprintln!("Simulation cancelled.");
            }
        }
        Mode::Standard => {
            let log_file = std::fs::File::create(&args.log_file)?;
            evolve_words_core::init_logging_with(Mutex::new(log_file));

            let mut tui = Tui::new()?;
            tui.init()?;

            let mut app = App::new(config);
            let res = app.run(&mut tui);

            tui.exit()?;

            if let Err(e) = res {
                eprintln!("Application error: {e}");
            }
        }
    }

    Ok(())
}
