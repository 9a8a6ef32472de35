use evolve_words_lib::headless::{self, forward, TextReporter};
use evolve_words_lib::model::config::AppConfig;
use evolve_words_lib::model::sink::RecordingSink;
use evolve_words_lib::model::data::{Outcome, ProgressEvent};
use evolve_words_lib::model::worker::WorkerMessage;
use std::io::{self, Write};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use uuid::Uuid;

fn word_file(words: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(words.as_bytes()).unwrap();
    file
}

fn config_for(file: &tempfile::NamedTempFile, target: usize) -> AppConfig {
    let mut config = AppConfig::default();
    config.vocabulary.path = Some(file.path().to_path_buf());
    config.vocabulary.candidates.clear();
    config.simulation.target_population = target;
    config.simulation.seed = Some(99);
    config
}

#[test]
fn test_headless_run_reaches_target() {
    let file = word_file("A\nan\nat\nant\ntan\n");
    let config = config_for(&file, 20);
    let outcome = headless::run(&config, true, Arc::new(AtomicBool::new(false)))
        .unwrap()
        .expect("run should not be interrupted");
    match outcome {
        Outcome::Reached { unique_words, .. } => assert!(unique_words >= 1),
        Outcome::Collapsed { .. } => panic!("the progenitor is a word, it cannot collapse"),
    }
}

#[test]
fn test_headless_run_interrupted() {
    let file = word_file("a\n");
    let config = config_for(&file, 1 << 30);
    let outcome = headless::run(&config, false, Arc::new(AtomicBool::new(true))).unwrap();
    assert!(outcome.is_none());
}

#[test]
fn test_headless_run_without_vocabulary_fails() {
    let mut config = AppConfig::default();
    config.vocabulary.path = None;
    config.vocabulary.candidates = vec!["/nonexistent/words".into()];
    assert!(headless::run(&config, false, Arc::new(AtomicBool::new(false))).is_err());
}

#[test]
fn test_forward_reports_completion() {
    let run_id = Uuid::new_v4();
    let mut sink = RecordingSink::new();
    let event = ProgressEvent {
        population_size: 1,
        unique_words: Default::default(),
        generation: 0,
        last_cull: 0,
        survival_history: vec![100.0],
    };
    assert!(!forward(WorkerMessage::Progress { run_id, event }, &mut sink));
    assert!(forward(
        WorkerMessage::Finished {
            run_id,
            outcome: Outcome::Collapsed { generations: 1 },
        },
        &mut sink
    ));
    assert_eq!(sink.events.len(), 1);
    assert_eq!(sink.outcome, Some(Outcome::Collapsed { generations: 1 }));
}

#[test]
fn test_text_reporter_summary() {
    let mut reporter = TextReporter::new(Vec::new());
    forward(
        WorkerMessage::Finished {
            run_id: Uuid::new_v4(),
            outcome: Outcome::Reached {
                unique_words: 12,
                generations: 4,
            },
        },
        &mut reporter,
    );
    let text = String::from_utf8(reporter.finish().unwrap()).unwrap();
    assert_eq!(text, "Generated 12 unique words in 4 generations.\n");
}

/// A writer whose reader went away.
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_text_reporter_keeps_write_error() {
    let mut reporter = TextReporter::new(ClosedPipe);
    forward(
        WorkerMessage::Finished {
            run_id: Uuid::new_v4(),
            outcome: Outcome::Collapsed { generations: 1 },
        },
        &mut reporter,
    );
    let err = reporter.finish().err().expect("write error should surface");
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn test_headless_run_fails_on_closed_output() {
    let file = word_file("a\nan\nat\n");
    let config = config_for(&file, 4);
    for json in [false, true] {
        let result = headless::run_to(&config, json, &AtomicBool::new(false), ClosedPipe);
        assert!(result.is_err(), "json={json} should report the broken pipe");
    }
}
