mod common;

use common::SimulationBuilder;
use evolve_words_lib::model::cancel::CancellationToken;
use evolve_words_lib::model::sink::RecordingSink;

const WORDS: &[&str] = &["a", "i", "an", "at", "in", "it", "ant", "tan", "tin", "nit"];

fn record(seed: u64) -> RecordingSink {
    let mut sim = SimulationBuilder::new()
        .with_words(WORDS)
        .with_target(200)
        .build_seeded(seed);
    let mut sink = RecordingSink::new();
    sim.run(&mut sink, &CancellationToken::new());
    sink
}

#[test]
fn test_determinism_consistency() {
    let first = record(12345);
    let second = record(12345);

    assert_eq!(first.events.len(), second.events.len());
    for (a, b) in first.events.iter().zip(&second.events) {
        assert_eq!(a, b, "Generation {} should match", a.generation);
    }
    assert_eq!(first.outcome, second.outcome);
}
