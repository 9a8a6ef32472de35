use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evolve_words_core::mutation::{self, MutationKind};
use evolve_words_core::{CancellationToken, FitnessOracle, Simulation, SimulationParams};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

const SAMPLE_VOCABULARY: &str = "a i an at in it on to tan ant ants tin pin pint pants \
    ate eat tea seat east neat nest tent tents stain saint satin train trains";

/// Benchmark each operator on a mid-length word.
fn bench_operators(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for kind in MutationKind::ALL {
        c.bench_function(&format!("mutation_{kind:?}").to_lowercase(), |b| {
            b.iter(|| black_box(kind.apply(black_box("evolution"), &mut rng)))
        });
    }
}

/// Benchmark the operator used by the simulation loop.
fn bench_randomly(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("mutation_randomly", |b| {
        b.iter(|| black_box(mutation::randomly(black_box("evolution"), &mut rng)))
    });
}

/// Benchmark a whole seeded run against a small vocabulary.
fn bench_simulation_run(c: &mut Criterion) {
    let oracle = Arc::new(FitnessOracle::from_text(SAMPLE_VOCABULARY));

    c.bench_function("simulation_run_target_64", |b| {
        b.iter(|| {
            let params = SimulationParams::parse("a", 64).unwrap();
            let mut simulation = Simulation::seeded(oracle.clone(), params, Some(7));
            let mut sink = evolve_words_core::RecordingSink::new();
            black_box(simulation.run(&mut sink, &CancellationToken::new()))
        })
    });
}

criterion_group!(benches, bench_operators, bench_randomly, bench_simulation_run);
criterion_main!(benches);
