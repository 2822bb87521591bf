use criterion::{black_box, criterion_group, criterion_main, Criterion};
use roshambo_core::config::SimConfig;
use roshambo_core::engine::Engine;
use roshambo_core::lifecycle::rng_from_seed;

fn bench_compute_force(c: &mut Criterion) {
    let engine = Engine::new(SimConfig::default()).expect("default config is valid");
    let population = engine.initialize(&mut rng_from_seed(Some(42)));
    let field = engine.stepper().field();

    c.bench_function("compute_force_150", |b| {
        b.iter(|| black_box(field.compute_force(&population[0], &population)))
    });
}

fn bench_tick(c: &mut Criterion) {
    let engine = Engine::new(SimConfig::default()).expect("default config is valid");
    let population = engine.initialize(&mut rng_from_seed(Some(42)));

    c.bench_function("tick_150", |b| {
        b.iter(|| black_box(engine.tick(&population)))
    });
}

fn bench_tick_large(c: &mut Criterion) {
    let mut config = SimConfig::default();
    config.world.count_per_type = 500;
    let engine = Engine::new(config).expect("large config is valid");
    let population = engine.initialize(&mut rng_from_seed(Some(42)));

    c.bench_function("tick_1500", |b| {
        b.iter(|| black_box(engine.tick(&population)))
    });
}

criterion_group!(benches, bench_compute_force, bench_tick, bench_tick_large);
criterion_main!(benches);
