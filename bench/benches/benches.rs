use criterion::{Criterion, criterion_group, criterion_main};
use platesim_core::config::InteractionMode;
use platesim_core::render::{height_image, terrain_image};
use platesim_core::{HeightSampler, IslandConfig, NoiseKind, SimConfig, Simulation};

const SEED: u64 = 2025;

fn busy_config(interaction: InteractionMode) -> SimConfig {
    SimConfig {
        plate_count: 20,
        earthquake_probability: 0.1,
        interaction,
        ..SimConfig::default()
    }
}

fn bench_tick(c: &mut Criterion) {
    for (name, mode) in [
        ("tick (sequential)", InteractionMode::Sequential),
        ("tick (snapshot)", InteractionMode::Snapshot),
    ] {
        c.bench_function(name, |b| {
            let mut sim = Simulation::with_seed(busy_config(mode), SEED).unwrap();
            b.iter(|| sim.tick())
        });
    }
}

fn bench_tick_and_repaint(c: &mut Criterion) {
    c.bench_function("tick + terrain image", |b| {
        let mut sim = Simulation::with_seed(busy_config(InteractionMode::Sequential), SEED).unwrap();
        b.iter(|| {
            sim.tick();
            terrain_image(sim.terrain(), sim.plates())
        })
    });
}

fn bench_islands(c: &mut Criterion) {
    for (name, noise) in [
        ("islands uniform + image", NoiseKind::Uniform),
        ("islands perlin + image", NoiseKind::Perlin),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| {
                let config = IslandConfig {
                    noise,
                    ..IslandConfig::default()
                };
                let heights = HeightSampler::with_seed(config, SEED).unwrap().generate();
                height_image(&heights)
            })
        });
    }
}

criterion_group!(
    platesim_benchmarks,
    bench_tick,
    bench_tick_and_repaint,
    bench_islands
);
criterion_main!(platesim_benchmarks);
