//! Benchmarks for garden stepping.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use butterfly_garden::{Garden, GardenConfig, ProbabilityMode};

/// Deterministic striped layout mixing all three tile kinds.
fn layout(size: usize) -> String {
    (0..size)
        .map(|y| {
            (0..size)
                .map(|x| match (x * 7 + y * 13) % 5 {
                    0 | 1 => '*',
                    2 => '~',
                    _ => ' ',
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");

    for size in [16, 64, 256] {
        let text = layout(size);
        let config = GardenConfig {
            spawn_probability: 0.1,
            probability_mode: ProbabilityMode::Reciprocal,
            random_seed: Some(42),
            ..GardenConfig::with_butterflies()
        };
        let mut garden = Garden::from_text(&text, config).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| {
                    black_box(&mut garden).simulate().unwrap();
                });
            },
        );
    }

    group.finish();
}

fn bench_till_steady(c: &mut Criterion) {
    let text = layout(32);

    c.bench_function("simulate_till_steady_32x32", |b| {
        b.iter(|| {
            let mut garden = Garden::from_text(&text, GardenConfig::default()).unwrap();
            black_box(garden.simulate_till_steady().unwrap())
        });
    });
}

criterion_group!(benches, bench_simulate, bench_till_steady);
criterion_main!(benches);
