/// Performance benchmarks for the grouping engine.
///
/// Run with: cargo bench
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use cohort::engine::generate_with_rng;
use cohort::pack::PackConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Synthetic input: n items with a run of disjoint pairs at the front
fn synthetic_input(n: usize, paired: usize) -> (Vec<String>, Vec<(String, String)>) {
    let items: Vec<String> = (0..n).map(|i| format!("item{i}")).collect();
    let mut pairs = Vec::new();
    for p in 0..paired {
        let a = 2 * p;
        let b = 2 * p + 1;
        if b < n {
            pairs.push((items[a].clone(), items[b].clone()));
        }
    }
    (items, pairs)
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for &n in &[12usize, 24, 48] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let (items, pairs) = synthetic_input(n, n / 4);
            let config = PackConfig {
                max_solutions: 1,
                max_attempts: 1200,
            };
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(42);
                black_box(
                    generate_with_rng(&items, &pairs, 4, true, &config, &mut rng).unwrap(),
                )
            });
        });
    }

    group.finish();
}

fn bench_multi_solution(c: &mut Criterion) {
    let mut group = c.benchmark_group("distinct_solutions");
    group.sample_size(20);

    let (items, pairs) = synthetic_input(16, 4);
    group.bench_function("collect_5_of_16_items", |b| {
        let config = PackConfig {
            max_solutions: 5,
            max_attempts: 1200,
        };
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(7);
            black_box(generate_with_rng(&items, &pairs, 4, false, &config, &mut rng).unwrap())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_multi_solution);
criterion_main!(benches);
