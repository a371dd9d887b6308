//! Criterion counterpart of the trial runner, one benchmark per container
//! and dataset size.
//!
//! Run with: `cargo bench --bench lookup`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lookup_bench::{Container, Dataset};

const SEED: u128 = 0x5eed_1ab5_c0ff_ee00;

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");

    for size in [100, 10_000, 100_000].iter() {
        let dataset = Dataset::generate(*size, SEED);
        let target = dataset.target();

        for container in Container::ALL.iter() {
            group.bench_with_input(
                BenchmarkId::new(container.name(), size),
                &target,
                |b, target| b.iter(|| dataset.contains(*container, black_box(*target))),
            );
        }
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.sample_size(10);
    group.bench_function("100k", |b| {
        b.iter(|| Dataset::generate(black_box(100_000), SEED))
    });
    group.finish();
}

criterion_group!(benches, bench_contains, bench_generate);
criterion_main!(benches);
