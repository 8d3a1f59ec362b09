//! Benchmarks for the isomorphism-class enumeration.
//!
//! Six vertices keeps a single iteration in the low milliseconds while
//! still exercising the full probe-and-claim loop; seven is the reference
//! workload and is worth watching when the hashing path changes.

use census_core::{CensusBuilder, ExecutionStrategy};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_classes");
    for &vertices in &[5usize, 6] {
        for (label, strategy) in [
            ("sequential", ExecutionStrategy::Sequential),
            ("parallel", ExecutionStrategy::Parallel),
        ] {
            group.bench_with_input(
                BenchmarkId::new(label, vertices),
                &vertices,
                |b, &vertices| {
                    let census = CensusBuilder::new()
                        .with_vertices(vertices)
                        .with_execution_strategy(strategy)
                        .build()
                        .expect("vertex count is within bounds");
                    b.iter(|| census.run().expect("backend is available"));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_count);
criterion_main!(benches);
