use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use stabtree::IntervalTree;

use crate::bench_intervals;

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("build");

    for n_values in [1_000, 10_000, 100_000] {
        bench_param(&mut g, n_values)
    }
}

/// Measure the time needed to build a tree from `n_values` randomly placed
/// intervals.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let input = bench_intervals(n_values);

    g.throughput(Throughput::Elements(n_values as _)); // Intervals indexed per second
    g.bench_function(BenchmarkId::new("n_values", n_values), |b| {
        b.iter_batched(
            || input.clone(),
            |input| input.into_iter().collect::<IntervalTree<_>>(),
            BatchSize::SmallInput,
        );
    });
}
