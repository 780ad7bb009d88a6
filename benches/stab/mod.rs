use std::hint::black_box;

use criterion::{
    measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use rand::{
    distributions::{Distribution, Uniform},
    rngs::StdRng,
    SeedableRng,
};
use stabtree::{stab_scan, IntervalTree};

use crate::bench_intervals;

const N_QUERIES: usize = 1_000;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    bench: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("stab");

    for n_values in [1_000, 10_000, 100_000] {
        bench_param(&mut g, n_values)
    }
}

/// For `n_values` intervals, measure [`N_QUERIES`] stabbing queries against
/// the tree and against the brute-force linear scan over the same input.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let input = bench_intervals(n_values);
    let tree = input.iter().cloned().collect::<IntervalTree<_>>();

    // Query points drawn from the same domain as the interval starts.
    let points = Uniform::from(1_i64..=1_000_000)
        .sample_iter(StdRng::seed_from_u64(24))
        .take(N_QUERIES)
        .collect::<Vec<_>>();

    let bench_name = BenchName {
        bench: "tree",
        n_values,
    };
    g.throughput(Throughput::Elements(N_QUERIES as _)); // Queries per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            for point in &points {
                black_box(tree.stab(point).count());
            }
        })
    });

    let bench_name = BenchName {
        bench: "scan",
        n_values,
    };
    g.throughput(Throughput::Elements(N_QUERIES as _)); // Queries per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            for point in &points {
                black_box(stab_scan(&input, point).count());
            }
        })
    });
}
