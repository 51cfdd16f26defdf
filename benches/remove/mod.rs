use criterion::{
    BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput, measurement::Measurement,
};
use rb_multiset::RbMultiset;

use crate::Lfsr;

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("remove");

    for n_values in [100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

/// Measure the time needed to drain a tree of `n_values` distinct values in
/// insertion order, exercising the structural delete path on every call.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let mut rand = Lfsr::default();
    let populated = (0..n_values)
        .map(|_| rand.next())
        .collect::<RbMultiset<_>>();

    g.throughput(Throughput::Elements(n_values as _)); // Values removed per second
    g.bench_function(BenchmarkId::new("drain", n_values), |b| {
        b.iter_batched(
            || (populated.clone(), Lfsr::default()),
            |(mut t, mut rand)| {
                for _ in 0..n_values {
                    t.remove(&rand.next()).unwrap();
                }
                assert!(t.is_empty());
                t
            },
            BatchSize::PerIteration,
        );
    });
}
