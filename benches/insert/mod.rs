use criterion::{
    BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput, measurement::Measurement,
};
use rb_multiset::RbMultiset;

use crate::Lfsr;

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

/// Measure the time needed to insert `n_values` randomly generated values into
/// an empty tree, then the same number again as duplicates.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    g.throughput(Throughput::Elements(n_values as _)); // Values inserted per second
    g.bench_function(BenchmarkId::new("distinct", n_values), |b| {
        b.iter_batched(
            || (RbMultiset::default(), Lfsr::default()),
            |(mut t, mut rand)| {
                for _ in 0..n_values {
                    t.insert(rand.next());
                }
                t
            },
            BatchSize::PerIteration,
        );
    });

    let mut rand = Lfsr::default();
    let populated = (0..n_values)
        .map(|_| rand.next())
        .collect::<RbMultiset<_>>();

    g.bench_function(BenchmarkId::new("duplicate", n_values), |b| {
        b.iter_batched(
            || (populated.clone(), Lfsr::default()),
            |(mut t, mut rand)| {
                for _ in 0..n_values {
                    t.insert(rand.next());
                }
                t
            },
            BatchSize::PerIteration,
        );
    });
}
