use std::hint::black_box;

use criterion::{
    BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput, measurement::Measurement,
};
use rb_multiset::RbMultiset;

use crate::Lfsr;

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("contains");

    for n_values in [1_000, 10_000] {
        bench_param(&mut g, n_values, 1_000)
    }
}

/// For a tree containing `n_values`, perform `n_lookups` that all hit, and
/// `n_lookups` that all miss.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize, n_lookups: usize)
where
    M: Measurement,
{
    assert!(n_values >= n_lookups);

    let mut rand = Lfsr::default();
    let t = (0..n_values)
        .map(|_| rand.next())
        .collect::<RbMultiset<_>>();

    g.throughput(Throughput::Elements(n_lookups as _)); // Lookups per second

    // Replaying the LFSR from its seed yields values known to be present.
    g.bench_function(BenchmarkId::new(format!("{n_values}_values_hits"), n_lookups), |b| {
        b.iter_batched(
            Lfsr::default,
            |mut rand| {
                for _ in 0..n_lookups {
                    assert!(t.contains(&rand.next()));
                }
            },
            BatchSize::SmallInput,
        )
    });

    // Continuing the LFSR yields values not yet inserted.
    g.bench_function(BenchmarkId::new(format!("{n_values}_values_misses"), n_lookups), |b| {
        b.iter_batched(
            || rand.clone(),
            |mut rand| {
                let mut any_hit = false;
                for _ in 0..n_lookups {
                    any_hit |= black_box(t.contains(&rand.next()));
                }
                assert!(!any_hit)
            },
            BatchSize::SmallInput,
        )
    });
}
