use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use avl_tree::AvlTree;

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    order: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}_n_values", v.order), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_random(&mut g, n_values);
        bench_ascending(&mut g, n_values);
        bench_descending(&mut g, n_values);
    }
}

/// Generate an insert benchmark measuring the time needed to add `n_values`
/// values (in the order produced by `$values`) to an empty tree.
macro_rules! insert_bench {
    (
        $name:ident,
        $values:expr
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    order: stringify!($name),
                    n_values,
                };

                g.throughput(Throughput::Elements(n_values as _)); // Keys inserted per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter_batched(
                        AvlTree::<u16>::default,
                        |mut t| {
                            for v in ($values)(n_values) {
                                t.add(v).unwrap();
                            }
                            t
                        },
                        criterion::BatchSize::PerIteration,
                    );
                });
            }
        }
    };
}

insert_bench!(random, |n| {
    let mut rand = Lfsr::default();
    (0..n).map(move |_| rand.next())
});
insert_bench!(ascending, |n| 0..n as u16);
insert_bench!(descending, |n| (0..n as u16).rev());
