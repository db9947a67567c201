use std::hint::black_box;
use std::time::{Duration, Instant};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use partition_sort::{SortParams, all_params, driver, sort_all};

const BENCH_SIZES: [usize; 3] = [1024, 4096, 8192];

#[derive(Clone, Copy)]
enum Distribution {
    Descending,
    RandomUniform,
    FewDistinct,
}

impl Distribution {
    fn label(self) -> &'static str {
        match self {
            Self::Descending => "descending",
            Self::RandomUniform => "random_uniform",
            Self::FewDistinct => "few_distinct",
        }
    }
}

const DISTRIBUTIONS: [Distribution; 3] = [
    Distribution::Descending,
    Distribution::RandomUniform,
    Distribution::FewDistinct,
];

fn bench_partition_sort(c: &mut Criterion) {
    for &dist in &DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("partition_sort/{}", dist.label()));

        for &size in &BENCH_SIZES {
            bench::apply_runtime_for_len(&mut group, size);
            let base = generate_dataset(dist, size);

            for params in all_params() {
                group.bench_function(BenchmarkId::new(params.name(), size), |bencher| {
                    bencher.iter_custom(|iters| time_sort(&params, &base, iters));
                });
            }

            group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = Instant::now();
                        data.sort_unstable();
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });
        }

        group.finish();
    }
}

fn time_sort(params: &SortParams, base: &[i32], iters: u64) -> Duration {
    let mut total = Duration::ZERO;
    for _ in 0..iters {
        let mut data = base.to_vec();
        let start = Instant::now();
        let stats = sort_all(params, &mut data);
        total += start.elapsed();
        black_box((&data, stats));
    }
    total
}

fn generate_dataset(dist: Distribution, size: usize) -> Vec<i32> {
    let mut rng = bench::default_rng();
    match dist {
        Distribution::Descending => driver::descending(size),
        Distribution::RandomUniform => bench::random_i32s(&mut rng, size),
        Distribution::FewDistinct => bench::few_distinct_i32s(&mut rng, size, 16),
    }
}

criterion_group!(benches, bench_partition_sort);
criterion_main!(benches);
