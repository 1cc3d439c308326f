use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use list_set_bench::bench::run_trial;
use list_set_bench::config::BenchConfig;
use list_set_bench::workload::populate;
use list_set_bench::{ConcurrentSet, Discipline};

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");
    for discipline in Discipline::ALL {
        let set = discipline.new_set::<u32>();
        populate(&*set);
        group.bench_with_input(
            BenchmarkId::from_parameter(discipline.label()),
            &set,
            |b, set| {
                let mut key = 0u32;
                b.iter(|| {
                    // Walks hits and misses across the seeded range and a little beyond it.
                    key = (key + 7) % 2_100;
                    black_box(set.contains(&key))
                })
            },
        );
    }
    group.finish();
}

fn bench_trials(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_heavy_trial");
    group.sample_size(10);
    let config = BenchConfig::new(10_000, 0x5eed);
    for discipline in Discipline::ALL {
        for threads in [1, 4] {
            group.bench_with_input(
                BenchmarkId::new(discipline.label(), threads),
                &threads,
                |b, &threads| b.iter(|| run_trial(discipline, threads, &config).unwrap()),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_contains, bench_trials);
criterion_main!(benches);
