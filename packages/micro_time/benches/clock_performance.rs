//! Benchmark comparing `micro_time::Clock` reads with `std::time::Instant::now()`.

#![expect(missing_docs, reason = "benchmarks do not require API documentation")]

use std::hint::black_box;
use std::time::Instant;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use micro_time::Clock;

/// Benchmark group comparing elapsed-time capture performance.
fn elapsed_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("elapsed_capture");

    let std_start = Instant::now();
    let clock = Clock::new();

    group.bench_with_input(BenchmarkId::new("std_instant", "elapsed"), &(), |b, ()| {
        b.iter(|| {
            let elapsed = black_box(std_start.elapsed());
            black_box(elapsed);
        });
    });

    group.bench_with_input(
        BenchmarkId::new("micro_time_clock", "elapsed"),
        &(),
        |b, ()| {
            b.iter(|| {
                let elapsed = black_box(clock.elapsed());
                black_box(elapsed);
            });
        },
    );

    group.finish();
}

criterion_group!(benches, elapsed_comparison);
criterion_main!(benches);
