//! Benchmark for deferred computations: IO and IOEither.
//!
//! Measures construction-plus-run cost of chains and the cost of
//! short-circuiting on an early failure.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use io_either::effect::{Failure, IO, IOEither};
use std::hint::black_box;

// =============================================================================
// IO Benchmarks
// =============================================================================

fn benchmark_io_flat_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_flat_map_chain");

    for depth in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut io = IO::pure(0_i64);
                for _ in 0..depth {
                    io = io.flat_map(|x| IO::pure(x + 1));
                }
                black_box(io.run_unsafe())
            });
        });
    }

    group.finish();
}

// =============================================================================
// IOEither Benchmarks
// =============================================================================

fn success_chain(depth: usize) -> IOEither<i64> {
    let mut computation = IOEither::pure(0_i64);
    for _ in 0..depth {
        computation = computation.flat_map(|x| IOEither::pure(x + 1));
    }
    computation
}

fn benchmark_io_either_success_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_either_success_chain");

    for depth in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::new("build_and_run", depth), &depth, |bencher, &depth| {
            bencher.iter(|| black_box(success_chain(depth).run()));
        });

        let prebuilt = success_chain(depth);
        group.bench_with_input(BenchmarkId::new("rerun", depth), &depth, |bencher, _| {
            bencher.iter(|| black_box(prebuilt.run()));
        });
    }

    group.finish();
}

fn benchmark_io_either_short_circuit(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_either_short_circuit");

    for depth in [10, 100] {
        let mut computation: IOEither<i64> = IOEither::throw(Failure::new("early"));
        for _ in 0..depth {
            computation = computation.flat_map(|x| IOEither::pure(x + 1));
        }

        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |bencher, _| {
            bencher.iter(|| black_box(computation.run()));
        });
    }

    group.finish();
}

fn benchmark_io_either_traverse(criterion: &mut Criterion) {
    let items: Vec<i64> = (0..100).collect();
    let computation: IOEither<Vec<i64>> = IOEither::traverse(items, |n| IOEither::pure(n * 2));

    criterion.bench_function("io_either_traverse_100", |bencher| {
        bencher.iter(|| black_box(computation.run()));
    });
}

criterion_group!(
    benches,
    benchmark_io_flat_map_chain,
    benchmark_io_either_success_chain,
    benchmark_io_either_short_circuit,
    benchmark_io_either_traverse
);
criterion_main!(benches);
