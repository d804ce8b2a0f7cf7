//! Benchmark for sequential versus parallel bulk application.
//!
//! Each element is run through a CPU-bound arity function so that the
//! parallel path has enough work per element to amortize rayon's
//! scheduling overhead. A trivial function is included as well to show the
//! break-even point.
//!
//! Requires the `rayon` feature to be enabled.

use arity_fn::function::{ArityFn, PairFn, TripletFn, UnitFn};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rayon::prelude::*;
use std::collections::HashMap;
use std::hint::black_box;

/// Mixes the input through 64 rounds of rotate/xor/add.
#[inline(never)]
fn mix(input: u64) -> u64 {
    let mut state = [input, 0x6a09_e667_bb67_ae85, 0x3c6e_f372_a54f_f53a, 0x510e_527f_9b05_688c];

    for round in 0..64_u64 {
        let t1 = state[3]
            .wrapping_add(state[1].rotate_right(6) ^ state[1].rotate_right(11))
            .wrapping_add(round);
        let t2 = state[0].rotate_right(2) ^ state[0].rotate_right(13);

        state[3] = state[2];
        state[2] = state[1];
        state[1] = state[0].wrapping_add(t1);
        state[0] = t1.wrapping_add(t2);
    }

    state[0] ^ state[1] ^ state[2] ^ state[3]
}

// =============================================================================
// UnitFn::seq / UnitFn::par
// =============================================================================

fn benchmark_unit_heavy(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unit_fn_heavy");
    group.sample_size(50);

    let hash = UnitFn::new(mix);

    for size in [10_000_u64, 100_000] {
        let inputs: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("seq", size), &size, |bencher, _| {
            bencher.iter(|| {
                let result: Vec<u64> = hash.seq(inputs.iter().copied()).collect();
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("par", size), &size, |bencher, _| {
            bencher.iter(|| {
                let result: Vec<u64> = hash.par(inputs.par_iter().copied()).collect();
                black_box(result)
            });
        });
    }

    group.finish();
}

fn benchmark_unit_trivial(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unit_fn_trivial");

    let double = UnitFn::new(|x: u64| x.wrapping_mul(2));
    let inputs: Vec<u64> = (0..100_000).collect();

    group.bench_function("seq", |bencher| {
        bencher.iter(|| {
            let result: Vec<u64> = double.seq(inputs.iter().copied()).collect();
            black_box(result)
        });
    });

    group.bench_function("par", |bencher| {
        bencher.iter(|| {
            let result: Vec<u64> = double.par(inputs.par_iter().copied()).collect();
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// PairFn over key/value entries
// =============================================================================

fn benchmark_pair_entries(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pair_fn_entries");
    group.sample_size(50);

    let combine = PairFn::new(|key: u64, value: u64| mix(key ^ value));

    for size in [10_000_u64, 100_000] {
        let entries: HashMap<u64, u64> = (0..size).map(|key| (key, key * 7)).collect();

        group.bench_with_input(BenchmarkId::new("seq", size), &size, |bencher, _| {
            bencher.iter(|| {
                let total = combine
                    .seq(entries.iter().map(|(&key, &value)| (key, value)))
                    .fold(0_u64, u64::wrapping_add);
                black_box(total)
            });
        });

        group.bench_with_input(BenchmarkId::new("par", size), &size, |bencher, _| {
            bencher.iter(|| {
                let total = combine
                    .par(entries.par_iter().map(|(&key, &value)| (key, value)))
                    .reduce(|| 0, u64::wrapping_add);
                black_box(total)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Tuple collections and application forms
// =============================================================================

fn benchmark_triplet_tuples(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("triplet_fn_tuples");
    group.sample_size(50);

    let blend = TripletFn::new(|a: u64, b: u64, c: u64| mix(a.wrapping_add(b).wrapping_mul(c)));
    let tuples: Vec<(u64, u64, u64)> = (0..50_000).map(|x| (x, x + 1, x + 2)).collect();

    group.bench_function("seq_tuples", |bencher| {
        bencher.iter(|| {
            let result: Vec<u64> = blend.seq_tuples(tuples.iter().copied()).collect();
            black_box(result)
        });
    });

    group.bench_function("par_tuples", |bencher| {
        bencher.iter(|| {
            let result: Vec<u64> = blend.par_tuples(tuples.par_iter().copied()).collect();
            black_box(result)
        });
    });

    group.finish();
}

fn benchmark_application_forms(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("application_forms");

    let add = TripletFn::new(|a: u64, b: u64, c: u64| a.wrapping_add(b).wrapping_add(c));
    let curried = add.curry();
    let uncurried = add.uncurry();

    group.bench_function("apply", |bencher| {
        bencher.iter(|| black_box(add.apply(black_box(1), black_box(2), black_box(3))));
    });

    group.bench_function("curried", |bencher| {
        bencher.iter(|| black_box(curried.apply(black_box(1)).apply(black_box(2)).apply(black_box(3))));
    });

    group.bench_function("uncurried", |bencher| {
        bencher.iter(|| black_box(uncurried.apply(black_box((1, 2, 3)))));
    });

    group.bench_function("apply_array", |bencher| {
        bencher.iter(|| {
            black_box(add.apply_array([
                arity_fn::tuple::value(black_box(1_u64)),
                arity_fn::tuple::value(black_box(2_u64)),
                arity_fn::tuple::value(black_box(3_u64)),
            ]))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_unit_heavy,
    benchmark_unit_trivial,
    benchmark_pair_entries,
    benchmark_triplet_tuples,
    benchmark_application_forms,
);

criterion_main!(benches);
