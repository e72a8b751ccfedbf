// ============================================================================
// Conversion Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Conversion core - decompose / compose / radix-product scan in isolation
// 2. Value assignment - set_value under each overflow policy
//
// The core is O(positions); the groups sweep the position count to show the
// linear scaling.
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mixed_radix::numeric::{compose, decompose, radix_products};
use mixed_radix::prelude::*;

// ============================================================================
// Conversion Core Benchmarks
// ============================================================================

fn benchmark_conversion_core(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    for positions in [4usize, 16, 64].iter() {
        // Bases cycle through 2..=10 so products grow realistically
        let radix: Vec<u64> = (0..*positions).map(|i| 2 + (i as u64 % 9)).collect();
        let magnitude = u64::MAX / 3;

        group.bench_with_input(
            BenchmarkId::new("decompose", positions),
            &radix,
            |b, radix| {
                b.iter(|| black_box(decompose(black_box(magnitude), radix)));
            },
        );

        let products = radix_products(&radix);
        let digits = decompose(magnitude, &radix);
        group.bench_with_input(
            BenchmarkId::new("compose", positions),
            &(&digits, &products),
            |b, (digits, products)| {
                b.iter(|| black_box(compose(digits, &products[1..]).unwrap()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("radix_products", positions),
            &radix,
            |b, radix| {
                b.iter(|| black_box(radix_products(radix)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Value Assignment Benchmarks
// Each policy's range check runs on every assignment
// ============================================================================

fn benchmark_value_assignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_value");

    for policy in [
        OverflowPolicy::Relaxed,
        OverflowPolicy::Modular,
        OverflowPolicy::Warning,
        OverflowPolicy::Halt,
    ] {
        let mut number = MixedRadixBuilder::new([24, 60, 60])
            .overflow_policy(policy)
            .build()
            .unwrap();

        group.bench_function(BenchmarkId::new("in_range", policy.as_str()), |b| {
            b.iter(|| {
                number.set_value(black_box(43_210)).unwrap();
                black_box(number.value())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_conversion_core, benchmark_value_assignment);
criterion_main!(benches);
