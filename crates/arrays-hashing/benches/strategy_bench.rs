//! Strategy benchmarks
//!
//! Compares every strategy of each exercise on the same generated inputs.
//!
//! ```powershell
//! cargo bench -p arrays-hashing --bench strategy_bench
//! ```

use std::time::Duration;

use arrays_hashing::{AnagramStrategy, DuplicateStrategy, TwoSumStrategy};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SEED: u64 = 42;
const SIZES: [usize; 3] = [16, 256, 4096];

fn ci_criterion() -> Criterion {
    Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(3))
}

/// Distinct values whose only matching pair sits at the end (worst case)
fn two_sum_input(size: usize) -> (Vec<i64>, i64) {
    let mut nums: Vec<i64> = (0..size as i64).map(|v| v * 2).collect();
    let last = nums.len() - 1;
    nums[last] = 1;
    let target = nums[last - 1] + 1;
    (nums, target)
}

fn bench_two_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_sum");

    for size in SIZES {
        let (nums, target) = two_sum_input(size);
        for &strategy in TwoSumStrategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), size), &nums, |b, nums| {
                b.iter(|| strategy.solve(black_box(nums), black_box(target)))
            });
        }
    }

    group.finish();
}

fn bench_contains_duplicate(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains_duplicate");
    let mut rng = StdRng::seed_from_u64(SEED);

    for size in SIZES {
        // No repeats, so early-exit strategies scan everything
        let mut nums: Vec<i64> = (0..size as i64).collect();
        nums.shuffle(&mut rng);

        for &strategy in DuplicateStrategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), size), &nums, |b, nums| {
                b.iter(|| strategy.solve(black_box(nums.as_slice())))
            });
        }
    }

    group.finish();
}

fn bench_anagram(c: &mut Criterion) {
    let mut group = c.benchmark_group("valid_anagram");
    let mut rng = StdRng::seed_from_u64(SEED);

    for size in SIZES {
        let s: String = (0..size)
            .map(|_| (b'a' + rng.gen_range(0..26u8)) as char)
            .collect();
        let mut chars: Vec<char> = s.chars().collect();
        chars.shuffle(&mut rng);
        let t: String = chars.into_iter().collect();

        for &strategy in AnagramStrategy::ALL {
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), size),
                &(s.as_str(), t.as_str()),
                |b, &(s, t)| b.iter(|| strategy.solve(black_box(s), black_box(t))),
            );
        }
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = ci_criterion();
    targets =
        bench_two_sum,
        bench_contains_duplicate,
        bench_anagram,
}

criterion_main!(benches);
