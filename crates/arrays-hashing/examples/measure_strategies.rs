//! Strategy timing report
//!
//! Times every strategy of each exercise on one large generated input and
//! prints a short table. Use the criterion bench for statistically sound numbers.
//!
//! ## Usage
//!
//! ```powershell
//! cargo run --example measure_strategies -p arrays-hashing --release
//! ```
//!
//! ## Sample output
//!
//! ```text
//! [two sum] n = 20,000
//!   brute-force          182.113ms  [19998, 19999]
//!   complement-map         0.611ms  [19998, 19999]
//! ```

use std::time::Instant;

use arrays_hashing::app::demo::format_pair;
use arrays_hashing::{AnagramStrategy, DuplicateStrategy, TwoSumStrategy};
use rand::Rng;
use rand::seq::SliceRandom;

const SIZE: usize = 20_000;

fn main() {
    let mut rng = rand::thread_rng();

    // Two sum: distinct even values, the only odd sum is the last pair
    let mut nums: Vec<i64> = (0..SIZE as i64).map(|v| v * 2).collect();
    nums[SIZE - 1] = 1;
    let target = nums[SIZE - 2] + 1;

    println!("[two sum] n = {}", format_count(SIZE));
    for &strategy in TwoSumStrategy::ALL {
        let start = Instant::now();
        let result = strategy.solve(&nums, target);
        println!(
            "  {:<20} {:>10.3}ms  {}",
            strategy.name(),
            start.elapsed().as_secs_f64() * 1000.0,
            format_pair(result)
        );
    }

    // Contains duplicate: a permutation, so there is no repeat to exit on
    let mut values: Vec<i64> = (0..SIZE as i64).collect();
    values.shuffle(&mut rng);

    println!();
    println!("[contains duplicate] n = {}", format_count(SIZE));
    for &strategy in DuplicateStrategy::ALL {
        let start = Instant::now();
        let result = strategy.solve(&values);
        println!(
            "  {:<20} {:>10.3}ms  {}",
            strategy.name(),
            start.elapsed().as_secs_f64() * 1000.0,
            result
        );
    }

    // Valid anagram: a random word and its shuffle
    let s: String = (0..SIZE)
        .map(|_| (b'a' + rng.gen_range(0..26u8)) as char)
        .collect();
    let mut chars: Vec<char> = s.chars().collect();
    chars.shuffle(&mut rng);
    let t: String = chars.into_iter().collect();

    println!();
    println!("[valid anagram] n = {}", format_count(SIZE));
    for &strategy in AnagramStrategy::ALL {
        let start = Instant::now();
        let result = strategy.solve(&s, &t);
        println!(
            "  {:<20} {:>10.3}ms  {}",
            strategy.name(),
            start.elapsed().as_secs_f64() * 1000.0,
            result
        );
    }
}

fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
