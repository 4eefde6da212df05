//! Demo workflow
//!
//! Runs a strategy over literal inputs and writes `Test N` followed by the
//! result for each case, the output the command-line drivers show.

use crate::constants::{ANAGRAM_DEMO_CASES, CONTAINS_DUPLICATE_DEMO_CASES, TWO_SUM_DEMO_CASES};
use crate::domain::anagram::AnagramStrategy;
use crate::domain::contains_duplicate::DuplicateStrategy;
use crate::domain::two_sum::{IndexPair, TwoSumStrategy};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Format a two sum result the way the drivers print it: `[i, j]` or `[]`
pub fn format_pair(pair: Option<IndexPair>) -> String {
    match pair {
        Some((i, j)) => format!("[{}, {}]", i, j),
        None => "[]".to_string(),
    }
}

fn write_case<W: Write>(
    out: &mut W,
    index: usize,
    result: &str,
    strategy: &str,
    elapsed: Option<Duration>,
) -> io::Result<()> {
    writeln!(out, "Test {}", index + 1)?;
    match elapsed {
        Some(elapsed) => writeln!(out, "{}  ({}, {:?})", result, strategy, elapsed),
        None => writeln!(out, "{}", result),
    }
}

/// Run two sum over `cases`, writing each result
///
/// When `timed` is set, the elapsed time of each call is appended.
pub fn run_two_sum_cases<W: Write, N: AsRef<[i64]>>(
    out: &mut W,
    strategy: TwoSumStrategy,
    cases: &[(N, i64)],
    timed: bool,
) -> io::Result<Vec<Option<IndexPair>>> {
    let mut results = Vec::with_capacity(cases.len());

    for (index, (nums, target)) in cases.iter().enumerate() {
        let start = Instant::now();
        let result = strategy.solve(nums.as_ref(), *target);
        let elapsed = timed.then(|| start.elapsed());

        write_case(out, index, &format_pair(result), strategy.name(), elapsed)?;
        results.push(result);
    }

    Ok(results)
}

/// Run contains duplicate over `cases`, writing each result
pub fn run_contains_duplicate_cases<W: Write, V: AsRef<[i64]>>(
    out: &mut W,
    strategy: DuplicateStrategy,
    cases: &[V],
    timed: bool,
) -> io::Result<Vec<bool>> {
    let mut results = Vec::with_capacity(cases.len());

    for (index, values) in cases.iter().enumerate() {
        let start = Instant::now();
        let result = strategy.solve(values.as_ref());
        let elapsed = timed.then(|| start.elapsed());

        write_case(out, index, &result.to_string(), strategy.name(), elapsed)?;
        results.push(result);
    }

    Ok(results)
}

/// Run valid anagram over `cases`, writing each result
pub fn run_anagram_cases<W: Write, S: AsRef<str>>(
    out: &mut W,
    strategy: AnagramStrategy,
    cases: &[(S, S)],
    timed: bool,
) -> io::Result<Vec<bool>> {
    let mut results = Vec::with_capacity(cases.len());

    for (index, (s, t)) in cases.iter().enumerate() {
        let start = Instant::now();
        let result = strategy.solve(s.as_ref(), t.as_ref());
        let elapsed = timed.then(|| start.elapsed());

        write_case(out, index, &result.to_string(), strategy.name(), elapsed)?;
        results.push(result);
    }

    Ok(results)
}

/// Run two sum over its built-in demo inputs
pub fn run_two_sum_demo<W: Write>(
    out: &mut W,
    strategy: TwoSumStrategy,
    timed: bool,
) -> io::Result<Vec<Option<IndexPair>>> {
    run_two_sum_cases(out, strategy, &TWO_SUM_DEMO_CASES, timed)
}

/// Run contains duplicate over its built-in demo inputs
pub fn run_contains_duplicate_demo<W: Write>(
    out: &mut W,
    strategy: DuplicateStrategy,
    timed: bool,
) -> io::Result<Vec<bool>> {
    run_contains_duplicate_cases(out, strategy, &CONTAINS_DUPLICATE_DEMO_CASES, timed)
}

/// Run valid anagram over its built-in demo inputs
pub fn run_anagram_demo<W: Write>(
    out: &mut W,
    strategy: AnagramStrategy,
    timed: bool,
) -> io::Result<Vec<bool>> {
    run_anagram_cases(out, strategy, &ANAGRAM_DEMO_CASES, timed)
}
