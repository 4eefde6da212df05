//! Parallel batch evaluation
//!
//! Each case is still solved by one single-threaded call; rayon only spreads
//! independent cases across threads. Result order always matches input order.

use crate::domain::anagram::AnagramStrategy;
use crate::domain::contains_duplicate::DuplicateStrategy;
use crate::domain::two_sum::{IndexPair, TwoSumStrategy};
use rayon::prelude::*;

/// Check that `pair` is a valid two sum answer for `nums` and `target`
pub fn is_valid_pair(nums: &[i64], target: i64, pair: IndexPair) -> bool {
    let (i, j) = pair;
    i < j && j < nums.len() && nums[i].checked_add(nums[j]) == Some(target)
}

/// Solve every two sum case with `strategy` in parallel
pub fn two_sum_batch<N>(cases: &[(N, i64)], strategy: TwoSumStrategy) -> Vec<Option<IndexPair>>
where
    N: AsRef<[i64]> + Sync,
{
    cases
        .par_iter()
        .map(|(nums, target)| strategy.solve(nums.as_ref(), *target))
        .collect()
}

/// Solve every contains duplicate case with `strategy` in parallel
pub fn contains_duplicate_batch<V>(cases: &[V], strategy: DuplicateStrategy) -> Vec<bool>
where
    V: AsRef<[i64]> + Sync,
{
    cases
        .par_iter()
        .map(|values| strategy.solve(values.as_ref()))
        .collect()
}

/// Solve every valid anagram case with `strategy` in parallel
pub fn anagram_batch<S>(cases: &[(S, S)], strategy: AnagramStrategy) -> Vec<bool>
where
    S: AsRef<str> + Sync,
{
    cases
        .par_iter()
        .map(|(s, t)| strategy.solve(s.as_ref(), t.as_ref()))
        .collect()
}

// =============================================================================
// Cross-checks
// =============================================================================

/// Indices of two sum cases where the strategies disagree
///
/// Strategies may legitimately return different pairs, so a case is flagged
/// when they disagree on whether a pair exists or any returned pair is invalid.
pub fn cross_check_two_sum<N>(cases: &[(N, i64)]) -> Vec<usize>
where
    N: AsRef<[i64]> + Sync,
{
    cases
        .par_iter()
        .enumerate()
        .filter(|(_, (nums, target))| {
            let nums = nums.as_ref();
            let results: Vec<Option<IndexPair>> = TwoSumStrategy::ALL
                .iter()
                .map(|strategy| strategy.solve(nums, *target))
                .collect();

            let found = results[0].is_some();
            results.iter().any(|result| match result {
                Some(pair) => !found || !is_valid_pair(nums, *target, *pair),
                None => found,
            })
        })
        .map(|(index, _)| index)
        .collect()
}

/// Indices of contains duplicate cases where the strategies disagree
pub fn cross_check_contains_duplicate<V>(cases: &[V]) -> Vec<usize>
where
    V: AsRef<[i64]> + Sync,
{
    cases
        .par_iter()
        .enumerate()
        .filter(|(_, values)| {
            let values = values.as_ref();
            let first = DuplicateStrategy::ALL[0].solve(values);
            DuplicateStrategy::ALL[1..]
                .iter()
                .any(|strategy| strategy.solve(values) != first)
        })
        .map(|(index, _)| index)
        .collect()
}

/// Indices of valid anagram cases where the strategies disagree
///
/// Both argument orders are evaluated, so an asymmetric answer is also flagged.
pub fn cross_check_anagram<S>(cases: &[(S, S)]) -> Vec<usize>
where
    S: AsRef<str> + Sync,
{
    cases
        .par_iter()
        .enumerate()
        .filter(|(_, (s, t))| {
            let (s, t) = (s.as_ref(), t.as_ref());
            let first = AnagramStrategy::ALL[0].solve(s, t);
            AnagramStrategy::ALL
                .iter()
                .any(|strategy| strategy.solve(s, t) != first || strategy.solve(t, s) != first)
        })
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_pair() {
        let nums = [2, 7, 11, 15];
        assert!(is_valid_pair(&nums, 9, (0, 1)));
        assert!(!is_valid_pair(&nums, 9, (1, 0)));
        assert!(!is_valid_pair(&nums, 9, (0, 0)));
        assert!(!is_valid_pair(&nums, 9, (0, 4)));
        assert!(!is_valid_pair(&nums, 10, (0, 1)));
    }

    #[test]
    fn test_two_sum_batch_preserves_order() {
        let cases: Vec<(Vec<i64>, i64)> = (10..210)
            .map(|k| (vec![k, 1, 2, 1000], k + 1000))
            .collect();

        let results = two_sum_batch(&cases, TwoSumStrategy::ComplementMap);

        assert_eq!(results.len(), cases.len());
        for result in results {
            assert_eq!(result, Some((0, 3)));
        }
    }

    #[test]
    fn test_contains_duplicate_batch() {
        let cases: Vec<Vec<i64>> = vec![vec![1, 2, 3, 1], vec![1, 2, 3, 4], vec![]];
        assert_eq!(
            contains_duplicate_batch(&cases, DuplicateStrategy::SortedScan),
            vec![true, false, false]
        );
    }

    #[test]
    fn test_anagram_batch() {
        let cases = [("anagram", "nagaram"), ("rat", "car"), ("", "")];
        assert_eq!(
            anagram_batch(&cases, AnagramStrategy::DecrementingMap),
            vec![true, false, true]
        );
    }

    #[test]
    fn test_cross_checks_agree_on_demo_inputs() {
        let two_sum_cases: [(Vec<i64>, i64); 3] =
            [(vec![2, 7, 11, 15], 9), (vec![1, 3, 3, 5], 6), (vec![1], 2)];
        assert!(cross_check_two_sum(&two_sum_cases).is_empty());

        let duplicate_cases: [Vec<i64>; 2] =
            [vec![1, 1, 1, 3, 3, 4, 3, 2, 4, 2], vec![5, 6]];
        assert!(cross_check_contains_duplicate(&duplicate_cases).is_empty());

        let anagram_cases = [("listen", "silent"), ("Aa", "aA"), ("ab", "a")];
        assert!(cross_check_anagram(&anagram_cases).is_empty());
    }
}
