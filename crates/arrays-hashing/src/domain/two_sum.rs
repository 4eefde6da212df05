//! Pair-sum finder (two sum)
//!
//! Given a sequence of integers and a target, find the indices of two
//! distinct elements that add up to the target.

use crate::domain::input::{InputError, unknown_strategy};
use std::collections::HashMap;
use std::str::FromStr;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap;

/// Indices `(i, j)` of the matching pair, always with `i < j`
pub type IndexPair = (usize, usize);

/// Exhaustive pairwise scan
///
/// Returns the first pair in `(i, j)` lexicographic order. O(n²) time, O(1) space.
pub fn two_sum_brute_force(nums: &[i64], target: i64) -> Option<IndexPair> {
    for i in 0..nums.len() {
        for j in (i + 1)..nums.len() {
            if nums[i].checked_add(nums[j]) == Some(target) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Single-pass complement lookup using a value→index map
///
/// For each element, checks whether `target - element` has already been seen.
/// O(n) average time, O(n) space.
pub fn two_sum_complement_map(nums: &[i64], target: i64) -> Option<IndexPair> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (j, &x) in nums.iter().enumerate() {
        // A complement outside i64 range cannot be in the map
        if let Some(complement) = target.checked_sub(x)
            && let Some(&i) = seen.get(&complement)
        {
            return Some((i, j));
        }
        seen.insert(x, j);
    }

    None
}

/// Single-pass complement lookup over `FxHashMap`
#[cfg(feature = "fx-hash")]
pub fn two_sum_complement_fx_map(nums: &[i64], target: i64) -> Option<IndexPair> {
    let mut seen: FxHashMap<i64, usize> =
        FxHashMap::with_capacity_and_hasher(nums.len(), Default::default());

    for (j, &x) in nums.iter().enumerate() {
        if let Some(complement) = target.checked_sub(x)
            && let Some(&i) = seen.get(&complement)
        {
            return Some((i, j));
        }
        seen.insert(x, j);
    }

    None
}

// =============================================================================
// Strategy selection
// =============================================================================

/// Available two sum implementations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TwoSumStrategy {
    /// Quadratic pairwise scan
    BruteForce,
    /// Linear complement lookup with `std::collections::HashMap`
    #[cfg_attr(not(feature = "fx-hash"), default)]
    ComplementMap,
    /// Linear complement lookup with `FxHashMap`
    #[cfg(feature = "fx-hash")]
    #[default]
    ComplementFxMap,
}

impl TwoSumStrategy {
    /// Every strategy compiled into this build
    #[cfg(feature = "fx-hash")]
    pub const ALL: &'static [TwoSumStrategy] =
        &[Self::BruteForce, Self::ComplementMap, Self::ComplementFxMap];

    /// Every strategy compiled into this build
    #[cfg(not(feature = "fx-hash"))]
    pub const ALL: &'static [TwoSumStrategy] = &[Self::BruteForce, Self::ComplementMap];

    /// Command-line name of the strategy
    pub fn name(self) -> &'static str {
        match self {
            Self::BruteForce => "brute-force",
            Self::ComplementMap => "complement-map",
            #[cfg(feature = "fx-hash")]
            Self::ComplementFxMap => "complement-fx-map",
        }
    }

    /// Run this strategy
    pub fn solve(self, nums: &[i64], target: i64) -> Option<IndexPair> {
        match self {
            Self::BruteForce => two_sum_brute_force(nums, target),
            Self::ComplementMap => two_sum_complement_map(nums, target),
            #[cfg(feature = "fx-hash")]
            Self::ComplementFxMap => two_sum_complement_fx_map(nums, target),
        }
    }
}

impl FromStr for TwoSumStrategy {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|st| st.name()).collect();
                unknown_strategy("two sum", s, &names)
            })
    }
}

/// Find a pair summing to `target` with the default strategy
pub fn two_sum(nums: &[i64], target: i64) -> Option<IndexPair> {
    TwoSumStrategy::default().solve(nums, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_cases_all_strategies() {
        for &strategy in TwoSumStrategy::ALL {
            assert_eq!(strategy.solve(&[2, 7, 11, 15], 9), Some((0, 1)), "{:?}", strategy);
            assert_eq!(strategy.solve(&[3, 2, 4], 6), Some((1, 2)), "{:?}", strategy);
            assert_eq!(strategy.solve(&[3, 3], 6), Some((0, 1)), "{:?}", strategy);
        }
    }

    #[test]
    fn test_no_pair() {
        for &strategy in TwoSumStrategy::ALL {
            assert_eq!(strategy.solve(&[1, 2, 3], 100), None);
        }
    }

    #[test]
    fn test_empty_and_single() {
        for &strategy in TwoSumStrategy::ALL {
            assert_eq!(strategy.solve(&[], 0), None);
            // An element must not pair with itself
            assert_eq!(strategy.solve(&[5], 10), None);
        }
    }

    #[test]
    fn test_element_not_reused() {
        // 3 + 3 = 6 but there is only one 3
        for &strategy in TwoSumStrategy::ALL {
            assert_eq!(strategy.solve(&[3, 2, 4], 6), Some((1, 2)));
        }
    }

    #[test]
    fn test_negative_values() {
        for &strategy in TwoSumStrategy::ALL {
            assert_eq!(strategy.solve(&[-3, 4, 3, 90], 0), Some((0, 2)));
        }
    }

    #[test]
    fn test_overflow_does_not_panic() {
        let nums = [i64::MAX, 1, i64::MIN, -1];
        for &strategy in TwoSumStrategy::ALL {
            assert_eq!(strategy.solve(&nums, i64::MAX - 1), Some((0, 3)));
            assert_eq!(strategy.solve(&nums, i64::MIN + 1), Some((1, 2)));
        }
        assert_eq!(two_sum_complement_map(&[i64::MIN], i64::MAX), None);
    }

    #[test]
    fn test_strategies_may_pick_different_valid_pairs() {
        // (0, 3) and (1, 2) both sum to 6
        let nums = [1, 3, 3, 5];
        assert_eq!(two_sum_brute_force(&nums, 6), Some((0, 3)));
        assert_eq!(two_sum_complement_map(&nums, 6), Some((1, 2)));
    }

    #[test]
    fn test_map_keeps_latest_index() {
        // 1 at index 0 is overwritten by 1 at index 2 before 3 arrives
        assert_eq!(two_sum_complement_map(&[1, 5, 1, 3], 4), Some((2, 3)));
        assert_eq!(two_sum_brute_force(&[1, 5, 1, 3], 4), Some((0, 3)));
    }

    #[test]
    fn test_strategy_names_roundtrip() {
        for &strategy in TwoSumStrategy::ALL {
            assert_eq!(strategy.name().parse::<TwoSumStrategy>(), Ok(strategy));
        }
        assert!(matches!(
            "fastest".parse::<TwoSumStrategy>(),
            Err(InputError::UnknownStrategy { .. })
        ));
    }

    #[test]
    fn test_default_strategy_is_linear() {
        assert_ne!(TwoSumStrategy::default(), TwoSumStrategy::BruteForce);
        assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
    }
}
