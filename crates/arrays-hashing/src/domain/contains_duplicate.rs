//! Duplicate detector (contains duplicate)

use crate::domain::input::{InputError, unknown_strategy};
use std::collections::HashSet;
use std::hash::Hash;
use std::str::FromStr;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashSet;

/// Incremental seen-set with early exit on the first repeat
pub fn contains_duplicate_seen_set<T: Eq + Hash>(values: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    for value in values {
        if !seen.insert(value) {
            return true;
        }
    }
    false
}

/// Collect every value into a set and compare sizes
///
/// Never exits early; always hashes the whole input.
pub fn contains_duplicate_set_size<T: Eq + Hash>(values: &[T]) -> bool {
    values.iter().collect::<HashSet<_>>().len() != values.len()
}

/// Seen-set over `FxHashSet`
#[cfg(feature = "fx-hash")]
pub fn contains_duplicate_seen_fx_set<T: Eq + Hash>(values: &[T]) -> bool {
    let mut seen = FxHashSet::with_capacity_and_hasher(values.len(), Default::default());
    for value in values {
        if !seen.insert(value) {
            return true;
        }
    }
    false
}

/// Sort a copy of the references and scan adjacent pairs
///
/// O(n log n) time without hashing; the input is left untouched.
pub fn contains_duplicate_sorted_scan<T: Ord>(values: &[T]) -> bool {
    let mut sorted: Vec<&T> = values.iter().collect();
    sorted.sort_unstable();
    sorted.windows(2).any(|pair| pair[0] == pair[1])
}

// =============================================================================
// Strategy selection
// =============================================================================

/// Available contains duplicate implementations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DuplicateStrategy {
    /// `HashSet` with early exit
    #[cfg_attr(not(feature = "fx-hash"), default)]
    SeenSet,
    /// Set size against input length
    SetSize,
    /// `FxHashSet` with early exit
    #[cfg(feature = "fx-hash")]
    #[default]
    SeenFxSet,
    /// Sort and compare neighbours
    SortedScan,
}

impl DuplicateStrategy {
    /// Every strategy compiled into this build
    #[cfg(feature = "fx-hash")]
    pub const ALL: &'static [DuplicateStrategy] = &[
        Self::SeenSet,
        Self::SetSize,
        Self::SeenFxSet,
        Self::SortedScan,
    ];

    /// Every strategy compiled into this build
    #[cfg(not(feature = "fx-hash"))]
    pub const ALL: &'static [DuplicateStrategy] =
        &[Self::SeenSet, Self::SetSize, Self::SortedScan];

    /// Command-line name of the strategy
    pub fn name(self) -> &'static str {
        match self {
            Self::SeenSet => "seen-set",
            Self::SetSize => "set-size",
            #[cfg(feature = "fx-hash")]
            Self::SeenFxSet => "seen-fx-set",
            Self::SortedScan => "sorted-scan",
        }
    }

    /// Run this strategy
    pub fn solve<T: Eq + Hash + Ord>(self, values: &[T]) -> bool {
        match self {
            Self::SeenSet => contains_duplicate_seen_set(values),
            Self::SetSize => contains_duplicate_set_size(values),
            #[cfg(feature = "fx-hash")]
            Self::SeenFxSet => contains_duplicate_seen_fx_set(values),
            Self::SortedScan => contains_duplicate_sorted_scan(values),
        }
    }
}

impl FromStr for DuplicateStrategy {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|st| st.name()).collect();
                unknown_strategy("contains duplicate", s, &names)
            })
    }
}

/// Report whether any value repeats, using the default strategy
pub fn contains_duplicate<T: Eq + Hash + Ord>(values: &[T]) -> bool {
    DuplicateStrategy::default().solve(values)
}
