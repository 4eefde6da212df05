//! Anagram tester (valid anagram)
//!
//! Two strings are anagrams when they hold the same multiset of characters.
//! Every strategy first compares byte lengths: equal character multisets always
//! encode to the same number of UTF-8 bytes, so a length mismatch is a cheap reject.

use crate::constants::ALPHABET_SIZE;
use crate::domain::input::{InputError, unknown_strategy};
use std::collections::HashMap;
use std::str::FromStr;

/// Build one frequency map per string and compare them
pub fn is_anagram_two_maps(s: &str, t: &str) -> bool {
    if s.len() != t.len() {
        return false;
    }

    let mut counts_s: HashMap<char, usize> = HashMap::new();
    let mut counts_t: HashMap<char, usize> = HashMap::new();

    for c in s.chars() {
        *counts_s.entry(c).or_insert(0) += 1;
    }
    for c in t.chars() {
        *counts_t.entry(c).or_insert(0) += 1;
    }

    counts_s == counts_t
}

/// Accumulate signed counts in one map; all net counts must be zero
pub fn is_anagram_signed_map(s: &str, t: &str) -> bool {
    if s.len() != t.len() {
        return false;
    }

    let mut net: HashMap<char, i64> = HashMap::new();
    for c in s.chars() {
        *net.entry(c).or_insert(0) += 1;
    }
    for c in t.chars() {
        *net.entry(c).or_insert(0) -= 1;
    }

    net.values().all(|&count| count == 0)
}

/// Signed counting array over the 26 lowercase ASCII letters
///
/// Input containing anything outside `a..=z` is handed to
/// [`is_anagram_signed_map`].
pub fn is_anagram_counting_array(s: &str, t: &str) -> bool {
    if s.len() != t.len() {
        return false;
    }
    if !is_lowercase_ascii(s) || !is_lowercase_ascii(t) {
        return is_anagram_signed_map(s, t);
    }

    let mut counts = [0i32; ALPHABET_SIZE];
    for b in s.bytes() {
        counts[(b - b'a') as usize] += 1;
    }
    for b in t.bytes() {
        counts[(b - b'a') as usize] -= 1;
    }

    counts.iter().all(|&count| count == 0)
}

/// Count `s`, then consume the counts with `t`, failing on the first shortfall
///
/// With equal lengths, no shortfall means every count ends at exactly zero.
pub fn is_anagram_decrementing_map(s: &str, t: &str) -> bool {
    if s.len() != t.len() {
        return false;
    }

    let mut remaining: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *remaining.entry(c).or_insert(0) += 1;
    }

    for c in t.chars() {
        match remaining.get_mut(&c) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }

    true
}

fn is_lowercase_ascii(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_lowercase())
}

// =============================================================================
// Strategy selection
// =============================================================================

/// Available valid anagram implementations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AnagramStrategy {
    /// Two frequency maps compared for equality
    TwoMaps,
    /// One map of signed net counts
    SignedMap,
    /// Fixed `[i32; 26]` counting array
    #[default]
    CountingArray,
    /// One map, decremented with early exit
    DecrementingMap,
}

impl AnagramStrategy {
    /// Every strategy
    pub const ALL: &'static [AnagramStrategy] = &[
        Self::TwoMaps,
        Self::SignedMap,
        Self::CountingArray,
        Self::DecrementingMap,
    ];

    /// Command-line name of the strategy
    pub fn name(self) -> &'static str {
        match self {
            Self::TwoMaps => "two-maps",
            Self::SignedMap => "signed-map",
            Self::CountingArray => "counting-array",
            Self::DecrementingMap => "decrementing-map",
        }
    }

    /// Run this strategy
    pub fn solve(self, s: &str, t: &str) -> bool {
        match self {
            Self::TwoMaps => is_anagram_two_maps(s, t),
            Self::SignedMap => is_anagram_signed_map(s, t),
            Self::CountingArray => is_anagram_counting_array(s, t),
            Self::DecrementingMap => is_anagram_decrementing_map(s, t),
        }
    }
}

impl FromStr for AnagramStrategy {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|st| st.name()).collect();
                unknown_strategy("valid anagram", s, &names)
            })
    }
}

/// Report whether `t` is a permutation of `s`, using the default strategy
pub fn is_anagram(s: &str, t: &str) -> bool {
    AnagramStrategy::default().solve(s, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_cases_all_strategies() {
        for &strategy in AnagramStrategy::ALL {
            assert!(strategy.solve("anagram", "nagaram"), "{:?}", strategy);
            assert!(!strategy.solve("rat", "car"), "{:?}", strategy);
        }
    }

    #[test]
    fn test_length_mismatch() {
        for &strategy in AnagramStrategy::ALL {
            assert!(!strategy.solve("ab", "abb"));
            assert!(!strategy.solve("abb", "ab"));
            assert!(!strategy.solve("", "a"));
        }
    }

    #[test]
    fn test_empty_strings() {
        for &strategy in AnagramStrategy::ALL {
            assert!(strategy.solve("", ""));
        }
    }

    #[test]
    fn test_same_letters_different_counts() {
        for &strategy in AnagramStrategy::ALL {
            assert!(!strategy.solve("aab", "abb"), "{:?}", strategy);
            assert!(!strategy.solve("abb", "aab"), "{:?}", strategy);
        }
    }

    #[test]
    fn test_symmetric() {
        let pairs = [("listen", "silent"), ("abc", "abd"), ("aacc", "ccac"), ("", "")];
        for &strategy in AnagramStrategy::ALL {
            for (s, t) in pairs {
                assert_eq!(strategy.solve(s, t), strategy.solve(t, s), "{:?}", strategy);
            }
        }
    }

    #[test]
    fn test_counting_array_falls_back_outside_lowercase() {
        assert!(is_anagram_counting_array("Dormitory", "ytirDomor"));
        assert!(!is_anagram_counting_array("Aa", "aa"));
        assert!(is_anagram_counting_array("a b!", "!b a"));
    }

    #[test]
    fn test_unicode_scalar_values() {
        for &strategy in AnagramStrategy::ALL {
            assert!(strategy.solve("résumé", "émésur"), "{:?}", strategy);
            assert!(!strategy.solve("résumé", "resume"), "{:?}", strategy);
            assert!(strategy.solve("日本語", "語日本"), "{:?}", strategy);
        }
    }

    #[test]
    fn test_strategy_names_roundtrip() {
        for &strategy in AnagramStrategy::ALL {
            assert_eq!(strategy.name().parse::<AnagramStrategy>(), Ok(strategy));
        }
        assert!("sorting".parse::<AnagramStrategy>().is_err());
    }
}
