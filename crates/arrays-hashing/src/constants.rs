//! Shared constants and the literal demo inputs of each exercise

// =============================================================================
// Anagram parameters
// =============================================================================

/// Number of slots in the lowercase counting array (`a..=z`)
pub const ALPHABET_SIZE: usize = 26;

// =============================================================================
// Demo inputs
// =============================================================================

/// Two sum demo cases: (nums, target)
pub const TWO_SUM_DEMO_CASES: [(&[i64], i64); 3] = [
    (&[2, 7, 11, 15], 9),
    (&[3, 2, 4], 6),
    (&[3, 3], 6),
];

/// Contains duplicate demo cases
pub const CONTAINS_DUPLICATE_DEMO_CASES: [&[i64]; 3] = [
    &[1, 2, 3, 1],
    &[1, 2, 3, 4],
    &[1, 1, 1, 3, 3, 4, 3, 2, 4, 2],
];

/// Valid anagram demo cases: (s, t)
pub const ANAGRAM_DEMO_CASES: [(&str, &str); 2] = [("anagram", "nagaram"), ("rat", "car")];
