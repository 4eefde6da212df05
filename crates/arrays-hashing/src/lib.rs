//! arrays-hashing - Strategy variants for the arrays-and-hashing exercises
//!
//! This crate provides:
//! - Two sum: brute-force pair scan and one-pass complement lookup
//! - Contains duplicate: seen-set, set-size and sorted-scan detectors
//! - Valid anagram: frequency maps and a fixed-size counting array
//! - Demo and parallel batch workflows that drive any strategy

pub mod constants;
pub mod domain;
pub mod app;

// Re-export commonly used types
pub use constants::*;
pub use domain::anagram::{AnagramStrategy, is_anagram};
pub use domain::contains_duplicate::{DuplicateStrategy, contains_duplicate};
pub use domain::input::InputError;
pub use domain::two_sum::{IndexPair, TwoSumStrategy, two_sum};
