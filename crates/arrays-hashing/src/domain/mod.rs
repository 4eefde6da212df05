//! Domain layer - Pure solution functions
//!
//! Every function here is deterministic and side-effect free.

pub mod anagram;
pub mod contains_duplicate;
pub mod input;
pub mod two_sum;
