//! Application layer - Workflows over the solution functions
//!
//! This module drives the domain strategies over demo cases and input batches.

pub mod batch;
pub mod demo;
