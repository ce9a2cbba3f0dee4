//! # Craft Test Utilities
//!
//! Shared testing utilities for all crates:
//! - Fixture builders for recipes, material lines and inventories
//! - Property-based testing strategies for engine inputs

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod strategies;

/// Re-export proptest for convenience.
pub use proptest;
