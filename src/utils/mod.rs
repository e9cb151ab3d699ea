//! Utility functions shared across the crate.
//!
//! - [`normalizer`] - Identifier normalization (whitespace stripping, zero padding)

pub mod normalizer;
