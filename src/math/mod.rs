//! Mathematical utilities for the generator

/// Seeded random source and seed hashing
pub mod random;
