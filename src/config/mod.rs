//! # Configuration Module
//!
//! Centralizes the engine's bounds and tuning constants. Values that
//! depend on each other live together in [`constants`] and the
//! relationships are enforced with compile-time assertions where the
//! invariant is expressible as a const.

pub mod constants;
pub use constants::*;
