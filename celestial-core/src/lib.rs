//! Shared building blocks for the celestial time crates.
//!
//! - [`constants`]: epochs, day lengths and unit conversions used across crates.
//! - [`math`]: floating-point helpers that keep two-part Julian Dates exact.

pub mod constants;
pub mod math;
