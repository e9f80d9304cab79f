//! # Config Crate
//!
//! Centralized configuration constants for the vector shape mesh pipeline.
//! All magic numbers and tunable parameters are defined here so the sampler,
//! simplifier, triangulator and builder agree on the same tolerances.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{simplification_tolerance, DEFAULT_SIMPLIFICATION_THRESHOLD};
//!
//! // Map the user-facing threshold into a cosine tolerance
//! let tolerance = simplification_tolerance(DEFAULT_SIMPLIFICATION_THRESHOLD);
//! assert!(tolerance > 0.99 && tolerance < 1.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Unit-Dependent**: Distance thresholds are in world units
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
