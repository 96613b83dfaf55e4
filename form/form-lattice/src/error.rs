//! Error types for lattice generation.

use thiserror::Error;

/// Errors that can occur during lattice generation.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum LatticeError {
    /// The extent is zero, negative or not finite.
    #[error("lattice extent must be positive and finite, got {0}")]
    InvalidExtent(f64),

    /// The density is zero or above the supported maximum.
    #[error("lattice density must be in range [1, {max}], got {density}")]
    InvalidDensity {
        /// The provided density.
        density: u32,
        /// Largest supported density.
        max: u32,
    },

    /// Neighbouring lattice points would be merged by the point tolerance.
    #[error("lattice spacing {spacing} is not larger than the point tolerance {tolerance}")]
    SpacingTooSmall {
        /// Smallest distance between distinct lattice points.
        spacing: f64,
        /// Point merge tolerance.
        tolerance: f64,
    },
}
