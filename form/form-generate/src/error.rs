//! Error types for form generation.

use form_lattice::LatticeError;
use thiserror::Error;

/// Result type for generation operations.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Errors from invalid generation configuration.
///
/// Data conditions such as degenerate seeds or exhausted enumeration are
/// not errors; they are reported in the generated form's metadata.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum GenerateError {
    /// The lattice parameters were rejected.
    #[error("invalid lattice: {0}")]
    Lattice(#[from] LatticeError),

    /// Face cycle bounds are empty or outside `3..=12`.
    #[error("invalid face cycle bounds: min {min}, max {max} (must satisfy 3 <= min <= max <= 12)")]
    InvalidCycleBounds {
        /// Requested minimum cycle length.
        min: usize,
        /// Requested maximum cycle length.
        max: usize,
    },

    /// Visibility ray parameters must be finite and non-negative.
    #[error("invalid visibility parameters: offset {offset}, bias {bias}")]
    InvalidVisibility {
        /// Centroid offset along the normal.
        offset: f64,
        /// Minimum hit distance.
        bias: f64,
    },
}
