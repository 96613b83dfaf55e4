//! Lattice generation parameters.

use form_types::POINT_EPSILON;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::LatticeError;
use crate::types::{LatticeFamily, TetrahedralSubset};

/// Largest supported density for any family.
pub const MAX_DENSITY: u32 = 64;

/// Shortest chord between distinct unit shell directions.
const SHELL_MIN_CHORD: f64 = 0.64;

/// Configuration parameters for lattice generation.
///
/// Use the builder methods to configure the lattice, or use one of the
/// preset constructors like [`LatticeParams::cartesian`].
///
/// # Examples
///
/// ```
/// use form_lattice::{LatticeParams, TetrahedralSubset};
///
/// // 3x3x3 grid spanning [-1, 1] on each axis
/// let params = LatticeParams::cartesian(2.0, 2);
///
/// // Bounding-cube skeleton of the parity lattice
/// let params = LatticeParams::tetrahedral(2.0, 1)
///     .with_tetrahedral_subset(TetrahedralSubset::Structural);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatticeParams {
    /// Full width of the lattice; points span `[-extent/2, extent/2]`.
    pub extent: f64,

    /// Steps per axis (Cartesian), shell count (icosahedral) or half the
    /// parity lattice's integer range (tetrahedral).
    pub density: u32,

    /// Which lattice to build.
    pub family: LatticeFamily,

    /// Subset of the tetrahedral lattice to keep; ignored by other families.
    pub tetrahedral_subset: TetrahedralSubset,
}

impl Default for LatticeParams {
    fn default() -> Self {
        Self {
            extent: 2.0,
            density: 2,
            family: LatticeFamily::Cartesian,
            tetrahedral_subset: TetrahedralSubset::Full,
        }
    }
}

impl LatticeParams {
    /// Creates a new `LatticeParams` with default values.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_lattice::LatticeParams;
    ///
    /// let params = LatticeParams::new();
    /// assert_eq!(params.density, 2);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates parameters for a Cartesian grid.
    #[must_use]
    pub fn cartesian(extent: f64, density: u32) -> Self {
        Self {
            extent,
            density,
            family: LatticeFamily::Cartesian,
            ..Default::default()
        }
    }

    /// Creates parameters for concentric icosahedral shells.
    #[must_use]
    pub fn icosahedral(extent: f64, density: u32) -> Self {
        Self {
            extent,
            density,
            family: LatticeFamily::Icosahedral,
            ..Default::default()
        }
    }

    /// Creates parameters for the full tetrahedral parity lattice.
    #[must_use]
    pub fn tetrahedral(extent: f64, density: u32) -> Self {
        Self {
            extent,
            density,
            family: LatticeFamily::Tetrahedral,
            ..Default::default()
        }
    }

    /// Sets the extent.
    #[must_use]
    pub const fn with_extent(mut self, extent: f64) -> Self {
        self.extent = extent;
        self
    }

    /// Sets the density.
    #[must_use]
    pub const fn with_density(mut self, density: u32) -> Self {
        self.density = density;
        self
    }

    /// Sets the lattice family.
    #[must_use]
    pub const fn with_family(mut self, family: LatticeFamily) -> Self {
        self.family = family;
        self
    }

    /// Sets the tetrahedral subset.
    #[must_use]
    pub const fn with_tetrahedral_subset(mut self, subset: TetrahedralSubset) -> Self {
        self.tetrahedral_subset = subset;
        self
    }

    /// Smallest distance between two distinct points of the lattice these
    /// parameters describe.
    #[must_use]
    pub fn min_spacing(&self) -> f64 {
        let density = f64::from(self.density.max(1));
        match self.family {
            LatticeFamily::Cartesian => self.extent / density,
            LatticeFamily::Icosahedral => self.extent / (2.0 * density) * SHELL_MIN_CHORD,
            LatticeFamily::Tetrahedral => self.extent / (4.0 * density) * std::f64::consts::SQRT_2,
        }
    }

    /// Validates the parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or an error describing
    /// the first invalid parameter.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError`] if the extent is not positive and finite,
    /// the density is out of range, or the spacing would collapse distinct
    /// points under the merge tolerance.
    pub fn validate(&self) -> Result<(), LatticeError> {
        if !self.extent.is_finite() || self.extent <= 0.0 {
            return Err(LatticeError::InvalidExtent(self.extent));
        }

        if self.density == 0 || self.density > MAX_DENSITY {
            return Err(LatticeError::InvalidDensity {
                density: self.density,
                max: MAX_DENSITY,
            });
        }

        let spacing = self.min_spacing();
        if spacing <= POINT_EPSILON {
            return Err(LatticeError::SpacingTooSmall {
                spacing,
                tolerance: POINT_EPSILON,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = LatticeParams::default();
        assert_eq!(params.family, LatticeFamily::Cartesian);
        assert!((params.extent - 2.0).abs() < f64::EPSILON);
        assert_eq!(params.density, 2);
        assert_eq!(params.tetrahedral_subset, TetrahedralSubset::Full);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let params = LatticeParams::new()
            .with_extent(4.0)
            .with_density(3)
            .with_family(LatticeFamily::Tetrahedral)
            .with_tetrahedral_subset(TetrahedralSubset::Corners);
        assert!((params.extent - 4.0).abs() < f64::EPSILON);
        assert_eq!(params.density, 3);
        assert_eq!(params.family, LatticeFamily::Tetrahedral);
        assert_eq!(params.tetrahedral_subset, TetrahedralSubset::Corners);
    }

    #[test]
    fn test_validate_extent() {
        for extent in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                LatticeParams::cartesian(extent, 2).validate(),
                Err(LatticeError::InvalidExtent(_))
            ));
        }
    }

    #[test]
    fn test_validate_density() {
        assert!(matches!(
            LatticeParams::cartesian(2.0, 0).validate(),
            Err(LatticeError::InvalidDensity { density: 0, .. })
        ));
        assert!(LatticeParams::cartesian(2.0, MAX_DENSITY + 1).validate().is_err());
        assert!(LatticeParams::cartesian(2.0, MAX_DENSITY).validate().is_ok());
    }

    #[test]
    fn test_validate_spacing() {
        let params = LatticeParams::icosahedral(1e-3, 8);
        assert!(matches!(
            params.validate(),
            Err(LatticeError::SpacingTooSmall { .. })
        ));
    }
}
