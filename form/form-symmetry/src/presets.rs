//! Named point-group presets.

use std::f64::consts::{PI, TAU};
use std::fmt;

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::group::SymmetryGroup;
use crate::transform::Transform;

/// Golden ratio.
const PHI: f64 = 1.618_033_988_749_895;

/// The preset symmetry families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SymmetryFamily {
    /// Full octahedral group Oh (48 transforms, includes inversion).
    Cubic,
    /// Full tetrahedral group Td (24 transforms).
    Tetrahedral,
    /// Full icosahedral group Ih (120 transforms, includes inversion).
    Icosahedral,
}

impl SymmetryFamily {
    /// All presets in a stable order.
    pub const ALL: [Self; 3] = [Self::Cubic, Self::Tetrahedral, Self::Icosahedral];

    /// Parse a group key; `octahedral` is an alias of `cubic`.
    ///
    /// Keys are matched case-insensitively after trimming.
    ///
    /// # Example
    ///
    /// ```
    /// use form_symmetry::SymmetryFamily;
    ///
    /// assert_eq!(SymmetryFamily::from_key("Octahedral"), Some(SymmetryFamily::Cubic));
    /// assert_eq!(SymmetryFamily::from_key("dihedral"), None);
    /// ```
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "cubic" | "octahedral" => Some(Self::Cubic),
            "tetrahedral" => Some(Self::Tetrahedral),
            "icosahedral" => Some(Self::Icosahedral),
            _ => None,
        }
    }

    /// Canonical key, also used as the group label.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Cubic => "cubic",
            Self::Tetrahedral => "tetrahedral",
            Self::Icosahedral => "icosahedral",
        }
    }

    /// Expected number of transforms in the closed group.
    #[must_use]
    pub const fn order(self) -> usize {
        match self {
            Self::Cubic => 48,
            Self::Tetrahedral => 24,
            Self::Icosahedral => 120,
        }
    }

    /// Generator transforms for the family.
    #[must_use]
    pub fn generators(self) -> Vec<Transform> {
        let body_diagonal = Vector3::new(1.0, 1.0, 1.0);
        match self {
            Self::Cubic => vec![
                Transform::rotation(&Vector3::z(), PI / 2.0),
                Transform::rotation(&Vector3::x(), PI / 2.0),
                Transform::inversion(),
            ],
            Self::Tetrahedral => vec![
                Transform::rotation(&body_diagonal, TAU / 3.0),
                Transform::rotation(&Vector3::z(), PI),
                Transform::reflection(&Vector3::new(1.0, -1.0, 0.0)),
            ],
            Self::Icosahedral => vec![
                Transform::rotation(&body_diagonal, TAU / 3.0),
                Transform::rotation(&Vector3::z(), PI),
                // Five-fold axis through the icosahedron vertex (0, 1, phi)
                Transform::rotation(&Vector3::new(0.0, 1.0, PHI), TAU / 5.0),
                Transform::inversion(),
            ],
        }
    }

    /// Compute the closed group. Prefer [`SymmetryRegistry`](crate::SymmetryRegistry),
    /// which memoizes the result.
    #[must_use]
    pub fn build(self) -> SymmetryGroup {
        SymmetryGroup::closure(self.key(), &self.generators())
    }
}

impl fmt::Display for SymmetryFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
