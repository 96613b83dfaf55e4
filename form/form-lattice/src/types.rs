//! Core types for lattice generation.

use form_types::{POINT_EPSILON, Point3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Families of candidate point lattices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LatticeFamily {
    /// Evenly spaced cubic grid.
    #[default]
    Cartesian,

    /// Concentric shells of icosahedron, dodecahedron and cube directions.
    Icosahedral,

    /// Integer parity lattice (face-centred cubic arrangement).
    Tetrahedral,
}

impl LatticeFamily {
    /// Returns the name of this lattice family.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cartesian => "Cartesian",
            Self::Icosahedral => "Icosahedral",
            Self::Tetrahedral => "Tetrahedral",
        }
    }
}

/// Structural subsets of the tetrahedral lattice's bounding cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum TetrahedralSubset {
    /// Every parity point.
    #[default]
    Full,
    /// The eight cube corners.
    Corners,
    /// The six cube face centres.
    FaceCenters,
    /// The twelve cube edge midpoints.
    EdgeMidpoints,
    /// Corners, face centres and edge midpoints plus the origin.
    Structural,
}

impl TetrahedralSubset {
    /// Whether an integer lattice coordinate belongs to this subset.
    ///
    /// `bound` is the half-width of the bounding cube in lattice units.
    #[must_use]
    pub fn contains(self, coords: [i64; 3], bound: i64) -> bool {
        let on_boundary = coords.iter().filter(|c| c.abs() == bound).count();
        let at_zero = coords.iter().filter(|&&c| c == 0).count();
        match self {
            Self::Full => true,
            Self::Corners => on_boundary == 3,
            Self::FaceCenters => on_boundary == 1 && at_zero == 2,
            Self::EdgeMidpoints => on_boundary == 2 && at_zero == 1,
            Self::Structural => {
                at_zero == 3
                    || Self::Corners.contains(coords, bound)
                    || Self::FaceCenters.contains(coords, bound)
                    || Self::EdgeMidpoints.contains(coords, bound)
            }
        }
    }
}

/// A finite candidate point set centred on the origin.
///
/// Points are pairwise further apart than [`POINT_EPSILON`] and are emitted
/// in a deterministic order.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    family: LatticeFamily,
    extent: f64,
    density: u32,
    points: Vec<Point3<f64>>,
}

impl Lattice {
    pub(crate) fn new(family: LatticeFamily, extent: f64, density: u32, points: Vec<Point3<f64>>) -> Self {
        Self {
            family,
            extent,
            density,
            points,
        }
    }

    /// Family that produced the lattice.
    #[must_use]
    pub const fn family(&self) -> LatticeFamily {
        self.family
    }

    /// Full width of the lattice.
    #[must_use]
    pub const fn extent(&self) -> f64 {
        self.extent
    }

    /// Density the lattice was generated with.
    #[must_use]
    pub const fn density(&self) -> u32 {
        self.density
    }

    /// All points.
    #[must_use]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Get a point by index.
    #[must_use]
    pub fn point(&self, index: u32) -> Option<&Point3<f64>> {
        self.points.get(index as usize)
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the lattice has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Indices of points at distance `radius` (within [`POINT_EPSILON`]) from
    /// the point at `index`, ascending.
    ///
    /// Returns an empty list if `index` is out of range.
    #[must_use]
    pub fn points_at_distance(&self, index: u32, radius: f64) -> Vec<u32> {
        let Some(center) = self.point(index) else {
            return Vec::new();
        };
        self.points
            .iter()
            .enumerate()
            .filter(|&(i, p)| i != index as usize && ((p - center).norm() - radius).abs() <= POINT_EPSILON)
            .filter_map(|(i, _)| u32::try_from(i).ok())
            .collect()
    }

    /// Distinct non-zero distances from the point at `index` to every other
    /// point, ascending and merged by [`POINT_EPSILON`].
    #[must_use]
    pub fn distinct_distances_from(&self, index: u32) -> Vec<f64> {
        let Some(center) = self.point(index) else {
            return Vec::new();
        };
        let mut distances: Vec<f64> = self
            .points
            .iter()
            .map(|p| (p - center).norm())
            .filter(|&d| d > POINT_EPSILON)
            .collect();
        distances.sort_by(f64::total_cmp);
        distances.dedup_by(|a, b| (*a - *b).abs() <= POINT_EPSILON);
        distances
    }
}
