//! Polygonal faces and plane fitting.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::edge::{Edge, edge_key};

/// Maximum distance of a face vertex from the face plane.
pub const PLANARITY_EPSILON: f64 = 1e-4;

/// Relative threshold below which two edge vectors count as parallel.
const COLLINEAR_TOLERANCE: f64 = 1e-6;

/// An ordered cycle of at least three distinct point indices.
///
/// Consecutive indices (and the last/first pair) are the cycle's edges.
/// Faces produced by detection are additionally coplanar and elementary, but
/// this type only enforces the structural invariants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    indices: Vec<u32>,
}

impl Face {
    /// Create a face from an index cycle.
    ///
    /// Returns `None` if there are fewer than three indices or any index
    /// repeats.
    ///
    /// # Example
    ///
    /// ```
    /// use form_types::Face;
    ///
    /// assert!(Face::new(vec![0, 1, 2, 3]).is_some());
    /// assert!(Face::new(vec![0, 1]).is_none());
    /// assert!(Face::new(vec![0, 1, 0]).is_none());
    /// ```
    #[must_use]
    pub fn new(indices: Vec<u32>) -> Option<Self> {
        if indices.len() < 3 {
            return None;
        }
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        if sorted.windows(2).any(|w| w[0] == w[1]) {
            return None;
        }
        Some(Self { indices })
    }

    /// The index cycle in winding order.
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices (equal to the number of edges).
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always false; a face has at least three vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate over the canonical keys of the cycle's edges.
    pub fn edge_keys(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let n = self.indices.len();
        (0..n).map(move |i| edge_key(self.indices[i], self.indices[(i + 1) % n]))
    }

    /// Iterate over the cycle's edges.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edge_keys().filter_map(|(a, b)| Edge::new(a, b))
    }

    /// The sorted index tuple, used as an order-independent dedup key.
    #[must_use]
    pub fn sorted_key(&self) -> Vec<u32> {
        let mut key = self.indices.clone();
        key.sort_unstable();
        key
    }

    /// Fan triangulation from the first vertex.
    pub fn fan_triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        let first = self.indices[0];
        self.indices
            .windows(2)
            .skip(1)
            .map(move |w| [first, w[0], w[1]])
    }

    /// Resolve the vertex positions, or `None` if an index is out of range.
    #[must_use]
    pub fn positions(&self, points: &[Point3<f64>]) -> Option<Vec<Point3<f64>>> {
        self.indices
            .iter()
            .map(|&i| points.get(i as usize).copied())
            .collect()
    }

    /// Arithmetic mean of the vertex positions.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn centroid(&self, points: &[Point3<f64>]) -> Option<Point3<f64>> {
        let positions = self.positions(points)?;
        let sum = positions
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.coords);
        Some(Point3::from(sum / positions.len() as f64))
    }

    /// Unit normal from the first vertex and the first non-collinear pair of
    /// following vertices.
    #[must_use]
    pub fn normal(&self, points: &[Point3<f64>]) -> Option<Vector3<f64>> {
        fit_plane(&self.positions(points)?).map(|plane| plane.normal)
    }

    /// Plane through the face, if the face is not degenerate.
    #[must_use]
    pub fn plane(&self, points: &[Point3<f64>]) -> Option<Plane> {
        fit_plane(&self.positions(points)?)
    }
}

/// A plane `normal · p = offset` with a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plane {
    /// Unit normal.
    pub normal: Vector3<f64>,
    /// Signed distance of the plane from the origin along `normal`.
    pub offset: f64,
}

impl Plane {
    /// Create a plane through `point` with the given normal.
    ///
    /// Returns `None` if the normal has zero length.
    #[must_use]
    pub fn from_point_normal(point: &Point3<f64>, normal: &Vector3<f64>) -> Option<Self> {
        let normal = normal.try_normalize(f64::EPSILON)?;
        Some(Self {
            normal,
            offset: normal.dot(&point.coords),
        })
    }

    /// Signed distance of `p` from the plane.
    #[inline]
    #[must_use]
    pub fn signed_distance(&self, p: &Point3<f64>) -> f64 {
        self.normal.dot(&p.coords) - self.offset
    }

    /// Whether `p` lies within `epsilon` of the plane.
    #[inline]
    #[must_use]
    pub fn contains(&self, p: &Point3<f64>, epsilon: f64) -> bool {
        self.signed_distance(p).abs() <= epsilon
    }
}

/// Fit a plane through a polygon using the cross product of two independent
/// edge vectors from the first point.
///
/// Returns `None` if fewer than three points are given or all points are
/// collinear.
///
/// # Example
///
/// ```
/// use form_types::{Point3, fit_plane};
///
/// let square = [
///     Point3::new(0.0, 0.0, 1.0),
///     Point3::new(1.0, 0.0, 1.0),
///     Point3::new(1.0, 1.0, 1.0),
///     Point3::new(0.0, 1.0, 1.0),
/// ];
/// let plane = fit_plane(&square).unwrap();
/// assert!((plane.normal.z.abs() - 1.0).abs() < 1e-12);
/// assert!((plane.offset.abs() - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn fit_plane(points: &[Point3<f64>]) -> Option<Plane> {
    let (origin, rest) = points.split_first()?;
    let (second, rest) = rest.split_first()?;
    let u = second - origin;

    for p in rest {
        let v = p - origin;
        let n = u.cross(&v);
        if n.norm() > COLLINEAR_TOLERANCE * u.norm() * v.norm() {
            return Plane::from_point_normal(origin, &n);
        }
    }
    None
}

/// Check that all points lie within `epsilon` of a common plane.
///
/// Collinear or degenerate point sets are not planar polygons and return
/// false.
#[must_use]
pub fn is_planar(points: &[Point3<f64>], epsilon: f64) -> bool {
    fit_plane(points).is_some_and(|plane| points.iter().all(|p| plane.contains(p, epsilon)))
}
