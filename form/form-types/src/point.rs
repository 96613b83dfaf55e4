//! Point storage with epsilon merging.

use nalgebra::Point3;

/// Distance below which two points are treated as the same lattice point.
///
/// Used by the lattice generators, the orbit expander and document import.
/// Supported lattice spacings are several orders of magnitude larger.
pub const POINT_EPSILON: f64 = 1e-4;

/// Scale applied before rounding coordinates into a [`PointKey`].
const KEY_SCALE: f64 = 1e4;

/// Quantised coordinate triple used for canonical, hashable point keys.
pub type PointKey = [i64; 3];

/// Quantise a point into an integer key.
///
/// Points closer than [`POINT_EPSILON`] usually share a key, but keys are only
/// used for ordering and canonical signatures, never for merging.
///
/// # Example
///
/// ```
/// use form_types::{Point3, point_key};
///
/// assert_eq!(point_key(&Point3::new(0.5, -0.25, 0.0)), [5000, -2500, 0]);
/// ```
#[must_use]
pub fn point_key(p: &Point3<f64>) -> PointKey {
    [quantize(p.x), quantize(p.y), quantize(p.z)]
}

#[allow(clippy::cast_possible_truncation)]
// Truncation: lattice coordinates are bounded far below i64 range after scaling
fn quantize(v: f64) -> i64 {
    (v * KEY_SCALE).round() as i64
}

/// Check whether two points coincide within [`POINT_EPSILON`].
#[inline]
#[must_use]
pub fn points_coincide(a: &Point3<f64>, b: &Point3<f64>) -> bool {
    (a - b).norm_squared() < POINT_EPSILON * POINT_EPSILON
}

/// An ordered point list in which no two points are closer than epsilon.
///
/// Insertion goes through [`PointSet::find_or_insert`], which scans the
/// existing points linearly and returns the index of a coincident point if
/// there is one. Indices are stable: points are never removed or reordered.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: Vec<Point3<f64>>,
}

impl PointSet {
    /// Create an empty point set.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create an empty point set with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Build a point set from arbitrary points, merging coincident ones.
    ///
    /// # Example
    ///
    /// ```
    /// use form_types::{Point3, PointSet};
    ///
    /// let set = PointSet::from_points([
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(0.00001, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    /// ]);
    /// assert_eq!(set.len(), 2);
    /// ```
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Point3<f64>>) -> Self {
        let mut set = Self::new();
        for p in points {
            set.find_or_insert(p);
        }
        set
    }

    /// Find the index of a point within epsilon of `p`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: point indices are u32 throughout the crate family
    pub fn find(&self, p: &Point3<f64>) -> Option<u32> {
        self.points
            .iter()
            .position(|q| points_coincide(p, q))
            .map(|i| i as u32)
    }

    /// Return the index of a point within epsilon of `p`, appending `p` if
    /// no such point exists.
    #[allow(clippy::cast_possible_truncation)]
    pub fn find_or_insert(&mut self, p: Point3<f64>) -> u32 {
        if let Some(index) = self.find(&p) {
            return index;
        }
        self.points.push(p);
        (self.points.len() - 1) as u32
    }

    /// Get a point by index.
    #[must_use]
    pub fn get(&self, index: u32) -> Option<&Point3<f64>> {
        self.points.get(index as usize)
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Borrow the points in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Consume the set and return the point list.
    #[must_use]
    pub fn into_vec(self) -> Vec<Point3<f64>> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_or_insert_merges_close_points() {
        let mut set = PointSet::new();
        let a = set.find_or_insert(Point3::new(1.0, 2.0, 3.0));
        let b = set.find_or_insert(Point3::new(1.0 + 1e-6, 2.0, 3.0 - 1e-6));
        let c = set.find_or_insert(Point3::new(1.0, 2.0, 4.0));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn find_missing_point() {
        let set = PointSet::from_points([Point3::origin()]);
        assert_eq!(set.find(&Point3::new(0.0, 0.0, 0.01)), None);
        assert_eq!(set.find(&Point3::new(0.0, 0.0, 0.00001)), Some(0));
    }

    #[test]
    fn indices_are_stable() {
        let mut set = PointSet::new();
        for i in 0..5 {
            let idx = set.find_or_insert(Point3::new(f64::from(i), 0.0, 0.0));
            assert_eq!(idx, i as u32);
        }
        assert_eq!(set.find_or_insert(Point3::new(2.0, 0.0, 0.0)), 2);
    }

    #[test]
    fn point_key_rounds_noise() {
        let a = point_key(&Point3::new(0.5, 0.5, -0.5));
        let b = point_key(&Point3::new(0.500_000_000_1, 0.499_999_999_9, -0.5));
        assert_eq!(a, b);
    }

    #[test]
    fn point_key_has_no_negative_zero() {
        assert_eq!(point_key(&Point3::new(-0.0, -1e-9, 0.0)), [0, 0, 0]);
    }

    #[test]
    fn coincide_threshold() {
        let a = Point3::origin();
        assert!(points_coincide(&a, &Point3::new(5e-5, 0.0, 0.0)));
        assert!(!points_coincide(&a, &Point3::new(2e-4, 0.0, 0.0)));
    }
}
