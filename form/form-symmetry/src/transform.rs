//! Affine symmetry transforms.

use nalgebra::{Matrix3, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Element-wise tolerance for transform equality.
pub const TRANSFORM_EPSILON: f64 = 1e-6;

/// Geometric classification of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TransformKind {
    /// Leaves every point fixed.
    Identity,
    /// Pure translation.
    Translation,
    /// Proper rotation about some axis.
    Rotation,
    /// Rotation combined with a translation along the rotation axis.
    Screw,
    /// Mirror in a plane.
    Reflection,
    /// Point reflection through the origin.
    Inversion,
    /// Rotation followed by reflection in the plane normal to the axis.
    Rotoreflection,
}

/// An affine map `p -> linear * p + translation`.
///
/// Transforms compose right-to-left: `a.compose(&b)` applies `b` first.
///
/// # Example
///
/// ```
/// use form_symmetry::Transform;
/// use nalgebra::{Point3, Vector3};
/// use std::f64::consts::FRAC_PI_2;
///
/// let quarter = Transform::rotation(&Vector3::z(), FRAC_PI_2);
/// let p = quarter.apply(&Point3::new(1.0, 0.0, 0.0));
/// assert!((p - Point3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
///
/// let half = quarter.compose(&quarter);
/// assert!(half.approx_eq(&Transform::rotation(&Vector3::z(), 2.0 * FRAC_PI_2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transform {
    linear: Matrix3<f64>,
    translation: Vector3<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Create a transform from its linear part and translation.
    #[must_use]
    pub const fn from_parts(linear: Matrix3<f64>, translation: Vector3<f64>) -> Self {
        Self {
            linear,
            translation,
        }
    }

    /// The identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self::from_parts(Matrix3::identity(), Vector3::zeros())
    }

    /// Translation by `offset`.
    #[must_use]
    pub fn translation(offset: Vector3<f64>) -> Self {
        Self::from_parts(Matrix3::identity(), offset)
    }

    /// Point reflection through the origin.
    #[must_use]
    pub fn inversion() -> Self {
        Self::from_parts(-Matrix3::identity(), Vector3::zeros())
    }

    /// Mirror in the plane through the origin with the given normal.
    ///
    /// Returns the identity if the normal is zero.
    #[must_use]
    pub fn reflection(normal: &Vector3<f64>) -> Self {
        let Some(n) = normal.try_normalize(f64::EPSILON) else {
            return Self::identity();
        };
        Self::from_parts(Matrix3::identity() - 2.0 * n * n.transpose(), Vector3::zeros())
    }

    /// Rotation by `angle` radians about an axis through the origin.
    ///
    /// Uses Rodrigues' rotation formula. Returns the identity if the axis is
    /// zero.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    // Single-char names: standard mathematical notation for rotation formula
    #[allow(clippy::suboptimal_flops)]
    pub fn rotation(axis: &Vector3<f64>, angle: f64) -> Self {
        let Some(axis) = axis.try_normalize(f64::EPSILON) else {
            return Self::identity();
        };
        let c = angle.cos();
        let s = angle.sin();
        let t = 1.0 - c;
        let (x, y, z) = (axis.x, axis.y, axis.z);

        #[rustfmt::skip]
        let linear = Matrix3::new(
            t*x*x + c,     t*x*y - s*z,   t*x*z + s*y,
            t*x*y + s*z,   t*y*y + c,     t*y*z - s*x,
            t*x*z - s*y,   t*y*z + s*x,   t*z*z + c,
        );
        Self::from_parts(linear, Vector3::zeros())
    }

    /// Rotation about `axis` followed by reflection in the plane normal to it.
    #[must_use]
    pub fn rotoreflection(axis: &Vector3<f64>, angle: f64) -> Self {
        Self::reflection(axis).compose(&Self::rotation(axis, angle))
    }

    /// Rotation about `axis` combined with a translation of `distance` along it.
    #[must_use]
    pub fn screw(axis: &Vector3<f64>, angle: f64, distance: f64) -> Self {
        let shift = axis
            .try_normalize(f64::EPSILON)
            .map_or_else(Vector3::zeros, |a| a * distance);
        Self::translation(shift).compose(&Self::rotation(axis, angle))
    }

    /// The 3x3 linear part.
    #[must_use]
    pub const fn linear(&self) -> &Matrix3<f64> {
        &self.linear
    }

    /// The translation part.
    #[must_use]
    pub const fn translation_part(&self) -> &Vector3<f64> {
        &self.translation
    }

    /// Apply the transform to a point.
    #[inline]
    #[must_use]
    pub fn apply(&self, p: &Point3<f64>) -> Point3<f64> {
        Point3::from(self.linear * p.coords + self.translation)
    }

    /// Compose `self ∘ other`: the result applies `other` first.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            linear: self.linear * other.linear,
            translation: self.linear * other.translation + self.translation,
        }
    }

    /// `self` composed with itself `n` times (`n = 0` gives the identity).
    #[must_use]
    pub fn power(&self, n: u32) -> Self {
        (0..n).fold(Self::identity(), |acc, _| acc.compose(self))
    }

    /// Element-wise comparison within [`TRANSFORM_EPSILON`].
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.linear
            .iter()
            .zip(other.linear.iter())
            .chain(self.translation.iter().zip(other.translation.iter()))
            .all(|(a, b)| (a - b).abs() <= TRANSFORM_EPSILON)
    }

    /// Whether the transform leaves every point fixed.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.approx_eq(&Self::identity())
    }

    /// Determinant of the linear part (+1 proper, -1 improper).
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.linear.determinant()
    }

    /// Classify the transform geometrically.
    ///
    /// Glide reflections are reported as reflections and rotations about an
    /// offset axis as rotations.
    #[must_use]
    pub fn classify(&self) -> TransformKind {
        let identity = Matrix3::identity();
        let translated = self.translation.norm() > TRANSFORM_EPSILON;

        if self.determinant() > 0.0 {
            if matrices_close(&self.linear, &identity) {
                return if translated {
                    TransformKind::Translation
                } else {
                    TransformKind::Identity
                };
            }
            let axis = rotation_axis(&self.linear);
            if axis.dot(&self.translation).abs() > TRANSFORM_EPSILON {
                TransformKind::Screw
            } else {
                TransformKind::Rotation
            }
        } else {
            let proper = -self.linear;
            if matrices_close(&proper, &identity) {
                TransformKind::Inversion
            } else if (proper.trace() + 1.0).abs() <= TRANSFORM_EPSILON {
                // The proper part is a half turn, so the map is a mirror.
                TransformKind::Reflection
            } else {
                TransformKind::Rotoreflection
            }
        }
    }
}

fn matrices_close(a: &Matrix3<f64>, b: &Matrix3<f64>) -> bool {
    a.iter()
        .zip(b.iter())
        .all(|(x, y)| (x - y).abs() <= TRANSFORM_EPSILON)
}

/// Unit axis of a proper rotation matrix.
fn rotation_axis(r: &Matrix3<f64>) -> Vector3<f64> {
    let skew = Vector3::new(r[(2, 1)] - r[(1, 2)], r[(0, 2)] - r[(2, 0)], r[(1, 0)] - r[(0, 1)]);
    if let Some(axis) = skew.try_normalize(TRANSFORM_EPSILON) {
        return axis;
    }
    // Half turn: columns of R + I are parallel to the axis.
    let sym = r + Matrix3::identity();
    sym.column_iter()
        .map(|c| c.into_owned())
        .max_by(|a, b| a.norm_squared().total_cmp(&b.norm_squared()))
        .and_then(|c| c.try_normalize(f64::EPSILON))
        .unwrap_or_else(Vector3::z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn identity_transformation() {
        let t = Transform::identity();
        let p = t.apply(&Point3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-10);
        assert_relative_eq!(p.z, 3.0, epsilon = 1e-10);
        assert_eq!(t.classify(), TransformKind::Identity);
    }

    #[test]
    fn rotation_z_90_degrees() {
        let t = Transform::rotation(&Vector3::z(), FRAC_PI_2);
        let p = t.apply(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-10);
        assert_eq!(t.classify(), TransformKind::Rotation);
    }

    #[test]
    fn rotation_zero_axis_returns_identity() {
        let t = Transform::rotation(&Vector3::zeros(), 1.0);
        assert!(t.is_identity());
    }

    #[test]
    fn reflection_flips_normal_component() {
        let t = Transform::reflection(&Vector3::new(0.0, 0.0, 2.0));
        let p = t.apply(&Point3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(p.z, -3.0, epsilon = 1e-10);
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-10);
        assert_eq!(t.classify(), TransformKind::Reflection);
    }

    #[test]
    fn inversion_negates() {
        let t = Transform::inversion();
        let p = t.apply(&Point3::new(1.0, -2.0, 3.0));
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-10);
        assert_eq!(t.classify(), TransformKind::Inversion);
    }

    #[test]
    fn rotoreflection_classified() {
        let t = Transform::rotoreflection(&Vector3::z(), FRAC_PI_2);
        let p = t.apply(&Point3::new(1.0, 0.0, 1.0));
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-10);
        assert_relative_eq!(p.z, -1.0, epsilon = 1e-10);
        assert_eq!(t.classify(), TransformKind::Rotoreflection);
        // S4 squared is a proper half turn
        assert_eq!(t.power(2).classify(), TransformKind::Rotation);
        assert!(t.power(4).is_identity());
    }

    #[test]
    fn screw_advances_along_axis() {
        let t = Transform::screw(&Vector3::z(), PI, 0.5);
        let p = t.apply(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, -1.0, epsilon = 1e-10);
        assert_relative_eq!(p.z, 0.5, epsilon = 1e-10);
        assert_eq!(t.classify(), TransformKind::Screw);
    }

    #[test]
    fn translation_classified() {
        let t = Transform::translation(Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(t.classify(), TransformKind::Translation);
        assert!(t.power(3).approx_eq(&Transform::translation(Vector3::new(0.0, 3.0, 0.0))));
    }

    #[test]
    fn composition_order() {
        // Reflect in x then translate along x, versus the reverse
        let mirror = Transform::reflection(&Vector3::x());
        let shift = Transform::translation(Vector3::x());
        let p = Point3::new(1.0, 0.0, 0.0);

        let shift_after_mirror = shift.compose(&mirror).apply(&p);
        let mirror_after_shift = mirror.compose(&shift).apply(&p);

        assert_relative_eq!(shift_after_mirror.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(mirror_after_shift.x, -2.0, epsilon = 1e-10);
    }

    #[test]
    fn approx_eq_tolerance() {
        let a = Transform::rotation(&Vector3::y(), 0.3);
        let b = Transform::rotation(&Vector3::y(), 0.3 + 1e-9);
        let c = Transform::rotation(&Vector3::y(), 0.31);
        assert!(a.approx_eq(&b));
        assert!(!a.approx_eq(&c));
    }
}
