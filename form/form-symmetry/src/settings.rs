//! Free-form symmetry settings as stored in scene documents.
//!
//! Scene files describe symmetry as a set of toggles rather than a named
//! preset. [`SymmetrySettings::build_group`] turns them into a
//! [`SymmetryGroup`]: point operations become closure generators, while
//! translations and screw motions are applied as a bounded patch of powers
//! since they never close.

use std::f64::consts::TAU;

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::group::SymmetryGroup;
use crate::transform::Transform;

/// Label given to groups built from settings.
pub const CUSTOM_GROUP_LABEL: &str = "custom";

/// Axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AxisChoice {
    /// The x axis.
    X,
    /// The y axis.
    Y,
    /// The z axis.
    Z,
    /// All three coordinate axes.
    All,
    /// Disabled.
    #[default]
    None,
}

impl AxisChoice {
    /// Unit axes selected by this choice.
    #[must_use]
    pub fn axes(self) -> Vec<Vector3<f64>> {
        match self {
            Self::X => vec![Vector3::x()],
            Self::Y => vec![Vector3::y()],
            Self::Z => vec![Vector3::z()],
            Self::All => vec![Vector3::x(), Vector3::y(), Vector3::z()],
            Self::None => Vec::new(),
        }
    }
}

/// Coordinate plane selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlaneChoice {
    /// The xy plane (normal z).
    #[default]
    Xy,
    /// The yz plane (normal x).
    Yz,
    /// The zx plane (normal y).
    Zx,
}

impl PlaneChoice {
    /// Plane normal.
    #[must_use]
    pub fn normal(self) -> Vector3<f64> {
        match self {
            Self::Xy => Vector3::z(),
            Self::Yz => Vector3::x(),
            Self::Zx => Vector3::y(),
        }
    }
}

/// Mirror planes through the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReflectionSettings {
    /// Mirror in the xy plane.
    pub xy: bool,
    /// Mirror in the yz plane.
    pub yz: bool,
    /// Mirror in the zx plane.
    pub zx: bool,
}

impl Default for ReflectionSettings {
    fn default() -> Self {
        Self {
            xy: true,
            yz: true,
            zx: true,
        }
    }
}

/// Cyclic rotation about one or all axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RotationSettings {
    /// Rotation axis.
    pub axis: AxisChoice,
    /// Number of steps per full turn; values below 2 disable the rotation.
    pub steps: u32,
}

impl Default for RotationSettings {
    fn default() -> Self {
        Self {
            axis: AxisChoice::All,
            steps: 4,
        }
    }
}

/// Bounded translational repetition.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TranslationSettings {
    /// Translation axis.
    pub axis: AxisChoice,
    /// Number of repeats beyond the original.
    pub count: u32,
    /// Distance between repeats.
    pub step: f64,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            axis: AxisChoice::None,
            count: 0,
            step: 0.5,
        }
    }
}

/// Rotation followed by reflection in a coordinate plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RotoreflectionSettings {
    /// Whether the operation is active.
    pub enabled: bool,
    /// Rotation axis.
    pub axis: AxisChoice,
    /// Mirror plane.
    pub plane: PlaneChoice,
    /// Rotation angle in degrees.
    pub angle_deg: f64,
    /// Zero disables the operation.
    pub count: u32,
}

impl Default for RotoreflectionSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            axis: AxisChoice::None,
            plane: PlaneChoice::Xy,
            angle_deg: 180.0,
            count: 0,
        }
    }
}

/// Rotation combined with translation along the same axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScrewSettings {
    /// Whether the operation is active.
    pub enabled: bool,
    /// Screw axis.
    pub axis: AxisChoice,
    /// Rotation per step in degrees.
    pub angle_deg: f64,
    /// Advance per step along the axis.
    pub distance: f64,
    /// Number of steps beyond the original.
    pub count: u32,
}

impl Default for ScrewSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            axis: AxisChoice::None,
            angle_deg: 180.0,
            distance: 0.5,
            count: 0,
        }
    }
}

/// Toggle-style symmetry description.
///
/// The default matches a freshly created scene: three mirror planes plus
/// four-fold rotations about every axis, which closes to the full
/// octahedral group.
///
/// # Example
///
/// ```
/// use form_symmetry::{ClosureStatus, SymmetrySettings};
///
/// let group = SymmetrySettings::default().build_group();
/// assert_eq!(group.len(), 48);
/// assert_eq!(group.status(), ClosureStatus::Closed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SymmetrySettings {
    /// Mirror planes.
    pub reflections: ReflectionSettings,
    /// Cyclic rotations.
    pub rotation: RotationSettings,
    /// Bounded translations.
    pub translation: TranslationSettings,
    /// Point inversion through the origin.
    pub inversion: bool,
    /// Rotoreflection.
    pub rotoreflection: RotoreflectionSettings,
    /// Screw motion.
    pub screw: ScrewSettings,
}

impl SymmetrySettings {
    /// Settings with every operation disabled.
    #[must_use]
    pub fn none() -> Self {
        Self {
            reflections: ReflectionSettings {
                xy: false,
                yz: false,
                zx: false,
            },
            rotation: RotationSettings {
                axis: AxisChoice::None,
                steps: 0,
            },
            ..Self::default()
        }
    }

    /// Set the mirror planes.
    #[must_use]
    pub const fn with_reflections(mut self, xy: bool, yz: bool, zx: bool) -> Self {
        self.reflections = ReflectionSettings { xy, yz, zx };
        self
    }

    /// Set the cyclic rotation.
    #[must_use]
    pub const fn with_rotation(mut self, axis: AxisChoice, steps: u32) -> Self {
        self.rotation = RotationSettings { axis, steps };
        self
    }

    /// Set the bounded translation.
    #[must_use]
    pub const fn with_translation(mut self, axis: AxisChoice, count: u32, step: f64) -> Self {
        self.translation = TranslationSettings { axis, count, step };
        self
    }

    /// Enable or disable inversion.
    #[must_use]
    pub const fn with_inversion(mut self, inversion: bool) -> Self {
        self.inversion = inversion;
        self
    }

    /// Enable a rotoreflection.
    #[must_use]
    pub const fn with_rotoreflection(
        mut self,
        axis: AxisChoice,
        plane: PlaneChoice,
        angle_deg: f64,
        count: u32,
    ) -> Self {
        self.rotoreflection = RotoreflectionSettings {
            enabled: true,
            axis,
            plane,
            angle_deg,
            count,
        };
        self
    }

    /// Enable a screw motion.
    #[must_use]
    pub const fn with_screw(mut self, axis: AxisChoice, angle_deg: f64, distance: f64, count: u32) -> Self {
        self.screw = ScrewSettings {
            enabled: true,
            axis,
            angle_deg,
            distance,
            count,
        };
        self
    }

    /// Generators of the point-group part.
    #[must_use]
    pub fn point_generators(&self) -> Vec<Transform> {
        let mut generators = Vec::new();

        let mirrors = [
            (self.reflections.xy, PlaneChoice::Xy),
            (self.reflections.yz, PlaneChoice::Yz),
            (self.reflections.zx, PlaneChoice::Zx),
        ];
        for (enabled, plane) in mirrors {
            if enabled {
                generators.push(Transform::reflection(&plane.normal()));
            }
        }

        if self.rotation.steps >= 2 {
            let angle = TAU / f64::from(self.rotation.steps);
            for axis in self.rotation.axis.axes() {
                generators.push(Transform::rotation(&axis, angle));
            }
        }

        if self.inversion {
            generators.push(Transform::inversion());
        }

        let rr = &self.rotoreflection;
        if rr.enabled && rr.count > 0 {
            let mirror = Transform::reflection(&rr.plane.normal());
            for axis in rr.axis.axes() {
                let rotation = Transform::rotation(&axis, rr.angle_deg.to_radians());
                generators.push(mirror.compose(&rotation));
            }
        }

        generators
    }

    /// Bounded translation and screw powers, always including the identity.
    #[must_use]
    pub fn patch(&self) -> Vec<Transform> {
        let mut patch = vec![Transform::identity()];

        let t = &self.translation;
        if t.count > 0 {
            for axis in t.axis.axes() {
                patch = extend_by_powers(&patch, &Transform::translation(axis * t.step), t.count);
            }
        }

        let s = &self.screw;
        if s.enabled && s.count > 0 {
            for axis in s.axis.axes() {
                let screw = Transform::screw(&axis, s.angle_deg.to_radians(), s.distance);
                patch = extend_by_powers(&patch, &screw, s.count);
            }
        }

        patch
    }

    /// Build the transform set described by these settings.
    #[must_use]
    pub fn build_group(&self) -> SymmetryGroup {
        SymmetryGroup::closure(CUSTOM_GROUP_LABEL, &self.point_generators()).with_patch(&self.patch())
    }
}

/// Every `power(k) ∘ p` for `p` in `patch` and `k` in `0..=count`.
fn extend_by_powers(patch: &[Transform], step: &Transform, count: u32) -> Vec<Transform> {
    (0..=count)
        .flat_map(|k| {
            let power = step.power(k);
            patch.iter().map(move |p| power.compose(p))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::ClosureStatus;
    use nalgebra::Point3;

    #[test]
    fn everything_disabled_is_trivial() {
        let group = SymmetrySettings::none().build_group();
        assert_eq!(group.len(), 1);
        assert_eq!(group.label(), CUSTOM_GROUP_LABEL);
        assert_eq!(group.status(), ClosureStatus::Closed);
    }

    #[test]
    fn single_axis_rotation() {
        let group = SymmetrySettings::none().with_rotation(AxisChoice::Z, 6).build_group();
        assert_eq!(group.len(), 6);
    }

    #[test]
    fn mirrors_and_inversion() {
        let group = SymmetrySettings::none()
            .with_reflections(true, false, false)
            .with_inversion(true)
            .build_group();
        // {E, σh, i, C2z}
        assert_eq!(group.len(), 4);
    }

    #[test]
    fn rotoreflection_s4() {
        let group = SymmetrySettings::none()
            .with_rotoreflection(AxisChoice::Z, PlaneChoice::Xy, 90.0, 1)
            .build_group();
        assert_eq!(group.len(), 4);
        assert!(group.is_closed_under_composition());
    }

    #[test]
    fn translation_patch_is_bounded() {
        let group = SymmetrySettings::none()
            .with_translation(AxisChoice::X, 2, 0.5)
            .build_group();
        assert_eq!(group.len(), 3);
        assert_eq!(group.status(), ClosureStatus::Bounded);

        let origin = Point3::origin();
        let xs: Vec<f64> = group.images(&origin).map(|p| p.x).collect();
        assert!(xs.iter().any(|&x| (x - 1.0).abs() < 1e-12));
    }

    #[test]
    fn screw_patch_powers() {
        let group = SymmetrySettings::none()
            .with_screw(AxisChoice::Z, 180.0, 0.5, 2)
            .build_group();
        assert_eq!(group.len(), 3);
        assert_eq!(group.status(), ClosureStatus::Bounded);

        let p = Point3::new(1.0, 0.0, 0.0);
        let images: Vec<_> = group.images(&p).collect();
        assert!(images.iter().any(|q| (q - Point3::new(-1.0, 0.0, 0.5)).norm() < 1e-9));
        assert!(images.iter().any(|q| (q - Point3::new(1.0, 0.0, 1.0)).norm() < 1e-9));
    }

    #[test]
    fn all_axis_translation_forms_grid() {
        let group = SymmetrySettings::none()
            .with_translation(AxisChoice::All, 1, 1.0)
            .build_group();
        assert_eq!(group.len(), 8);
    }
}
