//! Finite symmetry groups built by closure over generators.

use nalgebra::Point3;
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::transform::Transform;

/// Maximum number of closure iterations before giving up.
///
/// Every preset closes within six iterations; generator sets that need more
/// are almost always not finite at floating-point precision.
pub const CLOSURE_ITERATION_CAP: usize = 12;

/// How a group's transform set was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClosureStatus {
    /// Closed under composition.
    Closed,
    /// The iteration cap was hit; the set may be missing members.
    Truncated,
    /// A closed point group deliberately multiplied by a bounded patch of
    /// translation or screw powers; not closed under composition.
    Bounded,
}

/// An ordered, deduplicated set of transforms.
///
/// Built by [`SymmetryGroup::closure`]: the identity comes first, then the
/// generators, then members in breadth-first discovery order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SymmetryGroup {
    label: String,
    transforms: Vec<Transform>,
    status: ClosureStatus,
}

impl SymmetryGroup {
    /// The empty set returned for unknown group keys.
    ///
    /// Orbit expansion treats it as identity-only.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            label: String::new(),
            transforms: Vec::new(),
            status: ClosureStatus::Closed,
        }
    }

    /// The trivial group containing only the identity.
    #[must_use]
    pub fn trivial(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            transforms: vec![Transform::identity()],
            status: ClosureStatus::Closed,
        }
    }

    /// Compute the closure of `generators` with the default iteration cap.
    ///
    /// # Example
    ///
    /// ```
    /// use form_symmetry::{ClosureStatus, SymmetryGroup, Transform};
    /// use nalgebra::Vector3;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// // Cyclic group of order 4 about z
    /// let group = SymmetryGroup::closure("c4", &[Transform::rotation(&Vector3::z(), FRAC_PI_2)]);
    /// assert_eq!(group.len(), 4);
    /// assert_eq!(group.status(), ClosureStatus::Closed);
    /// ```
    #[must_use]
    pub fn closure(label: impl Into<String>, generators: &[Transform]) -> Self {
        Self::closure_with_cap(label, generators, CLOSURE_ITERATION_CAP)
    }

    /// Compute the closure of `generators`, stopping after `cap` iterations.
    ///
    /// Each iteration composes the members discovered in the previous
    /// iteration with every generator (`member ∘ generator`) and merges new
    /// results by tolerance. If the cap is reached while members are still
    /// being discovered, the partial set is returned with
    /// [`ClosureStatus::Truncated`].
    #[must_use]
    pub fn closure_with_cap(label: impl Into<String>, generators: &[Transform], cap: usize) -> Self {
        let label = label.into();
        let mut transforms = vec![Transform::identity()];
        for g in generators {
            insert_unique(&mut transforms, *g);
        }

        let mut frontier = transforms.clone();
        for iteration in 0..cap {
            let mut discovered = Vec::new();
            for member in &frontier {
                for g in generators {
                    let candidate = member.compose(g);
                    if !contains(&transforms, &candidate) && !contains(&discovered, &candidate) {
                        discovered.push(candidate);
                    }
                }
            }

            if discovered.is_empty() {
                debug!(
                    "Closure '{}' converged to {} transforms after {} iterations",
                    label,
                    transforms.len(),
                    iteration + 1
                );
                return Self {
                    label,
                    transforms,
                    status: ClosureStatus::Closed,
                };
            }

            transforms.extend_from_slice(&discovered);
            frontier = discovered;
        }

        warn!(
            "Closure '{}' did not converge within {} iterations ({} transforms so far)",
            label,
            cap,
            transforms.len()
        );
        Self {
            label,
            transforms,
            status: ClosureStatus::Truncated,
        }
    }

    /// Multiply every member by each transform in `patch` (`patch ∘ member`),
    /// producing a bounded, non-closed set.
    #[must_use]
    pub fn with_patch(self, patch: &[Transform]) -> Self {
        if patch.iter().all(Transform::is_identity) {
            return self;
        }
        let mut transforms = Vec::with_capacity(self.transforms.len() * patch.len());
        for p in patch {
            for member in &self.transforms {
                insert_unique(&mut transforms, p.compose(member));
            }
        }
        let status = match self.status {
            ClosureStatus::Truncated => ClosureStatus::Truncated,
            _ => ClosureStatus::Bounded,
        };
        Self {
            label: self.label,
            transforms,
            status,
        }
    }

    /// Group label; empty for the unknown-key group.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Members in discovery order.
    #[must_use]
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// Iterate over the members.
    pub fn iter(&self) -> impl Iterator<Item = &Transform> {
        self.transforms.iter()
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Whether the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// How the set was obtained.
    #[must_use]
    pub const fn status(&self) -> ClosureStatus {
        self.status
    }

    /// False only when the closure was truncated by the iteration cap.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status != ClosureStatus::Truncated
    }

    /// Whether a transform matching `t` within tolerance is a member.
    #[must_use]
    pub fn contains(&self, t: &Transform) -> bool {
        contains(&self.transforms, t)
    }

    /// Check that every pairwise composition is already a member.
    #[must_use]
    pub fn is_closed_under_composition(&self) -> bool {
        self.transforms
            .iter()
            .all(|a| self.transforms.iter().all(|b| self.contains(&a.compose(b))))
    }

    /// Transforms to apply during orbit expansion; identity-only when empty.
    #[must_use]
    pub fn effective_transforms(&self) -> Vec<Transform> {
        if self.transforms.is_empty() {
            vec![Transform::identity()]
        } else {
            self.transforms.clone()
        }
    }

    /// Images of `p` under every member, in member order (not deduplicated).
    pub fn images<'a>(&'a self, p: &'a Point3<f64>) -> impl Iterator<Item = Point3<f64>> + 'a {
        self.transforms.iter().map(move |t| t.apply(p))
    }
}

fn contains(set: &[Transform], t: &Transform) -> bool {
    set.iter().any(|m| m.approx_eq(t))
}

fn insert_unique(set: &mut Vec<Transform>, t: Transform) {
    if !contains(set, &t) {
        set.push(t);
    }
}
