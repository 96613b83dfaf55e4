//! Finite symmetry groups and orbit expansion.
//!
//! This crate provides tools for:
//! - Affine transforms (rotations, reflections, inversion, rotoreflections,
//!   screw motions, translations) with tolerance-based comparison
//! - Group closure from a small generator set
//! - Named presets (cubic, tetrahedral, icosahedral) and a memoizing registry
//! - Toggle-style symmetry settings as stored in scene documents
//! - Orbit expansion of seed edges into a symmetric wireframe
//!
//! # Example
//!
//! ```
//! use form_symmetry::{SymmetryRegistry, expand_orbit};
//! use form_types::{FormTopology, Point3, WireframeBuilder};
//!
//! let registry = SymmetryRegistry::new();
//! let cubic = registry.get_or_compute("cubic");
//! assert_eq!(cubic.len(), 48);
//!
//! let seed = [Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)];
//! let octahedron = expand_orbit(WireframeBuilder::new(), &seed, &[(0, 1)], &cubic);
//! assert_eq!(octahedron.point_count(), 6);
//! assert_eq!(octahedron.edge_count(), 12);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod group;
mod orbit;
mod presets;
mod registry;
pub mod settings;
mod transform;

pub use group::{CLOSURE_ITERATION_CAP, ClosureStatus, SymmetryGroup};
pub use orbit::{expand_orbit, expand_wireframe};
pub use presets::SymmetryFamily;
pub use registry::SymmetryRegistry;
pub use settings::{
    AxisChoice, CUSTOM_GROUP_LABEL, PlaneChoice, ReflectionSettings, RotationSettings, RotoreflectionSettings,
    ScrewSettings, SymmetrySettings, TranslationSettings,
};
pub use transform::{TRANSFORM_EPSILON, Transform, TransformKind};
