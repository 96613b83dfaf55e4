//! Canonical taxonomic signatures for generated forms.
//!
//! A signature is built from three order-independent profiles:
//!
//! - **Face profile** `F{n}-{cxVk,...}`: coplanar faces merged into polygons,
//!   counted by corner count (a cube is `F6-{6xV4}`)
//! - **Vertex profile** `V{n}-{...}`: vertices grouped by their sorted
//!   absolute coordinate triple
//! - **Edge profile** `E{n}-{...}`: edges grouped by squared length and
//!   sorted absolute coordinate delta
//!
//! The signature is `"{face}|{vertex}|{edge}"` and its FNV-1a hash, rendered
//! as 16 hex digits, is the form's identity key.
//!
//! # Example
//!
//! ```
//! use form_taxonomy::classify;
//! use form_types::{Edge, Face, Point3};
//!
//! let points = [
//!     Point3::new(1.0, 1.0, 1.0),
//!     Point3::new(1.0, -1.0, -1.0),
//!     Point3::new(-1.0, 1.0, -1.0),
//!     Point3::new(-1.0, -1.0, 1.0),
//! ];
//! let edges: Vec<Edge> = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
//!     .iter()
//!     .filter_map(|&(a, b)| Edge::new(a, b))
//!     .collect();
//! let faces: Vec<Face> = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]]
//!     .iter()
//!     .filter_map(|f| Face::new(f.to_vec()))
//!     .collect();
//!
//! let taxonomy = classify(&points, &edges, &faces);
//! assert_eq!(taxonomy.face_profile, "F4-{4xV3}");
//! assert_eq!(taxonomy.common_name(), Some("tetrahedron"));
//! assert_eq!(taxonomy.hash.len(), 16);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod hash;
mod polygons;
mod profile;

use form_types::{Edge, Face, Point3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use hash::{fnv1a_64, signature_hash};
pub use polygons::{face_profile, polygon_corner_counts};
pub use profile::{edge_profile, vertex_profile};

/// Conventional names keyed by vertex count and face profile.
const COMMON_NAMES: [(usize, &str, &str); 5] = [
    (4, "F4-{4xV3}", "tetrahedron"),
    (8, "F6-{6xV4}", "cube"),
    (6, "F8-{8xV3}", "octahedron"),
    (20, "F12-{12xV5}", "dodecahedron"),
    (12, "F20-{20xV3}", "icosahedron"),
];

/// Canonical classification of a form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Taxonomy {
    /// Number of vertices classified.
    pub vertex_count: usize,
    /// Vertex profile.
    pub vertex_profile: String,
    /// Edge profile.
    pub edge_profile: String,
    /// Face profile.
    pub face_profile: String,
    /// `"{face}|{vertex}|{edge}"`.
    pub signature: String,
    /// FNV-1a hash of the signature as 16 lowercase hex digits.
    pub hash: String,
}

impl Taxonomy {
    /// The conventional polyhedron name, if the form is one of the five
    /// Platonic solids.
    #[must_use]
    pub fn common_name(&self) -> Option<&'static str> {
        COMMON_NAMES
            .iter()
            .find(|(v, profile, _)| *v == self.vertex_count && *profile == self.face_profile)
            .map(|(_, _, name)| *name)
    }
}

/// Classify a form from its points, edges and faces.
#[must_use]
pub fn classify(points: &[Point3<f64>], edges: &[Edge], faces: &[Face]) -> Taxonomy {
    let vertex_profile = vertex_profile(points);
    let edge_profile = edge_profile(points, edges);
    let face_profile = face_profile(points, faces);
    let signature = format!("{face_profile}|{vertex_profile}|{edge_profile}");
    let hash = signature_hash(&signature);

    Taxonomy {
        vertex_count: points.len(),
        vertex_profile,
        edge_profile,
        face_profile,
        signature,
        hash,
    }
}
