//! Face, volume and visibility detection for wireframes.
//!
//! This crate provides tools for:
//! - Face detection (elementary planar cycles of length 3 to 12)
//! - Volume detection (edge-closed face components)
//! - Visibility filtering (removal of faces buried from both sides)
//! - Edge-to-face adjacency queries
//!
//! # Example
//!
//! ```
//! use form_topology::{FaceDetectParams, VisibilityParams, detect_faces, detect_volumes, filter_visible_faces};
//! use form_types::{FormTopology, Point3, Wireframe};
//!
//! let tetrahedron = Wireframe::from_parts(
//!     vec![
//!         Point3::new(1.0, 1.0, 1.0),
//!         Point3::new(1.0, -1.0, -1.0),
//!         Point3::new(-1.0, 1.0, -1.0),
//!         Point3::new(-1.0, -1.0, 1.0),
//!     ],
//!     &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)],
//! );
//!
//! let detection = detect_faces(&tetrahedron, &FaceDetectParams::default());
//! assert_eq!(detection.faces.len(), 4);
//!
//! let visible = filter_visible_faces(tetrahedron.points(), &detection.faces, &VisibilityParams::default());
//! assert_eq!(visible.len(), 4);
//! assert_eq!(detect_volumes(&visible).len(), 1);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod adjacency;
mod faces;
mod visibility;
mod volumes;

pub use adjacency::FaceAdjacency;
pub use faces::{FaceDetectParams, FaceDetection, MAX_CYCLE_LEN, MIN_CYCLE_LEN, detect_faces, is_elementary};
pub use visibility::{VisibilityParams, filter_visible_faces, ray_triangle_intersect};
pub use volumes::{MIN_VOLUME_FACES, detect_volumes, volume_is_closed};
