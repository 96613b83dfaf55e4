//! Core types for lattice form generation.
//!
//! This crate provides the foundational data model shared by every stage of
//! the form pipeline:
//!
//! - [`PointSet`] - A point list with epsilon-based merging
//! - [`Edge`] - An undirected edge stored under its canonical `(min, max)` key
//! - [`Face`] - An ordered polygonal cycle of point indices
//! - [`Wireframe`] / [`WireframeBuilder`] - Points plus deduplicated edges
//! - [`Form`] - The frozen result of a generation request
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64` and lattices
//! are centred on the origin.
//!
//! # Tolerances
//!
//! Every stage compares points with the single fixed [`POINT_EPSILON`] and
//! tests coplanarity with [`PLANARITY_EPSILON`]. Neither is caller-configurable.
//!
//! # Example
//!
//! ```
//! use form_types::{FormTopology, Point3, WireframeBuilder};
//!
//! let mut builder = WireframeBuilder::new();
//! let a = builder.add_point(Point3::new(0.0, 0.0, 0.0));
//! let b = builder.add_point(Point3::new(1.0, 0.0, 0.0));
//! assert!(builder.add_edge(a, b));
//! // Same edge in the opposite direction is a duplicate
//! assert!(!builder.add_edge(b, a));
//!
//! let wireframe = builder.finish();
//! assert_eq!(wireframe.point_count(), 2);
//! assert_eq!(wireframe.edge_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod adjacency;
mod edge;
mod face;
mod form;
mod point;
mod traits;
mod wireframe;

pub use adjacency::PointAdjacency;
pub use edge::{Edge, edge_key};
pub use face::{Face, PLANARITY_EPSILON, Plane, fit_plane, is_planar};
pub use form::{Form, FormMetadata, VolumeComponent};
pub use point::{POINT_EPSILON, PointKey, PointSet, point_key, points_coincide};
pub use traits::FormTopology;
pub use wireframe::{Wireframe, WireframeBuilder};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
