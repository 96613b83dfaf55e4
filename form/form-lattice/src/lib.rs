//! Candidate point lattices for form generation.
//!
//! This crate produces the finite point set that seed selection and
//! systematic enumeration draw from.
//!
//! # Lattice Families
//!
//! - **Cartesian**: Evenly spaced cubic grid, `density + 1` points per axis
//! - **Icosahedral**: Origin plus concentric shells of icosahedron,
//!   dodecahedron and cube directions
//! - **Tetrahedral**: Integer parity lattice (`x + y + z` even), optionally
//!   pruned to the corners, face centres or edge midpoints of its bounding
//!   cube
//!
//! Every family is centred on the origin and spans `[-extent/2, extent/2]`.
//!
//! # Quick Start
//!
//! ```
//! use form_lattice::{generate_lattice, LatticeParams};
//!
//! let lattice = generate_lattice(&LatticeParams::cartesian(2.0, 2)).unwrap();
//! assert_eq!(lattice.len(), 27);
//!
//! // Neighbours of the centre point at unit distance
//! let centre = 13;
//! assert_eq!(lattice.points_at_distance(centre, 1.0).len(), 6);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod generate;
mod params;
pub mod polyhedra;
mod types;

pub use error::LatticeError;
pub use generate::generate_lattice;
pub use params::{LatticeParams, MAX_DENSITY};
pub use types::{Lattice, LatticeFamily, TetrahedralSubset};
