//! Procedural generation and classification of symmetric lattice forms.
//!
//! This umbrella crate re-exports all form-* crates, providing a unified API
//! for building point-line-face-volume structures on finite lattices under
//! cubic, tetrahedral or icosahedral symmetry.
//!
//! # Quick Start
//!
//! ```
//! use form::prelude::*;
//!
//! let registry = SymmetryRegistry::new();
//! let config = GenerationConfig::cubic()
//!     .with_lattice(1.0, 1)
//!     .with_seed_strategy(SeedStrategy::SystematicIndex(0));
//!
//! let cube = generate_form(config, &registry).unwrap();
//! assert_eq!(cube.metadata().common_name.as_deref(), Some("cube"));
//!
//! let mut text = Vec::new();
//! form::io::write_wireframe_text(&cube, &mut text).unwrap();
//! ```
//!
//! # Module Organization
//!
//! ## Foundation
//! - [`types`] - Points, edges, faces, wireframes and the frozen `Form`
//! - [`symmetry`] - Transforms, group closure, presets and orbit expansion
//! - [`lattice`] - Cartesian, icosahedral and tetrahedral candidate lattices
//!
//! ## Detection & Classification
//! - [`topology`] - Face, visibility and volume detection
//! - [`taxonomy`] - Canonical signatures and names
//!
//! ## Pipeline & Output
//! - [`generate`] - Seeds, systematic enumeration, completion and the pipeline
//! - [`io`] - Scene documents and text wireframes
//!
//! # Feature Flags
//!
//! - `serde` - Serialize/deserialize core types and configuration

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Points, edges, faces, wireframes and forms.
pub use form_types as types;

/// Transforms, group closure, presets and orbit expansion.
pub use form_symmetry as symmetry;

/// Candidate point lattices.
pub use form_lattice as lattice;

/// Face, visibility and volume detection.
pub use form_topology as topology;

/// Canonical signatures and names.
pub use form_taxonomy as taxonomy;

/// The generation pipeline.
pub use form_generate as generate;

/// Scene documents and text wireframes.
pub use form_io as io;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for form generation.
///
/// # Usage
///
/// ```
/// use form::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use form_types::{Edge, Face, Form, FormMetadata, FormTopology, Point3, Wireframe};

    // Symmetry
    pub use form_symmetry::{SymmetryFamily, SymmetryGroup, SymmetryRegistry, SymmetrySettings, Transform};

    // Lattice
    pub use form_lattice::{LatticeFamily, LatticeParams, generate_lattice};

    // Generation (main use case)
    pub use form_generate::{FormGenerator, GenerationConfig, Seed, SeedStrategy, generate_form};

    // Classification
    pub use form_taxonomy::{Taxonomy, classify};
}

// =============================================================================
// Tests
// =============================================================================
