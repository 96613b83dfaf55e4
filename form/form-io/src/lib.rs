//! Scene documents and text export for generated forms.
//!
//! # Formats
//!
//! | Format | Read | Write |
//! |--------|------|-------|
//! | JSON scene document | ✓ | ✓ |
//! | Text wireframe (`v`/`l`/`f`) | ✓ | ✓ |
//!
//! Scene documents store segments with textual point and segment keys and
//! the editor's symmetry settings. Text wireframes list points, edges and
//! faces with 1-based indices in kernel order.
//!
//! # Example
//!
//! ```
//! use form_io::{SceneDocument, SceneSettings, document_from_form, wireframe_from_document};
//! use form_generate::{FormGenerator, GenerationConfig};
//! use form_symmetry::SymmetryRegistry;
//! use form_types::FormTopology;
//!
//! let registry = SymmetryRegistry::new();
//! let generator = FormGenerator::new(GenerationConfig::new().with_lattice(1.0, 1), &registry).unwrap();
//! let cube = generator.generate_index(0);
//!
//! let document = document_from_form(&cube, SceneSettings::default(), "2026-01-01T00:00:00Z");
//! let json = document.to_json().unwrap();
//!
//! let restored = wireframe_from_document(&SceneDocument::from_json(&json).unwrap());
//! assert_eq!(restored.point_count(), 8);
//! assert_eq!(restored.edge_count(), 12);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod document;
mod error;
mod text;

pub use document::{
    DOCUMENT_SOURCE, DOCUMENT_VERSION, DocumentMeta, SceneDocument, SceneSettings, Segment, SegmentOrigin,
    document_from_form, load_document, point_key, save_document, segment_key, segments_from_triangles,
    wireframe_from_document,
};
pub use error::{IoError, IoResult};
pub use text::{load_wireframe_text, read_wireframe_text, save_wireframe_text, write_wireframe_text};
