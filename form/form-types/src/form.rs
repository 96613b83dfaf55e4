//! The frozen generation result.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::edge::Edge;
use crate::face::Face;
use crate::traits::FormTopology;
use crate::wireframe::Wireframe;

/// A connected, edge-closed set of faces.
///
/// Every edge used by a member face is used by at least two member faces,
/// and the component holds at least four faces.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VolumeComponent {
    faces: Vec<usize>,
}

impl VolumeComponent {
    /// Create a component from face indices (sorted on construction).
    #[must_use]
    pub fn new(mut faces: Vec<usize>) -> Self {
        faces.sort_unstable();
        faces.dedup();
        Self { faces }
    }

    /// Indices into the owning form's face list, ascending.
    #[must_use]
    pub fn faces(&self) -> &[usize] {
        &self.faces
    }

    /// Number of member faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// Summary and classification data attached to a [`Form`].
///
/// Counts and the connectivity flag are filled by [`Form::assemble`]; the
/// remaining fields are supplied by the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormMetadata {
    /// Number of points.
    pub point_count: usize,
    /// Number of edges.
    pub edge_count: usize,
    /// Number of faces.
    pub face_count: usize,
    /// Number of closed volume components.
    pub volume_count: usize,
    /// Whether the edge graph connects every point.
    pub is_connected: bool,
    /// Label of the symmetry group applied; empty when none was applied.
    pub symmetry_label: String,
    /// False when the group closure was cut short, meaning the form may only
    /// be partially symmetric.
    pub symmetry_complete: bool,
    /// Canonical taxonomic signature.
    pub canonical_signature: String,
    /// Stable hash of the signature (16 lowercase hex digits).
    pub canonical_hash: String,
    /// Conventional polyhedron name, when the signature matches one.
    pub common_name: Option<String>,
    /// Systematic enumeration ran past its last representative.
    pub exhausted: bool,
    /// The completion pass stopped at the edge budget.
    pub budget_exhausted: bool,
    /// Face search stopped at its step budget.
    pub faces_truncated: bool,
}

/// A generated point-line-face-volume structure.
///
/// A form is built once per generation request and never mutated after
/// [`Form::assemble`]. Points, edges and faces are emitted in a stable order
/// so exporters can map indices to their own numbering.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Form {
    points: Vec<Point3<f64>>,
    edges: Vec<Edge>,
    faces: Vec<Face>,
    volumes: Vec<VolumeComponent>,
    metadata: FormMetadata,
}

impl Form {
    /// A form with no geometry, returned for degenerate seeds.
    ///
    /// # Example
    ///
    /// ```
    /// use form_types::{Form, FormTopology};
    ///
    /// let form = Form::empty();
    /// assert!(form.is_empty());
    /// assert!(!form.metadata().exhausted);
    /// ```
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A form with no geometry marking the end of systematic enumeration.
    #[must_use]
    pub fn exhausted() -> Self {
        Self {
            metadata: FormMetadata {
                exhausted: true,
                ..FormMetadata::default()
            },
            ..Self::default()
        }
    }

    /// Freeze a wireframe with its detected faces and volumes.
    ///
    /// Counts and `is_connected` in `metadata` are recomputed from the
    /// geometry; all other metadata fields are kept as given.
    #[must_use]
    pub fn assemble(
        wireframe: Wireframe,
        faces: Vec<Face>,
        volumes: Vec<VolumeComponent>,
        mut metadata: FormMetadata,
    ) -> Self {
        metadata.is_connected = wireframe.is_connected();
        let (points, edges) = wireframe.into_parts();
        metadata.point_count = points.len();
        metadata.edge_count = edges.len();
        metadata.face_count = faces.len();
        metadata.volume_count = volumes.len();

        Self {
            points,
            edges,
            faces,
            volumes,
            metadata,
        }
    }

    /// Faces in emission order.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Closed volume components.
    #[must_use]
    pub fn volumes(&self) -> &[VolumeComponent] {
        &self.volumes
    }

    /// Summary metadata.
    #[must_use]
    pub fn metadata(&self) -> &FormMetadata {
        &self.metadata
    }

    /// Whether this form marks enumeration exhaustion.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.metadata.exhausted
    }

    /// Copy out the wireframe part of the form.
    #[must_use]
    pub fn wireframe(&self) -> Wireframe {
        let pairs: Vec<(u32, u32)> = self.edges.iter().map(|e| e.key()).collect();
        Wireframe::from_parts(self.points.clone(), &pairs)
    }
}

impl FormTopology for Form {
    fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
