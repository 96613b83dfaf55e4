//! Edge-to-face adjacency.
//!
//! Provides efficient lookups for edge-to-face and face-to-face relationships.

use form_types::{Face, edge_key};
use hashbrown::HashMap;

/// Adjacency information for a face list.
///
/// Provides efficient lookups for:
/// - Faces using an edge
/// - Faces sharing at least one edge with a given face
/// - Open edges (used by only one face)
#[derive(Debug, Clone, Default)]
pub struct FaceAdjacency {
    /// Maps edge (v0, v1) to list of face indices. v0 < v1.
    edge_to_faces: HashMap<(u32, u32), Vec<usize>>,
    face_count: usize,
}

impl FaceAdjacency {
    /// Build adjacency information from a list of faces.
    ///
    /// # Example
    ///
    /// ```
    /// use form_topology::FaceAdjacency;
    /// use form_types::Face;
    ///
    /// let faces = vec![
    ///     Face::new(vec![0, 1, 2]).unwrap(),
    ///     Face::new(vec![1, 3, 2]).unwrap(),
    /// ];
    /// let adj = FaceAdjacency::build(&faces);
    ///
    /// assert_eq!(adj.open_edge_count(), 4);
    /// assert_eq!(adj.shared_edges().count(), 1);
    /// assert!(!adj.is_closed());
    /// ```
    #[must_use]
    pub fn build(faces: &[Face]) -> Self {
        let mut edge_to_faces: HashMap<(u32, u32), Vec<usize>> = HashMap::new();
        for (face_idx, face) in faces.iter().enumerate() {
            for edge in face.edge_keys() {
                edge_to_faces.entry(edge).or_default().push(face_idx);
            }
        }
        Self {
            edge_to_faces,
            face_count: faces.len(),
        }
    }

    /// Get faces using an edge.
    ///
    /// Returns `None` if no face uses the edge.
    #[must_use]
    pub fn faces_for_edge(&self, v0: u32, v1: u32) -> Option<&[usize]> {
        self.edge_to_faces.get(&edge_key(v0, v1)).map(Vec::as_slice)
    }

    /// Number of faces using an edge.
    #[must_use]
    pub fn edge_use_count(&self, v0: u32, v1: u32) -> usize {
        self.faces_for_edge(v0, v1).map_or(0, <[usize]>::len)
    }

    /// Faces sharing at least one edge with `face_idx`, ascending, excluding
    /// the face itself.
    #[must_use]
    pub fn neighbors(&self, face: &Face, face_idx: usize) -> Vec<usize> {
        let mut neighbors: Vec<usize> = face
            .edge_keys()
            .filter_map(|e| self.edge_to_faces.get(&e))
            .flatten()
            .copied()
            .filter(|&other| other != face_idx)
            .collect();
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }

    /// Iterate over edges used by two or more faces.
    pub fn shared_edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.edge_to_faces
            .iter()
            .filter(|(_, faces)| faces.len() >= 2)
            .map(|(&edge, _)| edge)
    }

    /// Count edges used by exactly one face.
    #[must_use]
    pub fn open_edge_count(&self) -> usize {
        self.edge_to_faces
            .values()
            .filter(|faces| faces.len() == 1)
            .count()
    }

    /// Whether every edge is used by at least two faces.
    ///
    /// An empty face list is not closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        !self.edge_to_faces.is_empty() && self.edge_to_faces.values().all(|faces| faces.len() >= 2)
    }

    /// Number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_to_faces.len()
    }

    /// Number of faces the adjacency was built from.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.face_count
    }
}
