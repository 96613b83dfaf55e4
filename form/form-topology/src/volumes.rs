//! Closed volume detection over the face-adjacency graph.

use form_types::{Face, VolumeComponent};
use tracing::debug;

use crate::adjacency::FaceAdjacency;

/// Fewest faces that can enclose a volume.
pub const MIN_VOLUME_FACES: usize = 4;

/// Group faces into edge-connected components and keep the closed ones.
///
/// A component is a volume when every edge used by its faces is used by at
/// least two of them and it has at least [`MIN_VOLUME_FACES`] faces. This is
/// a parity check, so star-shaped or self-intersecting shells count too.
///
/// Components are returned in order of their smallest face index.
///
/// # Example
///
/// ```
/// use form_topology::detect_volumes;
/// use form_types::Face;
///
/// let tetrahedron: Vec<Face> = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]]
///     .iter()
///     .map(|f| Face::new(f.to_vec()).unwrap())
///     .collect();
/// let volumes = detect_volumes(&tetrahedron);
/// assert_eq!(volumes.len(), 1);
/// assert_eq!(volumes[0].faces(), &[0, 1, 2, 3]);
/// ```
#[must_use]
pub fn detect_volumes(faces: &[Face]) -> Vec<VolumeComponent> {
    let adjacency = FaceAdjacency::build(faces);
    let mut component = vec![usize::MAX; faces.len()];
    let mut volumes = Vec::new();
    let mut component_count = 0;

    for start in 0..faces.len() {
        if component[start] != usize::MAX {
            continue;
        }

        let mut members = vec![start];
        let mut stack = vec![start];
        component[start] = component_count;

        while let Some(current) = stack.pop() {
            for neighbor in adjacency.neighbors(&faces[current], current) {
                if component[neighbor] == usize::MAX {
                    component[neighbor] = component_count;
                    members.push(neighbor);
                    stack.push(neighbor);
                }
            }
        }
        component_count += 1;

        // Every face using an edge is edge-connected to the others using it,
        // so whole-list use counts equal within-component counts.
        let closed = members.iter().all(|&f| {
            faces[f]
                .edge_keys()
                .all(|(a, b)| adjacency.edge_use_count(a, b) >= 2)
        });
        if closed && members.len() >= MIN_VOLUME_FACES {
            volumes.push(VolumeComponent::new(members));
        }
    }

    debug!(
        "Found {} closed volumes among {} face components",
        volumes.len(),
        component_count
    );
    volumes
}

/// Check that every edge used by a volume's faces is used by at least two of
/// them.
#[must_use]
pub fn volume_is_closed(volume: &VolumeComponent, faces: &[Face]) -> bool {
    let members: Vec<Face> = volume
        .faces()
        .iter()
        .filter_map(|&i| faces.get(i).cloned())
        .collect();
    members.len() == volume.face_count() && FaceAdjacency::build(&members).is_closed()
}
