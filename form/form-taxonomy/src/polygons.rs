//! Face profile: coplanar faces merged into polygons.
//!
//! Detected faces sharing a plane and an edge are fused, so a square split
//! by a diagonal still reports as one four-cornered polygon. Corners are
//! boundary vertices where the boundary actually turns.

use std::collections::BTreeMap;

use form_types::{Face, Plane, Point3};
use hashbrown::HashMap;

use crate::profile::quantize;

/// Relative threshold below which two boundary edges count as collinear.
const COLLINEAR_TOLERANCE: f64 = 1e-6;

/// Orientation-independent plane key.
fn plane_key(plane: &Plane) -> [i64; 4] {
    let n = plane.normal;
    let flip = [n.x, n.y, n.z]
        .into_iter()
        .find(|c| c.abs() > 1e-6)
        .is_some_and(|c| c < 0.0);
    let (n, d) = if flip { (-n, -plane.offset) } else { (n, plane.offset) };
    [quantize(n.x), quantize(n.y), quantize(n.z), quantize(d)]
}

/// Minimal union-find over face indices.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi] = lo;
        }
    }
}

/// Corner count of every merged polygon, in order of first member face.
///
/// Faces without a well-defined plane are treated as their own polygon with
/// their raw vertex count.
#[must_use]
pub fn polygon_corner_counts(points: &[Point3<f64>], faces: &[Face]) -> Vec<usize> {
    let keys: Vec<Option<[i64; 4]>> = faces
        .iter()
        .map(|f| f.plane(points).map(|p| plane_key(&p)))
        .collect();

    // Union faces that share a plane key and an edge
    let mut sets = DisjointSet::new(faces.len());
    let mut owner: HashMap<([i64; 4], (u32, u32)), usize> = HashMap::new();
    for (i, face) in faces.iter().enumerate() {
        let Some(key) = keys[i] else { continue };
        for edge in face.edge_keys() {
            match owner.get(&(key, edge)) {
                Some(&j) => sets.union(i, j),
                None => {
                    owner.insert((key, edge), i);
                }
            }
        }
    }

    let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for i in 0..faces.len() {
        let root = sets.find(i);
        groups.entry(root).or_default().push(i);
    }

    groups
        .values()
        .map(|members| match members.as_slice() {
            [single] if keys[*single].is_none() => faces[*single].len(),
            _ => merged_corner_count(points, faces, members),
        })
        .collect()
}

/// Count turning vertices on the boundary of a merged face group.
fn merged_corner_count(points: &[Point3<f64>], faces: &[Face], members: &[usize]) -> usize {
    let mut edge_uses: HashMap<(u32, u32), usize> = HashMap::new();
    for &m in members {
        for edge in faces[m].edge_keys() {
            *edge_uses.entry(edge).or_insert(0) += 1;
        }
    }

    let mut boundary_neighbors: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
    for (&(a, b), &uses) in &edge_uses {
        if uses == 1 {
            boundary_neighbors.entry(a).or_default().push(b);
            boundary_neighbors.entry(b).or_default().push(a);
        }
    }

    boundary_neighbors
        .iter()
        .filter(|&(&v, neighbors)| match neighbors.as_slice() {
            [a, b] => !is_straight(points, v, *a, *b),
            _ => true,
        })
        .count()
}

/// Whether `v` lies on the straight line through `a` and `b`.
fn is_straight(points: &[Point3<f64>], v: u32, a: u32, b: u32) -> bool {
    let (Some(pv), Some(pa), Some(pb)) = (
        points.get(v as usize),
        points.get(a as usize),
        points.get(b as usize),
    ) else {
        return false;
    };
    let u = pa - pv;
    let w = pb - pv;
    u.cross(&w).norm() <= COLLINEAR_TOLERANCE * u.norm() * w.norm()
}

/// Render the face profile `F{n}-{cxVk,...}`, sorted by corner count.
///
/// # Example
///
/// ```
/// use form_taxonomy::face_profile;
/// use form_types::{Face, Point3};
///
/// // A unit square split into two triangles merges back into one polygon
/// let points = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let faces = [Face::new(vec![0, 1, 2]).unwrap(), Face::new(vec![0, 2, 3]).unwrap()];
/// assert_eq!(face_profile(&points, &faces), "F1-{1xV4}");
/// ```
#[must_use]
pub fn face_profile(points: &[Point3<f64>], faces: &[Face]) -> String {
    let counts = polygon_corner_counts(points, faces);
    let mut by_corners: BTreeMap<usize, usize> = BTreeMap::new();
    for &c in &counts {
        *by_corners.entry(c).or_insert(0) += 1;
    }
    let parts: Vec<String> = by_corners.iter().map(|(k, c)| format!("{c}xV{k}")).collect();
    format!("F{}-{{{}}}", counts.len(), parts.join(","))
}
