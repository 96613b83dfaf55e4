//! Unit direction sets of the regular polyhedra used for shell lattices.

use form_types::{Point3, Vector3};

/// Golden ratio.
pub const PHI: f64 = 1.618_033_988_749_895;

/// The twelve icosahedron vertices `(0, ±1, ±φ)` and cyclic permutations.
#[must_use]
pub fn icosahedron_vertices() -> Vec<Point3<f64>> {
    let mut vertices = Vec::with_capacity(12);
    for s1 in [1.0, -1.0] {
        for s2 in [1.0, -1.0] {
            vertices.push(Point3::new(0.0, s1, s2 * PHI));
            vertices.push(Point3::new(s1, s2 * PHI, 0.0));
            vertices.push(Point3::new(s2 * PHI, 0.0, s1));
        }
    }
    vertices
}

/// The twenty dodecahedron vertices dual to [`icosahedron_vertices`]:
/// `(±1, ±1, ±1)` plus `(0, ±φ, ±1/φ)` and cyclic permutations.
#[must_use]
pub fn dodecahedron_vertices() -> Vec<Point3<f64>> {
    let mut vertices = cube_vertices();
    let inv = 1.0 / PHI;
    for s1 in [1.0, -1.0] {
        for s2 in [1.0, -1.0] {
            vertices.push(Point3::new(0.0, s1 * PHI, s2 * inv));
            vertices.push(Point3::new(s1 * inv, 0.0, s2 * PHI));
            vertices.push(Point3::new(s1 * PHI, s2 * inv, 0.0));
        }
    }
    vertices
}

/// The eight cube vertices `(±1, ±1, ±1)`.
#[must_use]
pub fn cube_vertices() -> Vec<Point3<f64>> {
    let mut vertices = Vec::with_capacity(8);
    for x in [1.0, -1.0] {
        for y in [1.0, -1.0] {
            for z in [1.0, -1.0] {
                vertices.push(Point3::new(x, y, z));
            }
        }
    }
    vertices
}

/// Unit directions of every icosahedral shell: icosahedron, dodecahedron
/// and cube vertices, normalised. Cube directions coincide with eight of the
/// dodecahedron's and merge away when shells are built.
#[must_use]
pub fn shell_directions() -> Vec<Vector3<f64>> {
    icosahedron_vertices()
        .into_iter()
        .chain(dodecahedron_vertices())
        .chain(cube_vertices())
        .filter_map(|p| p.coords.try_normalize(f64::EPSILON))
        .collect()
}
