//! Removal of faces buried inside the form.
//!
//! A face is kept if some part of it can see out: from its centroid or from
//! a sample near one of its corners, a ray along either normal direction
//! escapes without hitting another face. Faces blocked everywhere on both
//! sides are internal cross-sections.

use form_types::{Face, Point3, Vector3};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance on barycentric coordinates and parallel rays.
const RAY_EPSILON: f64 = 1e-9;

/// Corner sample weights: own vertex, next vertex, centroid.
///
/// Unequal weights keep samples off mirror planes through vertices and edge
/// midpoints.
const CORNER_WEIGHTS: (f64, f64, f64) = (0.6, 0.25, 0.15);

/// Parameters for the visibility filter.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VisibilityParams {
    /// Distance the ray origin is pushed off the face along the ray.
    pub offset: f64,

    /// Hits closer than this to the ray origin are ignored.
    pub bias: f64,
}

impl Default for VisibilityParams {
    fn default() -> Self {
        Self {
            offset: 1e-3,
            bias: 1e-6,
        }
    }
}

impl VisibilityParams {
    /// Create params with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the origin offset.
    #[must_use]
    pub const fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the hit bias.
    #[must_use]
    pub const fn with_bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }
}

/// Drop faces that are occluded by other faces in both normal directions.
///
/// Rays are cast from the face centroid and from one sample inside each
/// corner. A ray that grazes another face's edge or vertex counts as
/// blocked, so a face is only kept on an unambiguous escape; a face whose
/// centre is buried but whose corners stick out (the spikes of a star) is
/// kept through its corner samples.
///
/// Faces whose plane cannot be determined are kept. Output order follows
/// input order.
///
/// # Example
///
/// ```
/// use form_topology::{VisibilityParams, filter_visible_faces};
/// use form_types::{Face, Point3};
///
/// let points = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let faces = vec![Face::new(vec![0, 1, 2]).unwrap()];
/// let visible = filter_visible_faces(&points, &faces, &VisibilityParams::default());
/// assert_eq!(visible.len(), 1);
/// ```
#[must_use]
pub fn filter_visible_faces(points: &[Point3<f64>], faces: &[Face], params: &VisibilityParams) -> Vec<Face> {
    let triangles: Vec<Vec<[Point3<f64>; 3]>> = faces.iter().map(|f| fan(points, f)).collect();

    let visible: Vec<Face> = faces
        .iter()
        .enumerate()
        .filter(|&(i, face)| {
            let (Some(samples), Some(normal)) = (sample_points(points, face), face.normal(points)) else {
                return true;
            };
            let blocked = |sample: &Point3<f64>, direction: Vector3<f64>| {
                let origin = sample + direction * params.offset;
                triangles
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .flat_map(|(_, tris)| tris.iter())
                    .any(|tri| ray_triangle_intersect(&origin, &direction, tri, RAY_EPSILON).is_some_and(|t| t > params.bias))
            };
            samples
                .iter()
                .any(|sample| !blocked(sample, normal) || !blocked(sample, -normal))
        })
        .map(|(_, face)| face.clone())
        .collect();

    debug!("Visibility filter kept {} of {} faces", visible.len(), faces.len());
    visible
}

/// The centroid followed by one interior sample per corner.
fn sample_points(points: &[Point3<f64>], face: &Face) -> Option<Vec<Point3<f64>>> {
    let corners = face.positions(points)?;
    let centroid = face.centroid(points)?;
    let (w_own, w_next, w_centroid) = CORNER_WEIGHTS;

    let samples = std::iter::once(centroid)
        .chain(corners.iter().zip(corners.iter().cycle().skip(1)).map(|(own, next)| {
            Point3::from(own.coords * w_own + next.coords * w_next + centroid.coords * w_centroid)
        }))
        .collect();
    Some(samples)
}

fn fan(points: &[Point3<f64>], face: &Face) -> Vec<[Point3<f64>; 3]> {
    face.fan_triangles()
        .filter_map(|[a, b, c]| {
            Some([
                *points.get(a as usize)?,
                *points.get(b as usize)?,
                *points.get(c as usize)?,
            ])
        })
        .collect()
}

/// Möller–Trumbore ray-triangle intersection.
///
/// Returns the ray parameter `t > epsilon` of the hit. Barycentric bounds
/// are widened by `epsilon`, so rays through a triangle's edge or vertex
/// count as hits.
///
/// # Example
///
/// ```
/// use form_topology::ray_triangle_intersect;
/// use form_types::{Point3, Vector3};
///
/// let tri = [
///     Point3::new(-1.0, -1.0, 1.0),
///     Point3::new(1.0, -1.0, 1.0),
///     Point3::new(0.0, 1.0, 1.0),
/// ];
/// let t = ray_triangle_intersect(&Point3::origin(), &Vector3::z(), &tri, 1e-9);
/// assert!((t.unwrap() - 1.0).abs() < 1e-12);
/// ```
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn ray_triangle_intersect(
    origin: &Point3<f64>,
    direction: &Vector3<f64>,
    tri: &[Point3<f64>; 3],
    epsilon: f64,
) -> Option<f64> {
    let edge1 = tri[1] - tri[0];
    let edge2 = tri[2] - tri[0];

    let h = direction.cross(&edge2);
    let a = edge1.dot(&h);

    // Ray is parallel to triangle
    if a.abs() < epsilon {
        return None;
    }

    let f = 1.0 / a;
    let s = origin - tri[0];
    let u = f * s.dot(&h);

    if !(-epsilon..=1.0 + epsilon).contains(&u) {
        return None;
    }

    let q = s.cross(&edge1);
    let v = f * direction.dot(&q);

    if v < -epsilon || u + v > 1.0 + epsilon {
        return None;
    }

    let t = f * edge2.dot(&q);

    if t > epsilon { Some(t) } else { None }
}
