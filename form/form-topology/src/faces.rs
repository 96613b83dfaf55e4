//! Elementary planar cycle detection.
//!
//! Faces are found by a bounded depth-first search from every start vertex
//! `s`, extending only to neighbours with index greater than `s`. A path is
//! abandoned as soon as it stops being planar or a new vertex would form a
//! chord with an earlier path member, so every closed cycle is elementary
//! by construction.

use form_types::{Face, FormTopology, PLANARITY_EPSILON, Point3, PointAdjacency, fit_plane};
use hashbrown::HashSet;
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest face size.
pub const MIN_CYCLE_LEN: usize = 3;

/// Largest face size.
pub const MAX_CYCLE_LEN: usize = 12;

/// Parameters for face detection.
///
/// # Example
///
/// ```
/// use form_topology::FaceDetectParams;
///
/// let params = FaceDetectParams::triangles_only();
/// assert_eq!(params.max_cycle_len, 3);
///
/// let params = FaceDetectParams::new().with_max_search_steps(Some(10_000));
/// assert_eq!(params.max_search_steps, Some(10_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceDetectParams {
    /// Shortest cycle to report (clamped to at least 3).
    pub min_cycle_len: usize,

    /// Longest cycle to report (clamped to at most 12).
    pub max_cycle_len: usize,

    /// Stop after this many path extensions; `None` searches exhaustively.
    pub max_search_steps: Option<usize>,
}

impl Default for FaceDetectParams {
    fn default() -> Self {
        Self {
            min_cycle_len: MIN_CYCLE_LEN,
            max_cycle_len: MAX_CYCLE_LEN,
            max_search_steps: Some(2_000_000),
        }
    }
}

impl FaceDetectParams {
    /// Create params with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only report triangles.
    #[must_use]
    pub fn triangles_only() -> Self {
        Self {
            min_cycle_len: 3,
            max_cycle_len: 3,
            ..Self::default()
        }
    }

    /// Set the cycle length bounds.
    #[must_use]
    pub const fn with_cycle_len(mut self, min: usize, max: usize) -> Self {
        self.min_cycle_len = min;
        self.max_cycle_len = max;
        self
    }

    /// Set the search step budget.
    #[must_use]
    pub const fn with_max_search_steps(mut self, steps: Option<usize>) -> Self {
        self.max_search_steps = steps;
        self
    }

    /// Bounds after clamping to `3..=12`.
    #[must_use]
    pub fn effective_bounds(&self) -> (usize, usize) {
        (
            self.min_cycle_len.max(MIN_CYCLE_LEN),
            self.max_cycle_len.min(MAX_CYCLE_LEN),
        )
    }
}

/// Result of face detection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaceDetection {
    /// Deduplicated faces in discovery order.
    pub faces: Vec<Face>,

    /// Whether the search stopped at the step budget.
    pub truncated: bool,
}

/// Find elementary planar cycles in a wireframe.
///
/// Each cycle is reported once, in the winding first discovered from its
/// smallest vertex.
///
/// # Example
///
/// ```
/// use form_topology::{FaceDetectParams, detect_faces};
/// use form_types::{Point3, Wireframe};
///
/// // A unit square with one diagonal: two triangles, no square
/// let wireframe = Wireframe::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(1.0, 1.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)],
/// );
/// let detection = detect_faces(&wireframe, &FaceDetectParams::default());
/// assert_eq!(detection.faces.len(), 2);
/// assert!(detection.faces.iter().all(|f| f.len() == 3));
/// ```
#[must_use]
pub fn detect_faces<T: FormTopology + ?Sized>(topology: &T, params: &FaceDetectParams) -> FaceDetection {
    let (min_len, max_len) = params.effective_bounds();
    if min_len > max_len {
        return FaceDetection::default();
    }

    let adjacency = topology.adjacency();
    let mut search = CycleSearch {
        points: topology.points(),
        adjacency: &adjacency,
        min_len,
        max_len,
        step_budget: params.max_search_steps,
        steps: 0,
        seen: HashSet::new(),
        faces: Vec::new(),
    };

    let mut truncated = false;
    for s in 0..topology.point_count() {
        let Ok(s) = u32::try_from(s) else { break };
        if !search.search_from(s) {
            truncated = true;
            warn!(
                "Face search stopped at its step budget ({} steps, {} faces so far)",
                search.steps,
                search.faces.len()
            );
            break;
        }
    }

    debug!("Detected {} faces in {} search steps", search.faces.len(), search.steps);
    FaceDetection {
        faces: search.faces,
        truncated,
    }
}

/// Whether no two non-consecutive members of `face` are joined by an edge.
#[must_use]
pub fn is_elementary(face: &Face, adjacency: &PointAdjacency) -> bool {
    let idx = face.indices();
    let n = idx.len();
    (0..n).all(|i| {
        ((i + 2)..n)
            .filter(|&j| !(i == 0 && j == n - 1))
            .all(|j| !adjacency.are_adjacent(idx[i], idx[j]))
    })
}

struct CycleSearch<'a> {
    points: &'a [Point3<f64>],
    adjacency: &'a PointAdjacency,
    min_len: usize,
    max_len: usize,
    step_budget: Option<usize>,
    steps: usize,
    seen: HashSet<Vec<u32>>,
    faces: Vec<Face>,
}

impl CycleSearch<'_> {
    /// Explicit-stack DFS from `s`. Returns false if the step budget ran out.
    fn search_from(&mut self, s: u32) -> bool {
        let mut path = vec![s];
        // Next neighbour position to try for each path member
        let mut cursors = vec![0_usize];

        while let Some(&cursor) = cursors.last() {
            let Some(&v) = path.last() else { break };
            let neighbors = self.adjacency.neighbors(v);

            let Some(&w) = neighbors.get(cursor) else {
                cursors.pop();
                path.pop();
                continue;
            };
            if let Some(c) = cursors.last_mut() {
                *c += 1;
            }

            if w <= s || path.contains(&w) || self.forms_chord(&path, w) || !self.stays_planar(&path, w) {
                continue;
            }

            let len = path.len() + 1;
            if len >= MIN_CYCLE_LEN && self.adjacency.are_adjacent(w, s) {
                // Closing here; extending past w would leave s-w as a chord.
                if len >= self.min_len {
                    self.accept(&path, w);
                }
                continue;
            }

            if len < self.max_len {
                self.steps += 1;
                if self.step_budget.is_some_and(|budget| self.steps > budget) {
                    return false;
                }
                path.push(w);
                cursors.push(0);
            }
        }
        true
    }

    /// Whether `w` is adjacent to a path member other than the start and
    /// the current end.
    fn forms_chord(&self, path: &[u32], w: u32) -> bool {
        path.len() > 2
            && path[1..path.len() - 1]
                .iter()
                .any(|&p| self.adjacency.are_adjacent(p, w))
    }

    fn stays_planar(&self, path: &[u32], w: u32) -> bool {
        if path.len() < 2 {
            return true;
        }
        let positions: Vec<Point3<f64>> = path
            .iter()
            .chain(std::iter::once(&w))
            .filter_map(|&i| self.points.get(i as usize).copied())
            .collect();
        match fit_plane(&positions) {
            Some(plane) => positions.iter().all(|p| plane.contains(p, PLANARITY_EPSILON)),
            // Collinear so far
            None => true,
        }
    }

    fn accept(&mut self, path: &[u32], w: u32) {
        let mut indices = path.to_vec();
        indices.push(w);
        let Some(face) = Face::new(indices) else {
            return;
        };
        // Straight-line cycles have no plane
        if face.plane(self.points).is_none() {
            return;
        }
        if self.seen.insert(face.sorted_key()) {
            self.faces.push(face);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use form_types::Wireframe;

    fn cube() -> Wireframe {
        let mut points = Vec::new();
        for z in [-0.5, 0.5] {
            for y in [-0.5, 0.5] {
                for x in [-0.5, 0.5] {
                    points.push(Point3::new(x, y, z));
                }
            }
        }
        // Index = x + 2y + 4z; edges join indices differing in one bit
        let mut pairs = Vec::new();
        for a in 0..8_u32 {
            for bit in [1, 2, 4] {
                if a & bit == 0 {
                    pairs.push((a, a | bit));
                }
            }
        }
        Wireframe::from_parts(points, &pairs)
    }

    fn octahedron() -> Wireframe {
        let points = vec![
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, -1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, -1.0),
        ];
        let mut pairs = Vec::new();
        for a in 0..6_u32 {
            for b in (a + 1)..6 {
                // Opposite vertices are 2k, 2k+1
                if a / 2 != b / 2 {
                    pairs.push((a, b));
                }
            }
        }
        Wireframe::from_parts(points, &pairs)
    }

    #[test]
    fn cube_has_six_squares() {
        let detection = detect_faces(&cube(), &FaceDetectParams::default());
        assert!(!detection.truncated);
        assert_eq!(detection.faces.len(), 6);
        assert!(detection.faces.iter().all(|f| f.len() == 4));
    }

    #[test]
    fn octahedron_has_triangles_and_equators() {
        let wireframe = octahedron();
        let detection = detect_faces(&wireframe, &FaceDetectParams::default());
        let triangles = detection.faces.iter().filter(|f| f.len() == 3).count();
        let squares = detection.faces.iter().filter(|f| f.len() == 4).count();
        assert_eq!(triangles, 8);
        assert_eq!(squares, 3);
        assert_eq!(detection.faces.len(), 11);

        let adjacency = wireframe.adjacency();
        assert!(detection.faces.iter().all(|f| is_elementary(f, &adjacency)));
    }

    #[test]
    fn cycle_bounds_filter_faces() {
        let params = FaceDetectParams::new().with_cycle_len(4, 4);
        let detection = detect_faces(&octahedron(), &params);
        assert_eq!(detection.faces.len(), 3);

        let triangles = detect_faces(&octahedron(), &FaceDetectParams::triangles_only());
        assert_eq!(triangles.faces.len(), 8);

        let empty = detect_faces(&cube(), &FaceDetectParams::new().with_cycle_len(5, 4));
        assert!(empty.faces.is_empty());
    }

    #[test]
    fn chorded_square_is_rejected() {
        let wireframe = Wireframe::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            &[(0, 1), (1, 2), (2, 3), (3, 0), (1, 3)],
        );
        let detection = detect_faces(&wireframe, &FaceDetectParams::default());
        assert_eq!(detection.faces.len(), 2);
        assert!(detection.faces.iter().all(|f| f.len() == 3));
    }

    #[test]
    fn skew_quadrilateral_is_rejected() {
        let wireframe = Wireframe::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 1.0),
            ],
            &[(0, 1), (1, 2), (2, 3), (3, 0)],
        );
        let detection = detect_faces(&wireframe, &FaceDetectParams::default());
        assert!(detection.faces.is_empty());
    }

    #[test]
    fn collinear_triangle_is_rejected() {
        let wireframe = Wireframe::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
            ],
            &[(0, 1), (1, 2), (0, 2)],
        );
        assert!(detect_faces(&wireframe, &FaceDetectParams::default()).faces.is_empty());
    }

    #[test]
    fn step_budget_truncates() {
        let params = FaceDetectParams::new().with_max_search_steps(Some(2));
        let detection = detect_faces(&cube(), &params);
        assert!(detection.truncated);
        assert!(detection.faces.len() < 6);
    }

    #[test]
    fn empty_wireframe_has_no_faces() {
        let detection = detect_faces(&Wireframe::new(), &FaceDetectParams::default());
        assert!(detection.faces.is_empty());
        assert!(!detection.truncated);
    }

    #[test]
    fn elementary_check() {
        let octa = octahedron();
        let adjacency = octa.adjacency();
        // 0 (+x), 2 (+y), 1 (-x), 4 (+z): 2 and 4 are adjacent
        let chorded = Face::new(vec![0, 2, 1, 4]).unwrap();
        assert!(!is_elementary(&chorded, &adjacency));
        let equator = Face::new(vec![0, 2, 1, 3]).unwrap();
        assert!(is_elementary(&equator, &adjacency));
    }
}
