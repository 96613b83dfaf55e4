//! Closure pass adding missing shell edges.
//!
//! Two points are joined when they are not yet adjacent, their distance
//! matches one of the shell distances, and they share a neighbour. Each
//! such edge closes a triangle with edges already present, so repeating the
//! pass until nothing changes triangulates and tetrahedralises the orbit.

use form_types::{POINT_EPSILON, Wireframe};
use hashbrown::HashSet;
use tracing::{debug, warn};

/// Result of [`complete_wireframe`].
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// The completed wireframe.
    pub wireframe: Wireframe,
    /// Number of edges added.
    pub added: usize,
    /// Whether the pass stopped at the edge budget with candidates left.
    pub budget_exhausted: bool,
}

/// Add shell-distance edges that close triangles, up to a fixed point.
///
/// `budget` caps the total edge count of the result. When it is reached
/// while candidates remain, the pass stops and the result is flagged.
///
/// # Example
///
/// ```
/// use form_generate::complete_wireframe;
/// use form_types::{FormTopology, Point3, Wireframe};
///
/// // Two sides of a unit right triangle; the hypotenuse is sqrt(2)
/// let open = Wireframe::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     &[(0, 1), (0, 2)],
/// );
///
/// let unchanged = complete_wireframe(open.clone(), &[1.0], 100);
/// assert_eq!(unchanged.added, 0);
///
/// let closed = complete_wireframe(open, &[1.0, 2.0_f64.sqrt()], 100);
/// assert_eq!(closed.added, 1);
/// assert_eq!(closed.wireframe.edge_count(), 3);
/// ```
#[must_use]
pub fn complete_wireframe(wireframe: Wireframe, shell_distances: &[f64], budget: usize) -> Completion {
    let mut builder = wireframe.into_builder();
    let n = builder.point_count();

    let mut neighbors: Vec<HashSet<u32>> = vec![HashSet::new(); n];
    for edge in builder.edges() {
        neighbors[edge.a() as usize].insert(edge.b());
        neighbors[edge.b() as usize].insert(edge.a());
    }

    let on_shell = |d: f64| shell_distances.iter().any(|s| (d - s).abs() < POINT_EPSILON);

    let mut added = 0;
    let mut budget_exhausted = false;

    'sweep: loop {
        let mut candidates = Vec::new();
        for a in 0..n {
            for b in a + 1..n {
                if neighbors[a].contains(&(b as u32)) || neighbors[a].is_disjoint(&neighbors[b]) {
                    continue;
                }
                let points = builder.points();
                if on_shell((points[b] - points[a]).norm()) {
                    candidates.push((a, b));
                }
            }
        }
        if candidates.is_empty() {
            break;
        }

        for (a, b) in candidates {
            if builder.edge_count() >= budget {
                budget_exhausted = true;
                break 'sweep;
            }
            #[allow(clippy::cast_possible_truncation)]
            // Truncation: point indices come from a u32-indexed builder
            let (ia, ib) = (a as u32, b as u32);
            if builder.add_edge(ia, ib) {
                neighbors[a].insert(ib);
                neighbors[b].insert(ia);
                added += 1;
            }
        }
    }

    if budget_exhausted {
        warn!("Completion stopped at edge budget {budget} after adding {added} edges");
    } else {
        debug!("Completion added {added} edges");
    }

    Completion {
        wireframe: builder.finish(),
        added,
        budget_exhausted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use form_types::{FormTopology, Point3};

    fn tetra_star() -> Wireframe {
        // Apex joined to the other three tetrahedron corners
        Wireframe::from_parts(
            vec![
                Point3::new(1.0, 1.0, 1.0),
                Point3::new(1.0, -1.0, -1.0),
                Point3::new(-1.0, 1.0, -1.0),
                Point3::new(-1.0, -1.0, 1.0),
            ],
            &[(0, 1), (0, 2), (0, 3)],
        )
    }

    #[test]
    fn closes_tetrahedron() {
        let shell = 8.0_f64.sqrt();
        let completion = complete_wireframe(tetra_star(), &[shell], 100);
        assert_eq!(completion.added, 3);
        assert_eq!(completion.wireframe.edge_count(), 6);
        assert!(!completion.budget_exhausted);
    }

    #[test]
    fn stops_at_budget() {
        let shell = 8.0_f64.sqrt();
        let completion = complete_wireframe(tetra_star(), &[shell], 4);
        assert_eq!(completion.added, 1);
        assert_eq!(completion.wireframe.edge_count(), 4);
        assert!(completion.budget_exhausted);
    }

    #[test]
    fn budget_without_candidates_is_not_exhausted() {
        let completion = complete_wireframe(tetra_star(), &[1.0], 0);
        assert_eq!(completion.added, 0);
        assert!(!completion.budget_exhausted);
    }

    #[test]
    fn adds_only_pairs_with_a_common_neighbour() {
        // Path along three sides of a unit square plus a loose point
        let square = Wireframe::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
            &[(0, 1), (1, 2), (2, 3)],
        );
        let completion = complete_wireframe(square, &[2.0_f64.sqrt()], 100);
        // Diagonals 0-2 and 1-3 close triangles; point 4 stays isolated
        assert_eq!(completion.added, 2);
        assert_eq!(completion.wireframe.edge_count(), 5);
    }

    #[test]
    fn empty_wireframe() {
        let completion = complete_wireframe(Wireframe::new(), &[1.0], 10);
        assert_eq!(completion.added, 0);
        assert!(completion.wireframe.is_empty());
    }
}
