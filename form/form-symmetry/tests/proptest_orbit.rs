//! Property-based tests for group closure and orbit expansion.
//!
//! Run with: cargo test -p form-symmetry -- proptest

use form_symmetry::{SymmetryFamily, SymmetryGroup, SymmetryRegistry, expand_orbit, expand_wireframe};
use form_types::{FormTopology, Point3, PointSet, Wireframe, WireframeBuilder};
use hashbrown::HashSet;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// A half-integer grid point in a small box.
fn arb_grid_point() -> impl Strategy<Value = Point3<f64>> {
    prop::array::uniform3(-4i32..=4).prop_map(|[x, y, z]| {
        Point3::new(f64::from(x) * 0.5, f64::from(y) * 0.5, f64::from(z) * 0.5)
    })
}

/// Seed points with a handful of edges between them.
fn arb_seed() -> impl Strategy<Value = (Vec<Point3<f64>>, Vec<(u32, u32)>)> {
    prop::collection::vec(arb_grid_point(), 2..5).prop_flat_map(|points| {
        let n = points.len() as u32;
        let edges = prop::collection::vec((0..n, 0..n), 1..4);
        (Just(points), edges)
    })
}

fn arb_family() -> impl Strategy<Value = SymmetryFamily> {
    prop::sample::select(SymmetryFamily::ALL.to_vec())
}

fn is_closed_orbit(wireframe: &Wireframe, group: &SymmetryGroup) -> bool {
    let points = PointSet::from_points(wireframe.points().iter().copied());
    let edges: HashSet<(u32, u32)> = wireframe.edges().iter().map(|e| e.key()).collect();

    wireframe.edges().iter().all(|edge| {
        let a = &wireframe.points()[edge.a() as usize];
        let b = &wireframe.points()[edge.b() as usize];
        group.iter().all(|t| {
            match (points.find(&t.apply(a)), points.find(&t.apply(b))) {
                (Some(ia), Some(ib)) => {
                    edges.contains(&(ia.min(ib), ia.max(ib)))
                }
                _ => false,
            }
        })
    })
}

// =============================================================================
// Property Tests: Orbit Expansion
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Re-expanding an orbit adds nothing.
    #[test]
    fn orbit_expansion_is_idempotent((points, edges) in arb_seed(), family in arb_family()) {
        let registry = SymmetryRegistry::new();
        let group = registry.get(family);
        let first = expand_orbit(WireframeBuilder::new(), &points, &edges, &group);
        let second = expand_wireframe(first.clone(), &group);

        prop_assert_eq!(first.point_count(), second.point_count());
        prop_assert_eq!(first.edge_count(), second.edge_count());
    }

    /// Edge lists never contain loops or duplicate keys.
    #[test]
    fn orbit_edges_are_deduplicated((points, edges) in arb_seed(), family in arb_family()) {
        let group = family.build();
        let wireframe = expand_orbit(WireframeBuilder::new(), &points, &edges, &group);

        let mut seen = HashSet::new();
        for edge in wireframe.edges() {
            prop_assert!(edge.a() < edge.b());
            prop_assert!(seen.insert(edge.key()), "duplicate edge {:?}", edge.key());
        }
    }

    /// Every group image of every output edge is an output edge.
    #[test]
    fn orbit_is_closed_under_group((points, edges) in arb_seed()) {
        let group = SymmetryFamily::Cubic.build();
        let wireframe = expand_orbit(WireframeBuilder::new(), &points, &edges, &group);
        prop_assert!(is_closed_orbit(&wireframe, &group));
    }

    /// No two output points are closer than the merge tolerance.
    #[test]
    fn orbit_points_respect_merge_invariant((points, edges) in arb_seed(), family in arb_family()) {
        let group = family.build();
        let wireframe = expand_orbit(WireframeBuilder::new(), &points, &edges, &group);
        let pts = wireframe.points();
        for i in 0..pts.len() {
            for j in (i + 1)..pts.len() {
                prop_assert!((pts[i] - pts[j]).norm() > form_types::POINT_EPSILON);
            }
        }
    }
}
