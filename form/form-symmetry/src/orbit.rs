//! Orbit expansion of seed geometry under a symmetry group.

use form_types::{FormTopology, Point3, Wireframe, WireframeBuilder};
use tracing::debug;

use crate::group::SymmetryGroup;

/// Expand seed points and edges under every transform of `group`.
///
/// The builder is consumed, so geometry already in it is kept and merged
/// with the orbit. For each seed edge and each transform both endpoints are
/// mapped through find-or-create; the image edge is added unless it
/// collapses to a point or already exists. Seed points not referenced by any
/// edge are expanded too. Seed edges referencing missing seed points are
/// skipped.
///
/// An empty group acts as the identity.
///
/// # Example
///
/// ```
/// use form_symmetry::{SymmetryFamily, expand_orbit};
/// use form_types::{FormTopology, Point3, WireframeBuilder};
///
/// let seed = [Point3::new(0.5, 0.5, 0.5), Point3::new(0.5, 0.5, -0.5)];
/// let cube = expand_orbit(
///     WireframeBuilder::new(),
///     &seed,
///     &[(0, 1)],
///     &SymmetryFamily::Cubic.build(),
/// );
/// assert_eq!(cube.point_count(), 8);
/// assert_eq!(cube.edge_count(), 12);
/// ```
#[must_use]
pub fn expand_orbit(
    mut builder: WireframeBuilder,
    seed_points: &[Point3<f64>],
    seed_edges: &[(u32, u32)],
    group: &SymmetryGroup,
) -> Wireframe {
    let transforms = group.effective_transforms();
    let mut referenced = vec![false; seed_points.len()];

    for &(a, b) in seed_edges {
        let (Some(pa), Some(pb)) = (seed_points.get(a as usize), seed_points.get(b as usize)) else {
            continue;
        };
        referenced[a as usize] = true;
        referenced[b as usize] = true;

        for t in &transforms {
            let ia = builder.add_point(t.apply(pa));
            let ib = builder.add_point(t.apply(pb));
            builder.add_edge(ia, ib);
        }
    }

    for (p, _) in seed_points.iter().zip(&referenced).filter(|(_, used)| !**used) {
        for t in &transforms {
            builder.add_point(t.apply(p));
        }
    }

    debug!(
        "Orbit under '{}' ({} transforms): {} points, {} edges",
        group.label(),
        transforms.len(),
        builder.point_count(),
        builder.edge_count()
    );
    builder.finish()
}

/// Re-expand an existing wireframe using all of its points and edges as the
/// seed.
///
/// For a wireframe that is already closed under `group` the result equals
/// the input.
#[must_use]
pub fn expand_wireframe(wireframe: Wireframe, group: &SymmetryGroup) -> Wireframe {
    let points = wireframe.points().to_vec();
    let pairs: Vec<(u32, u32)> = wireframe.edges().iter().map(|e| e.key()).collect();
    expand_orbit(wireframe.into_builder(), &points, &pairs, group)
}
