//! Seed geometry and random shell walks.

use form_lattice::Lattice;
use form_types::{POINT_EPSILON, Point3, points_coincide};
use rand::Rng;
use tracing::debug;

/// Seed points and edges handed to orbit expansion.
///
/// Edges index into `points`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Seed {
    /// Seed points.
    pub points: Vec<Point3<f64>>,
    /// Seed edges as index pairs into `points`.
    pub edges: Vec<(u32, u32)>,
}

impl Seed {
    /// Create a seed from points and index pairs.
    #[must_use]
    pub const fn new(points: Vec<Point3<f64>>, edges: Vec<(u32, u32)>) -> Self {
        Self { points, edges }
    }

    /// A single-edge seed.
    ///
    /// # Example
    ///
    /// ```
    /// use form_generate::Seed;
    /// use form_types::Point3;
    ///
    /// let seed = Seed::segment(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
    /// assert!(!seed.is_degenerate());
    ///
    /// let seed = Seed::segment(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 0.0));
    /// assert!(seed.is_degenerate());
    /// ```
    #[must_use]
    pub fn segment(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self {
            points: vec![start, end],
            edges: vec![(0, 1)],
        }
    }

    /// Whether no edge joins two distinct existing points.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !self.edges.iter().any(|&(a, b)| {
            match (self.points.get(a as usize), self.points.get(b as usize)) {
                (Some(pa), Some(pb)) => !points_coincide(pa, pb),
                _ => false,
            }
        })
    }

    /// Distinct lengths of the seed's valid edges, ascending.
    #[must_use]
    pub fn edge_lengths(&self) -> Vec<f64> {
        let mut lengths: Vec<f64> = self
            .edges
            .iter()
            .filter_map(|&(a, b)| {
                let pa = self.points.get(a as usize)?;
                let pb = self.points.get(b as usize)?;
                let d = (pb - pa).norm();
                (!points_coincide(pa, pb)).then_some(d)
            })
            .collect();
        lengths.sort_by(f64::total_cmp);
        lengths.dedup_by(|a, b| (*a - *b).abs() < POINT_EPSILON);
        lengths
    }
}

/// Build a seed by walking along a distance shell of the lattice.
///
/// A start point and a second point are drawn uniformly; their distance is
/// the shell radius. The first edge joins them, then each further step moves
/// from the current point to an unvisited lattice point at the same radius.
/// The walk ends early when no such point remains.
///
/// Returns `None` when the lattice has fewer than two points or the two
/// draws pick the same point.
///
/// # Example
///
/// ```
/// use form_generate::random_walk_seed;
/// use form_lattice::{LatticeParams, generate_lattice};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let lattice = generate_lattice(&LatticeParams::cartesian(2.0, 2)).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// if let Some(seed) = random_walk_seed(&lattice, 4, &mut rng) {
///     assert!(seed.edges.len() <= 4);
///     assert_eq!(seed.edge_lengths().len(), 1);
/// }
/// ```
pub fn random_walk_seed<R: Rng + ?Sized>(lattice: &Lattice, steps: usize, rng: &mut R) -> Option<Seed> {
    let n = lattice.len();
    if n < 2 {
        debug!("Lattice has {n} points, no walk possible");
        return None;
    }

    #[allow(clippy::cast_possible_truncation)]
    // Truncation: lattice sizes are bounded far below u32::MAX
    let (start, second) = (rng.gen_range(0..n) as u32, rng.gen_range(0..n) as u32);
    if start == second {
        debug!("Random walk drew the same point twice");
        return None;
    }

    let (Some(&p_start), Some(&p_second)) = (lattice.point(start), lattice.point(second)) else {
        return None;
    };
    let radius = (p_second - p_start).norm();

    let mut visited = vec![start, second];
    let mut edges = vec![(0, 1)];
    let mut current = second;

    for _ in 1..steps {
        let candidates: Vec<u32> = lattice
            .points_at_distance(current, radius)
            .into_iter()
            .filter(|i| !visited.contains(i))
            .collect();
        if candidates.is_empty() {
            break;
        }
        let next = candidates[rng.gen_range(0..candidates.len())];
        #[allow(clippy::cast_possible_truncation)]
        let from = (visited.len() - 1) as u32;
        #[allow(clippy::cast_possible_truncation)]
        let to = visited.len() as u32;
        visited.push(next);
        edges.push((from, to));
        current = next;
    }

    let points = visited
        .iter()
        .filter_map(|&i| lattice.point(i).copied())
        .collect();

    debug!("Random walk seed: radius {radius:.4}, {} edges", edges.len());
    Some(Seed::new(points, edges))
}
