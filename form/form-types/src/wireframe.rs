//! Wireframes: merged points plus deduplicated undirected edges.

use hashbrown::HashSet;
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::edge::Edge;
use crate::point::{POINT_EPSILON, PointSet};
use crate::traits::FormTopology;

/// Mutable working state for the generation pipeline.
///
/// The builder owns the point and edge lists exclusively; stages that need
/// to grow a wireframe take the builder by value and hand back a frozen
/// [`Wireframe`] via [`WireframeBuilder::finish`].
#[derive(Debug, Clone, Default)]
pub struct WireframeBuilder {
    points: PointSet,
    edges: Vec<Edge>,
    edge_keys: HashSet<Edge>,
}

impl WireframeBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing point set with no edges.
    #[must_use]
    pub fn with_points(points: PointSet) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    /// Find-or-create a point, returning its index.
    pub fn add_point(&mut self, p: Point3<f64>) -> u32 {
        self.points.find_or_insert(p)
    }

    /// Add an undirected edge between existing points.
    ///
    /// Returns `false` (and leaves the builder unchanged) for self-loops,
    /// duplicates and out-of-range indices.
    pub fn add_edge(&mut self, a: u32, b: u32) -> bool {
        let count = self.points.len();
        if a as usize >= count || b as usize >= count {
            return false;
        }
        match Edge::new(a, b) {
            Some(edge) if self.edge_keys.insert(edge) => {
                self.edges.push(edge);
                true
            }
            _ => false,
        }
    }

    /// Add an edge between two positions, merging them into existing points.
    pub fn add_segment(&mut self, start: Point3<f64>, end: Point3<f64>) -> bool {
        let a = self.add_point(start);
        let b = self.add_point(end);
        self.add_edge(a, b)
    }

    /// Whether the edge `a`–`b` already exists.
    #[must_use]
    pub fn has_edge(&self, a: u32, b: u32) -> bool {
        Edge::new(a, b).is_some_and(|e| self.edge_keys.contains(&e))
    }

    /// Current point count.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Current edge count.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Borrow the points gathered so far.
    #[must_use]
    pub fn points(&self) -> &[Point3<f64>] {
        self.points.as_slice()
    }

    /// Borrow the edges gathered so far.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Freeze the builder into an immutable wireframe.
    #[must_use]
    pub fn finish(self) -> Wireframe {
        Wireframe {
            points: self.points.into_vec(),
            edges: self.edges,
        }
    }
}

/// An immutable point list with a deduplicated, self-loop-free edge list.
///
/// # Example
///
/// ```
/// use form_types::{FormTopology, Point3, Wireframe};
///
/// let wireframe = Wireframe::from_segments([
///     (Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)),
///     (Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0)),
/// ]);
/// assert_eq!(wireframe.point_count(), 3);
/// assert!(wireframe.is_connected());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wireframe {
    points: Vec<Point3<f64>>,
    edges: Vec<Edge>,
}

impl Wireframe {
    /// Create an empty wireframe.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            points: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Build a wireframe from raw points and index pairs.
    ///
    /// Points are merged by epsilon and pairs are remapped accordingly;
    /// self-loops, duplicates and out-of-range pairs are dropped.
    #[must_use]
    pub fn from_parts(points: Vec<Point3<f64>>, pairs: &[(u32, u32)]) -> Self {
        let mut builder = WireframeBuilder::new();
        let remap: Vec<u32> = points.into_iter().map(|p| builder.add_point(p)).collect();
        for &(a, b) in pairs {
            if let (Some(&ra), Some(&rb)) = (remap.get(a as usize), remap.get(b as usize)) {
                builder.add_edge(ra, rb);
            }
        }
        builder.finish()
    }

    /// Build a wireframe from coordinate segments.
    #[must_use]
    pub fn from_segments(segments: impl IntoIterator<Item = (Point3<f64>, Point3<f64>)>) -> Self {
        let mut builder = WireframeBuilder::new();
        for (start, end) in segments {
            builder.add_segment(start, end);
        }
        builder.finish()
    }

    /// Reopen the wireframe for further growth.
    #[must_use]
    pub fn into_builder(self) -> WireframeBuilder {
        let mut builder = WireframeBuilder::with_points(PointSet::from_points(self.points));
        for edge in self.edges {
            builder.add_edge(edge.a(), edge.b());
        }
        builder
    }

    /// Euclidean length of an edge.
    ///
    /// Returns `None` if the edge references points outside this wireframe.
    #[must_use]
    pub fn edge_length(&self, edge: Edge) -> Option<f64> {
        let a = self.points.get(edge.a() as usize)?;
        let b = self.points.get(edge.b() as usize)?;
        Some((b - a).norm())
    }

    /// Distinct edge lengths in ascending order, merged by [`POINT_EPSILON`].
    #[must_use]
    pub fn distinct_edge_lengths(&self) -> Vec<f64> {
        let mut lengths: Vec<f64> = self
            .edges
            .iter()
            .filter_map(|&e| self.edge_length(e))
            .collect();
        lengths.sort_by(f64::total_cmp);
        lengths.dedup_by(|a, b| (*a - *b).abs() <= POINT_EPSILON);
        lengths
    }

    /// Whether every point is reachable from every other through edges.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.adjacency().is_connected()
    }

    /// Consume the wireframe and return its point and edge lists.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Point3<f64>>, Vec<Edge>) {
        (self.points, self.edges)
    }
}

impl FormTopology for Wireframe {
    fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

impl FormTopology for WireframeBuilder {
    fn points(&self) -> &[Point3<f64>] {
        self.points.as_slice()
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
