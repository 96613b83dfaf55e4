//! Traits for form types.

use nalgebra::Point3;

use crate::adjacency::PointAdjacency;
use crate::edge::Edge;

/// Trait for types that expose a point list and an undirected edge list.
///
/// Detection and classification stages are written against this trait so
/// they accept a frozen [`Wireframe`](crate::Wireframe), a finished
/// [`Form`](crate::Form), or a builder mid-pipeline.
pub trait FormTopology {
    /// Borrow the points in emission order.
    fn points(&self) -> &[Point3<f64>];

    /// Borrow the edges in emission order.
    fn edges(&self) -> &[Edge];

    /// Get the number of points.
    fn point_count(&self) -> usize {
        self.points().len()
    }

    /// Get the number of edges.
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Check if there is no geometry at all.
    fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    /// Get a point by index.
    fn point(&self, index: u32) -> Option<&Point3<f64>> {
        self.points().get(index as usize)
    }

    /// Build sorted neighbour lists for every point.
    fn adjacency(&self) -> PointAdjacency {
        PointAdjacency::build(self.point_count(), self.edges())
    }
}
