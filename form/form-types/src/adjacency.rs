//! Point adjacency for wireframe graphs.
//!
//! Provides sorted neighbour lists so that cycle search, completion and
//! connectivity checks can query `are_adjacent` in logarithmic time.

use crate::edge::Edge;

/// Sorted neighbour lists for every point of a wireframe.
#[derive(Debug, Clone, Default)]
pub struct PointAdjacency {
    neighbors: Vec<Vec<u32>>,
}

impl PointAdjacency {
    /// Build adjacency from a point count and an edge list.
    ///
    /// Edges referencing points outside `0..point_count` are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use form_types::{Edge, PointAdjacency};
    ///
    /// let edges: Vec<Edge> = [(0, 1), (1, 2), (2, 0)]
    ///     .iter()
    ///     .filter_map(|&(a, b)| Edge::new(a, b))
    ///     .collect();
    /// let adj = PointAdjacency::build(3, &edges);
    ///
    /// assert_eq!(adj.neighbors(0), &[1, 2]);
    /// assert!(adj.are_adjacent(2, 1));
    /// ```
    #[must_use]
    pub fn build(point_count: usize, edges: &[Edge]) -> Self {
        let mut neighbors = vec![Vec::new(); point_count];
        for edge in edges {
            let (a, b) = edge.key();
            if (b as usize) < point_count {
                neighbors[a as usize].push(b);
                neighbors[b as usize].push(a);
            }
        }
        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
        }
        Self { neighbors }
    }

    /// Sorted neighbours of `v`; empty for unknown points.
    #[must_use]
    pub fn neighbors(&self, v: u32) -> &[u32] {
        self.neighbors.get(v as usize).map_or(&[], Vec::as_slice)
    }

    /// Number of neighbours of `v`.
    #[must_use]
    pub fn degree(&self, v: u32) -> usize {
        self.neighbors(v).len()
    }

    /// Whether an edge joins `a` and `b`.
    #[must_use]
    pub fn are_adjacent(&self, a: u32, b: u32) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }

    /// Whether `a` and `b` share at least one neighbour.
    #[must_use]
    pub fn share_neighbor(&self, a: u32, b: u32) -> bool {
        let (na, nb) = (self.neighbors(a), self.neighbors(b));
        let (mut i, mut j) = (0, 0);
        while i < na.len() && j < nb.len() {
            match na[i].cmp(&nb[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => return true,
            }
        }
        false
    }

    /// Number of points covered.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether every point is reachable from point 0.
    ///
    /// An empty graph is not connected; a single isolated point is.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        if self.neighbors.is_empty() {
            return false;
        }
        let mut visited = vec![false; self.neighbors.len()];
        let mut stack = vec![0_u32];
        visited[0] = true;
        let mut reached = 1;

        while let Some(v) = stack.pop() {
            for &n in self.neighbors(v) {
                if !visited[n as usize] {
                    visited[n as usize] = true;
                    reached += 1;
                    stack.push(n);
                }
            }
        }
        reached == self.neighbors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(pairs: &[(u32, u32)]) -> Vec<Edge> {
        pairs.iter().filter_map(|&(a, b)| Edge::new(a, b)).collect()
    }

    #[test]
    fn build_path() {
        let adj = PointAdjacency::build(3, &edges(&[(0, 1), (1, 2)]));
        assert_eq!(adj.degree(1), 2);
        assert!(adj.are_adjacent(0, 1));
        assert!(!adj.are_adjacent(0, 2));
        assert!(adj.share_neighbor(0, 2));
        assert!(adj.is_connected());
    }

    #[test]
    fn disconnected_graph() {
        let adj = PointAdjacency::build(4, &edges(&[(0, 1), (2, 3)]));
        assert!(!adj.is_connected());
        assert!(!adj.share_neighbor(0, 3));
    }

    #[test]
    fn out_of_range_edges_ignored() {
        let adj = PointAdjacency::build(2, &edges(&[(0, 1), (1, 5)]));
        assert_eq!(adj.neighbors(1), &[0]);
        assert_eq!(adj.neighbors(9), &[] as &[u32]);
    }

    #[test]
    fn empty_and_single() {
        assert!(!PointAdjacency::build(0, &[]).is_connected());
        assert!(PointAdjacency::build(1, &[]).is_connected());
    }
}
