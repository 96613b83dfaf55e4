//! Undirected edges.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An undirected edge between two distinct point indices.
///
/// The endpoints are always stored in canonical order (`a < b`), so two
/// edges compare equal exactly when they share a canonical key. Self-loops
/// cannot be constructed.
///
/// # Example
///
/// ```
/// use form_types::Edge;
///
/// let e = Edge::new(7, 3).unwrap();
/// assert_eq!((e.a(), e.b()), (3, 7));
/// assert_eq!(e, Edge::new(3, 7).unwrap());
/// assert!(Edge::new(4, 4).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    a: u32,
    b: u32,
}

impl Edge {
    /// Create an edge, returning `None` for a self-loop.
    #[inline]
    #[must_use]
    pub const fn new(a: u32, b: u32) -> Option<Self> {
        if a == b {
            None
        } else if a < b {
            Some(Self { a, b })
        } else {
            Some(Self { a: b, b: a })
        }
    }

    /// The smaller endpoint index.
    #[inline]
    #[must_use]
    pub const fn a(self) -> u32 {
        self.a
    }

    /// The larger endpoint index.
    #[inline]
    #[must_use]
    pub const fn b(self) -> u32 {
        self.b
    }

    /// The canonical `(min, max)` key.
    #[inline]
    #[must_use]
    pub const fn key(self) -> (u32, u32) {
        (self.a, self.b)
    }

    /// Whether `v` is one of the endpoints.
    #[inline]
    #[must_use]
    pub const fn contains(self, v: u32) -> bool {
        self.a == v || self.b == v
    }

    /// The endpoint opposite `v`, if `v` is an endpoint.
    #[must_use]
    pub const fn other(self, v: u32) -> Option<u32> {
        if v == self.a {
            Some(self.b)
        } else if v == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Normalize edge direction so v0 < v1.
#[inline]
#[must_use]
pub const fn edge_key(v0: u32, v1: u32) -> (u32, u32) {
    if v0 < v1 { (v0, v1) } else { (v1, v0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order() {
        let e = Edge::new(5, 2);
        assert_eq!(e.map(Edge::key), Some((2, 5)));
    }

    #[test]
    fn self_loop_rejected() {
        assert!(Edge::new(0, 0).is_none());
    }

    #[test]
    fn other_endpoint() {
        let e = Edge::new(1, 9).unwrap();
        assert_eq!(e.other(1), Some(9));
        assert_eq!(e.other(9), Some(1));
        assert_eq!(e.other(4), None);
        assert!(e.contains(9));
        assert!(!e.contains(2));
    }

    #[test]
    fn edge_key_normalizes() {
        assert_eq!(edge_key(3, 1), (1, 3));
        assert_eq!(edge_key(1, 3), (1, 3));
    }
}
