//! Systematic enumeration of canonical seed pairs.
//!
//! Every unordered pair of lattice points is mapped through each transform of
//! the active group; the smallest sorted key pair among the images is the
//! orbit representative. Representatives are deduplicated and ordered by
//! squared length, then key, so index N always names the same orbit.

use form_symmetry::SymmetryGroup;
use form_types::{Point3, PointKey, point_key};
use hashbrown::HashSet;
use tracing::debug;

use crate::seed::Seed;

/// Sorted pair of quantised point keys.
pub type PairKey = (PointKey, PointKey);

/// Scale for the squared-length ordering key.
const LENGTH_KEY_SCALE: f64 = 1e4;

/// Canonical representative of one orbit of point pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Representative {
    start: Point3<f64>,
    end: Point3<f64>,
    key: PairKey,
    length_key: i64,
}

impl Representative {
    /// First endpoint (the smaller key).
    #[must_use]
    pub const fn start(&self) -> Point3<f64> {
        self.start
    }

    /// Second endpoint.
    #[must_use]
    pub const fn end(&self) -> Point3<f64> {
        self.end
    }

    /// Canonical key of the orbit.
    #[must_use]
    pub const fn key(&self) -> PairKey {
        self.key
    }

    /// Squared distance between the endpoints.
    #[must_use]
    pub fn distance_squared(&self) -> f64 {
        (self.end - self.start).norm_squared()
    }

    /// Single-edge seed for this pair.
    #[must_use]
    pub fn seed(&self) -> Seed {
        Seed::segment(self.start, self.end)
    }
}

/// Sorted list of canonical point-pair representatives.
///
/// # Example
///
/// ```
/// use form_generate::SystematicEnumerator;
/// use form_lattice::{LatticeParams, generate_lattice};
/// use form_symmetry::SymmetryFamily;
///
/// // Cube corners under the cubic group: edge, face diagonal, body diagonal
/// let lattice = generate_lattice(&LatticeParams::cartesian(1.0, 1)).unwrap();
/// let enumerator = SystematicEnumerator::new(lattice.points(), &SymmetryFamily::Cubic.build());
/// assert_eq!(enumerator.len(), 3);
/// assert!((enumerator.get(0).unwrap().distance_squared() - 1.0).abs() < 1e-9);
/// assert!(enumerator.get(3).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SystematicEnumerator {
    representatives: Vec<Representative>,
}

impl SystematicEnumerator {
    /// Enumerate the canonical pairs of `points` under `group`.
    ///
    /// An empty group acts as the identity, so every pair is its own orbit.
    #[must_use]
    pub fn new(points: &[Point3<f64>], group: &SymmetryGroup) -> Self {
        let transforms = group.effective_transforms();
        let mut seen: HashSet<PairKey> = HashSet::new();
        let mut representatives = Vec::new();

        for (i, a) in points.iter().enumerate() {
            for b in &points[i + 1..] {
                let mut best: Option<(PairKey, Point3<f64>, Point3<f64>)> = None;
                for t in &transforms {
                    let (ta, tb) = (t.apply(a), t.apply(b));
                    let (ka, kb) = (point_key(&ta), point_key(&tb));
                    let image = if ka <= kb { ((ka, kb), ta, tb) } else { ((kb, ka), tb, ta) };
                    if best.as_ref().is_none_or(|(k, _, _)| image.0 < *k) {
                        best = Some(image);
                    }
                }

                let Some((key, start, end)) = best else { continue };
                if key.0 == key.1 || !seen.insert(key) {
                    continue;
                }
                representatives.push(Representative {
                    start,
                    end,
                    key,
                    length_key: length_key(&start, &end),
                });
            }
        }

        representatives.sort_by(|x, y| x.length_key.cmp(&y.length_key).then_with(|| x.key.cmp(&y.key)));

        debug!(
            "Enumerated {} canonical pairs from {} points under '{}'",
            representatives.len(),
            points.len(),
            group.label()
        );
        Self { representatives }
    }

    /// Number of representatives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.representatives.len()
    }

    /// Whether there are no representatives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.representatives.is_empty()
    }

    /// The representative at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Representative> {
        self.representatives.get(index)
    }

    /// All representatives in enumeration order.
    #[must_use]
    pub fn representatives(&self) -> &[Representative] {
        &self.representatives
    }
}

#[allow(clippy::cast_possible_truncation)]
// Truncation: squared lattice distances are small after scaling
fn length_key(a: &Point3<f64>, b: &Point3<f64>) -> i64 {
    ((b - a).norm_squared() * LENGTH_KEY_SCALE).round() as i64
}
