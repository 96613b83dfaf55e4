//! Vertex and edge profiles.
//!
//! Both profiles group elements by a key that does not change under the
//! coordinate-permuting, sign-flipping symmetries of the lattice, then
//! report the count per key in key order.

use std::collections::BTreeMap;

use form_types::{Edge, Point3};

/// Quantisation steps per unit for profile keys.
const QUANT_SCALE: f64 = 1e4;

/// Round a non-negative value to the profile grid.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn quantize(v: f64) -> i64 {
    // Truncation: profile values are bounded by the lattice extent
    (v * QUANT_SCALE).round() as i64
}

/// Render a quantised value as a fixed four-decimal string.
pub(crate) fn fixed(q: i64) -> String {
    let sign = if q < 0 { "-" } else { "" };
    let q = q.unsigned_abs();
    format!("{sign}{}.{:04}", q / 10_000, q % 10_000)
}

fn sorted_abs(x: f64, y: f64, z: f64) -> [i64; 3] {
    let mut key = [quantize(x.abs()), quantize(y.abs()), quantize(z.abs())];
    key.sort_unstable();
    key
}

fn render<K>(prefix: char, total: usize, counts: &BTreeMap<K, usize>, key: impl Fn(&K) -> String) -> String {
    let parts: Vec<String> = counts.iter().map(|(k, c)| format!("{c}x({})", key(k))).collect();
    format!("{prefix}{total}-{{{}}}", parts.join(","))
}

/// Group vertices by their sorted absolute coordinate triple.
///
/// # Example
///
/// ```
/// use form_taxonomy::vertex_profile;
/// use form_types::Point3;
///
/// let points = [Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, -1.0, 0.0)];
/// assert_eq!(vertex_profile(&points), "V2-{2x(0.0000,0.0000,1.0000)}");
/// ```
#[must_use]
pub fn vertex_profile(points: &[Point3<f64>]) -> String {
    let mut counts: BTreeMap<[i64; 3], usize> = BTreeMap::new();
    for p in points {
        *counts.entry(sorted_abs(p.x, p.y, p.z)).or_insert(0) += 1;
    }
    render('V', points.len(), &counts, |k| {
        k.iter().map(|&q| fixed(q)).collect::<Vec<_>>().join(",")
    })
}

/// Group edges by squared length and sorted absolute coordinate delta.
///
/// Edges referencing missing points are skipped.
#[must_use]
pub fn edge_profile(points: &[Point3<f64>], edges: &[Edge]) -> String {
    let mut counts: BTreeMap<(i64, [i64; 3]), usize> = BTreeMap::new();
    let mut total = 0;
    for edge in edges {
        let (Some(a), Some(b)) = (points.get(edge.a() as usize), points.get(edge.b() as usize)) else {
            continue;
        };
        let d = b - a;
        let key = (quantize(d.norm_squared()), sorted_abs(d.x, d.y, d.z));
        *counts.entry(key).or_insert(0) += 1;
        total += 1;
    }
    render('E', total, &counts, |(len2, delta)| {
        let delta: Vec<String> = delta.iter().map(|&q| fixed(q)).collect();
        format!("{};{}", fixed(*len2), delta.join(","))
    })
}
