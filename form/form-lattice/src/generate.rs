//! Lattice generation functions.

use form_types::{Point3, PointSet};
use tracing::debug;

use crate::error::LatticeError;
use crate::params::LatticeParams;
use crate::polyhedra::shell_directions;
use crate::types::{Lattice, LatticeFamily, TetrahedralSubset};

/// Generates the candidate point set described by `params`.
///
/// Each family is a pure function of extent, density and (for the
/// tetrahedral family) the subset tag.
///
/// # Errors
///
/// Returns [`LatticeError`] if the parameters fail
/// [`LatticeParams::validate`].
///
/// # Examples
///
/// ```
/// use form_lattice::{generate_lattice, LatticeParams};
///
/// let lattice = generate_lattice(&LatticeParams::cartesian(2.0, 2)).unwrap();
/// assert_eq!(lattice.len(), 27);
///
/// let shells = generate_lattice(&LatticeParams::icosahedral(2.0, 2)).unwrap();
/// assert_eq!(shells.len(), 1 + 2 * 32);
/// ```
pub fn generate_lattice(params: &LatticeParams) -> Result<Lattice, LatticeError> {
    params.validate()?;

    let points = match params.family {
        LatticeFamily::Cartesian => cartesian_points(params.extent, params.density),
        LatticeFamily::Icosahedral => icosahedral_points(params.extent, params.density),
        LatticeFamily::Tetrahedral => {
            tetrahedral_points(params.extent, params.density, params.tetrahedral_subset)
        }
    };

    debug!(
        "Generated {} lattice: extent {}, density {}, {} points",
        params.family.name(),
        params.extent,
        params.density,
        points.len()
    );

    Ok(Lattice::new(params.family, params.extent, params.density, points))
}

/// Full grid with `density + 1` evenly spaced coordinates per axis.
fn cartesian_points(extent: f64, density: u32) -> Vec<Point3<f64>> {
    let half = extent / 2.0;
    let step = extent / f64::from(density);
    let coord = |i: u32| f64::from(i).mul_add(step, -half);

    let per_axis = density as usize + 1;
    let mut points = Vec::with_capacity(per_axis * per_axis * per_axis);
    for iz in 0..=density {
        for iy in 0..=density {
            for ix in 0..=density {
                points.push(Point3::new(coord(ix), coord(iy), coord(iz)));
            }
        }
    }
    points
}

/// Origin plus `density` scaled copies of the shell directions.
fn icosahedral_points(extent: f64, density: u32) -> Vec<Point3<f64>> {
    let directions = shell_directions();
    let mut points = PointSet::with_capacity(1 + directions.len() * density as usize);
    points.find_or_insert(Point3::origin());

    for shell in 1..=density {
        let radius = f64::from(shell) / f64::from(density) * extent / 2.0;
        for dir in &directions {
            points.find_or_insert(Point3::from(dir * radius));
        }
    }
    points.into_vec()
}

/// Integer points in `[-2d, 2d]^3` with even coordinate sum, scaled so the
/// bounding cube spans the extent.
fn tetrahedral_points(extent: f64, density: u32, subset: TetrahedralSubset) -> Vec<Point3<f64>> {
    let bound = 2 * i64::from(density);
    let step = extent / (4.0 * f64::from(density));

    let mut points = Vec::new();
    for z in -bound..=bound {
        for y in -bound..=bound {
            for x in -bound..=bound {
                if (x + y + z).rem_euclid(2) != 0 || !subset.contains([x, y, z], bound) {
                    continue;
                }
                #[allow(clippy::cast_precision_loss)]
                // Precision: |coords| <= 128, exactly representable
                points.push(Point3::new(x as f64 * step, y as f64 * step, z as f64 * step));
            }
        }
    }
    points
}
