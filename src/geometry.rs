//! Coordinate types and conversions.
//!
//! Every spatial operation works on Cartesian `[f64; D]` points. Callers may
//! describe a location in polar (n-sphere) or cylindrical form through [`Loc`];
//! it is resolved to Cartesian once, before any distance or box math.

use crate::MAX_DIMENSIONS;
use crate::error::{ArrangementError, Result};
use heapless::Vec;

/// A Cartesian point in `D` dimensions.
pub type Point<const D: usize> = [f64; D];

/// A location expressed in one of the supported coordinate systems.
#[derive(Debug, Clone, PartialEq)]
pub enum Loc<const D: usize> {
    /// Raw coordinates.
    Cartesian(Point<D>),

    /// Radius plus `D - 1` angles (radians) around `center`.
    Polar {
        rho: f64,
        angles: Vec<f64, MAX_DIMENSIONS>,
        center: Point<D>,
    },

    /// Polar on the first two axes, plain offsets on the remaining `D - 2`,
    /// translated by `origin`.
    Cylindrical {
        radius: f64,
        theta: f64,
        coords: Vec<f64, MAX_DIMENSIONS>,
        origin: Point<D>,
    },
}

impl<const D: usize> Loc<D> {
    /// Creates a Cartesian location from a coordinate slice.
    ///
    /// # Errors
    /// * `Dimension` - `coords` is not exactly `D` long
    /// * `NonFinite` - A coordinate is NaN or infinite
    pub fn cartesian(coords: &[f64]) -> Result<Self> {
        Ok(Loc::Cartesian(point(coords)?))
    }

    /// Creates a polar location.
    ///
    /// # Errors
    /// * `Dimension` - `center` is not `D` long or `angles` is not `D - 1` long
    /// * `NonFinite` - A value is NaN or infinite
    pub fn polar(rho: f64, angles: &[f64], center: &[f64]) -> Result<Self> {
        let center = point(center)?;
        check_len(angles, D.saturating_sub(1))?;
        finite(rho)?;
        angles.iter().copied().try_for_each(finite)?;

        Ok(Loc::Polar {
            rho,
            angles: to_vec(angles)?,
            center,
        })
    }

    /// Creates a cylindrical location.
    ///
    /// # Errors
    /// * `Dimension` - `D < 2`, `origin` is not `D` long or `coords` is not `D - 2` long
    /// * `NonFinite` - A value is NaN or infinite
    pub fn cylindrical(radius: f64, theta: f64, coords: &[f64], origin: &[f64]) -> Result<Self> {
        if D < 2 {
            return Err(ArrangementError::Dimension {
                expected: 2,
                got: D,
            });
        }
        let origin = point(origin)?;
        check_len(coords, D.saturating_sub(2))?;
        finite(radius)?;
        finite(theta)?;
        coords.iter().copied().try_for_each(finite)?;

        Ok(Loc::Cylindrical {
            radius,
            theta,
            coords: to_vec(coords)?,
            origin,
        })
    }

    /// Resolves this location to Cartesian coordinates.
    ///
    /// Variants are public and can be built without the validating
    /// constructors, so every input value is checked again here, along with
    /// the resolved point.
    ///
    /// # Errors
    /// * `Dimension` - Wrong angle or offset count
    /// * `NonFinite` - An input value or the resolved point is NaN or infinite
    pub fn to_cartesian(&self) -> Result<Point<D>> {
        let resolved = match self {
            Loc::Cartesian(p) => *p,
            Loc::Polar { rho, angles, center } => {
                finite(*rho)?;
                angles.iter().chain(center).copied().try_for_each(finite)?;
                polar_to_cartesian(*rho, angles, center)?
            }
            Loc::Cylindrical {
                radius,
                theta,
                coords,
                origin,
            } => {
                finite(*radius)?;
                finite(*theta)?;
                coords.iter().chain(origin).copied().try_for_each(finite)?;
                cylindrical_to_cartesian(*radius, *theta, coords, origin)?
            }
        };
        resolved.iter().copied().try_for_each(finite)?;
        Ok(resolved)
    }
}

impl<const D: usize> From<Point<D>> for Loc<D> {
    fn from(p: Point<D>) -> Self {
        Loc::Cartesian(p)
    }
}

/// Checks that `D` is a supported dimensionality.
pub fn check_dimensions<const D: usize>() -> Result<()> {
    if D == 0 || D > MAX_DIMENSIONS {
        return Err(ArrangementError::UnsupportedDimension(D));
    }
    Ok(())
}

/// Converts a coordinate slice into a `D`-dimensional point.
///
/// The length is checked first; nothing is padded or truncated.
///
/// # Errors
/// * `Dimension` - `coords` is not exactly `D` long
/// * `NonFinite` - A coordinate is NaN or infinite
pub fn point<const D: usize>(coords: &[f64]) -> Result<Point<D>> {
    let p: Point<D> = coords
        .try_into()
        .map_err(|_| ArrangementError::Dimension {
            expected: D,
            got: coords.len(),
        })?;
    p.iter().copied().try_for_each(finite)?;
    Ok(p)
}

/// Converts a radius and `D - 1` angles around `center` to Cartesian.
///
/// Uses the n-sphere form: `x1 = r cos a1`, `xk = r sin a1 .. sin a(k-1) cos ak`,
/// `xD = r sin a1 .. sin a(D-1)`. In 2D that is `(r cos t, r sin t)`; in 1D the
/// point lies `rho` past the center.
///
/// # Errors
/// * `Dimension` - `angles` is not `D - 1` long
pub fn polar_to_cartesian<const D: usize>(
    rho: f64,
    angles: &[f64],
    center: &Point<D>,
) -> Result<Point<D>> {
    check_len(angles, D.saturating_sub(1))?;

    let mut out = *center;
    let mut sin_product = rho;
    for (axis, coord) in out.iter_mut().enumerate() {
        match angles.get(axis) {
            Some(&angle) => {
                *coord += sin_product * libm::cos(angle);
                sin_product *= libm::sin(angle);
            }
            None => *coord += sin_product,
        }
    }
    Ok(out)
}

/// Converts cylindrical coordinates to Cartesian.
///
/// # Errors
/// * `Dimension` - `D < 2` or `coords` is not `D - 2` long
pub fn cylindrical_to_cartesian<const D: usize>(
    radius: f64,
    theta: f64,
    coords: &[f64],
    origin: &Point<D>,
) -> Result<Point<D>> {
    if D < 2 {
        return Err(ArrangementError::Dimension {
            expected: 2,
            got: D,
        });
    }
    check_len(coords, D.saturating_sub(2))?;

    let mut out = *origin;
    let planar = [radius * libm::cos(theta), radius * libm::sin(theta)];
    for (axis, offset) in out.iter_mut().zip(planar.iter().chain(coords)) {
        *axis += offset;
    }
    Ok(out)
}

/// Euclidean distance between two points.
#[inline]
pub fn distance<const D: usize>(a: &Point<D>, b: &Point<D>) -> f64 {
    libm::sqrt(
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f64>(),
    )
}

/// Euclidean distance between two coordinate slices.
///
/// # Errors
/// * `Dimension` - The slices differ in length
pub fn distance_slices(a: &[f64], b: &[f64]) -> Result<f64> {
    check_len(b, a.len())?;
    Ok(libm::sqrt(
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f64>(),
    ))
}

fn check_len(values: &[f64], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(ArrangementError::Dimension {
            expected,
            got: values.len(),
        });
    }
    Ok(())
}

fn finite(value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ArrangementError::NonFinite)
    }
}

fn to_vec(values: &[f64]) -> Result<Vec<f64, MAX_DIMENSIONS>> {
    Vec::from_slice(values).map_err(|_| ArrangementError::Dimension {
        expected: MAX_DIMENSIONS,
        got: values.len(),
    })
}
