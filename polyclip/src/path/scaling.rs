use super::{Path64, PathD, Paths64, PathsD};
use crate::{
    core::math::{Point64, PointD},
    error::{ClipperError, Result},
};

/// Largest coordinate magnitude accepted in the integer domain.
///
/// Keeps every 128 bit product and every `f64` cross product computed by the engines finite.
pub const MAX_COORD: i64 = i64::MAX >> 2;

/// Smallest coordinate accepted in the integer domain.
pub const MIN_COORD: i64 = -MAX_COORD;

/// Largest decimal precision accepted for the real domain.
pub const MAX_PRECISION: u32 = 8;

/// Decimal precision used by the real domain engines when none is given.
pub const DEFAULT_PRECISION: u32 = 2;

/// Validate that every point of `path` lies within `MIN_COORD..=MAX_COORD`.
pub fn check_path_range(path: &[Point64]) -> Result<()> {
    match path
        .iter()
        .find(|pt| !(MIN_COORD..=MAX_COORD).contains(&pt.x) || !(MIN_COORD..=MAX_COORD).contains(&pt.y))
    {
        Some(pt) => Err(ClipperError::CoordinateOutOfRange { x: pt.x, y: pt.y }),
        None => Ok(()),
    }
}

/// Validate every path of `paths`, see [check_path_range].
pub fn check_paths_range(paths: &[Path64]) -> Result<()> {
    paths.iter().try_for_each(|p| check_path_range(p))
}

/// Scale factor (`10^precision`) for a real domain precision.
///
/// # Examples
///
/// ```
/// # use polyclip::*;
/// assert_eq!(precision_scale(2), Ok(100.0));
/// assert!(precision_scale(9).is_err());
/// ```
pub fn precision_scale(precision: u32) -> Result<f64> {
    if precision > MAX_PRECISION {
        return Err(ClipperError::PrecisionOutOfRange(precision));
    }

    Ok(10f64.powi(precision as i32))
}

/// Scale a single real value into the integer domain.
#[inline]
pub(crate) fn scale_value_to_64(value: f64, scale: f64) -> Option<i64> {
    let v = value * scale;
    if !v.is_finite() || v.abs() >= MAX_COORD as f64 {
        return None;
    }

    Some(v.round() as i64)
}

/// Scale a real point by `scale` and round it into the integer domain.
#[inline]
pub fn scale_point_to_64(pt: PointD, scale: f64) -> Result<Point64> {
    match (scale_value_to_64(pt.x, scale), scale_value_to_64(pt.y, scale)) {
        (Some(x), Some(y)) => Ok(Point64::new(x, y)),
        _ => Err(ClipperError::ScaledCoordinateOutOfRange {
            x: pt.x,
            y: pt.y,
            scale,
        }),
    }
}

/// Scale a real path into the integer domain, failing on the first point that would overflow.
pub fn scale_path_to_64(path: &[PointD], scale: f64) -> Result<Path64> {
    path.iter().map(|&pt| scale_point_to_64(pt, scale)).collect()
}

/// Scale real paths into the integer domain, see [scale_path_to_64].
pub fn scale_paths_to_64(paths: &[PathD], scale: f64) -> Result<Paths64> {
    paths.iter().map(|p| scale_path_to_64(p, scale)).collect()
}

/// Scale an integer path into the real domain (`scale` is usually `1 / 10^precision`).
pub fn scale_path_to_d(path: &[Point64], scale: f64) -> PathD {
    path.iter()
        .map(|pt| PointD::new(pt.x as f64 * scale, pt.y as f64 * scale))
        .collect()
}

/// Scale integer paths into the real domain, see [scale_path_to_d].
pub fn scale_paths_to_d(paths: &[Path64], scale: f64) -> PathsD {
    paths.iter().map(|p| scale_path_to_d(p, scale)).collect()
}
