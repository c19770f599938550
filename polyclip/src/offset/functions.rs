//! One call offsetting helpers.

use super::{ClipperOffset, ClipperOffsetD, EndType, JoinType};
use crate::{
    error::Result,
    path::{Path64, PathD, Paths64, PathsD},
};

/// Offset `paths` by `delta` in the integer domain.
///
/// # Examples
///
/// ```
/// # use polyclip::*;
/// // a polyline widened into a 100 x 20 bar
/// let line = path64![(0, 0), (100, 0)];
/// let result = inflate_paths_64(&[line], 10.0, JoinType::Square, EndType::Butt, 2.0, 0.0)?;
/// assert_eq!(result.len(), 1);
/// assert_eq!(area(&result[0]), 2000.0);
/// # Ok::<(), ClipperError>(())
/// ```
pub fn inflate_paths_64(
    paths: &[Path64],
    delta: f64,
    join_type: JoinType,
    end_type: EndType,
    miter_limit: f64,
    arc_tolerance: f64,
) -> Result<Paths64> {
    let mut offset = ClipperOffset::new();
    offset.add_paths(paths, join_type, end_type)?;
    offset.execute(delta, miter_limit, arc_tolerance)
}

/// Offset `paths` by `delta` in the real domain at `precision` decimal places.
pub fn inflate_paths_d(
    paths: &[PathD],
    delta: f64,
    join_type: JoinType,
    end_type: EndType,
    miter_limit: f64,
    arc_tolerance: f64,
    precision: u32,
) -> Result<PathsD> {
    let mut offset = ClipperOffsetD::new(precision)?;
    offset.add_paths(paths, join_type, end_type)?;
    offset.execute(delta, miter_limit, arc_tolerance)
}
