//! One call boolean operations for callers that don't need to reuse an engine.

use super::{ClipType, Clipper64, ClipperD, FillRule};
use crate::{
    error::Result,
    path::{PathD, Path64, Paths64, PathsD},
    polytree::PolyTree64,
};

/// Apply `cliptype` to `subjects` and `clips` in the integer domain, returning the closed
/// results.
///
/// # Examples
///
/// ```
/// # use polyclip::*;
/// let a = path64![(0, 0), (10, 0), (10, 10), (0, 10)];
/// let b = path64![(20, 0), (30, 0), (30, 10), (20, 10)];
/// let result = boolean_op_64(ClipType::Union, FillRule::NonZero, &[a], &[b])?;
/// assert_eq!(result.len(), 2);
/// # Ok::<(), ClipperError>(())
/// ```
pub fn boolean_op_64(
    cliptype: ClipType,
    fillrule: FillRule,
    subjects: &[Path64],
    clips: &[Path64],
) -> Result<Paths64> {
    let mut clipper = Clipper64::new();
    clipper.add_subject(subjects)?;
    clipper.add_clip(clips)?;
    Ok(clipper.execute(cliptype, fillrule).closed)
}

/// Same as [boolean_op_64] but returns the closed results nested in a polygon tree.
pub fn boolean_op_tree_64(
    cliptype: ClipType,
    fillrule: FillRule,
    subjects: &[Path64],
    clips: &[Path64],
) -> Result<PolyTree64> {
    let mut clipper = Clipper64::new();
    clipper.add_subject(subjects)?;
    clipper.add_clip(clips)?;
    Ok(clipper.execute_tree(cliptype, fillrule).tree)
}

/// Apply `cliptype` to `subjects` and `clips` in the real domain at `precision` decimal places.
pub fn boolean_op_d(
    cliptype: ClipType,
    fillrule: FillRule,
    subjects: &[PathD],
    clips: &[PathD],
    precision: u32,
) -> Result<PathsD> {
    let mut clipper = ClipperD::new(precision)?;
    clipper.add_subject(subjects)?;
    clipper.add_clip(clips)?;
    Ok(clipper.execute(cliptype, fillrule).closed)
}

#[inline]
pub fn intersect_64(subjects: &[Path64], clips: &[Path64], fillrule: FillRule) -> Result<Paths64> {
    boolean_op_64(ClipType::Intersection, fillrule, subjects, clips)
}

#[inline]
pub fn intersect_d(
    subjects: &[PathD],
    clips: &[PathD],
    fillrule: FillRule,
    precision: u32,
) -> Result<PathsD> {
    boolean_op_d(ClipType::Intersection, fillrule, subjects, clips, precision)
}

/// Union of `subjects` and `clips`, `clips` may be empty to union `subjects` alone (which also
/// resolves their self intersections).
#[inline]
pub fn union_64(subjects: &[Path64], clips: &[Path64], fillrule: FillRule) -> Result<Paths64> {
    boolean_op_64(ClipType::Union, fillrule, subjects, clips)
}

#[inline]
pub fn union_d(
    subjects: &[PathD],
    clips: &[PathD],
    fillrule: FillRule,
    precision: u32,
) -> Result<PathsD> {
    boolean_op_d(ClipType::Union, fillrule, subjects, clips, precision)
}

#[inline]
pub fn difference_64(subjects: &[Path64], clips: &[Path64], fillrule: FillRule) -> Result<Paths64> {
    boolean_op_64(ClipType::Difference, fillrule, subjects, clips)
}

#[inline]
pub fn difference_d(
    subjects: &[PathD],
    clips: &[PathD],
    fillrule: FillRule,
    precision: u32,
) -> Result<PathsD> {
    boolean_op_d(ClipType::Difference, fillrule, subjects, clips, precision)
}

#[inline]
pub fn xor_64(subjects: &[Path64], clips: &[Path64], fillrule: FillRule) -> Result<Paths64> {
    boolean_op_64(ClipType::Xor, fillrule, subjects, clips)
}

#[inline]
pub fn xor_d(subjects: &[PathD], clips: &[PathD], fillrule: FillRule, precision: u32) -> Result<PathsD> {
    boolean_op_d(ClipType::Xor, fillrule, subjects, clips, precision)
}
