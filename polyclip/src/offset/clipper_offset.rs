use super::{EndType, JoinType, OffsetOptions, group::Group, joins::OffsetBuilder};
use crate::{
    clipper::{ClipType, Clipper64, ClipperOptions, FillRule},
    error::{ClipperError, Result},
    path::{Path64, Paths64, check_paths_range},
    polytree::PolyTree64,
};
use log::{debug, warn};

/// Offsets below this magnitude return the inputs unchanged.
const MIN_DELTA: f64 = 0.5;

/// Polygon and polyline offsetting engine in the integer coordinate domain.
///
/// Paths are added in groups sharing a [JoinType] and [EndType], then [execute] inflates
/// (positive delta) or deflates (negative delta) every group at once. The raw outlines are
/// unioned so the result never self intersects.
///
/// [execute]: ClipperOffset::execute
///
/// # Examples
///
/// ```
/// # use polyclip::*;
/// let mut offset = ClipperOffset::new();
/// offset.add_path(&path64![(0, 0), (100, 0), (100, 100), (0, 100)], JoinType::Miter, EndType::Polygon)?;
/// let result = offset.execute(10.0, 2.0, 0.0)?;
/// assert_eq!(result.len(), 1);
/// assert_eq!(area(&result[0]), 14400.0);
/// # Ok::<(), ClipperError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClipperOffset {
    groups: Vec<Group>,
    options: OffsetOptions,
}

impl ClipperOffset {
    #[inline]
    pub fn new() -> Self {
        Self::with_options(OffsetOptions::new())
    }

    #[inline]
    pub fn with_options(options: OffsetOptions) -> Self {
        Self {
            groups: Vec::new(),
            options,
        }
    }

    #[inline]
    pub fn options(&self) -> OffsetOptions {
        self.options
    }

    #[inline]
    pub fn set_options(&mut self, options: OffsetOptions) {
        self.options = options;
    }

    /// Add a single path as its own group.
    #[inline]
    pub fn add_path(&mut self, path: &Path64, join_type: JoinType, end_type: EndType) -> Result<()> {
        self.add_paths(std::slice::from_ref(path), join_type, end_type)
    }

    /// Add `paths` as one group sharing `join_type` and `end_type`. The batch is range checked
    /// first, on error nothing is added.
    pub fn add_paths(&mut self, paths: &[Path64], join_type: JoinType, end_type: EndType) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }
        check_paths_range(paths)?;
        self.groups.push(Group::new(paths, join_type, end_type));
        Ok(())
    }

    /// Remove all added paths.
    #[inline]
    pub fn clear(&mut self) {
        self.groups.clear();
    }

    /// Offset all added paths by `delta`, returning closed result paths.
    ///
    /// `miter_limit` and `arc_tolerance` replace the values held in [OffsetOptions]. Fails with
    /// [ClipperError::InvalidOffsetDelta] if `delta` is not finite.
    pub fn execute(&mut self, delta: f64, miter_limit: f64, arc_tolerance: f64) -> Result<Paths64> {
        if delta.abs() < MIN_DELTA {
            check_delta(delta)?;
            debug!("offset delta {delta} too small, returning inputs");
            return Ok(self.stripped_inputs());
        }
        let (raw, reversed) = self.raw_offset(delta, miter_limit, arc_tolerance)?;
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        let mut clipper = self.union_engine(reversed);
        clipper.add_subject(&raw)?;
        let solution = clipper.execute(ClipType::Union, union_fill_rule(reversed));
        if !solution.succeeded {
            warn!("offset union failed");
        }
        Ok(solution.closed)
    }

    /// As [execute](ClipperOffset::execute) but nesting the results in a polygon tree.
    pub fn execute_tree(&mut self, delta: f64, miter_limit: f64, arc_tolerance: f64) -> Result<PolyTree64> {
        let (raw, reversed) = if delta.abs() < MIN_DELTA {
            check_delta(delta)?;
            (self.stripped_inputs(), self.paths_reversed())
        } else {
            self.raw_offset(delta, miter_limit, arc_tolerance)?
        };
        if raw.is_empty() {
            return Ok(PolyTree64::new());
        }
        let mut clipper = self.union_engine(reversed);
        clipper.add_subject(&raw)?;
        let solution = clipper.execute_tree(ClipType::Union, union_fill_rule(reversed));
        if !solution.succeeded {
            warn!("offset union failed");
        }
        Ok(solution.tree)
    }

    fn raw_offset(&mut self, delta: f64, miter_limit: f64, arc_tolerance: f64) -> Result<(Paths64, bool)> {
        check_delta(delta)?;
        self.options.miter_limit = miter_limit;
        self.options.arc_tolerance = arc_tolerance;
        debug!(
            "offsetting {} groups by {delta} (miter limit {miter_limit}, arc tolerance {arc_tolerance})",
            self.groups.len()
        );

        let mut builder = OffsetBuilder::new(delta, miter_limit, arc_tolerance);
        for group in &self.groups {
            builder.offset_group(group);
        }
        let raw = builder.solution;
        // raw outlines may only exceed the coordinate range for huge deltas
        check_paths_range(&raw).map_err(|_| ClipperError::InvalidOffsetDelta(delta))?;
        Ok((raw, self.paths_reversed()))
    }

    fn stripped_inputs(&self) -> Paths64 {
        self.groups
            .iter()
            .flat_map(|g| g.paths.iter().filter(|p| !p.is_empty()).cloned())
            .collect()
    }

    /// Orientation of the first polygon group decides the orientation of the result.
    fn paths_reversed(&self) -> bool {
        self.groups
            .iter()
            .find(|g| g.end_type == EndType::Polygon)
            .is_some_and(|g| g.is_reversed)
    }

    fn union_engine(&self, reversed: bool) -> Clipper64 {
        Clipper64::with_options(ClipperOptions {
            preserve_collinear: self.options.preserve_collinear,
            reverse_solution: self.options.reverse_solution != reversed,
        })
    }
}

#[inline]
fn check_delta(delta: f64) -> Result<()> {
    if delta.is_finite() {
        Ok(())
    } else {
        Err(ClipperError::InvalidOffsetDelta(delta))
    }
}

#[inline]
fn union_fill_rule(reversed: bool) -> FillRule {
    if reversed {
        FillRule::Negative
    } else {
        FillRule::Positive
    }
}
