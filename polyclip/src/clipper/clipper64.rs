use super::{ClipSolution, ClipType, ClipperOptions, FillRule, PathType, TreeSolution, internal::SweepEngine};
use crate::{
    error::Result,
    path::{Path64, check_paths_range},
};

/// Boolean clipping engine in the exact integer coordinate domain.
///
/// Add subject (closed or open) and clip paths, then [execute](Clipper64::execute) one of the
/// [ClipType] operations under a [FillRule]. Paths added stay in the instance until
/// [clear](Clipper64::clear) is called so multiple operations can be run on the same inputs.
///
/// # Examples
///
/// ```
/// # use polyclip::*;
/// let mut clipper = Clipper64::new();
/// clipper.add_subject(&[path64![(0, 0), (100, 0), (100, 100), (0, 100)]])?;
/// clipper.add_clip(&[path64![(50, 50), (150, 50), (150, 150), (50, 150)]])?;
/// let solution = clipper.execute(ClipType::Intersection, FillRule::NonZero);
/// assert!(solution.succeeded);
/// assert_eq!(solution.closed.len(), 1);
/// assert_eq!(area(&solution.closed[0]), 2500.0);
/// # Ok::<(), ClipperError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Clipper64 {
    engine: SweepEngine,
}

impl Clipper64 {
    #[inline]
    pub fn new() -> Self {
        Self::with_options(ClipperOptions::new())
    }

    #[inline]
    pub fn with_options(options: ClipperOptions) -> Self {
        Self {
            engine: SweepEngine::new(options),
        }
    }

    #[inline]
    pub fn options(&self) -> ClipperOptions {
        self.engine.options
    }

    /// Set the options used by subsequent executions.
    #[inline]
    pub fn set_options(&mut self, options: ClipperOptions) {
        self.engine.options = options;
    }

    #[inline]
    pub fn preserve_collinear(&self) -> bool {
        self.engine.options.preserve_collinear
    }

    #[inline]
    pub fn set_preserve_collinear(&mut self, value: bool) {
        self.engine.options.preserve_collinear = value;
    }

    #[inline]
    pub fn reverse_solution(&self) -> bool {
        self.engine.options.reverse_solution
    }

    #[inline]
    pub fn set_reverse_solution(&mut self, value: bool) {
        self.engine.options.reverse_solution = value;
    }

    /// Add paths of the given role. The whole batch is range checked first, on error nothing is
    /// added.
    pub fn add_paths(&mut self, paths: &[Path64], polytype: PathType, is_open: bool) -> Result<()> {
        check_paths_range(paths)?;
        self.engine.add_paths(paths, polytype, is_open);
        Ok(())
    }

    /// Add closed subject paths.
    #[inline]
    pub fn add_subject(&mut self, paths: &[Path64]) -> Result<()> {
        self.add_paths(paths, PathType::Subject, false)
    }

    /// Add open subject paths (polylines), their clipped parts are returned in
    /// [ClipSolution::open].
    #[inline]
    pub fn add_open_subject(&mut self, paths: &[Path64]) -> Result<()> {
        self.add_paths(paths, PathType::Subject, true)
    }

    /// Add closed clip paths.
    #[inline]
    pub fn add_clip(&mut self, paths: &[Path64]) -> Result<()> {
        self.add_paths(paths, PathType::Clip, false)
    }

    /// Remove all added paths.
    #[inline]
    pub fn clear(&mut self) {
        self.engine.clear();
    }

    /// Run `cliptype` with `fillrule` over the added paths.
    pub fn execute(&mut self, cliptype: ClipType, fillrule: FillRule) -> ClipSolution<i64> {
        self.engine.execute_paths(cliptype, fillrule)
    }

    /// Run `cliptype` with `fillrule` over the added paths, nesting the closed results in a
    /// polygon tree.
    pub fn execute_tree(&mut self, cliptype: ClipType, fillrule: FillRule) -> TreeSolution<i64> {
        self.engine.execute_tree(cliptype, fillrule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClipperError, MAX_COORD, core::math::Point64, path::area};

    fn rect(x: i64, y: i64, w: i64, h: i64) -> Path64 {
        vec![
            Point64::new(x, y),
            Point64::new(x + w, y),
            Point64::new(x + w, y + h),
            Point64::new(x, y + h),
        ]
    }

    #[test]
    fn out_of_range_batch_is_rejected_whole() {
        let mut clipper = Clipper64::new();
        let bad = vec![Point64::new(0, 0), Point64::new(MAX_COORD + 1, 0), Point64::new(0, 5)];
        let result = clipper.add_subject(&[rect(0, 0, 10, 10), bad]);
        assert_eq!(
            result,
            Err(ClipperError::CoordinateOutOfRange {
                x: MAX_COORD + 1,
                y: 0
            })
        );
        // nothing was added so union is empty
        let solution = clipper.execute(ClipType::Union, FillRule::NonZero);
        assert!(solution.succeeded);
        assert!(solution.is_empty());
    }

    #[test]
    fn execute_without_paths_is_empty() {
        let mut clipper = Clipper64::new();
        let solution = clipper.execute(ClipType::Intersection, FillRule::EvenOdd);
        assert!(solution.succeeded);
        assert!(solution.is_empty());
    }

    #[test]
    fn clip_type_none_is_empty() {
        let mut clipper = Clipper64::new();
        clipper.add_subject(&[rect(0, 0, 10, 10)]).unwrap();
        let solution = clipper.execute(ClipType::None, FillRule::EvenOdd);
        assert!(solution.succeeded);
        assert!(solution.is_empty());
    }

    #[test]
    fn repeated_execute_gives_same_result() {
        let mut clipper = Clipper64::new();
        clipper.add_subject(&[rect(0, 0, 10, 10)]).unwrap();
        clipper.add_clip(&[rect(5, 5, 10, 10)]).unwrap();
        let first = clipper.execute(ClipType::Union, FillRule::NonZero);
        let second = clipper.execute(ClipType::Union, FillRule::NonZero);
        assert_eq!(first, second);
        assert_eq!(first.closed.len(), 1);
        assert_eq!(area(&first.closed[0]), 175.0);
    }

    #[test]
    fn clear_removes_paths() {
        let mut clipper = Clipper64::new();
        clipper.add_subject(&[rect(0, 0, 10, 10)]).unwrap();
        clipper.clear();
        clipper.add_subject(&[rect(20, 20, 5, 5)]).unwrap();
        let solution = clipper.execute(ClipType::Union, FillRule::NonZero);
        assert_eq!(solution.closed.len(), 1);
        assert_eq!(area(&solution.closed[0]), 25.0);
    }
}
