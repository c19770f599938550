use super::{ClipSolution, ClipType, ClipperOptions, FillRule, PathType, TreeSolution, internal::SweepEngine};
use crate::{
    error::Result,
    path::{
        DEFAULT_PRECISION, PathD, precision_scale, scale_path_to_d, scale_paths_to_64, scale_paths_to_d,
    },
};
use log::debug;

/// Boolean clipping engine in the real coordinate domain.
///
/// Coordinates are scaled by `10^precision` and rounded into the integer domain, the integer
/// sweep is run, and results are scaled back. Topology is identical to running [Clipper64] on the
/// scaled inputs.
///
/// [Clipper64]: super::Clipper64
///
/// # Examples
///
/// ```
/// # use polyclip::*;
/// let mut clipper = ClipperD::new(2)?;
/// clipper.add_subject(&[pathd![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]])?;
/// clipper.add_clip(&[pathd![(0.5, 0.0), (1.5, 0.0), (1.5, 1.0), (0.5, 1.0)]])?;
/// let solution = clipper.execute(ClipType::Union, FillRule::NonZero);
/// assert_eq!(solution.closed.len(), 1);
/// assert_fuzzy_eq!(area(&solution.closed[0]), 1.5);
/// # Ok::<(), ClipperError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ClipperD {
    engine: SweepEngine,
    precision: u32,
    scale: f64,
}

impl Default for ClipperD {
    fn default() -> Self {
        Self {
            engine: SweepEngine::new(ClipperOptions::new()),
            precision: DEFAULT_PRECISION,
            scale: 10f64.powi(DEFAULT_PRECISION as i32),
        }
    }
}

impl ClipperD {
    /// New engine with `precision` decimal places, fails if `precision` is above
    /// [MAX_PRECISION](crate::MAX_PRECISION).
    #[inline]
    pub fn new(precision: u32) -> Result<Self> {
        Self::with_options(precision, ClipperOptions::new())
    }

    pub fn with_options(precision: u32, options: ClipperOptions) -> Result<Self> {
        let scale = precision_scale(precision)?;
        Ok(Self {
            engine: SweepEngine::new(options),
            precision,
            scale,
        })
    }

    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    #[inline]
    pub fn options(&self) -> ClipperOptions {
        self.engine.options
    }

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

    /// Scale and add paths of the given role. The whole batch is scaled first, on error nothing
    /// is added.
    pub fn add_paths(&mut self, paths: &[PathD], polytype: PathType, is_open: bool) -> Result<()> {
        let scaled = scale_paths_to_64(paths, self.scale)?;
        self.engine.add_paths(&scaled, polytype, is_open);
        Ok(())
    }

    #[inline]
    pub fn add_subject(&mut self, paths: &[PathD]) -> Result<()> {
        self.add_paths(paths, PathType::Subject, false)
    }

    #[inline]
    pub fn add_open_subject(&mut self, paths: &[PathD]) -> Result<()> {
        self.add_paths(paths, PathType::Subject, true)
    }

    #[inline]
    pub fn add_clip(&mut self, paths: &[PathD]) -> Result<()> {
        self.add_paths(paths, PathType::Clip, false)
    }

    #[inline]
    pub fn clear(&mut self) {
        self.engine.clear();
    }

    pub fn execute(&mut self, cliptype: ClipType, fillrule: FillRule) -> ClipSolution<f64> {
        debug!("real domain execute at precision {}", self.precision);
        let solution = self.engine.execute_paths(cliptype, fillrule);
        let inv_scale = 1.0 / self.scale;
        ClipSolution {
            closed: scale_paths_to_d(&solution.closed, inv_scale),
            open: scale_paths_to_d(&solution.open, inv_scale),
            succeeded: solution.succeeded,
        }
    }

    pub fn execute_tree(&mut self, cliptype: ClipType, fillrule: FillRule) -> TreeSolution<f64> {
        debug!("real domain tree execute at precision {}", self.precision);
        let solution = self.engine.execute_tree(cliptype, fillrule);
        let inv_scale = 1.0 / self.scale;
        TreeSolution {
            tree: solution
                .tree
                .map_polygons(|p| scale_path_to_d(p, inv_scale)),
            open: scale_paths_to_d(&solution.open, inv_scale),
            succeeded: solution.succeeded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClipperError, core::math::PointD, path::area};

    fn square(x: f64, y: f64, size: f64) -> PathD {
        vec![
            PointD::new(x, y),
            PointD::new(x + size, y),
            PointD::new(x + size, y + size),
            PointD::new(x, y + size),
        ]
    }

    #[test]
    fn precision_is_validated() {
        assert!(matches!(
            ClipperD::new(9),
            Err(ClipperError::PrecisionOutOfRange(9))
        ));
        assert_eq!(ClipperD::default().precision(), 2);
    }

    #[test]
    fn nan_input_is_rejected() {
        let mut clipper = ClipperD::default();
        let bad = vec![PointD::new(f64::NAN, 0.0), PointD::new(1.0, 0.0), PointD::new(1.0, 1.0)];
        assert!(clipper.add_subject(&[bad]).is_err());
    }

    #[test]
    fn difference_keeps_hole() {
        let mut clipper = ClipperD::new(3).unwrap();
        clipper.add_subject(&[square(0.0, 0.0, 10.0)]).unwrap();
        clipper.add_clip(&[square(2.5, 2.5, 5.0)]).unwrap();
        let solution = clipper.execute(ClipType::Difference, FillRule::NonZero);
        assert_eq!(solution.closed.len(), 2);
        let total: f64 = solution.closed.iter().map(|p| area(p)).sum();
        assert!((total - 75.0).abs() < 1e-9);
    }
}
