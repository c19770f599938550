use super::{ClipperOffset, EndType, JoinType, OffsetOptions};
use crate::{
    error::{ClipperError, Result},
    path::{
        DEFAULT_PRECISION, PathD, PathsD, precision_scale, scale_path_to_d, scale_paths_to_64,
        scale_paths_to_d,
    },
    polytree::PolyTreeD,
};

/// Offsetting engine in the real coordinate domain.
///
/// Inputs, `delta` and `arc_tolerance` are scaled by `10^precision` and the work is done by a
/// [ClipperOffset], results are scaled back.
///
/// # Examples
///
/// ```
/// # use polyclip::*;
/// let mut offset = ClipperOffsetD::new(3)?;
/// offset.add_path(&pathd![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)], JoinType::Miter, EndType::Polygon)?;
/// let result = offset.execute(0.5, 2.0, 0.0)?;
/// assert_eq!(result.len(), 1);
/// assert_fuzzy_eq!(area(&result[0]), 4.0);
/// # Ok::<(), ClipperError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ClipperOffsetD {
    inner: ClipperOffset,
    precision: u32,
    scale: f64,
}

impl Default for ClipperOffsetD {
    fn default() -> Self {
        Self {
            inner: ClipperOffset::new(),
            precision: DEFAULT_PRECISION,
            scale: 10f64.powi(DEFAULT_PRECISION as i32),
        }
    }
}

impl ClipperOffsetD {
    #[inline]
    pub fn new(precision: u32) -> Result<Self> {
        Self::with_options(precision, OffsetOptions::new())
    }

    pub fn with_options(precision: u32, options: OffsetOptions) -> Result<Self> {
        let scale = precision_scale(precision)?;
        Ok(Self {
            inner: ClipperOffset::with_options(options),
            precision,
            scale,
        })
    }

    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Options with the arc tolerance expressed in real units.
    #[inline]
    pub fn options(&self) -> OffsetOptions {
        let mut options = self.inner.options();
        options.arc_tolerance /= self.scale;
        options
    }

    #[inline]
    pub fn set_options(&mut self, options: OffsetOptions) {
        self.inner.set_options(OffsetOptions {
            arc_tolerance: options.arc_tolerance * self.scale,
            ..options
        });
    }

    #[inline]
    pub fn add_path(&mut self, path: &PathD, join_type: JoinType, end_type: EndType) -> Result<()> {
        self.add_paths(std::slice::from_ref(path), join_type, end_type)
    }

    pub fn add_paths(&mut self, paths: &[PathD], join_type: JoinType, end_type: EndType) -> Result<()> {
        let scaled = scale_paths_to_64(paths, self.scale)?;
        self.inner.add_paths(&scaled, join_type, end_type)
    }

    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn execute(&mut self, delta: f64, miter_limit: f64, arc_tolerance: f64) -> Result<PathsD> {
        let delta = self.scale_delta(delta)?;
        let result = self
            .inner
            .execute(delta, miter_limit, arc_tolerance * self.scale)?;
        Ok(scale_paths_to_d(&result, 1.0 / self.scale))
    }

    pub fn execute_tree(&mut self, delta: f64, miter_limit: f64, arc_tolerance: f64) -> Result<PolyTreeD> {
        let delta = self.scale_delta(delta)?;
        let tree = self
            .inner
            .execute_tree(delta, miter_limit, arc_tolerance * self.scale)?;
        let inv_scale = 1.0 / self.scale;
        Ok(tree.map_polygons(|p| scale_path_to_d(p, inv_scale)))
    }

    fn scale_delta(&self, delta: f64) -> Result<f64> {
        let scaled = delta * self.scale;
        if scaled.is_finite() {
            Ok(scaled)
        } else {
            Err(ClipperError::InvalidOffsetDelta(delta))
        }
    }
}
