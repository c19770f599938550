//! Polygon boolean clipping and offsetting on integer and real coordinates.
//!
//! [Clipper64] and [ClipperD] run intersection, union, difference and xor over closed and open
//! paths under a [FillRule]. [ClipperOffset] and [ClipperOffsetD] inflate or deflate paths with
//! mitered, round, beveled or squared joins and end caps.

#[macro_use]
mod macros;
pub mod clipper;
pub mod core;
mod error;
pub mod offset;
pub mod path;
pub mod polytree;

pub use crate::clipper::*;
pub use crate::core::math::{Point, Point64, PointD, Rect, Rect64, RectD};
pub use crate::core::traits::*;
pub use crate::error::*;
pub use crate::offset::*;
pub use crate::path::*;
pub use crate::polytree::*;

/// Version of the library.
///
/// # Examples
///
/// ```
/// assert!(!polyclip::version().is_empty());
/// ```
#[inline]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
