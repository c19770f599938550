//! Core/common math: points, rectangles and the geometric predicates used by the sweep and the
//! offsetter.
mod base_math;
mod point;
mod rect;

pub use base_math::*;
pub use point::{Point, Point64, PointD};
pub use rect::{Rect, Rect64, RectD};
