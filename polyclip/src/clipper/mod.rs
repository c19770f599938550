//! Boolean clipping (intersection, union, difference, xor) of polygons and polylines.
mod clip_types;
mod clipper64;
mod clipper_d;
mod functions;
pub(crate) mod internal;

pub use clip_types::*;
pub use clipper64::*;
pub use clipper_d::*;
pub use functions::*;
