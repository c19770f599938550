//! Polygon and polyline offsetting (inflating/deflating) with configurable joins and end caps.
mod clipper_offset;
mod clipper_offset_d;
mod functions;
mod group;
mod joins;
mod offset_types;

pub use clipper_offset::*;
pub use clipper_offset_d::*;
pub use functions::*;
pub use offset_types::*;
