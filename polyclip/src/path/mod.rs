//! Path and path set types plus the orientation, bounds and domain conversion utilities shared by
//! the boolean and offsetting engines.
mod path_utils;
mod scaling;

pub use path_utils::*;
pub use scaling::*;

use crate::core::math::Point;

/// Ordered sequence of points, open (polyline) or closed (polygon ring) depending on how it is
/// added to an engine. Insertion order defines edge direction and orientation sign.
pub type Path<T> = Vec<Point<T>>;

/// Ordered collection of paths.
pub type Paths<T> = Vec<Path<T>>;

pub type Path64 = Path<i64>;
pub type PathD = Path<f64>;
pub type Paths64 = Paths<i64>;
pub type PathsD = Paths<f64>;
