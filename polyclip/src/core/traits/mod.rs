//! Core/common traits for use in polyclip.
mod coord;
mod fuzzy_eq;

pub use coord::Coord;
pub use fuzzy_eq::FuzzyEq;
