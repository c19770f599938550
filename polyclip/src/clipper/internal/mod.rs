//! Sweep state and algorithm shared by the integer and real domain boolean engines.
//!
//! Sweep direction: the scanline moves from the largest y to the smallest y. Local minima are
//! vertexes with a locally maximal y, "top" of an edge is its end with the smaller y.
mod active;
mod build;
mod engine;
mod horizontal;
mod intersect;
mod output;
mod outrec;
mod vertex;
mod winding;

pub(crate) use engine::SweepEngine;
