#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Corner construction used where two offset edges meet.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JoinType {
    /// Corners are squared off at distance delta from the vertex.
    #[default]
    Square,
    /// Offset edge end points are connected directly (chamfer).
    Bevel,
    /// Corners are rounded with an arc of radius delta.
    Round,
    /// Offset edges are extended to meet, falling back to [JoinType::Square] when the miter would
    /// exceed the miter limit.
    Miter,
}

/// How path ends are treated.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EndType {
    /// Path is a closed polygon, only its outline side matching delta's sign is offset.
    #[default]
    Polygon,
    /// Open path offset on both sides with its ends joined (like a closed polyline outline).
    Joined,
    /// Open path with square ends cut flat at the end points.
    Butt,
    /// Open path with square ends extended by delta.
    Square,
    /// Open path with round ends.
    Round,
}

/// Struct to hold options that affect offsetting.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetOptions {
    /// Maximum miter length as a multiple of delta before a miter join is squared off, values
    /// <= 1 are treated as 1.
    pub miter_limit: f64,
    /// Maximum distance round joins/ends may deviate from the true arc, values <= 1e-12 derive the
    /// tolerance from delta.
    pub arc_tolerance: f64,
    /// Keep collinear vertexes in the result.
    pub preserve_collinear: bool,
    /// Reverse the orientation of the result paths.
    pub reverse_solution: bool,
}

impl OffsetOptions {
    #[inline]
    pub fn new() -> Self {
        Self {
            miter_limit: 2.0,
            arc_tolerance: 0.0,
            preserve_collinear: false,
            reverse_solution: false,
        }
    }
}

impl Default for OffsetOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
