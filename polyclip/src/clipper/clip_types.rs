//! Supporting public types used by the boolean clipping engines.

use crate::{path::Path, polytree::PolyTree};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Boolean operation to apply between subject and clip paths.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClipType {
    /// No operation, execute returns an empty solution.
    #[default]
    None,
    /// Regions inside both subject and clip.
    Intersection,
    /// Regions inside subject or clip.
    Union,
    /// Regions inside subject but not clip.
    Difference,
    /// Regions inside exactly one of subject and clip.
    Xor,
}

/// Policy mapping an accumulated winding count to inside/outside, applied to subject and clip
/// paths alike.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillRule {
    /// Odd winding counts are inside.
    #[default]
    EvenOdd,
    /// Non-zero winding counts are inside.
    NonZero,
    /// Positive winding counts are inside.
    Positive,
    /// Negative winding counts are inside.
    Negative,
}

/// Role of an input path.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathType {
    Subject,
    Clip,
}

/// Struct to hold options that affect subsequent boolean executions.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipperOptions {
    /// Keep collinear vertexes in closed results (duplicates and 180 degree spikes are still
    /// removed).
    pub preserve_collinear: bool,
    /// Reverse the point order of every result path, closed results are then negatively
    /// oriented.
    pub reverse_solution: bool,
}

impl ClipperOptions {
    #[inline]
    pub fn new() -> Self {
        Self {
            preserve_collinear: true,
            reverse_solution: false,
        }
    }
}

impl Default for ClipperOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a boolean execution returning flat path sets.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct ClipSolution<T> {
    /// Closed result paths (outer rings positive, holes negative unless reversed).
    pub closed: Vec<Path<T>>,
    /// Open result paths, only produced when open subjects were added.
    pub open: Vec<Path<T>>,
    /// False if the sweep hit an internal inconsistency, in which case both path sets are empty.
    pub succeeded: bool,
}

impl<T> ClipSolution<T> {
    #[inline]
    pub fn empty() -> Self {
        Self {
            closed: Vec::new(),
            open: Vec::new(),
            succeeded: true,
        }
    }

    #[inline]
    pub(crate) fn failed() -> Self {
        Self {
            closed: Vec::new(),
            open: Vec::new(),
            succeeded: false,
        }
    }

    /// Returns true if there are no closed and no open result paths.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.closed.is_empty() && self.open.is_empty()
    }
}

impl<T> Default for ClipSolution<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

/// Result of a boolean execution returning closed paths as a [PolyTree].
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone)]
pub struct TreeSolution<T> {
    /// Closed result paths arranged by containment (outer, hole, island, ...).
    pub tree: PolyTree<T>,
    /// Open result paths.
    pub open: Vec<Path<T>>,
    /// False if the sweep hit an internal inconsistency, in which case the tree is empty.
    pub succeeded: bool,
}
