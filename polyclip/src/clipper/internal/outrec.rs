//! Output side of the sweep: output point rings, the records that own them, and the bookkeeping
//! used to join touching horizontal output edges.

use crate::{
    core::math::{Point64, Rect64},
    path::Path64,
};

/// Vertex of an output ring, `next`/`prev` index into the output point arena.
#[derive(Debug, Clone)]
pub(super) struct OutPt {
    pub pt: Point64,
    pub next: usize,
    pub prev: usize,
    pub outrec: usize,
    /// Set once the point starts a horizontal segment (each point starts at most one).
    pub horz: bool,
}

/// Output record: a (possibly still growing) output ring plus its ownership data.
#[derive(Debug, Clone)]
pub(super) struct OutRec {
    pub owner: Option<usize>,
    pub front_edge: Option<usize>,
    pub back_edge: Option<usize>,
    pub pts: Option<usize>,
    pub polypath: Option<usize>,
    pub bounds: Rect64,
    pub path: Path64,
    pub is_open: bool,
    /// Records split off this one while cleaning up self intersections.
    pub splits: Vec<usize>,
    pub recursive_split: Option<usize>,
}

impl OutRec {
    pub fn new() -> Self {
        Self {
            owner: None,
            front_edge: None,
            back_edge: None,
            pts: None,
            polypath: None,
            bounds: Rect64::default(),
            path: Vec::new(),
            is_open: false,
            splits: Vec::new(),
            recursive_split: None,
        }
    }
}

/// Crossing of two adjacent active edges within the current scanbeam.
#[derive(Debug, Copy, Clone)]
pub(super) struct IntersectNode {
    pub pt: Point64,
    pub edge1: usize,
    pub edge2: usize,
}

#[derive(Debug, Copy, Clone)]
pub(super) struct HorzSegment {
    pub left_op: usize,
    pub right_op: Option<usize>,
    pub left_to_right: bool,
}

#[derive(Debug, Copy, Clone)]
pub(super) struct HorzJoin {
    pub op1: usize,
    pub op2: usize,
}
