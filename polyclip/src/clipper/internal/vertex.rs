//! Input vertex rings and the local minima that seed the sweep.

use crate::{clipper::PathType, core::math::Point64};
use std::ops;

/// Classification flags of an input vertex.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub(super) struct VertexFlags(u8);

impl VertexFlags {
    pub const NONE: Self = Self(0);
    pub const OPEN_START: Self = Self(1);
    pub const OPEN_END: Self = Self(2);
    pub const LOCAL_MAX: Self = Self(4);
    pub const LOCAL_MIN: Self = Self(8);

    /// Returns true if any flag of `other` is set.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl ops::BitOr for VertexFlags {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

/// Vertex of an input ring, `next`/`prev` index into the same vertex arena.
#[derive(Debug, Clone)]
pub(super) struct Vertex {
    pub pt: Point64,
    pub next: usize,
    pub prev: usize,
    pub flags: VertexFlags,
}

/// Vertex where two bounds diverge in sweep order (a vertex with locally maximal y).
#[derive(Debug, Clone)]
pub(super) struct LocalMinima {
    pub vertex: usize,
    pub polytype: PathType,
    pub is_open: bool,
}

fn add_local_min(
    vertices: &mut [Vertex],
    minima: &mut Vec<LocalMinima>,
    vertex: usize,
    polytype: PathType,
    is_open: bool,
) {
    // make sure the vertex is added only once
    if vertices[vertex].flags.intersects(VertexFlags::LOCAL_MIN) {
        return;
    }

    vertices[vertex].flags.insert(VertexFlags::LOCAL_MIN);
    minima.push(LocalMinima {
        vertex,
        polytype,
        is_open,
    });
}

/// Append `paths` to the vertex arena as linked rings and record their local minima.
///
/// Consecutive duplicates collapse, a closing point equal to the first is dropped for closed
/// paths, and degenerate paths (closed with fewer than 3 vertexes, open with fewer than 2, or
/// closed and completely horizontal) add no local minima.
pub(super) fn add_paths_to_vertex_list(
    paths: &[Vec<Point64>],
    polytype: PathType,
    is_open: bool,
    vertices: &mut Vec<Vertex>,
    minima: &mut Vec<LocalMinima>,
) {
    for path in paths {
        let v0 = vertices.len();
        for &pt in path {
            if vertices.len() > v0 && vertices[vertices.len() - 1].pt == pt {
                continue;
            }
            vertices.push(Vertex {
                pt,
                next: 0,
                prev: 0,
                flags: VertexFlags::NONE,
            });
        }

        let mut cnt = vertices.len() - v0;
        if !is_open && cnt > 1 && vertices[v0 + cnt - 1].pt == vertices[v0].pt {
            vertices.pop();
            cnt -= 1;
        }

        if cnt < 2 || (cnt == 2 && !is_open) {
            vertices.truncate(v0);
            continue;
        }

        for i in 0..cnt {
            let v = v0 + i;
            vertices[v].next = if i + 1 == cnt { v0 } else { v + 1 };
            vertices[v].prev = if i == 0 { v0 + cnt - 1 } else { v - 1 };
        }

        // "going up" means heading towards smaller y, the direction the sweep advances
        let mut going_up;
        if is_open {
            let mut curr = vertices[v0].next;
            while curr != v0 && vertices[curr].pt.y == vertices[v0].pt.y {
                curr = vertices[curr].next;
            }
            going_up = vertices[curr].pt.y <= vertices[v0].pt.y;
            if going_up {
                vertices[v0].flags = VertexFlags::OPEN_START;
                add_local_min(vertices, minima, v0, polytype, true);
            } else {
                vertices[v0].flags = VertexFlags::OPEN_START | VertexFlags::LOCAL_MAX;
            }
        } else {
            let mut prev = vertices[v0].prev;
            while prev != v0 && vertices[prev].pt.y == vertices[v0].pt.y {
                prev = vertices[prev].prev;
            }
            if prev == v0 {
                // closed paths that are completely flat have no area
                continue;
            }
            going_up = vertices[prev].pt.y > vertices[v0].pt.y;
        }

        let going_up0 = going_up;
        let mut prev = v0;
        let mut curr = vertices[v0].next;
        while curr != v0 {
            if vertices[curr].pt.y > vertices[prev].pt.y && going_up {
                vertices[prev].flags.insert(VertexFlags::LOCAL_MAX);
                going_up = false;
            } else if vertices[curr].pt.y < vertices[prev].pt.y && !going_up {
                going_up = true;
                add_local_min(vertices, minima, prev, polytype, is_open);
            }
            prev = curr;
            curr = vertices[curr].next;
        }

        if is_open {
            vertices[prev].flags.insert(VertexFlags::OPEN_END);
            if going_up {
                vertices[prev].flags.insert(VertexFlags::LOCAL_MAX);
            } else {
                add_local_min(vertices, minima, prev, polytype, is_open);
            }
        } else if going_up != going_up0 {
            if going_up0 {
                add_local_min(vertices, minima, prev, polytype, false);
            } else {
                vertices[prev].flags.insert(VertexFlags::LOCAL_MAX);
            }
        }
    }
}
