//! Turning output rings into result paths: collinear cleanup, self intersection splitting and
//! polygon tree ownership.

use super::engine::SweepEngine;
use crate::{
    core::math::{
        Point64, dot_product, is_collinear, pts_really_close, segment_intersect_pt,
        segments_intersect,
    },
    path::{Path64, Paths64, PointInPolygonResult, bounds, point_in_polygon},
    polytree::PolyTree64,
};

fn area_triangle(pt1: Point64, pt2: Point64, pt3: Point64) -> f64 {
    let (x1, y1) = (pt1.x as f64, pt1.y as f64);
    let (x2, y2) = (pt2.x as f64, pt2.y as f64);
    let (x3, y3) = (pt3.x as f64, pt3.y as f64);
    (y3 + y1) * (x3 - x1) + (y1 + y2) * (x1 - x2) + (y2 + y3) * (x2 - x3)
}

impl SweepEngine {
    #[inline]
    fn op_pt(&self, op: usize) -> Point64 {
        self.outpts[op].pt
    }

    #[inline]
    fn op_next(&self, op: usize) -> usize {
        self.outpts[op].next
    }

    #[inline]
    fn op_prev(&self, op: usize) -> usize {
        self.outpts[op].prev
    }

    /// Signed area of the ring containing `op`.
    fn ring_area(&self, op: usize) -> f64 {
        let mut result = 0.0;
        let mut op2 = op;
        loop {
            let prev = self.op_pt(self.op_prev(op2));
            let curr = self.op_pt(op2);
            result += (prev.y as f64 + curr.y as f64) * (prev.x as f64 - curr.x as f64);
            op2 = self.op_next(op2);
            if op2 == op {
                break;
            }
        }
        result * 0.5
    }

    fn ring_points(&self, op: usize) -> Path64 {
        let mut result = Vec::new();
        let mut op2 = op;
        loop {
            result.push(self.op_pt(op2));
            op2 = self.op_next(op2);
            if op2 == op {
                break;
            }
        }
        result
    }

    fn is_very_small_triangle(&self, op: usize) -> bool {
        let (prev, next) = (self.op_prev(op), self.op_next(op));
        self.op_next(next) == prev
            && (pts_really_close(self.op_pt(prev), self.op_pt(next))
                || pts_really_close(self.op_pt(op), self.op_pt(next))
                || pts_really_close(self.op_pt(op), self.op_pt(prev)))
    }

    fn is_valid_closed_path(&self, op: Option<usize>) -> bool {
        op.is_some_and(|op| {
            let next = self.op_next(op);
            next != op && next != self.op_prev(op) && !self.is_very_small_triangle(op)
        })
    }

    /// Unlink `op` from its ring, returning the point that followed it.
    fn dispose_outpt(&mut self, op: usize) -> usize {
        let (prev, next) = (self.op_prev(op), self.op_next(op));
        self.outpts[prev].next = next;
        self.outpts[next].prev = prev;
        next
    }

    /// Ring with duplicate and collinear points removed (used for containment tests).
    fn get_clean_path(&self, op: usize) -> Path64 {
        let mut result = Vec::new();
        let mut op2 = op;
        while self.op_next(op2) != op
            && ((self.op_pt(op2).x == self.op_pt(self.op_next(op2)).x
                && self.op_pt(op2).x == self.op_pt(self.op_prev(op2)).x)
                || (self.op_pt(op2).y == self.op_pt(self.op_next(op2)).y
                    && self.op_pt(op2).y == self.op_pt(self.op_prev(op2)).y))
        {
            op2 = self.op_next(op2);
        }
        result.push(self.op_pt(op2));
        let mut prev_op = op2;
        op2 = self.op_next(op2);

        while op2 != op {
            let (p, pp, pn) = (
                self.op_pt(op2),
                self.op_pt(prev_op),
                self.op_pt(self.op_next(op2)),
            );
            if (p.x != pn.x || p.x != pp.x) && (p.y != pn.y || p.y != pp.y) {
                result.push(p);
                prev_op = op2;
            }
            op2 = self.op_next(op2);
        }
        result
    }

    /// Returns true if the ring of `op1` lies inside the ring of `op2`.
    pub(super) fn path1_inside_path2(&self, op1: usize, op2: usize) -> bool {
        // the number of vertexes that must be unambiguously inside or outside before deciding
        let poly2 = self.ring_points(op2);
        let mut outside_cnt: i32 = 0;
        let mut op = op1;
        loop {
            match point_in_polygon(self.op_pt(op), &poly2) {
                PointInPolygonResult::IsOutside => outside_cnt += 1,
                PointInPolygonResult::IsInside => outside_cnt -= 1,
                PointInPolygonResult::IsOn => {}
            }
            op = self.op_next(op);
            if op == op1 || outside_cnt.abs() > 1 {
                break;
            }
        }
        if outside_cnt.abs() > 1 {
            return outside_cnt < 0;
        }

        // all vertexes were on or very close to the other ring, test the midpoint instead
        let mid = bounds(&self.get_clean_path(op1)).mid_point();
        let path2 = self.get_clean_path(op2);
        point_in_polygon(mid, &path2) != PointInPolygonResult::IsOutside
    }

    fn clean_collinear(&mut self, outrec: usize) {
        let Some(outrec) = self.get_real_outrec(outrec) else {
            return;
        };
        if self.outrecs[outrec].is_open {
            return;
        }
        if !self.is_valid_closed_path(self.outrecs[outrec].pts) {
            self.outrecs[outrec].pts = None;
            return;
        }
        let Some(mut start_op) = self.outrecs[outrec].pts else {
            return;
        };

        let preserve_collinear = self.options.preserve_collinear;
        let mut op2 = start_op;
        loop {
            let (prev, next) = (self.op_prev(op2), self.op_next(op2));
            let (pp, p, pn) = (self.op_pt(prev), self.op_pt(op2), self.op_pt(next));
            // always remove duplicates and 180 degree spikes, other collinear points only when
            // not preserving them
            if is_collinear(pp, p, pn)
                && (p == pp || p == pn || !preserve_collinear || dot_product(pp, p, pn) < 0.0)
            {
                if self.outrecs[outrec].pts == Some(op2) {
                    self.outrecs[outrec].pts = Some(prev);
                }
                op2 = self.dispose_outpt(op2);
                if !self.is_valid_closed_path(Some(op2)) {
                    self.outrecs[outrec].pts = None;
                    return;
                }
                start_op = op2;
                continue;
            }
            op2 = next;
            if op2 == start_op {
                break;
            }
        }
        self.fix_self_intersects(outrec);
    }

    fn do_split_op(&mut self, outrec: usize, split_op: usize) {
        // split_op.prev -> split_op and split_op.next -> split_op.next.next intersect
        let prev_op = self.op_prev(split_op);
        let next_op = self.op_next(split_op);
        let next_next_op = self.op_next(next_op);
        self.outrecs[outrec].pts = Some(prev_op);

        let ip = segment_intersect_pt(
            self.op_pt(prev_op),
            self.op_pt(split_op),
            self.op_pt(next_op),
            self.op_pt(next_next_op),
        )
        .unwrap_or(self.op_pt(split_op));

        let area1 = self.ring_area(prev_op);
        let abs_area1 = area1.abs();
        if abs_area1 < 2.0 {
            self.outrecs[outrec].pts = None;
            return;
        }

        let area2 = area_triangle(ip, self.op_pt(split_op), self.op_pt(next_op));
        let abs_area2 = area2.abs();

        // de-link split_op and split_op.next from the ring, inserting the intersection point
        if ip == self.op_pt(prev_op) || ip == self.op_pt(next_next_op) {
            self.outpts[next_next_op].prev = prev_op;
            self.outpts[prev_op].next = next_next_op;
        } else {
            let new_op2 = self.new_outpt(ip, self.outpts[prev_op].outrec);
            self.outpts[new_op2].prev = prev_op;
            self.outpts[new_op2].next = next_next_op;
            self.outpts[next_next_op].prev = new_op2;
            self.outpts[prev_op].next = new_op2;
        }

        // the triangle split off is kept only when it's not tiny and either larger than the
        // remainder or of the same orientation
        if abs_area2 >= 1.0 && (abs_area2 > abs_area1 || (area2 > 0.0) == (area1 > 0.0)) {
            let new_outrec = self.new_outrec();
            self.outrecs[new_outrec].owner = self.outrecs[outrec].owner;
            self.outpts[split_op].outrec = new_outrec;
            self.outpts[next_op].outrec = new_outrec;

            let new_op = self.new_outpt(ip, new_outrec);
            self.outpts[new_op].prev = next_op;
            self.outpts[new_op].next = split_op;
            self.outrecs[new_outrec].pts = Some(new_op);
            self.outpts[split_op].prev = new_op;
            self.outpts[next_op].next = new_op;

            if self.using_polytree {
                if self.path1_inside_path2(prev_op, new_op) {
                    self.outrecs[new_outrec].splits.push(outrec);
                } else {
                    self.outrecs[outrec].splits.push(new_outrec);
                }
            }
        }
    }

    fn fix_self_intersects(&mut self, outrec: usize) {
        let Some(mut op2) = self.outrecs[outrec].pts else {
            return;
        };
        // triangles can't self intersect
        if self.op_prev(op2) == self.op_next(self.op_next(op2)) {
            return;
        }
        loop {
            let next = self.op_next(op2);
            let next_next = self.op_next(next);
            let prev_pt = self.op_pt(self.op_prev(op2));
            if segments_intersect(prev_pt, self.op_pt(op2), self.op_pt(next), self.op_pt(next_next)) {
                let next3 = self.op_next(next_next);
                if segments_intersect(
                    prev_pt,
                    self.op_pt(op2),
                    self.op_pt(next_next),
                    self.op_pt(next3),
                ) {
                    // adjacent crossings (a micro self intersection), insert a copy of
                    // next_next ahead of op2 instead of splitting
                    let dup = self.duplicate_op(op2, false);
                    self.outpts[dup].pt = self.op_pt(next_next);
                    op2 = self.op_next(dup);
                } else {
                    let pts = self.outrecs[outrec].pts;
                    if pts == Some(op2) || pts == Some(next) {
                        self.outrecs[outrec].pts = pts.map(|p| self.op_prev(p));
                    }
                    self.do_split_op(outrec, op2);
                    let Some(p) = self.outrecs[outrec].pts else {
                        break;
                    };
                    op2 = p;
                    if self.op_prev(op2) == self.op_next(self.op_next(op2)) {
                        break;
                    }
                    continue;
                }
            }

            op2 = self.op_next(op2);
            if Some(op2) == self.outrecs[outrec].pts {
                break;
            }
        }
    }

    /// Extract the points of a ring. Closed results need at least 3 points and must not be a
    /// tiny triangle, open results need at least 2.
    fn build_path(&self, op: Option<usize>, reverse: bool, is_open: bool) -> Option<Path64> {
        let op = op?;
        if self.op_next(op) == op || (!is_open && self.op_next(op) == self.op_prev(op)) {
            return None;
        }

        let (start, mut op2) = if reverse {
            (op, self.op_prev(op))
        } else {
            let start = self.op_next(op);
            (start, self.op_next(start))
        };
        let mut last_pt = self.op_pt(start);
        let mut path = vec![last_pt];

        while op2 != start {
            let pt = self.op_pt(op2);
            if pt != last_pt {
                last_pt = pt;
                path.push(pt);
            }
            op2 = if reverse {
                self.op_prev(op2)
            } else {
                self.op_next(op2)
            };
        }

        if is_open {
            (path.len() >= 2).then_some(path)
        } else if path.len() < 3 || (path.len() == 3 && self.is_very_small_triangle(op2)) {
            None
        } else {
            Some(path)
        }
    }

    /// Returns (closed, open) result paths.
    pub(super) fn build_paths(&mut self) -> (Paths64, Paths64) {
        let reverse = self.options.reverse_solution;
        let mut closed = Vec::with_capacity(self.outrecs.len());
        let mut open = Vec::new();

        // outrecs may be added while cleaning (splits), so iterate by index
        let mut i = 0;
        while i < self.outrecs.len() {
            if let Some(pts) = self.outrecs[i].pts {
                if self.outrecs[i].is_open {
                    if let Some(path) = self.build_path(Some(pts), reverse, true) {
                        open.push(path);
                    }
                } else {
                    // clean_collinear may change the starting point
                    self.clean_collinear(i);
                    if let Some(path) = self.build_path(self.outrecs[i].pts, reverse, false) {
                        closed.push(path);
                    }
                }
            }
            i += 1;
        }
        (closed, open)
    }

    /// Ensure the record has a cleaned path and bounds, returns false if it has none.
    fn check_bounds(&mut self, outrec: usize) -> bool {
        if self.outrecs[outrec].pts.is_none() {
            return false;
        }
        if !self.outrecs[outrec].bounds.is_empty() {
            return true;
        }
        self.clean_collinear(outrec);
        let Some(path) =
            self.build_path(self.outrecs[outrec].pts, self.options.reverse_solution, false)
        else {
            return false;
        };
        self.outrecs[outrec].bounds = bounds(&path);
        self.outrecs[outrec].path = path;
        true
    }

    fn check_split_owner(&mut self, outrec: usize, splits: &[usize]) -> bool {
        for &s in splits {
            if self.outrecs[s].pts.is_none()
                && !self.outrecs[s].splits.is_empty()
                && self.outrecs[s].recursive_split != Some(outrec)
            {
                self.outrecs[s].recursive_split = Some(outrec);
                let nested = self.outrecs[s].splits.clone();
                if self.check_split_owner(outrec, &nested) {
                    return true;
                }
            }

            let Some(split) = self.get_real_outrec(s) else {
                continue;
            };
            if split == outrec || self.outrecs[split].recursive_split == Some(outrec) {
                continue;
            }
            // prevent infinite loops
            self.outrecs[split].recursive_split = Some(outrec);

            if !self.outrecs[split].splits.is_empty() {
                let nested = self.outrecs[split].splits.clone();
                if self.check_split_owner(outrec, &nested) {
                    return true;
                }
            }

            if !self.check_bounds(split)
                || !self.outrecs[split]
                    .bounds
                    .contains_rect(&self.outrecs[outrec].bounds)
            {
                continue;
            }
            let (Some(p1), Some(p2)) = (self.outrecs[outrec].pts, self.outrecs[split].pts) else {
                continue;
            };
            if !self.path1_inside_path2(p1, p2) {
                continue;
            }

            // split is owned by outrec (#957)
            if !self.is_valid_owner(outrec, split) {
                self.outrecs[split].owner = self.outrecs[outrec].owner;
            }
            self.outrecs[outrec].owner = Some(split);
            return true;
        }
        false
    }

    fn recursive_check_owners(&mut self, outrec: usize, tree: &mut PolyTree64) {
        // set the real owner of outrec and add it to the tree
        if self.outrecs[outrec].polypath.is_some() || self.outrecs[outrec].bounds.is_empty() {
            return;
        }

        while let Some(owner) = self.outrecs[outrec].owner {
            if !self.outrecs[owner].splits.is_empty() {
                let splits = self.outrecs[owner].splits.clone();
                if self.check_split_owner(outrec, &splits) {
                    break;
                }
            }
            if self.outrecs[owner].pts.is_some()
                && self.check_bounds(owner)
                && self.outrecs[owner]
                    .bounds
                    .contains_rect(&self.outrecs[outrec].bounds)
                && let (Some(p1), Some(p2)) = (self.outrecs[outrec].pts, self.outrecs[owner].pts)
                && self.path1_inside_path2(p1, p2)
            {
                break;
            }
            self.outrecs[outrec].owner = self.outrecs[owner].owner;
        }

        let parent = match self.outrecs[outrec].owner {
            Some(owner) => {
                if self.outrecs[owner].polypath.is_none() {
                    self.recursive_check_owners(owner, tree);
                }
                self.outrecs[owner].polypath.unwrap_or(PolyTree64::ROOT)
            }
            None => PolyTree64::ROOT,
        };
        let path = std::mem::take(&mut self.outrecs[outrec].path);
        self.outrecs[outrec].polypath = Some(tree.add_child(parent, path));
    }

    /// Fill `tree` with the closed results nested by containment, returns the open results.
    pub(super) fn build_tree(&mut self, tree: &mut PolyTree64) -> Paths64 {
        tree.clear();
        let reverse = self.options.reverse_solution;
        let mut open = Vec::new();

        // outrecs may be added while checking bounds, so iterate by index
        let mut i = 0;
        while i < self.outrecs.len() {
            if let Some(pts) = self.outrecs[i].pts {
                if self.outrecs[i].is_open {
                    if let Some(path) = self.build_path(Some(pts), reverse, true) {
                        open.push(path);
                    }
                } else if self.check_bounds(i) {
                    self.recursive_check_owners(i, tree);
                }
            }
            i += 1;
        }
        open
    }
}
