//! Building output rings while sweeping: starting, extending, joining and splitting them.

use super::{active::JoinWith, engine::SweepEngine, outrec::{OutPt, OutRec}};
use crate::core::math::{Point64, is_collinear, perpendic_dist_from_line_sqrd};

impl SweepEngine {
    pub(super) fn new_outrec(&mut self) -> usize {
        self.outrecs.push(OutRec::new());
        self.outrecs.len() - 1
    }

    /// New single point ring.
    pub(super) fn new_outpt(&mut self, pt: Point64, outrec: usize) -> usize {
        let idx = self.outpts.len();
        self.outpts.push(OutPt {
            pt,
            next: idx,
            prev: idx,
            outrec,
            horz: false,
        });
        idx
    }

    #[inline]
    pub(super) fn set_sides(&mut self, outrec: usize, start_edge: usize, end_edge: usize) {
        self.outrecs[outrec].front_edge = Some(start_edge);
        self.outrecs[outrec].back_edge = Some(end_edge);
    }

    pub(super) fn swap_front_back_sides(&mut self, outrec: usize) {
        let or = &mut self.outrecs[outrec];
        std::mem::swap(&mut or.front_edge, &mut or.back_edge);
        if let Some(pts) = or.pts {
            or.pts = Some(self.outpts[pts].next);
        }
    }

    /// Append `pt` to the front or back of the hot edge's ring (depending on which side the edge
    /// is), returning the new (or coincident existing) output point.
    pub(super) fn add_out_pt(&mut self, e: usize, pt: Point64) -> Option<usize> {
        let outrec = self.actives[e].outrec?;
        let to_front = self.outrecs[outrec].front_edge == Some(e);
        let op_front = self.outrecs[outrec].pts?;
        let op_back = self.outpts[op_front].next;

        if to_front {
            if pt == self.outpts[op_front].pt {
                return Some(op_front);
            }
        } else if pt == self.outpts[op_back].pt {
            return Some(op_back);
        }

        let new_op = self.new_outpt(pt, outrec);
        self.outpts[op_back].prev = new_op;
        self.outpts[new_op].prev = op_front;
        self.outpts[new_op].next = op_back;
        self.outpts[op_front].next = new_op;
        if to_front {
            self.outrecs[outrec].pts = Some(new_op);
        }
        Some(new_op)
    }

    /// Nearest hot closed path edge to the left of `e`.
    pub(super) fn get_prev_hot_edge(&self, e: usize) -> Option<usize> {
        let mut prev = self.actives[e].prev_in_ael;
        while let Some(p) = prev {
            if !self.is_open(p) && self.is_hot(p) {
                return Some(p);
            }
            prev = self.actives[p].prev_in_ael;
        }
        None
    }

    /// Start a new ring at `pt` bounded by `e1` and `e2`.
    pub(super) fn add_local_min_poly(&mut self, e1: usize, e2: usize, pt: Point64, is_new: bool) -> usize {
        let outrec = self.new_outrec();
        self.actives[e1].outrec = Some(outrec);
        self.actives[e2].outrec = Some(outrec);

        if self.is_open(e1) {
            self.outrecs[outrec].owner = None;
            self.outrecs[outrec].is_open = true;
            if self.actives[e1].wind_dx > 0 {
                self.set_sides(outrec, e1, e2);
            } else {
                self.set_sides(outrec, e2, e1);
            }
        } else {
            // Wind direction is that of the input paths and unrelated to output orientation,
            // which is determined by the front (ascending) edge instead.
            match self.get_prev_hot_edge(e1) {
                Some(prev_hot) => {
                    if self.using_polytree
                        && let Some(prev_outrec) = self.actives[prev_hot].outrec
                    {
                        self.set_owner(outrec, prev_outrec);
                    }
                    if self.is_front(prev_hot) == is_new {
                        self.set_sides(outrec, e2, e1);
                    } else {
                        self.set_sides(outrec, e1, e2);
                    }
                }
                None => {
                    self.outrecs[outrec].owner = None;
                    if is_new {
                        self.set_sides(outrec, e1, e2);
                    } else {
                        self.set_sides(outrec, e2, e1);
                    }
                }
            }
        }

        let op = self.new_outpt(pt, outrec);
        self.outrecs[outrec].pts = Some(op);
        op
    }

    /// Close off the ring(s) of `e1` and `e2` meeting at `pt`.
    pub(super) fn add_local_max_poly(&mut self, e1: usize, e2: usize, pt: Point64) -> Option<usize> {
        if self.actives[e1].is_joined() {
            self.split(e1, pt);
        }
        if self.actives[e2].is_joined() {
            self.split(e2, pt);
        }

        if self.is_front(e1) == self.is_front(e2) {
            if self.is_open_end(e1) {
                let outrec = self.actives[e1].outrec?;
                self.swap_front_back_sides(outrec);
            } else if self.is_open_end(e2) {
                let outrec = self.actives[e2].outrec?;
                self.swap_front_back_sides(outrec);
            } else {
                self.succeeded = false;
                return None;
            }
        }

        let result = self.add_out_pt(e1, pt);
        let or1 = self.actives[e1].outrec?;
        let or2 = self.actives[e2].outrec?;

        if or1 == or2 {
            self.outrecs[or1].pts = result;

            if self.using_polytree {
                // likely not the real owner yet, that's settled while building the tree
                match self.get_prev_hot_edge(e1).and_then(|e| self.actives[e].outrec) {
                    Some(prev_outrec) => self.set_owner(or1, prev_outrec),
                    None => self.outrecs[or1].owner = None,
                }
            }

            self.uncouple_outrec(e1);
            if let Some(owner) = self.outrecs[or1].owner
                && self.outrecs[owner].front_edge.is_none()
            {
                self.outrecs[or1].owner = self.get_real_outrec(owner);
            }
            return self.outrecs[or1].pts;
        }

        // preserve the winding orientation of the surviving ring
        if self.is_open(e1) {
            if self.actives[e1].wind_dx < 0 {
                self.join_outrec_paths(e1, e2);
            } else {
                self.join_outrec_paths(e2, e1);
            }
        } else if or1 < or2 {
            self.join_outrec_paths(e1, e2);
        } else {
            self.join_outrec_paths(e2, e1);
        }
        result
    }

    /// Join the ring of `e2` onto the ring of `e1`, leaving `e2`'s record empty.
    fn join_outrec_paths(&mut self, e1: usize, e2: usize) {
        let (Some(or1), Some(or2)) = (self.actives[e1].outrec, self.actives[e2].outrec) else {
            return;
        };
        let (Some(p1_st), Some(p2_st)) = (self.outrecs[or1].pts, self.outrecs[or2].pts) else {
            return;
        };
        let p1_end = self.outpts[p1_st].next;
        let p2_end = self.outpts[p2_st].next;

        if self.is_front(e1) {
            self.outpts[p2_end].prev = p1_st;
            self.outpts[p1_st].next = p2_end;
            self.outpts[p2_st].next = p1_end;
            self.outpts[p1_end].prev = p2_st;
            self.outrecs[or1].pts = Some(p2_st);
            self.outrecs[or1].front_edge = self.outrecs[or2].front_edge;
            if let Some(front) = self.outrecs[or1].front_edge {
                self.actives[front].outrec = Some(or1);
            }
        } else {
            self.outpts[p1_end].prev = p2_st;
            self.outpts[p2_st].next = p1_end;
            self.outpts[p1_st].next = p2_end;
            self.outpts[p2_end].prev = p1_st;
            self.outrecs[or1].back_edge = self.outrecs[or2].back_edge;
            if let Some(back) = self.outrecs[or1].back_edge {
                self.actives[back].outrec = Some(or1);
            }
        }

        self.outrecs[or2].front_edge = None;
        self.outrecs[or2].back_edge = None;
        self.outrecs[or2].pts = None;

        if self.is_open_end(e1) {
            self.outrecs[or2].pts = self.outrecs[or1].pts;
            self.outrecs[or1].pts = None;
        } else {
            self.set_owner(or2, or1);
        }

        // e1 and e2 are maxima (or joined) and leave the output
        self.actives[e1].outrec = None;
        self.actives[e2].outrec = None;
    }

    pub(super) fn start_open_path(&mut self, e: usize, pt: Point64) -> usize {
        let outrec = self.new_outrec();
        self.outrecs[outrec].is_open = true;
        if self.actives[e].wind_dx > 0 {
            self.outrecs[outrec].front_edge = Some(e);
            self.outrecs[outrec].back_edge = None;
        } else {
            self.outrecs[outrec].front_edge = None;
            self.outrecs[outrec].back_edge = Some(e);
        }
        self.actives[e].outrec = Some(outrec);
        let op = self.new_outpt(pt, outrec);
        self.outrecs[outrec].pts = Some(op);
        op
    }

    pub(super) fn swap_outrecs(&mut self, e1: usize, e2: usize) {
        let or1 = self.actives[e1].outrec;
        let or2 = self.actives[e2].outrec;
        if or1 == or2 {
            if let Some(or) = or1 {
                let or = &mut self.outrecs[or];
                std::mem::swap(&mut or.front_edge, &mut or.back_edge);
            }
            return;
        }

        if let Some(or) = or1 {
            if self.outrecs[or].front_edge == Some(e1) {
                self.outrecs[or].front_edge = Some(e2);
            } else {
                self.outrecs[or].back_edge = Some(e2);
            }
        }
        if let Some(or) = or2 {
            if self.outrecs[or].front_edge == Some(e2) {
                self.outrecs[or].front_edge = Some(e1);
            } else {
                self.outrecs[or].back_edge = Some(e1);
            }
        }
        self.actives[e1].outrec = or2;
        self.actives[e2].outrec = or1;
    }

    fn uncouple_outrec(&mut self, e: usize) {
        let Some(outrec) = self.actives[e].outrec else {
            return;
        };
        if let Some(front) = self.outrecs[outrec].front_edge {
            self.actives[front].outrec = None;
        }
        if let Some(back) = self.outrecs[outrec].back_edge {
            self.actives[back].outrec = None;
        }
        self.outrecs[outrec].front_edge = None;
        self.outrecs[outrec].back_edge = None;
    }

    /// First record up the owner chain that still holds points.
    pub(super) fn get_real_outrec(&self, outrec: usize) -> Option<usize> {
        let mut curr = Some(outrec);
        while let Some(or) = curr {
            if self.outrecs[or].pts.is_some() {
                return Some(or);
            }
            curr = self.outrecs[or].owner;
        }
        None
    }

    /// Returns true if `outrec` is not an owner of `test_owner` (directly or transitively).
    pub(super) fn is_valid_owner(&self, outrec: usize, test_owner: usize) -> bool {
        let mut curr = Some(test_owner);
        while let Some(or) = curr {
            if or == outrec {
                return false;
            }
            curr = self.outrecs[or].owner;
        }
        true
    }

    pub(super) fn set_owner(&mut self, outrec: usize, new_owner: usize) {
        // skip over empty owners
        while let Some(owner) = self.outrecs[new_owner].owner {
            if self.outrecs[owner].pts.is_some() {
                break;
            }
            self.outrecs[new_owner].owner = self.outrecs[owner].owner;
        }

        // make sure that outrec isn't an owner of new_owner
        if !self.is_valid_owner(outrec, new_owner) {
            self.outrecs[new_owner].owner = self.outrecs[outrec].owner;
        }
        self.outrecs[outrec].owner = Some(new_owner);
    }

    pub(super) fn move_splits(&mut self, from: usize, to: usize) {
        let splits = std::mem::take(&mut self.outrecs[from].splits);
        self.outrecs[to]
            .splits
            .extend(splits.into_iter().filter(|&s| s != to));
    }

    /// Output point at the end of the ring that `hot_edge` extends.
    pub(super) fn get_last_op(&self, hot_edge: usize) -> Option<usize> {
        let outrec = self.actives[hot_edge].outrec?;
        let pts = self.outrecs[outrec].pts?;
        if self.outrecs[outrec].front_edge == Some(hot_edge) {
            Some(pts)
        } else {
            Some(self.outpts[pts].next)
        }
    }

    /// Undo the join of `e` with its neighbour, starting a new ring at `curr_pt`.
    pub(super) fn split(&mut self, e: usize, curr_pt: Point64) {
        if self.actives[e].join_with == JoinWith::Right {
            self.actives[e].join_with = JoinWith::None;
            if let Some(next) = self.actives[e].next_in_ael {
                self.actives[next].join_with = JoinWith::None;
                self.add_local_min_poly(e, next, curr_pt, true);
            }
        } else {
            self.actives[e].join_with = JoinWith::None;
            if let Some(prev) = self.actives[e].prev_in_ael {
                self.actives[prev].join_with = JoinWith::None;
                self.add_local_min_poly(prev, e, curr_pt, true);
            }
        }
    }

    /// Returns true if hot edges `e1` and `e2` can be joined at `pt`: both closed, non
    /// horizontal, and not a trivial join close to where either edge starts or ends.
    fn is_joinable_pair(&self, e1: usize, e2: usize, pt: Point64) -> bool {
        if !self.is_hot(e1) || !self.is_hot(e2) || self.is_open(e1) || self.is_open(e2) {
            return false;
        }
        let (a1, a2) = (&self.actives[e1], &self.actives[e2]);
        if a1.is_horizontal() || a2.is_horizontal() {
            return false;
        }
        // avoid trivial joins
        !((pt.y < a1.top.y + 2 || pt.y < a2.top.y + 2) && (a1.bot.y > pt.y || a2.bot.y > pt.y))
    }

    pub(super) fn check_join_left(&mut self, e: usize, pt: Point64, check_curr_x: bool) {
        let Some(prev) = self.actives[e].prev_in_ael else {
            return;
        };
        if !self.is_joinable_pair(e, prev, pt) {
            return;
        }

        let (ae, ap) = (&self.actives[e], &self.actives[prev]);
        if check_curr_x {
            if perpendic_dist_from_line_sqrd(pt, ap.bot, ap.top) > 0.25 {
                return;
            }
        } else if ae.curr_x != ap.curr_x {
            return;
        }
        if !is_collinear(ae.top, pt, ap.top) {
            return;
        }

        let (Some(e_or), Some(prev_or)) = (ae.outrec, ap.outrec) else {
            return;
        };
        if e_or == prev_or {
            self.add_local_max_poly(prev, e, pt);
        } else if e_or < prev_or {
            self.join_outrec_paths(e, prev);
        } else {
            self.join_outrec_paths(prev, e);
        }
        self.actives[prev].join_with = JoinWith::Right;
        self.actives[e].join_with = JoinWith::Left;
    }

    pub(super) fn check_join_right(&mut self, e: usize, pt: Point64, check_curr_x: bool) {
        let Some(next) = self.actives[e].next_in_ael else {
            return;
        };
        if !self.is_joinable_pair(e, next, pt) {
            return;
        }

        let (ae, an) = (&self.actives[e], &self.actives[next]);
        if check_curr_x {
            if perpendic_dist_from_line_sqrd(pt, an.bot, an.top) > 0.35 {
                return;
            }
        } else if ae.curr_x != an.curr_x {
            return;
        }
        if !is_collinear(ae.top, pt, an.top) {
            return;
        }

        let (Some(e_or), Some(next_or)) = (ae.outrec, an.outrec) else {
            return;
        };
        if e_or == next_or {
            self.add_local_max_poly(e, next, pt);
        } else if e_or < next_or {
            self.join_outrec_paths(e, next);
        } else {
            self.join_outrec_paths(next, e);
        }
        self.actives[e].join_with = JoinWith::Right;
        self.actives[next].join_with = JoinWith::Left;
    }
}
