//! Horizontal edges: they are processed as a whole at their scanline, and the horizontal runs of
//! output rings are later matched up so that touching rings can be joined (or split).

use super::{
    engine::SweepEngine,
    outrec::{HorzJoin, HorzSegment},
    vertex::VertexFlags,
};
use crate::core::math::Point64;
use std::cmp::Ordering;

impl SweepEngine {
    /// Advance a horizontal closed path edge over consecutive horizontal segments. With
    /// `preserve_collinear` only 180 degree spikes are trimmed.
    pub(super) fn trim_horz(&mut self, e: usize, preserve_collinear: bool) {
        let mut was_trimmed = false;
        let mut pt = self.vertices[self.next_vertex(e)].pt;
        while pt.y == self.actives[e].top.y {
            let (bot, top) = (self.actives[e].bot, self.actives[e].top);
            if preserve_collinear && ((pt.x < top.x) != (bot.x < top.x)) {
                break;
            }

            self.actives[e].vertex_top = self.next_vertex(e);
            self.actives[e].top = pt;
            was_trimmed = true;
            if self.is_maxima(e) {
                break;
            }
            pt = self.vertices[self.next_vertex(e)].pt;
        }

        if was_trimmed {
            self.actives[e].set_dx();
        }
    }

    fn is_maxima_vertex(&self, vertex: usize) -> bool {
        self.vertices[vertex].flags.intersects(VertexFlags::LOCAL_MAX)
    }

    fn get_curr_y_maxima_vertex_open(&self, e: usize) -> Option<usize> {
        let stop = VertexFlags::OPEN_END | VertexFlags::LOCAL_MAX;
        let mut result = self.actives[e].vertex_top;
        if self.actives[e].wind_dx > 0 {
            loop {
                let v = &self.vertices[result];
                if self.vertices[v.next].pt.y != v.pt.y || v.flags.intersects(stop) {
                    break;
                }
                result = v.next;
            }
        } else {
            loop {
                let v = &self.vertices[result];
                if self.vertices[v.prev].pt.y != v.pt.y || v.flags.intersects(stop) {
                    break;
                }
                result = v.prev;
            }
        }
        self.is_maxima_vertex(result).then_some(result)
    }

    fn get_curr_y_maxima_vertex(&self, e: usize) -> Option<usize> {
        let mut result = self.actives[e].vertex_top;
        if self.actives[e].wind_dx > 0 {
            while self.vertices[self.vertices[result].next].pt.y == self.vertices[result].pt.y {
                result = self.vertices[result].next;
            }
        } else {
            while self.vertices[self.vertices[result].prev].pt.y == self.vertices[result].pt.y {
                result = self.vertices[result].prev;
            }
        }
        self.is_maxima_vertex(result).then_some(result)
    }

    /// Returns (is_left_to_right, left_x, right_x) for the horizontal `horz`.
    fn reset_horz_direction(&self, horz: usize, vertex_max: Option<usize>) -> (bool, i64, i64) {
        let h = &self.actives[horz];
        if h.bot.x == h.top.x {
            // the horizontal edge is going nowhere
            let mut e = h.next_in_ael;
            while let Some(x) = e {
                if Some(self.actives[x].vertex_top) == vertex_max {
                    break;
                }
                e = self.actives[x].next_in_ael;
            }
            (e.is_some(), h.curr_x, h.curr_x)
        } else if h.curr_x < h.top.x {
            (true, h.curr_x, h.top.x)
        } else {
            (false, h.top.x, h.curr_x)
        }
    }

    /// Process a horizontal edge (and any consecutive horizontals of its bound) at its scanline.
    ///
    /// Notes: horizontal edges at a local minimum are processed together with the rest of the
    /// bound, intersections with every edge whose curr_x lies in the horizontal's span are
    /// handled here (edges at their local maximum included), and open paths ending on the
    /// horizontal are terminated.
    pub(super) fn do_horizontal(&mut self, horz: usize) {
        let horz_is_open = self.is_open(horz);
        let y = self.actives[horz].bot.y;
        let vertex_max = if horz_is_open {
            self.get_curr_y_maxima_vertex_open(horz)
        } else {
            self.get_curr_y_maxima_vertex(horz)
        };

        // remove 180 degree spikes, also simplify consecutive horizontals when preserving
        // collinear vertexes
        if !horz_is_open && vertex_max.is_some_and(|v| v != self.actives[horz].vertex_top) {
            self.trim_horz(horz, self.options.preserve_collinear);
        }

        let (mut is_left_to_right, mut left_x, mut right_x) =
            self.reset_horz_direction(horz, vertex_max);

        if self.is_hot(horz) {
            let pt = Point64::new(self.actives[horz].curr_x, y);
            let op = self.add_out_pt(horz, pt);
            self.add_trial_horz_join(op);
        }

        loop {
            // loop through consecutive horizontal edges (if open)
            let mut e = if is_left_to_right {
                self.actives[horz].next_in_ael
            } else {
                self.actives[horz].prev_in_ael
            };

            while let Some(ae) = e {
                if Some(self.actives[ae].vertex_top) == vertex_max {
                    // do this first
                    if self.is_hot(horz) && self.actives[ae].is_joined() {
                        let top = self.actives[ae].top;
                        self.split(ae, top);
                    }

                    if self.is_hot(horz) {
                        while Some(self.actives[horz].vertex_top) != vertex_max {
                            let top = self.actives[horz].top;
                            self.add_out_pt(horz, top);
                            self.update_edge_into_ael(horz);
                        }
                        let top = self.actives[horz].top;
                        if is_left_to_right {
                            self.add_local_max_poly(horz, ae, top);
                        } else {
                            self.add_local_max_poly(ae, horz, top);
                        }
                    }
                    self.delete_from_ael(ae);
                    self.delete_from_ael(horz);
                    return;
                }

                // if horz is a maxima, keep going until we reach its maxima pair, otherwise check
                // for break conditions
                if vertex_max != Some(self.actives[horz].vertex_top) || self.is_open_end(horz) {
                    let ae_curr_x = self.actives[ae].curr_x;
                    // otherwise stop when 'ae' is beyond the end of the horizontal line
                    if (is_left_to_right && ae_curr_x > right_x)
                        || (!is_left_to_right && ae_curr_x < left_x)
                    {
                        break;
                    }

                    if ae_curr_x == self.actives[horz].top.x && !self.actives[ae].is_horizontal() {
                        let pt = self.vertices[self.next_vertex(horz)].pt;
                        let ae_x = self.actives[ae].top_x(pt.y);
                        // to maximize the possibility of putting open edges into solutions,
                        // we'll only break if it's past horz's end
                        if self.is_open(ae) && !self.is_same_poly_type(ae, horz) && !self.is_hot(ae) {
                            if (is_left_to_right && ae_x > pt.x) || (!is_left_to_right && ae_x < pt.x) {
                                break;
                            }
                        } else if (is_left_to_right && ae_x >= pt.x)
                            || (!is_left_to_right && ae_x <= pt.x)
                        {
                            // otherwise for edges at horz's end, only stop when horz's outer
                            // edge is heading the same way
                            break;
                        }
                    }
                }

                let pt = Point64::new(self.actives[ae].curr_x, self.actives[horz].bot.y);
                if is_left_to_right {
                    self.intersect_edges(horz, ae, pt);
                    self.swap_positions_in_ael(horz, ae);
                    self.check_join_left(ae, pt, false);
                    self.actives[horz].curr_x = self.actives[ae].curr_x;
                    e = self.actives[horz].next_in_ael;
                } else {
                    self.intersect_edges(ae, horz, pt);
                    self.swap_positions_in_ael(ae, horz);
                    self.check_join_right(ae, pt, false);
                    self.actives[horz].curr_x = self.actives[ae].curr_x;
                    e = self.actives[horz].prev_in_ael;
                }

                if self.is_hot(horz) {
                    // the output point returned by intersect_edges may belong to another record
                    let op = self.get_last_op(horz);
                    self.add_trial_horz_join(op);
                }
            }

            // check if we've finished looping through consecutive horizontals
            if horz_is_open && self.is_open_end(horz) {
                if let Some(or) = self.actives[horz].outrec {
                    let top = self.actives[horz].top;
                    self.add_out_pt(horz, top);
                    if self.outrecs[or].front_edge == Some(horz) {
                        self.outrecs[or].front_edge = None;
                    } else {
                        self.outrecs[or].back_edge = None;
                    }
                    self.actives[horz].outrec = None;
                }
                self.delete_from_ael(horz);
                return;
            }
            if self.vertices[self.next_vertex(horz)].pt.y != self.actives[horz].top.y {
                break;
            }

            // still more horizontals in bound to process
            if self.is_hot(horz) {
                let top = self.actives[horz].top;
                self.add_out_pt(horz, top);
            }
            self.update_edge_into_ael(horz);
            (is_left_to_right, left_x, right_x) = self.reset_horz_direction(horz, vertex_max);
        }

        if self.is_hot(horz) {
            let top = self.actives[horz].top;
            let op = self.add_out_pt(horz, top);
            self.add_trial_horz_join(op);
        }
        // this is the end of an intermediate horizontal
        self.update_edge_into_ael(horz);
    }

    fn add_trial_horz_join(&mut self, op: Option<usize>) {
        let Some(op) = op else {
            return;
        };
        if self.outrecs[self.outpts[op].outrec].is_open {
            return;
        }
        self.horz_segs.push(HorzSegment {
            left_op: op,
            right_op: None,
            left_to_right: true,
        });
    }

    fn set_horz_seg_heading_forward(&mut self, seg: usize, op_p: usize, op_n: usize) -> bool {
        let (p, n) = (self.outpts[op_p].pt, self.outpts[op_n].pt);
        if p.x == n.x {
            return false;
        }
        let hs = &mut self.horz_segs[seg];
        if p.x < n.x {
            hs.left_op = op_p;
            hs.right_op = Some(op_n);
            hs.left_to_right = true;
        } else {
            hs.left_op = op_n;
            hs.right_op = Some(op_p);
            hs.left_to_right = false;
        }
        true
    }

    /// Expand the trial segment to the full horizontal run of its ring.
    fn update_horz_segment(&mut self, seg: usize) -> bool {
        let op = self.horz_segs[seg].left_op;
        let Some(outrec) = self.get_real_outrec(self.outpts[op].outrec) else {
            self.horz_segs[seg].right_op = None;
            return false;
        };
        let has_edges = self.outrecs[outrec].front_edge.is_some();
        let curr_y = self.outpts[op].pt.y;
        let (mut op_p, mut op_n) = (op, op);
        let pts = &self.outpts;

        if has_edges {
            let Some(op_a) = self.outrecs[outrec].pts else {
                self.horz_segs[seg].right_op = None;
                return false;
            };
            let op_z = pts[op_a].next;
            while op_p != op_z && pts[pts[op_p].prev].pt.y == curr_y {
                op_p = pts[op_p].prev;
            }
            while op_n != op_a && pts[pts[op_n].next].pt.y == curr_y {
                op_n = pts[op_n].next;
            }
        } else {
            while pts[op_p].prev != op_n && pts[pts[op_p].prev].pt.y == curr_y {
                op_p = pts[op_p].prev;
            }
            while pts[op_n].next != op_p && pts[pts[op_n].next].pt.y == curr_y {
                op_n = pts[op_n].next;
            }
        }

        let result = self.set_horz_seg_heading_forward(seg, op_p, op_n)
            && !self.outpts[self.horz_segs[seg].left_op].horz;

        if result {
            let left_op = self.horz_segs[seg].left_op;
            self.outpts[left_op].horz = true;
        } else {
            self.horz_segs[seg].right_op = None;
        }
        result
    }

    /// Insert a copy of `op` after (or before) it in its ring, returning the copy.
    pub(super) fn duplicate_op(&mut self, op: usize, insert_after: bool) -> usize {
        let pt = self.outpts[op].pt;
        let outrec = self.outpts[op].outrec;
        let result = self.new_outpt(pt, outrec);
        if insert_after {
            let next = self.outpts[op].next;
            self.outpts[result].next = next;
            self.outpts[next].prev = result;
            self.outpts[result].prev = op;
            self.outpts[op].next = result;
        } else {
            let prev = self.outpts[op].prev;
            self.outpts[result].prev = prev;
            self.outpts[prev].next = result;
            self.outpts[result].next = op;
            self.outpts[op].prev = result;
        }
        result
    }

    /// Pair up overlapping horizontal segments heading in opposite directions.
    pub(super) fn convert_horz_segs_to_joins(&mut self) {
        let mut j = 0;
        for i in 0..self.horz_segs.len() {
            if self.update_horz_segment(i) {
                j += 1;
            }
        }
        if j < 2 {
            return;
        }

        let outpts = &self.outpts;
        self.horz_segs
            .sort_by(|a, b| match (a.right_op, b.right_op) {
                (Some(_), Some(_)) => outpts[a.left_op].pt.x.cmp(&outpts[b.left_op].pt.x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });

        let pt = |engine: &Self, op: usize| engine.outpts[op].pt;
        let next = |engine: &Self, op: usize| engine.outpts[op].next;
        let prev = |engine: &Self, op: usize| engine.outpts[op].prev;

        for i in 0..j - 1 {
            for k in (i + 1)..j {
                let hs1 = self.horz_segs[i];
                let hs2 = self.horz_segs[k];
                let (Some(r1), Some(r2)) = (hs1.right_op, hs2.right_op) else {
                    continue;
                };
                if pt(self, hs2.left_op).x >= pt(self, r1).x
                    || hs2.left_to_right == hs1.left_to_right
                    || pt(self, r2).x <= pt(self, hs1.left_op).x
                {
                    continue;
                }

                let curr_y = pt(self, hs1.left_op).y;
                let (mut l1, mut l2) = (hs1.left_op, hs2.left_op);
                let join = if hs1.left_to_right {
                    while pt(self, next(self, l1)).y == curr_y
                        && pt(self, next(self, l1)).x <= pt(self, l2).x
                    {
                        l1 = next(self, l1);
                    }
                    while pt(self, prev(self, l2)).y == curr_y
                        && pt(self, prev(self, l2)).x <= pt(self, l1).x
                    {
                        l2 = prev(self, l2);
                    }
                    HorzJoin {
                        op1: self.duplicate_op(l1, true),
                        op2: self.duplicate_op(l2, false),
                    }
                } else {
                    while pt(self, prev(self, l1)).y == curr_y
                        && pt(self, prev(self, l1)).x <= pt(self, l2).x
                    {
                        l1 = prev(self, l1);
                    }
                    while pt(self, next(self, l2)).y == curr_y
                        && pt(self, next(self, l2)).x <= pt(self, l1).x
                    {
                        l2 = next(self, l2);
                    }
                    HorzJoin {
                        op1: self.duplicate_op(l2, true),
                        op2: self.duplicate_op(l1, false),
                    }
                };
                self.horz_joins.push(join);
                self.horz_segs[i].left_op = l1;
                self.horz_segs[k].left_op = l2;
            }
        }
    }

    /// Reassign every output point of the ring to `outrec`.
    pub(super) fn fix_outrec_pts(&mut self, outrec: usize) {
        let Some(start) = self.outrecs[outrec].pts else {
            return;
        };
        let mut op = start;
        loop {
            self.outpts[op].outrec = outrec;
            op = self.outpts[op].next;
            if op == start {
                break;
            }
        }
    }

    /// Join (or split) rings along the matched horizontal segments.
    pub(super) fn process_horz_joins(&mut self) {
        let joins = std::mem::take(&mut self.horz_joins);
        for j in joins {
            let (Some(or1), Some(mut or2)) = (
                self.get_real_outrec(self.outpts[j.op1].outrec),
                self.get_real_outrec(self.outpts[j.op2].outrec),
            ) else {
                continue;
            };

            let op1b = self.outpts[j.op1].next;
            let op2b = self.outpts[j.op2].prev;
            self.outpts[j.op1].next = j.op2;
            self.outpts[j.op2].prev = j.op1;
            self.outpts[op1b].prev = op2b;
            self.outpts[op2b].next = op1b;

            if or1 == or2 {
                // the join is really a split
                or2 = self.new_outrec();
                self.outrecs[or2].pts = Some(op1b);
                self.fix_outrec_pts(or2);

                // if or1's pts moved to or2 then update or1's pts
                if let Some(pts) = self.outrecs[or1].pts
                    && self.outpts[pts].outrec == or2
                {
                    self.outrecs[or1].pts = Some(j.op1);
                    self.outpts[j.op1].outrec = or1;
                }

                if self.using_polytree {
                    let (Some(p1), Some(p2)) = (self.outrecs[or1].pts, self.outrecs[or2].pts) else {
                        continue;
                    };
                    if self.path1_inside_path2(p1, p2) {
                        // swap so that or2 is inside or1
                        self.outrecs[or1].pts = Some(p2);
                        self.outrecs[or2].pts = Some(p1);
                        self.fix_outrec_pts(or1);
                        self.fix_outrec_pts(or2);
                        self.outrecs[or2].owner = Some(or1);
                    } else if self.path1_inside_path2(p2, p1) {
                        self.outrecs[or2].owner = Some(or1);
                    } else {
                        self.outrecs[or2].owner = self.outrecs[or1].owner;
                    }
                    self.outrecs[or1].splits.push(or2);
                } else {
                    self.outrecs[or2].owner = Some(or1);
                }
            } else {
                self.outrecs[or2].pts = None;
                if self.using_polytree {
                    self.set_owner(or2, or1);
                    self.move_splits(or2, or1);
                } else {
                    self.outrecs[or2].owner = Some(or1);
                }
            }
        }
    }
}
