//! Edge crossings: winding updates at intersections, the per scanbeam intersection search, and
//! the processing of edges reaching the top of the scanbeam.

use super::{active::JoinWith, engine::SweepEngine, outrec::IntersectNode, vertex::VertexFlags};
use crate::{
    clipper::{ClipType, FillRule, PathType},
    core::math::{Point64, closest_point_on_segment, segment_intersect_pt},
};

impl SweepEngine {
    /// Update winding counts and output for edges `e1` and `e2` crossing at `pt`, `e1` is the
    /// left edge before the crossing.
    pub(super) fn intersect_edges(&mut self, e1: usize, e2: usize, pt: Point64) -> Option<usize> {
        if self.has_open_paths() && (self.is_open(e1) || self.is_open(e2)) {
            return self.intersect_open_edge(e1, e2, pt);
        }

        if self.actives[e1].is_joined() {
            self.split(e1, pt);
        }
        if self.actives[e2].is_joined() {
            self.split(e2, pt);
        }

        if self.is_same_poly_type(e1, e2) {
            if self.fillrule == FillRule::EvenOdd {
                let cnt = self.actives[e1].wind_cnt;
                self.actives[e1].wind_cnt = self.actives[e2].wind_cnt;
                self.actives[e2].wind_cnt = cnt;
            } else {
                let e1_dx = self.actives[e1].wind_dx;
                let e2_dx = self.actives[e2].wind_dx;
                let ae1 = &mut self.actives[e1];
                if ae1.wind_cnt + e2_dx == 0 {
                    ae1.wind_cnt = -ae1.wind_cnt;
                } else {
                    ae1.wind_cnt += e2_dx;
                }
                let ae2 = &mut self.actives[e2];
                if ae2.wind_cnt - e1_dx == 0 {
                    ae2.wind_cnt = -ae2.wind_cnt;
                } else {
                    ae2.wind_cnt -= e1_dx;
                }
            }
        } else if self.fillrule != FillRule::EvenOdd {
            let e1_dx = self.actives[e1].wind_dx;
            let e2_dx = self.actives[e2].wind_dx;
            self.actives[e1].wind_cnt2 += e2_dx;
            self.actives[e2].wind_cnt2 -= e1_dx;
        } else {
            for e in [e1, e2] {
                let cnt2 = self.actives[e].wind_cnt2;
                self.actives[e].wind_cnt2 = if cnt2 == 0 { 1 } else { 0 };
            }
        }

        let e1_wc = self.oriented_wind_cnt(self.actives[e1].wind_cnt);
        let e2_wc = self.oriented_wind_cnt(self.actives[e2].wind_cnt);
        let e1_wc_in_01 = e1_wc == 0 || e1_wc == 1;
        let e2_wc_in_01 = e2_wc == 0 || e2_wc == 1;

        let e1_hot = self.is_hot(e1);
        let e2_hot = self.is_hot(e2);
        if (!e1_hot && !e1_wc_in_01) || (!e2_hot && !e2_wc_in_01) {
            return None;
        }

        if e1_hot && e2_hot {
            if !e1_wc_in_01
                || !e2_wc_in_01
                || (!self.is_same_poly_type(e1, e2) && self.cliptype != ClipType::Xor)
            {
                self.add_local_max_poly(e1, e2, pt)
            } else if self.is_front(e1) || self.actives[e1].outrec == self.actives[e2].outrec {
                // split polygons that only touch at a common vertex (not at common edges)
                let result = self.add_local_max_poly(e1, e2, pt);
                self.add_local_min_poly(e1, e2, pt, false);
                result
            } else {
                // can't treat as maxima and minima
                let result = self.add_out_pt(e1, pt);
                self.add_out_pt(e2, pt);
                self.swap_outrecs(e1, e2);
                result
            }
        } else if e1_hot {
            let result = self.add_out_pt(e1, pt);
            self.swap_outrecs(e1, e2);
            result
        } else if e2_hot {
            let result = self.add_out_pt(e2, pt);
            self.swap_outrecs(e1, e2);
            result
        } else {
            // neither edge is hot
            let e1_wc2 = self.oriented_wind_cnt(self.actives[e1].wind_cnt2);
            let e2_wc2 = self.oriented_wind_cnt(self.actives[e2].wind_cnt2);

            if !self.is_same_poly_type(e1, e2) {
                Some(self.add_local_min_poly(e1, e2, pt, false))
            } else if e1_wc == 1 && e2_wc == 1 {
                let starts = match self.cliptype {
                    ClipType::Union => e1_wc2 <= 0 && e2_wc2 <= 0,
                    ClipType::Difference => {
                        (self.poly_type(e1) == PathType::Clip && e1_wc2 > 0 && e2_wc2 > 0)
                            || (self.poly_type(e1) == PathType::Subject
                                && e1_wc2 <= 0
                                && e2_wc2 <= 0)
                    }
                    ClipType::Xor => true,
                    _ => e1_wc2 > 0 && e2_wc2 > 0,
                };
                starts.then(|| self.add_local_min_poly(e1, e2, pt, false))
            } else {
                None
            }
        }
    }

    /// Crossing involving an open path edge. Open paths never alter winding counts, they only
    /// toggle their own contribution when crossing the boundary of a filled closed region.
    fn intersect_open_edge(&mut self, e1: usize, e2: usize, pt: Point64) -> Option<usize> {
        if self.is_open(e1) && self.is_open(e2) {
            return None;
        }
        let (edge_o, edge_c) = if self.is_open(e1) { (e1, e2) } else { (e2, e1) };
        if self.actives[edge_c].is_joined() {
            self.split(edge_c, pt);
        }

        let wind_cnt = self.actives[edge_c].wind_cnt;
        if wind_cnt.abs() != 1 {
            return None;
        }

        match self.cliptype {
            ClipType::Union => {
                if !self.is_hot(edge_c) {
                    return None;
                }
            }
            _ => {
                if self.poly_type(edge_c) == PathType::Subject {
                    return None;
                }
            }
        }

        match self.fillrule {
            FillRule::Positive if wind_cnt != 1 => return None,
            FillRule::Negative if wind_cnt != -1 => return None,
            _ => {}
        }

        if let Some(or) = self.actives[edge_o].outrec {
            let result = self.add_out_pt(edge_o, pt);
            if self.outrecs[or].front_edge == Some(edge_o) {
                self.outrecs[or].front_edge = None;
            } else {
                self.outrecs[or].back_edge = None;
            }
            self.actives[edge_o].outrec = None;
            return result;
        }

        // horizontal edges can pass under open paths at a local minimum
        let lm_vertex = self.minima[self.actives[edge_o].local_min].vertex;
        let lm = &self.vertices[lm_vertex];
        if pt == lm.pt && !lm.flags.intersects(VertexFlags::OPEN_START | VertexFlags::OPEN_END) {
            // find the other side of the local minimum and if it's hot join up with it
            if let Some(e3) = self.find_edge_with_matching_loc_min(edge_o)
                && let Some(or) = self.actives[e3].outrec
            {
                self.actives[edge_o].outrec = Some(or);
                if self.actives[edge_o].wind_dx > 0 {
                    self.set_sides(or, edge_o, e3);
                } else {
                    self.set_sides(or, e3, edge_o);
                }
                return self.outrecs[or].pts;
            }
        }

        Some(self.start_open_path(edge_o, pt))
    }

    pub(super) fn do_intersections(&mut self, top_y: i64) {
        if self.build_intersect_list(top_y) {
            self.process_intersect_list();
            self.intersect_nodes.clear();
        }
    }

    fn adjust_curr_x_and_copy_to_sel(&mut self, top_y: i64) {
        let mut e = self.ael_head;
        self.sel_head = e;
        while let Some(x) = e {
            let prev = self.actives[x].prev_in_ael;
            let next = self.actives[x].next_in_ael;
            let curr_x = match prev {
                Some(p) if self.actives[x].join_with == JoinWith::Left => self.actives[p].curr_x,
                _ => self.actives[x].top_x(top_y),
            };
            let ae = &mut self.actives[x];
            ae.prev_in_sel = prev;
            ae.next_in_sel = next;
            ae.jump = next;
            ae.curr_x = curr_x;
            e = next;
        }
    }

    /// Merge sort the edges by their x at `top_y`, every swap made is an intersection.
    fn build_intersect_list(&mut self, top_y: i64) -> bool {
        let Some(head) = self.ael_head else {
            return false;
        };
        if self.actives[head].next_in_ael.is_none() {
            return false;
        }

        // calculate edge positions at the top of the current scanbeam, and from this we will
        // determine the intersections required to reach these new positions
        self.adjust_curr_x_and_copy_to_sel(top_y);

        // 'jump' links consecutive runs of sorted edges, runs are merged pairwise until a single
        // run remains
        let has_jump = |engine: &Self, e: Option<usize>| e.is_some_and(|x| engine.actives[x].jump.is_some());
        let mut left = self.sel_head;
        while has_jump(self, left) {
            let mut prev_base: Option<usize> = None;
            while let Some(base) = left.filter(|_| has_jump(self, left)) {
                let mut curr_base = base;
                let mut right = self.actives[base].jump;
                let mut l_end = right;
                let r_end = right.and_then(|r| self.actives[r].jump);
                self.actives[base].jump = r_end;
                let mut l = Some(base);
                while l != l_end && right != r_end {
                    let (Some(lc), Some(rc)) = (l, right) else {
                        break;
                    };
                    if self.actives[rc].curr_x < self.actives[lc].curr_x {
                        let mut tmp = self.actives[rc].prev_in_sel;
                        while let Some(t) = tmp {
                            self.add_new_intersect_node(t, rc, top_y);
                            if t == lc {
                                break;
                            }
                            tmp = self.actives[t].prev_in_sel;
                        }

                        right = self.extract_from_sel(rc);
                        l_end = right;
                        self.insert1_before2_in_sel(rc, lc);
                        if lc == curr_base {
                            curr_base = rc;
                            self.actives[curr_base].jump = r_end;
                            match prev_base {
                                None => self.sel_head = Some(curr_base),
                                Some(pb) => self.actives[pb].jump = Some(curr_base),
                            }
                        }
                    } else {
                        l = self.actives[lc].next_in_sel;
                    }
                }
                prev_base = Some(curr_base);
                left = r_end;
            }
            left = self.sel_head;
        }

        !self.intersect_nodes.is_empty()
    }

    fn add_new_intersect_node(&mut self, e1: usize, e2: usize, top_y: i64) {
        let (a1, a2) = (&self.actives[e1], &self.actives[e2]);
        let mut ip = segment_intersect_pt(a1.bot, a1.top, a2.bot, a2.top)
            .unwrap_or(Point64::new(a1.curr_x, top_y));

        if ip.y > self.bot_y || ip.y < top_y {
            let abs_dx1 = a1.dx.abs();
            let abs_dx2 = a2.dx.abs();
            if abs_dx1 > 100.0 && abs_dx2 > 100.0 {
                if abs_dx1 > abs_dx2 {
                    ip = closest_point_on_segment(ip, a1.bot, a1.top);
                } else {
                    ip = closest_point_on_segment(ip, a2.bot, a2.top);
                }
            } else if abs_dx1 > 100.0 {
                ip = closest_point_on_segment(ip, a1.bot, a1.top);
            } else if abs_dx2 > 100.0 {
                ip = closest_point_on_segment(ip, a2.bot, a2.top);
            } else {
                ip.y = if ip.y < top_y { top_y } else { self.bot_y };
                ip.x = if abs_dx1 < abs_dx2 {
                    a1.top_x(ip.y)
                } else {
                    a2.top_x(ip.y)
                };
            }
        }

        self.intersect_nodes.push(IntersectNode {
            pt: ip,
            edge1: e1,
            edge2: e2,
        });
    }

    fn extract_from_sel(&mut self, e: usize) -> Option<usize> {
        let next = self.actives[e].next_in_sel;
        let prev = self.actives[e].prev_in_sel;
        if let Some(next) = next {
            self.actives[next].prev_in_sel = prev;
        }
        if let Some(prev) = prev {
            self.actives[prev].next_in_sel = next;
        }
        next
    }

    fn insert1_before2_in_sel(&mut self, e1: usize, e2: usize) {
        let prev = self.actives[e2].prev_in_sel;
        self.actives[e1].prev_in_sel = prev;
        if let Some(prev) = prev {
            self.actives[prev].next_in_sel = Some(e1);
        }
        self.actives[e1].next_in_sel = Some(e2);
        self.actives[e2].prev_in_sel = Some(e1);
    }

    fn edges_adjacent_in_ael(&self, node: &IntersectNode) -> bool {
        let e1 = &self.actives[node.edge1];
        e1.next_in_ael == Some(node.edge2) || e1.prev_in_ael == Some(node.edge2)
    }

    fn process_intersect_list(&mut self) {
        // Process intersections from the bottom of the scanbeam up, and make sure edges are
        // adjacent when each intersection is processed.
        self.intersect_nodes.sort_by(|a, b| {
            if a.pt.y == b.pt.y {
                a.pt.x.cmp(&b.pt.x)
            } else {
                b.pt.y.cmp(&a.pt.y)
            }
        });

        let len = self.intersect_nodes.len();
        for i in 0..len {
            if !self.edges_adjacent_in_ael(&self.intersect_nodes[i]) {
                let mut j = i + 1;
                while j < len && !self.edges_adjacent_in_ael(&self.intersect_nodes[j]) {
                    j += 1;
                }
                if j < len {
                    self.intersect_nodes.swap(i, j);
                }
            }

            let node = self.intersect_nodes[i];
            self.intersect_edges(node.edge1, node.edge2, node.pt);
            self.swap_positions_in_ael(node.edge1, node.edge2);
            self.actives[node.edge1].curr_x = node.pt.x;
            self.actives[node.edge2].curr_x = node.pt.x;
            self.check_join_left(node.edge2, node.pt, true);
            self.check_join_right(node.edge1, node.pt, true);
        }
    }

    pub(super) fn do_top_of_scanbeam(&mut self, y: i64) {
        // sel_head is reused to queue horizontals (edges that become horizontal here)
        self.sel_head = None;
        let mut e = self.ael_head;
        while let Some(x) = e {
            // edges are never horizontal here
            if self.actives[x].top.y == y {
                self.actives[x].curr_x = self.actives[x].top.x;
                if self.is_maxima(x) {
                    // top of the bound (maxima)
                    e = self.do_maxima(x);
                    continue;
                }

                // intermediate vertex
                if self.is_hot(x) {
                    let top = self.actives[x].top;
                    self.add_out_pt(x, top);
                }
                self.update_edge_into_ael(x);
                if self.actives[x].is_horizontal() {
                    self.push_horz(x);
                }
            } else {
                self.actives[x].curr_x = self.actives[x].top_x(y);
            }
            e = self.actives[x].next_in_ael;
        }
    }

    /// Close (or finish) the bound `e` at its local maximum, returning the edge to continue the
    /// top of scanbeam pass with.
    fn do_maxima(&mut self, e: usize) -> Option<usize> {
        let prev_e = self.actives[e].prev_in_ael;
        let mut next_e = self.actives[e].next_in_ael;
        let top = self.actives[e].top;

        if self.is_open_end(e) {
            if self.is_hot(e) {
                self.add_out_pt(e, top);
            }
            if !self.actives[e].is_horizontal() {
                if let Some(or) = self.actives[e].outrec {
                    if self.outrecs[or].front_edge == Some(e) {
                        self.outrecs[or].front_edge = None;
                    } else {
                        self.outrecs[or].back_edge = None;
                    }
                    self.actives[e].outrec = None;
                }
                self.delete_from_ael(e);
            }
            return next_e;
        }

        let Some(max_pair) = self.get_maxima_pair(e) else {
            // the pair is a horizontal still to be processed
            return next_e;
        };

        if self.actives[e].is_joined() {
            self.split(e, top);
        }
        if self.actives[max_pair].is_joined() {
            let pair_top = self.actives[max_pair].top;
            self.split(max_pair, pair_top);
        }

        // only non-horizontal maxima here, process any edges between maxima pair
        while let Some(next) = next_e {
            if next == max_pair {
                break;
            }
            self.intersect_edges(e, next, top);
            self.swap_positions_in_ael(e, next);
            next_e = self.actives[e].next_in_ael;
        }

        if self.is_hot(e) {
            self.add_local_max_poly(e, max_pair, top);
        }

        if self.is_open(e) {
            self.delete_from_ael(max_pair);
            self.delete_from_ael(e);
        } else {
            self.delete_from_ael(e);
            self.delete_from_ael(max_pair);
        }

        match prev_e {
            Some(prev) => self.actives[prev].next_in_ael,
            None => self.ael_head,
        }
    }
}
