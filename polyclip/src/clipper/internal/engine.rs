use super::{
    active::{Active, JoinWith},
    outrec::{HorzJoin, HorzSegment, IntersectNode, OutPt, OutRec},
    vertex::{LocalMinima, Vertex, VertexFlags, add_paths_to_vertex_list},
};
use crate::{
    clipper::{ClipSolution, ClipType, ClipperOptions, FillRule, PathType, TreeSolution},
    core::math::{Point64, cross_product, is_collinear},
    path::Path64,
    polytree::PolyTree64,
};
use log::{debug, trace, warn};
use std::collections::BinaryHeap;

/// Vatti sweep line engine working on integer coordinates.
///
/// All graph like structures (vertex rings, active edge list, output rings) live in arenas owned
/// by the engine and link to each other by index.
#[derive(Debug, Clone)]
pub(crate) struct SweepEngine {
    pub(crate) options: ClipperOptions,
    pub(super) cliptype: ClipType,
    pub(super) fillrule: FillRule,
    pub(super) bot_y: i64,
    pub(super) using_polytree: bool,
    pub(super) succeeded: bool,
    has_open_paths: bool,
    minima_sorted: bool,
    pub(super) vertices: Vec<Vertex>,
    pub(super) minima: Vec<LocalMinima>,
    current_locmin: usize,
    scanlines: BinaryHeap<i64>,
    pub(super) actives: Vec<Active>,
    pub(super) ael_head: Option<usize>,
    pub(super) sel_head: Option<usize>,
    pub(super) outpts: Vec<OutPt>,
    pub(super) outrecs: Vec<OutRec>,
    pub(super) intersect_nodes: Vec<IntersectNode>,
    pub(super) horz_segs: Vec<HorzSegment>,
    pub(super) horz_joins: Vec<HorzJoin>,
}

impl Default for SweepEngine {
    fn default() -> Self {
        Self::new(ClipperOptions::default())
    }
}

impl SweepEngine {
    pub(crate) fn new(options: ClipperOptions) -> Self {
        Self {
            options,
            cliptype: ClipType::None,
            fillrule: FillRule::EvenOdd,
            bot_y: 0,
            using_polytree: false,
            succeeded: true,
            has_open_paths: false,
            minima_sorted: false,
            vertices: Vec::new(),
            minima: Vec::new(),
            current_locmin: 0,
            scanlines: BinaryHeap::new(),
            actives: Vec::new(),
            ael_head: None,
            sel_head: None,
            outpts: Vec::new(),
            outrecs: Vec::new(),
            intersect_nodes: Vec::new(),
            horz_segs: Vec::new(),
            horz_joins: Vec::new(),
        }
    }

    /// Add already range checked paths.
    pub(crate) fn add_paths(&mut self, paths: &[Path64], polytype: PathType, is_open: bool) {
        if is_open {
            self.has_open_paths = true;
        }
        self.minima_sorted = false;
        add_paths_to_vertex_list(paths, polytype, is_open, &mut self.vertices, &mut self.minima);
    }

    #[inline]
    pub(super) fn has_open_paths(&self) -> bool {
        self.has_open_paths
    }

    /// Remove all inputs.
    pub(crate) fn clear(&mut self) {
        self.cleanup();
        self.vertices.clear();
        self.minima.clear();
        self.current_locmin = 0;
        self.minima_sorted = false;
        self.has_open_paths = false;
    }

    /// Drop all sweep and output state, keeping the inputs for another execution.
    fn cleanup(&mut self) {
        self.actives.clear();
        self.ael_head = None;
        self.sel_head = None;
        self.scanlines.clear();
        self.intersect_nodes.clear();
        self.outpts.clear();
        self.outrecs.clear();
        self.horz_segs.clear();
        self.horz_joins.clear();
    }

    fn reset(&mut self) {
        if !self.minima_sorted {
            let vertices = &self.vertices;
            // stable sort, largest y first then smallest x
            self.minima.sort_by(|a, b| {
                let pa = vertices[a.vertex].pt;
                let pb = vertices[b.vertex].pt;
                pb.y.cmp(&pa.y).then(pa.x.cmp(&pb.x))
            });
            self.minima_sorted = true;
        }

        self.scanlines.reserve(self.minima.len());
        for lm in self.minima.iter().rev() {
            self.scanlines.push(self.vertices[lm.vertex].pt.y);
        }

        self.current_locmin = 0;
        self.ael_head = None;
        self.sel_head = None;
        self.succeeded = true;
    }

    /// Run the boolean operation returning flat closed and open solutions.
    pub(crate) fn execute_paths(&mut self, cliptype: ClipType, fillrule: FillRule) -> ClipSolution<i64> {
        debug!(
            "executing {cliptype:?} with {fillrule:?}, {} local minima",
            self.minima.len()
        );
        let result = if self.execute_internal(cliptype, fillrule, false) {
            let (closed, open) = self.build_paths();
            debug!(
                "{cliptype:?} produced {} closed and {} open paths",
                closed.len(),
                open.len()
            );
            ClipSolution {
                closed,
                open,
                succeeded: true,
            }
        } else {
            warn!("{cliptype:?} sweep failed, returning empty solution");
            ClipSolution::failed()
        };
        self.cleanup();
        result
    }

    /// Run the boolean operation returning closed results as a polygon tree.
    pub(crate) fn execute_tree(&mut self, cliptype: ClipType, fillrule: FillRule) -> TreeSolution<i64> {
        debug!(
            "executing {cliptype:?} with {fillrule:?} into tree, {} local minima",
            self.minima.len()
        );
        let mut tree = PolyTree64::new();
        let result = if self.execute_internal(cliptype, fillrule, true) {
            let open = self.build_tree(&mut tree);
            debug!(
                "{cliptype:?} produced {} tree nodes and {} open paths",
                tree.len(),
                open.len()
            );
            TreeSolution {
                tree,
                open,
                succeeded: true,
            }
        } else {
            warn!("{cliptype:?} sweep failed, returning empty tree");
            TreeSolution {
                tree,
                open: Vec::new(),
                succeeded: false,
            }
        };
        self.cleanup();
        result
    }

    fn execute_internal(&mut self, cliptype: ClipType, fillrule: FillRule, use_polytree: bool) -> bool {
        self.cliptype = cliptype;
        self.fillrule = fillrule;
        self.using_polytree = use_polytree;
        self.reset();
        if cliptype == ClipType::None {
            return true;
        }

        let Some(mut y) = self.pop_scanline() else {
            return true;
        };

        while self.succeeded {
            self.insert_local_minima_into_ael(y);
            while let Some(e) = self.pop_horz() {
                self.do_horizontal(e);
            }
            if !self.horz_segs.is_empty() {
                self.convert_horz_segs_to_joins();
                self.horz_segs.clear();
            }
            // bot_y is the bottom of the scanbeam now being processed
            self.bot_y = y;
            match self.pop_scanline() {
                Some(next_y) => y = next_y,
                None => break,
            }
            trace!("scanbeam {} -> {}", self.bot_y, y);
            self.do_intersections(y);
            self.do_top_of_scanbeam(y);
            while let Some(e) = self.pop_horz() {
                self.do_horizontal(e);
            }
        }

        if self.succeeded {
            self.process_horz_joins();
        }
        self.succeeded
    }

    #[inline]
    pub(super) fn insert_scanline(&mut self, y: i64) {
        self.scanlines.push(y);
    }

    fn pop_scanline(&mut self) -> Option<i64> {
        let y = self.scanlines.pop()?;
        while self.scanlines.peek() == Some(&y) {
            self.scanlines.pop();
        }
        Some(y)
    }

    fn pop_local_minima(&mut self, y: i64) -> Option<usize> {
        let lm = self.minima.get(self.current_locmin)?;
        if self.vertices[lm.vertex].pt.y != y {
            return None;
        }
        self.current_locmin += 1;
        Some(self.current_locmin - 1)
    }

    /// Horizontal queue, reusing the sorted edge list links.
    pub(super) fn push_horz(&mut self, e: usize) {
        self.actives[e].next_in_sel = self.sel_head;
        self.sel_head = Some(e);
    }

    fn pop_horz(&mut self) -> Option<usize> {
        let e = self.sel_head?;
        self.sel_head = self.actives[e].next_in_sel;
        Some(e)
    }

    fn new_active(&mut self, bot: Point64, vertex_top: usize, wind_dx: i32, local_min: usize) -> usize {
        let top = self.vertices[vertex_top].pt;
        self.actives
            .push(Active::new(bot, top, vertex_top, wind_dx, local_min));
        self.actives.len() - 1
    }

    #[inline]
    pub(super) fn is_hot(&self, e: usize) -> bool {
        self.actives[e].outrec.is_some()
    }

    #[inline]
    pub(super) fn is_open(&self, e: usize) -> bool {
        self.minima[self.actives[e].local_min].is_open
    }

    #[inline]
    pub(super) fn poly_type(&self, e: usize) -> PathType {
        self.minima[self.actives[e].local_min].polytype
    }

    #[inline]
    pub(super) fn is_same_poly_type(&self, e1: usize, e2: usize) -> bool {
        self.poly_type(e1) == self.poly_type(e2)
    }

    #[inline]
    pub(super) fn is_open_end(&self, e: usize) -> bool {
        self.is_open(e)
            && self.vertices[self.actives[e].vertex_top]
                .flags
                .intersects(VertexFlags::OPEN_START | VertexFlags::OPEN_END)
    }

    #[inline]
    pub(super) fn is_maxima(&self, e: usize) -> bool {
        self.vertices[self.actives[e].vertex_top]
            .flags
            .intersects(VertexFlags::LOCAL_MAX)
    }

    /// Returns true if `e` is the front edge of its output record.
    #[inline]
    pub(super) fn is_front(&self, e: usize) -> bool {
        self.actives[e]
            .outrec
            .is_some_and(|or| self.outrecs[or].front_edge == Some(e))
    }

    /// Next vertex of the bound `e` belongs to, in sweep direction.
    #[inline]
    pub(super) fn next_vertex(&self, e: usize) -> usize {
        let ae = &self.actives[e];
        if ae.wind_dx > 0 {
            self.vertices[ae.vertex_top].next
        } else {
            self.vertices[ae.vertex_top].prev
        }
    }

    #[inline]
    fn prev_prev_vertex(&self, e: usize) -> usize {
        let ae = &self.actives[e];
        if ae.wind_dx > 0 {
            self.vertices[self.vertices[ae.vertex_top].prev].prev
        } else {
            self.vertices[self.vertices[ae.vertex_top].next].next
        }
    }

    fn insert_local_minima_into_ael(&mut self, bot_y: i64) {
        while let Some(lm) = self.pop_local_minima(bot_y) {
            let vertex = self.minima[lm].vertex;
            let flags = self.vertices[vertex].flags;
            let bot = self.vertices[vertex].pt;

            let mut left_bound = if flags.intersects(VertexFlags::OPEN_START) {
                None
            } else {
                let top = self.vertices[vertex].prev;
                Some(self.new_active(bot, top, -1, lm))
            };

            let mut right_bound = if flags.intersects(VertexFlags::OPEN_END) {
                None
            } else {
                let top = self.vertices[vertex].next;
                Some(self.new_active(bot, top, 1, lm))
            };

            // left and right bounds are only meaningful for closed paths, open paths just take
            // whichever bound exists
            match (left_bound, right_bound) {
                (Some(l), Some(r)) => {
                    let (le, re) = (&self.actives[l], &self.actives[r]);
                    let swap = if le.is_horizontal() {
                        le.is_heading_right_horz()
                    } else if re.is_horizontal() {
                        re.is_heading_left_horz()
                    } else {
                        le.dx < re.dx
                    };
                    if swap {
                        left_bound = Some(r);
                        right_bound = Some(l);
                    }
                }
                (None, r) => {
                    left_bound = r;
                    right_bound = None;
                }
                _ => {}
            }

            let Some(left) = left_bound else {
                continue;
            };

            self.actives[left].is_left_bound = true;
            self.insert_left_edge(left);

            let contributing = if self.is_open(left) {
                self.set_wind_count_for_open_path_edge(left);
                self.is_contributing_open(left)
            } else {
                self.set_wind_count_for_closed_path_edge(left);
                self.is_contributing_closed(left)
            };

            if let Some(right) = right_bound {
                self.actives[right].is_left_bound = false;
                self.actives[right].wind_cnt = self.actives[left].wind_cnt;
                self.actives[right].wind_cnt2 = self.actives[left].wind_cnt2;
                self.insert_right_edge(left, right);

                if contributing {
                    let pt = self.actives[left].bot;
                    self.add_local_min_poly(left, right, pt, true);
                    if !self.actives[left].is_horizontal() {
                        self.check_join_left(left, pt, false);
                    }
                }

                while let Some(next) = self.actives[right].next_in_ael {
                    if !self.is_valid_ael_order(next, right) {
                        break;
                    }
                    let pt = self.actives[right].bot;
                    self.intersect_edges(right, next, pt);
                    self.swap_positions_in_ael(right, next);
                }

                if self.actives[right].is_horizontal() {
                    self.push_horz(right);
                } else {
                    let pt = self.actives[right].bot;
                    self.check_join_right(right, pt, false);
                    let top_y = self.actives[right].top.y;
                    self.insert_scanline(top_y);
                }
            } else if contributing {
                let pt = self.actives[left].bot;
                self.start_open_path(left, pt);
            }

            if self.actives[left].is_horizontal() {
                self.push_horz(left);
            } else {
                let top_y = self.actives[left].top.y;
                self.insert_scanline(top_y);
            }
        }
    }

    /// Returns true if `newcomer` belongs to the right of `resident` in the active edge list.
    fn is_valid_ael_order(&self, resident: usize, newcomer: usize) -> bool {
        let r = &self.actives[resident];
        let n = &self.actives[newcomer];
        if n.curr_x != r.curr_x {
            return n.curr_x > r.curr_x;
        }

        // get the turning direction resident.top -> newcomer.bot -> newcomer.top
        let d = cross_product(r.top, n.bot, n.top);
        if d != 0.0 {
            return d < 0.0;
        }

        // edges must be collinear to get here
        if !self.is_maxima(resident) && r.top.y > n.top.y {
            let next = self.vertices[self.next_vertex(resident)].pt;
            return cross_product(n.bot, r.top, next) <= 0.0;
        }

        if !self.is_maxima(newcomer) && n.top.y > r.top.y {
            let next = self.vertices[self.next_vertex(newcomer)].pt;
            return cross_product(n.bot, n.top, next) >= 0.0;
        }

        let y = n.bot.y;
        let newcomer_is_left = n.is_left_bound;
        if r.bot.y != y || self.vertices[self.minima[r.local_min].vertex].pt.y != y {
            return newcomer_is_left;
        }

        // resident must also have just been inserted
        if r.is_left_bound != newcomer_is_left {
            return newcomer_is_left;
        }

        let r_prev_prev = self.vertices[self.prev_prev_vertex(resident)].pt;
        if is_collinear(r_prev_prev, r.bot, r.top) {
            return true;
        }

        // compare turning direction of the alternate bound
        let n_prev_prev = self.vertices[self.prev_prev_vertex(newcomer)].pt;
        (cross_product(r_prev_prev, n.bot, n_prev_prev) > 0.0) == newcomer_is_left
    }

    fn insert_left_edge(&mut self, e: usize) {
        let Some(head) = self.ael_head else {
            self.actives[e].prev_in_ael = None;
            self.actives[e].next_in_ael = None;
            self.ael_head = Some(e);
            return;
        };

        if !self.is_valid_ael_order(head, e) {
            self.actives[e].prev_in_ael = None;
            self.actives[e].next_in_ael = Some(head);
            self.actives[head].prev_in_ael = Some(e);
            self.ael_head = Some(e);
            return;
        }

        let mut e2 = head;
        while let Some(next) = self.actives[e2].next_in_ael {
            if !self.is_valid_ael_order(next, e) {
                break;
            }
            e2 = next;
        }

        // don't separate joined edges
        if self.actives[e2].join_with == JoinWith::Right {
            match self.actives[e2].next_in_ael {
                Some(next) => e2 = next,
                None => return,
            }
        }

        let next = self.actives[e2].next_in_ael;
        self.actives[e].next_in_ael = next;
        if let Some(next) = next {
            self.actives[next].prev_in_ael = Some(e);
        }
        self.actives[e].prev_in_ael = Some(e2);
        self.actives[e2].next_in_ael = Some(e);
    }

    fn insert_right_edge(&mut self, e: usize, e2: usize) {
        let next = self.actives[e].next_in_ael;
        self.actives[e2].next_in_ael = next;
        if let Some(next) = next {
            self.actives[next].prev_in_ael = Some(e2);
        }
        self.actives[e2].prev_in_ael = Some(e);
        self.actives[e].next_in_ael = Some(e2);
    }

    pub(super) fn delete_from_ael(&mut self, e: usize) {
        let prev = self.actives[e].prev_in_ael;
        let next = self.actives[e].next_in_ael;
        if prev.is_none() && next.is_none() && self.ael_head != Some(e) {
            // already deleted
            return;
        }

        match prev {
            Some(prev) => self.actives[prev].next_in_ael = next,
            None => self.ael_head = next,
        }
        if let Some(next) = next {
            self.actives[next].prev_in_ael = prev;
        }
        self.actives[e].prev_in_ael = None;
        self.actives[e].next_in_ael = None;
    }

    /// Swap adjacent edges, `e1` must be immediately left of `e2`.
    pub(super) fn swap_positions_in_ael(&mut self, e1: usize, e2: usize) {
        let next = self.actives[e2].next_in_ael;
        if let Some(next) = next {
            self.actives[next].prev_in_ael = Some(e1);
        }
        let prev = self.actives[e1].prev_in_ael;
        if let Some(prev) = prev {
            self.actives[prev].next_in_ael = Some(e2);
        }
        self.actives[e2].prev_in_ael = prev;
        self.actives[e2].next_in_ael = Some(e1);
        self.actives[e1].prev_in_ael = Some(e2);
        self.actives[e1].next_in_ael = next;
        if self.actives[e2].prev_in_ael.is_none() {
            self.ael_head = Some(e2);
        }
    }

    /// Move `e` to its next segment, `e` must not be at a local maximum.
    pub(super) fn update_edge_into_ael(&mut self, e: usize) {
        let next_vertex = self.next_vertex(e);
        let ae = &mut self.actives[e];
        ae.bot = ae.top;
        ae.vertex_top = next_vertex;
        ae.top = self.vertices[next_vertex].pt;
        ae.curr_x = ae.bot.x;
        ae.set_dx();
        let bot = ae.bot;
        let top = ae.top;

        if self.actives[e].is_joined() {
            self.split(e, bot);
        }

        if self.actives[e].is_horizontal() {
            if !self.is_open(e) {
                self.trim_horz(e, self.options.preserve_collinear);
            }
            return;
        }

        self.insert_scanline(top.y);
        self.check_join_left(e, bot, false);
        // required for Redundant Join detection
        self.check_join_right(e, bot, true);
    }

    /// Edge of the other bound of the same local minimum, if it is already in the active list.
    pub(super) fn find_edge_with_matching_loc_min(&self, e: usize) -> Option<usize> {
        let local_min = self.actives[e].local_min;
        let mut result = self.actives[e].next_in_ael;
        while let Some(r) = result {
            if self.actives[r].local_min == local_min {
                return Some(r);
            }
            if !self.actives[r].is_horizontal() && self.actives[e].bot != self.actives[r].bot {
                result = None;
            } else {
                result = self.actives[r].next_in_ael;
            }
        }

        result = self.actives[e].prev_in_ael;
        while let Some(r) = result {
            if self.actives[r].local_min == local_min {
                return Some(r);
            }
            if !self.actives[r].is_horizontal() && self.actives[e].bot != self.actives[r].bot {
                return None;
            }
            result = self.actives[r].prev_in_ael;
        }
        None
    }

    /// The edge sharing `e`'s local maximum vertex.
    pub(super) fn get_maxima_pair(&self, e: usize) -> Option<usize> {
        let vertex_top = self.actives[e].vertex_top;
        let mut e2 = self.actives[e].next_in_ael;
        while let Some(x) = e2 {
            if self.actives[x].vertex_top == vertex_top {
                return Some(x);
            }
            e2 = self.actives[x].next_in_ael;
        }
        None
    }
}
