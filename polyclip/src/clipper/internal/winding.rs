//! Winding counts of newly inserted edges and the fill rule / clip type contribution tests.

use super::engine::SweepEngine;
use crate::clipper::{ClipType, FillRule, PathType};

impl SweepEngine {
    /// Winding count of the edge's own path type, mapped through the fill rule so that values 0
    /// and 1 mean "on the boundary of a filled region".
    pub(super) fn oriented_wind_cnt(&self, wind_cnt: i32) -> i32 {
        match self.fillrule {
            FillRule::EvenOdd | FillRule::NonZero => wind_cnt.abs(),
            FillRule::Positive => wind_cnt,
            FillRule::Negative => -wind_cnt,
        }
    }

    pub(super) fn set_wind_count_for_closed_path_edge(&mut self, e: usize) {
        // Wind counts refer to polygon regions not edges, so here an edge's wind_cnt indicates
        // the higher of the wind counts for the two regions touching the edge.
        let polytype = self.poly_type(e);
        let mut e2 = self.actives[e].prev_in_ael;
        // find the nearest closed path edge of the same polytype in the AEL (heading left)
        while let Some(x) = e2 {
            if self.poly_type(x) == polytype && !self.is_open(x) {
                break;
            }
            e2 = self.actives[x].prev_in_ael;
        }

        let mut cursor = match e2 {
            None => {
                self.actives[e].wind_cnt = self.actives[e].wind_dx;
                self.ael_head
            }
            Some(x) if self.fillrule == FillRule::EvenOdd => {
                self.actives[e].wind_cnt = self.actives[e].wind_dx;
                self.actives[e].wind_cnt2 = self.actives[x].wind_cnt2;
                self.actives[x].next_in_ael
            }
            Some(x) => {
                let x_cnt = self.actives[x].wind_cnt;
                let x_dx = self.actives[x].wind_dx;
                let e_dx = self.actives[e].wind_dx;
                self.actives[e].wind_cnt = if x_cnt * x_dx < 0 {
                    // opposite directions so 'e' is outside 'x'
                    if x_cnt.abs() > 1 {
                        // outside prev poly but still inside another
                        if x_dx * e_dx < 0 { x_cnt } else { x_cnt + e_dx }
                    } else if self.is_open(e) {
                        1
                    } else {
                        e_dx
                    }
                } else if x_dx * e_dx < 0 {
                    // 'e' must be inside 'x', reversing direction so use the same wind count
                    x_cnt
                } else {
                    x_cnt + e_dx
                };
                self.actives[e].wind_cnt2 = self.actives[x].wind_cnt2;
                self.actives[x].next_in_ael
            }
        };

        // update wind_cnt2 from the edges of the other polytype between e2 and e
        let even_odd = self.fillrule == FillRule::EvenOdd;
        while let Some(x) = cursor {
            if x == e {
                break;
            }
            if self.poly_type(x) != polytype && !self.is_open(x) {
                let cnt2 = self.actives[e].wind_cnt2;
                self.actives[e].wind_cnt2 = if even_odd {
                    if cnt2 == 0 { 1 } else { 0 }
                } else {
                    cnt2 + self.actives[x].wind_dx
                };
            }
            cursor = self.actives[x].next_in_ael;
        }
    }

    pub(super) fn set_wind_count_for_open_path_edge(&mut self, e: usize) {
        let mut cursor = self.ael_head;
        if self.fillrule == FillRule::EvenOdd {
            let mut cnt1 = 0;
            let mut cnt2 = 0;
            while let Some(x) = cursor {
                if x == e {
                    break;
                }
                if self.poly_type(x) == PathType::Clip {
                    cnt2 += 1;
                } else if !self.is_open(x) {
                    cnt1 += 1;
                }
                cursor = self.actives[x].next_in_ael;
            }
            self.actives[e].wind_cnt = cnt1 & 1;
            self.actives[e].wind_cnt2 = cnt2 & 1;
        } else {
            while let Some(x) = cursor {
                if x == e {
                    break;
                }
                let wind_dx = self.actives[x].wind_dx;
                if self.poly_type(x) == PathType::Clip {
                    self.actives[e].wind_cnt2 += wind_dx;
                } else if !self.is_open(x) {
                    self.actives[e].wind_cnt += wind_dx;
                }
                cursor = self.actives[x].next_in_ael;
            }
        }
    }

    pub(super) fn is_contributing_closed(&self, e: usize) -> bool {
        let ae = &self.actives[e];
        match self.fillrule {
            FillRule::EvenOdd => {}
            FillRule::NonZero => {
                if ae.wind_cnt.abs() != 1 {
                    return false;
                }
            }
            FillRule::Positive => {
                if ae.wind_cnt != 1 {
                    return false;
                }
            }
            FillRule::Negative => {
                if ae.wind_cnt != -1 {
                    return false;
                }
            }
        }

        // true when the edge is not inside any path of the other polytype
        let outside_other = match self.fillrule {
            FillRule::Positive => ae.wind_cnt2 <= 0,
            FillRule::Negative => ae.wind_cnt2 >= 0,
            _ => ae.wind_cnt2 == 0,
        };

        match self.cliptype {
            ClipType::None => false,
            ClipType::Intersection => !outside_other,
            ClipType::Union => outside_other,
            ClipType::Difference => {
                if self.poly_type(e) == PathType::Subject {
                    outside_other
                } else {
                    !outside_other
                }
            }
            ClipType::Xor => true,
        }
    }

    pub(super) fn is_contributing_open(&self, e: usize) -> bool {
        let ae = &self.actives[e];
        let (is_in_clip, is_in_subj) = match self.fillrule {
            FillRule::Positive => (ae.wind_cnt2 > 0, ae.wind_cnt > 0),
            FillRule::Negative => (ae.wind_cnt2 < 0, ae.wind_cnt < 0),
            _ => (ae.wind_cnt2 != 0, ae.wind_cnt != 0),
        };

        match self.cliptype {
            ClipType::Intersection => is_in_clip,
            ClipType::Union => !is_in_subj && !is_in_clip,
            _ => !is_in_clip,
        }
    }
}
