//! Active edges: the bounds currently crossed by the sweep line.

use crate::core::math::Point64;

/// Marks an edge that has been joined to a collinear neighbour (so the two output rings touch
/// along a shared edge), to be split again when the edges diverge.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub(super) enum JoinWith {
    #[default]
    None,
    Left,
    Right,
}

/// An edge in the active edge list (AEL). `prev_in_sel`/`next_in_sel`/`jump` are reused both for
/// the horizontal queue and for the merge sort that finds intersections.
#[derive(Debug, Clone)]
pub(super) struct Active {
    pub bot: Point64,
    pub top: Point64,
    /// Current x, updated at every scanline.
    pub curr_x: i64,
    pub dx: f64,
    /// +1 or -1 depending on the input winding direction.
    pub wind_dx: i32,
    /// Winding count of the edge's own path type.
    pub wind_cnt: i32,
    /// Winding count of the opposite path type.
    pub wind_cnt2: i32,
    pub outrec: Option<usize>,
    pub prev_in_ael: Option<usize>,
    pub next_in_ael: Option<usize>,
    pub prev_in_sel: Option<usize>,
    pub next_in_sel: Option<usize>,
    pub jump: Option<usize>,
    pub vertex_top: usize,
    pub local_min: usize,
    pub is_left_bound: bool,
    pub join_with: JoinWith,
}

/// Inverse slope of the edge, `-inf`/`+inf` for horizontals heading right/left.
#[inline]
pub(super) fn get_dx(pt1: Point64, pt2: Point64) -> f64 {
    let dy = (pt2.y - pt1.y) as f64;
    if dy != 0.0 {
        (pt2.x - pt1.x) as f64 / dy
    } else if pt2.x > pt1.x {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    }
}

impl Active {
    pub fn new(bot: Point64, top: Point64, vertex_top: usize, wind_dx: i32, local_min: usize) -> Self {
        Self {
            bot,
            top,
            curr_x: bot.x,
            dx: get_dx(bot, top),
            wind_dx,
            wind_cnt: 0,
            wind_cnt2: 0,
            outrec: None,
            prev_in_ael: None,
            next_in_ael: None,
            prev_in_sel: None,
            next_in_sel: None,
            jump: None,
            vertex_top,
            local_min,
            is_left_bound: false,
            join_with: JoinWith::None,
        }
    }

    #[inline]
    pub fn set_dx(&mut self) {
        self.dx = get_dx(self.bot, self.top);
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.top.y == self.bot.y
    }

    #[inline]
    pub fn is_heading_right_horz(&self) -> bool {
        self.dx == f64::NEG_INFINITY
    }

    #[inline]
    pub fn is_heading_left_horz(&self) -> bool {
        self.dx == f64::INFINITY
    }

    #[inline]
    pub fn is_joined(&self) -> bool {
        self.join_with != JoinWith::None
    }

    /// X position of the edge at `current_y`.
    pub fn top_x(&self, current_y: i64) -> i64 {
        if current_y == self.top.y || self.top.x == self.bot.x {
            self.top.x
        } else if current_y == self.bot.y {
            self.bot.x
        } else {
            self.bot.x + (self.dx * (current_y - self.bot.y) as f64).round_ties_even() as i64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dx_and_top_x() {
        let e = Active::new(Point64::new(0, 10), Point64::new(10, 0), 0, 1, 0);
        assert_eq!(e.dx, -1.0);
        assert_eq!(e.top_x(10), 0);
        assert_eq!(e.top_x(5), 5);
        assert_eq!(e.top_x(0), 10);

        let right = Active::new(Point64::new(0, 5), Point64::new(10, 5), 0, 1, 0);
        assert!(right.is_horizontal());
        assert!(right.is_heading_right_horz());
        let left = Active::new(Point64::new(10, 5), Point64::new(0, 5), 0, 1, 0);
        assert!(left.is_heading_left_horz());
    }
}
