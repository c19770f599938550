//! Construction of the raw (self intersecting) offset outline of a single path.

use super::{EndType, JoinType, group::Group};
use crate::{
    core::math::{Point64, PointD, Rect64, cross_product_vec, line_intersect_pt_d},
    path::{Path64, Paths64, bounds, ellipse, is_positive},
};
use std::f64::consts::PI;

const FLOATING_POINT_TOLERANCE: f64 = 1e-12;

/// Arc tolerance as a fraction of delta used when none is given.
const DEFAULT_ARC_FRAC: f64 = 0.002;

/// Unit normal of the edge `pt1 -> pt2` (zero for a zero length edge).
fn unit_normal(pt1: Point64, pt2: Point64) -> PointD {
    let dx = (pt2.x - pt1.x) as f64;
    let dy = (pt2.y - pt1.y) as f64;
    if dx == 0.0 && dy == 0.0 {
        return PointD::zero();
    }
    let f = 1.0 / dx.hypot(dy);
    PointD::new(dy * f, -dx * f)
}

#[inline]
fn translate(pt: PointD, dx: f64, dy: f64) -> PointD {
    PointD::new(pt.x + dx, pt.y + dy)
}

#[inline]
fn reflect(pt: PointD, pivot: PointD) -> PointD {
    PointD::new(pivot.x + (pivot.x - pt.x), pivot.y + (pivot.y - pt.y))
}

#[inline]
fn perpendic_d(pt: Point64, norm: PointD, delta: f64) -> PointD {
    PointD::new(pt.x as f64 + norm.x * delta, pt.y as f64 + norm.y * delta)
}

#[inline]
fn perpendic(pt: Point64, norm: PointD, delta: f64) -> Point64 {
    perpendic_d(pt, norm, delta).to_64()
}

/// Per execution offsetting state, accumulating the raw offset outlines of every group.
#[derive(Debug)]
pub(super) struct OffsetBuilder {
    pub solution: Paths64,
    norms: Vec<PointD>,
    path_out: Path64,
    delta: f64,
    group_delta: f64,
    join_type: JoinType,
    end_type: EndType,
    temp_lim: f64,
    arc_tolerance: f64,
    steps_per_rad: f64,
}

impl OffsetBuilder {
    pub fn new(delta: f64, miter_limit: f64, arc_tolerance: f64) -> Self {
        Self {
            solution: Vec::new(),
            norms: Vec::new(),
            path_out: Vec::new(),
            delta,
            group_delta: delta,
            join_type: JoinType::Square,
            end_type: EndType::Polygon,
            temp_lim: if miter_limit <= 1.0 {
                2.0
            } else {
                2.0 / (miter_limit * miter_limit)
            },
            arc_tolerance,
            steps_per_rad: 0.0,
        }
    }

    fn build_normals(&mut self, path: &[Point64]) {
        self.norms.clear();
        self.norms.reserve(path.len());
        for (i, &pt) in path.iter().enumerate() {
            let next = path[(i + 1) % path.len()];
            self.norms.push(unit_normal(pt, next));
        }
    }

    fn do_bevel(&mut self, path: &[Point64], j: usize, k: usize) {
        let (pt1, pt2) = if j == k {
            let abs_delta = self.group_delta.abs();
            let n = self.norms[j];
            (
                perpendic_d(path[j], n, -abs_delta),
                perpendic_d(path[j], n, abs_delta),
            )
        } else {
            (
                perpendic_d(path[j], self.norms[k], self.group_delta),
                perpendic_d(path[j], self.norms[j], self.group_delta),
            )
        };
        self.path_out.push(pt1.to_64());
        self.path_out.push(pt2.to_64());
    }

    fn do_square(&mut self, path: &[Point64], j: usize, k: usize) {
        let (nj, nk) = (self.norms[j], self.norms[k]);
        let vec = if j == k {
            PointD::new(nj.y, -nj.x)
        } else {
            // average of the two edge directions
            (PointD::new(-nk.y, nk.x) + PointD::new(nj.y, -nj.x)).normalize()
        };

        let abs_delta = self.group_delta.abs();
        let delta = self.group_delta;
        // offset the original vertex delta units along the unit vector
        let pt_q = translate(path[j].to_d(), abs_delta * vec.x, abs_delta * vec.y);

        // perpendicular vertexes
        let pt1 = translate(pt_q, delta * vec.y, delta * -vec.x);
        let pt2 = translate(pt_q, delta * -vec.y, delta * vec.x);
        // 2 vertexes along one edge offset
        let pt3 = perpendic_d(path[k], nk, delta);

        if j == k {
            let pt4 = PointD::new(pt3.x + vec.x * delta, pt3.y + vec.y * delta);
            let pt = line_intersect_pt_d(pt1, pt2, pt3, pt4).unwrap_or(pt1);
            // second intersect point through reflection
            self.path_out.push(reflect(pt, pt_q).to_64());
            self.path_out.push(pt.to_64());
        } else {
            let pt4 = perpendic_d(path[j], nk, delta);
            let pt = line_intersect_pt_d(pt1, pt2, pt3, pt4).unwrap_or(pt1);
            self.path_out.push(pt.to_64());
            self.path_out.push(reflect(pt, pt_q).to_64());
        }
    }

    fn do_miter(&mut self, path: &[Point64], j: usize, k: usize, cos_a: f64) {
        let q = self.group_delta / (cos_a + 1.0);
        let (nj, nk) = (self.norms[j], self.norms[k]);
        self.path_out.push(
            PointD::new(
                path[j].x as f64 + (nk.x + nj.x) * q,
                path[j].y as f64 + (nk.y + nj.y) * q,
            )
            .to_64(),
        );
    }

    fn do_round(&mut self, path: &[Point64], j: usize, k: usize, angle: f64) {
        let pt = path[j];
        let mut offset_vec = self.norms[k] * self.group_delta;
        if j == k {
            offset_vec = -offset_vec;
        }
        self.path_out
            .push(PointD::new(pt.x as f64 + offset_vec.x, pt.y as f64 + offset_vec.y).to_64());

        // at least 2 segments, evenly spread over the arc
        let steps = ((self.steps_per_rad * angle.abs()).ceil() as usize).max(2);
        let (mut step_sin, step_cos) = (angle.abs() / steps as f64).sin_cos();
        if self.group_delta < 0.0 {
            step_sin = -step_sin;
        }
        for _ in 1..steps {
            offset_vec = PointD::new(
                offset_vec.x * step_cos - step_sin * offset_vec.y,
                offset_vec.x * step_sin + offset_vec.y * step_cos,
            );
            self.path_out
                .push(PointD::new(pt.x as f64 + offset_vec.x, pt.y as f64 + offset_vec.y).to_64());
        }
        self.path_out
            .push(perpendic(path[j], self.norms[j], self.group_delta));
    }

    /// Join the offset edges ending (k) and starting (j) at vertex `j`.
    fn offset_point(&mut self, path: &[Point64], j: usize, k: usize) {
        if path[j] == path[k] {
            return;
        }

        // A is the change in angle where the edges join: sin(A) < 0 turns right, cos(A) < 0 turns
        // more than 90 degrees
        let (nj, nk) = (self.norms[j], self.norms[k]);
        let sin_a = cross_product_vec(nj, nk).clamp(-1.0, 1.0);
        let cos_a = nj.dot(nk);

        if self.group_delta.abs() <= FLOATING_POINT_TOLERANCE {
            self.path_out.push(path[j]);
            return;
        }

        if cos_a > -0.999 && sin_a * self.group_delta < 0.0 {
            // concave: insert 3 points producing a negative region that the final union removes
            self.path_out.push(perpendic(path[j], nk, self.group_delta));
            // when the angle is almost flat the middle point can be skipped
            if cos_a < 0.99 {
                self.path_out.push(path[j]);
            }
            self.path_out.push(perpendic(path[j], nj, self.group_delta));
        } else if cos_a > 0.999 && self.join_type != JoinType::Round {
            // almost straight, less than 2.5 degrees
            self.do_miter(path, j, k, cos_a);
        } else {
            match self.join_type {
                JoinType::Miter => {
                    if cos_a > self.temp_lim - 1.0 {
                        self.do_miter(path, j, k, cos_a);
                    } else {
                        self.do_square(path, j, k);
                    }
                }
                JoinType::Round => self.do_round(path, j, k, sin_a.atan2(cos_a)),
                JoinType::Bevel => self.do_bevel(path, j, k),
                JoinType::Square => self.do_square(path, j, k),
            }
        }
    }

    fn offset_polygon(&mut self, path: &[Point64]) {
        self.path_out.clear();
        let mut k = path.len() - 1;
        for j in 0..path.len() {
            self.offset_point(path, j, k);
            k = j;
        }
        self.solution.push(std::mem::take(&mut self.path_out));
    }

    fn offset_open_joined(&mut self, path: &[Point64]) {
        self.offset_polygon(path);
        let reversed: Path64 = path.iter().rev().copied().collect();
        // normals of the reversed path are the negated normals of the original shifted by one
        self.norms.reverse();
        self.norms.rotate_left(1);
        for n in self.norms.iter_mut() {
            *n = -*n;
        }
        self.offset_polygon(&reversed);
    }

    fn do_cap(&mut self, path: &[Point64], i: usize) {
        if self.group_delta.abs() <= FLOATING_POINT_TOLERANCE {
            self.path_out.push(path[i]);
            return;
        }
        match self.end_type {
            EndType::Butt => self.do_bevel(path, i, i),
            EndType::Round => self.do_round(path, i, i, PI),
            _ => self.do_square(path, i, i),
        }
    }

    fn offset_open_path(&mut self, path: &[Point64]) {
        self.path_out.clear();
        // start cap
        self.do_cap(path, 0);

        // offset the left side going forward
        let high = path.len() - 1;
        for j in 1..high {
            self.offset_point(path, j, j - 1);
        }

        // reverse normals
        for i in (1..=high).rev() {
            self.norms[i] = -self.norms[i - 1];
        }
        self.norms[0] = self.norms[high];

        // end cap
        self.do_cap(path, high);

        // offset the left side going back
        for j in (1..high).rev() {
            self.offset_point(path, j, j + 1);
        }
        self.solution.push(std::mem::take(&mut self.path_out));
    }

    /// Offset every path of `group`, appending the raw outlines to the solution.
    pub fn offset_group(&mut self, group: &Group) {
        if group.end_type == EndType::Polygon {
            if !group.has_lowest_path {
                self.delta = self.delta.abs();
            }
            self.group_delta = if group.is_reversed {
                -self.delta
            } else {
                self.delta
            };
        } else {
            self.group_delta = self.delta.abs();
        }

        let abs_delta = self.group_delta.abs();
        self.join_type = group.join_type;

        if group.join_type == JoinType::Round || group.end_type == EndType::Round {
            // arc tolerance relative to delta unless given, large offsets need less precision
            let arc_tol = if self.arc_tolerance > FLOATING_POINT_TOLERANCE {
                abs_delta.min(self.arc_tolerance)
            } else {
                abs_delta * DEFAULT_ARC_FRAC
            };
            let steps_per_360 = (PI / (1.0 - arc_tol / abs_delta).acos()).min(abs_delta * PI);
            self.steps_per_rad = steps_per_360 / (2.0 * PI);
        }

        for path in &group.paths {
            self.end_type = group.end_type;
            match path.len() {
                0 => continue,
                1 => {
                    self.offset_single_point(path[0], group.join_type);
                    continue;
                }
                _ => {}
            }

            if group.end_type == EndType::Polygon && self.is_over_shrunk(path) {
                continue;
            }

            if path.len() == 2 && group.end_type == EndType::Joined {
                self.end_type = if group.join_type == JoinType::Round {
                    EndType::Round
                } else {
                    EndType::Square
                };
            }

            self.build_normals(path);
            match self.end_type {
                EndType::Polygon => self.offset_polygon(path),
                EndType::Joined => self.offset_open_joined(path),
                _ => self.offset_open_path(path),
            }
        }
    }

    /// Returns true if the closed `path` is shrinking and too small to survive the offset.
    fn is_over_shrunk(&self, path: &[Point64]) -> bool {
        let shrinking = is_positive(path) == (self.group_delta < 0.0);
        if !shrinking {
            return false;
        }
        let r = bounds(path);
        (r.width().min(r.height()) as f64) <= self.group_delta.abs() * 2.0
    }

    fn offset_single_point(&mut self, pt: Point64, join_type: JoinType) {
        if self.group_delta < 1.0 {
            return;
        }
        let abs_delta = self.group_delta.abs();
        let path = if join_type == JoinType::Round {
            let steps = (self.steps_per_rad * 2.0 * PI).ceil() as usize;
            ellipse(pt, abs_delta, abs_delta, steps)
        } else {
            let d = abs_delta.ceil() as i64;
            Rect64::new(pt.x - d, pt.y - d, pt.x + d, pt.y + d).as_path()
        };
        self.solution.push(path);
    }
}
