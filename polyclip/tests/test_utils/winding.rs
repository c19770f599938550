use polyclip::{FillRule, Path64, Point64, PointD};

/// Small deterministic xorshift64* generator so randomized tests replay from a seed.
pub struct XorShift64Star {
    state: u64,
}

impl XorShift64Star {
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform in `[lo, hi)`.
    pub fn next_range(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_u64() % (hi - lo) as u64) as i64
    }

    /// Polygon with `min_len..=max_len` vertexes inside `[0, extent)` on both axes.
    pub fn polygon(&mut self, min_len: usize, max_len: usize, extent: i64) -> Path64 {
        let len = self.next_range(min_len as i64, max_len as i64 + 1) as usize;
        (0..len)
            .map(|_| Point64::new(self.next_range(0, extent), self.next_range(0, extent)))
            .collect()
    }
}

fn is_left(a: Point64, b: Point64, p: PointD) -> f64 {
    (b.x - a.x) as f64 * (p.y - a.y as f64) - (p.x - a.x as f64) * (b.y - a.y) as f64
}

/// Winding number of `pt` against closed `path`, counter clockwise rings count +1.
pub fn winding_number(pt: PointD, path: &[Point64]) -> i32 {
    let mut wn = 0;
    let Some(&last) = path.last() else {
        return 0;
    };
    let mut a = last;
    for &b in path {
        if a.y as f64 <= pt.y {
            if (b.y as f64) > pt.y && is_left(a, b, pt) > 0.0 {
                wn += 1;
            }
        } else if (b.y as f64) <= pt.y && is_left(a, b, pt) < 0.0 {
            wn -= 1;
        }
        a = b;
    }
    wn
}

pub fn winding_number_of_paths(pt: PointD, paths: &[Path64]) -> i32 {
    paths.iter().map(|p| winding_number(pt, p)).sum()
}

/// Distance from `pt` to the nearest edge of any closed path in `paths`.
pub fn distance_to_edges(pt: PointD, paths: &[Path64]) -> f64 {
    let mut min = f64::INFINITY;
    for path in paths {
        let Some(&last) = path.last() else {
            continue;
        };
        let mut a = last;
        for &b in path {
            min = min.min(distance_to_segment(pt, a, b));
            a = b;
        }
    }
    min
}

fn distance_to_segment(pt: PointD, a: Point64, b: Point64) -> f64 {
    let (ax, ay) = (a.x as f64, a.y as f64);
    let (dx, dy) = (b.x as f64 - ax, b.y as f64 - ay);
    let len_sqr = dx * dx + dy * dy;
    let t = if len_sqr == 0.0 {
        0.0
    } else {
        (((pt.x - ax) * dx + (pt.y - ay) * dy) / len_sqr).clamp(0.0, 1.0)
    };
    let (cx, cy) = (ax + t * dx - pt.x, ay + t * dy - pt.y);
    (cx * cx + cy * cy).sqrt()
}

pub fn is_filled(fillrule: FillRule, winding: i32) -> bool {
    match fillrule {
        FillRule::EvenOdd => winding % 2 != 0,
        FillRule::NonZero => winding != 0,
        FillRule::Positive => winding > 0,
        FillRule::Negative => winding < 0,
    }
}
