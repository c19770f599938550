use super::{Point, Point64, PointD};
use crate::core::traits::Coord;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use polyclip::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 { (v1, v2) } else { (v2, v1) }
}

/// Cross product of the vectors `pt1 -> pt2` and `pt2 -> pt3`, computed in `f64`.
///
/// Positive when the turn at `pt2` is counter clockwise in a y-up frame.
///
/// # Examples
///
/// ```
/// # use polyclip::core::math::*;
/// let a = Point64::new(0, 0);
/// let b = Point64::new(10, 0);
/// assert!(cross_product(a, b, Point64::new(10, 10)) > 0.0);
/// assert!(cross_product(a, b, Point64::new(10, -10)) < 0.0);
/// assert_eq!(cross_product(a, b, Point64::new(20, 0)), 0.0);
/// ```
#[inline]
pub fn cross_product<T>(pt1: Point<T>, pt2: Point<T>, pt3: Point<T>) -> f64
where
    T: Coord,
{
    (pt2.x.as_f64() - pt1.x.as_f64()) * (pt3.y.as_f64() - pt2.y.as_f64())
        - (pt2.y.as_f64() - pt1.y.as_f64()) * (pt3.x.as_f64() - pt2.x.as_f64())
}

/// Dot product of the vectors `pt1 -> pt2` and `pt2 -> pt3`, computed in `f64`.
#[inline]
pub fn dot_product<T>(pt1: Point<T>, pt2: Point<T>, pt3: Point<T>) -> f64
where
    T: Coord,
{
    (pt2.x.as_f64() - pt1.x.as_f64()) * (pt3.x.as_f64() - pt2.x.as_f64())
        + (pt2.y.as_f64() - pt1.y.as_f64()) * (pt3.y.as_f64() - pt2.y.as_f64())
}

/// Cross product of two direction vectors (`v1.y * v2.x - v2.y * v1.x`).
#[inline]
pub fn cross_product_vec(v1: PointD, v2: PointD) -> f64 {
    v1.y * v2.x - v2.y * v1.x
}

/// Returns true if `pt1`, `shared_pt` and `pt2` lie on one line.
///
/// Exact for the full coordinate range (products are taken in 128 bit integers).
///
/// # Examples
///
/// ```
/// # use polyclip::core::math::*;
/// let big = 1i64 << 60;
/// assert!(is_collinear(Point64::new(0, 0), Point64::new(big, big), Point64::new(-big, -big)));
/// assert!(!is_collinear(Point64::new(0, 0), Point64::new(big, big), Point64::new(-big, -big + 1)));
/// ```
#[inline]
pub fn is_collinear(pt1: Point64, shared_pt: Point64, pt2: Point64) -> bool {
    let a = shared_pt.x as i128 - pt1.x as i128;
    let b = pt2.y as i128 - shared_pt.y as i128;
    let c = shared_pt.y as i128 - pt1.y as i128;
    let d = pt2.x as i128 - shared_pt.x as i128;
    a * b == c * d
}

/// Squared perpendicular distance from `pt` to the infinite line through `line1` and `line2`.
#[inline]
pub fn perpendic_dist_from_line_sqrd<T>(pt: Point<T>, line1: Point<T>, line2: Point<T>) -> f64
where
    T: Coord,
{
    let a = pt.x.as_f64() - line1.x.as_f64();
    let b = pt.y.as_f64() - line1.y.as_f64();
    let c = line2.x.as_f64() - line1.x.as_f64();
    let d = line2.y.as_f64() - line1.y.as_f64();
    if c == 0.0 && d == 0.0 {
        return 0.0;
    }

    let n = a * d - c * b;
    n * n / (c * c + d * d)
}

/// Intersection point of the lines through `ln1a -> ln1b` and `ln2a -> ln2b`, with the
/// parametric position clamped to the first segment. Returns `None` for parallel lines.
///
/// Interior points are truncated toward zero (not rounded) into the integer domain. The sweep
/// and the output cleanup both place crossings with this function so they always agree on the
/// same integer point.
///
/// # Examples
///
/// ```
/// # use polyclip::core::math::*;
/// let ip = segment_intersect_pt(
///     Point64::new(0, 0),
///     Point64::new(10, 10),
///     Point64::new(0, 10),
///     Point64::new(10, 0),
/// );
/// assert_eq!(ip, Some(Point64::new(5, 5)));
/// ```
pub fn segment_intersect_pt(
    ln1a: Point64,
    ln1b: Point64,
    ln2a: Point64,
    ln2b: Point64,
) -> Option<Point64> {
    let dx1 = (ln1b.x - ln1a.x) as f64;
    let dy1 = (ln1b.y - ln1a.y) as f64;
    let dx2 = (ln2b.x - ln2a.x) as f64;
    let dy2 = (ln2b.y - ln2a.y) as f64;
    let det = dy1 * dx2 - dy2 * dx1;
    if det == 0.0 {
        return None;
    }

    let t = ((ln1a.x - ln2a.x) as f64 * dy2 - (ln1a.y - ln2a.y) as f64 * dx2) / det;
    if t <= 0.0 {
        Some(ln1a)
    } else if t >= 1.0 {
        Some(ln1b)
    } else {
        Some(Point64::new(
            (ln1a.x as f64 + t * dx1) as i64,
            (ln1a.y as f64 + t * dy1) as i64,
        ))
    }
}

/// Intersection point of the infinite lines through `ln1a -> ln1b` and `ln2a -> ln2b` in the
/// real domain. Returns `None` for parallel lines.
pub fn line_intersect_pt_d(ln1a: PointD, ln1b: PointD, ln2a: PointD, ln2b: PointD) -> Option<PointD> {
    let dx1 = ln1b.x - ln1a.x;
    let dy1 = ln1b.y - ln1a.y;
    let dx2 = ln2b.x - ln2a.x;
    let dy2 = ln2b.y - ln2a.y;
    let det = dy1 * dx2 - dy2 * dx1;
    if det == 0.0 {
        return None;
    }

    let t = ((ln1a.x - ln2a.x) * dy2 - (ln1a.y - ln2a.y) * dx2) / det;
    Some(PointD::new(ln1a.x + t * dx1, ln1a.y + t * dy1))
}

/// Returns true if the segments properly cross (touching end points and collinear overlap do not
/// count).
pub fn segments_intersect(seg1a: Point64, seg1b: Point64, seg2a: Point64, seg2b: Point64) -> bool {
    let opposite = |a: f64, b: f64| (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0);
    opposite(
        cross_product(seg1a, seg2a, seg2b),
        cross_product(seg1b, seg2a, seg2b),
    ) && opposite(
        cross_product(seg2a, seg1a, seg1b),
        cross_product(seg2b, seg1a, seg1b),
    )
}

/// Closest point to `off_pt` on the segment `seg1 -> seg2`.
///
/// Unlike [segment_intersect_pt] the result is rounded to the nearest integer point (ties to
/// even). It only pulls an intersection that fell outside its scanbeam back onto the steeper
/// edge.
pub fn closest_point_on_segment(off_pt: Point64, seg1: Point64, seg2: Point64) -> Point64 {
    if seg1 == seg2 {
        return seg1;
    }

    let dx = (seg2.x - seg1.x) as f64;
    let dy = (seg2.y - seg1.y) as f64;
    let q = ((off_pt.x - seg1.x) as f64 * dx + (off_pt.y - seg1.y) as f64 * dy) / (dx * dx + dy * dy);
    let q = q.clamp(0.0, 1.0);
    Point64::new(
        seg1.x + (q * dx).round_ties_even() as i64,
        seg1.y + (q * dy).round_ties_even() as i64,
    )
}

/// Returns true if the points are within one unit of each other on both axes.
#[inline]
pub fn pts_really_close(pt1: Point64, pt2: Point64) -> bool {
    (pt1.x - pt2.x).abs() < 2 && (pt1.y - pt2.y).abs() < 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn dot_product_sign() {
        let a = Point64::new(0, 0);
        let b = Point64::new(10, 0);
        assert!(dot_product(a, b, Point64::new(20, 1)) > 0.0);
        assert!(dot_product(a, b, Point64::new(0, 0)) < 0.0);
    }

    #[test]
    fn perpendicular_distance() {
        let d = perpendic_dist_from_line_sqrd(
            Point64::new(5, 3),
            Point64::new(0, 0),
            Point64::new(10, 0),
        );
        assert!(d.fuzzy_eq(9.0));
        let degenerate =
            perpendic_dist_from_line_sqrd(Point64::new(5, 3), Point64::new(1, 1), Point64::new(1, 1));
        assert_eq!(degenerate, 0.0);
    }

    #[test]
    fn segment_intersect_parallel() {
        assert_eq!(
            segment_intersect_pt(
                Point64::new(0, 0),
                Point64::new(10, 0),
                Point64::new(0, 5),
                Point64::new(10, 5)
            ),
            None
        );
    }

    #[test]
    fn segment_intersect_clamps_to_first_segment() {
        let ip = segment_intersect_pt(
            Point64::new(0, 0),
            Point64::new(4, 0),
            Point64::new(10, -5),
            Point64::new(10, 5),
        );
        assert_eq!(ip, Some(Point64::new(4, 0)));
    }

    #[test]
    fn segment_intersect_truncates_toward_zero() {
        // crossing at (11/3, 11/3)
        let ip = segment_intersect_pt(
            Point64::new(0, 0),
            Point64::new(10, 10),
            Point64::new(0, 11),
            Point64::new(5, 1),
        );
        assert_eq!(ip, Some(Point64::new(3, 3)));
        // crossing at (2/3, 0)
        let ip = segment_intersect_pt(
            Point64::new(0, -2),
            Point64::new(2, 4),
            Point64::new(-5, 0),
            Point64::new(5, 0),
        );
        assert_eq!(ip, Some(Point64::new(0, 0)));
        // crossing at (-8/3, 0)
        let ip = segment_intersect_pt(
            Point64::new(-4, -1),
            Point64::new(0, 2),
            Point64::new(-5, 0),
            Point64::new(5, 0),
        );
        assert_eq!(ip, Some(Point64::new(-2, 0)));
    }

    #[test]
    fn crossing_segments() {
        let a = Point64::new(0, 0);
        let b = Point64::new(10, 10);
        assert!(segments_intersect(a, b, Point64::new(0, 10), Point64::new(10, 0)));
        // touching at an end point is not a crossing
        assert!(!segments_intersect(a, b, Point64::new(10, 10), Point64::new(20, 0)));
        assert!(!segments_intersect(a, b, Point64::new(1, 1), Point64::new(5, 5)));
    }

    #[test]
    fn closest_point() {
        let p = closest_point_on_segment(Point64::new(5, 7), Point64::new(0, 0), Point64::new(10, 0));
        assert_eq!(p, Point64::new(5, 0));
        let p = closest_point_on_segment(Point64::new(-5, 7), Point64::new(0, 0), Point64::new(10, 0));
        assert_eq!(p, Point64::new(0, 0));
    }

    #[test]
    fn real_line_intersect() {
        let ip = line_intersect_pt_d(
            PointD::new(0.0, 0.0),
            PointD::new(1.0, 0.0),
            PointD::new(5.0, -1.0),
            PointD::new(5.0, 1.0),
        )
        .unwrap();
        assert!(ip.fuzzy_eq(PointD::new(5.0, 0.0)));
        assert!(cross_product_vec(PointD::new(1.0, 0.0), PointD::new(0.0, 1.0)).fuzzy_eq(-1.0));
    }
}
