use super::{Path, Paths};
use crate::core::{
    math::{Point, Rect, cross_product},
    traits::Coord,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Location of a point relative to a polygon.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PointInPolygonResult {
    /// Point lies on an edge or vertex of the polygon.
    IsOn,
    IsInside,
    IsOutside,
}

/// Signed area of a closed path using the shoelace formula.
///
/// Counter clockwise rings (in a y-up frame) have positive area. Paths with fewer than 3 points
/// have zero area.
///
/// # Examples
///
/// ```
/// # use polyclip::*;
/// let square = path64![(0, 0), (100, 0), (100, 100), (0, 100)];
/// assert_eq!(area(&square), 10000.0);
/// let reversed: Path64 = square.iter().rev().copied().collect();
/// assert_eq!(area(&reversed), -10000.0);
/// ```
pub fn area<T>(path: &[Point<T>]) -> f64
where
    T: Coord,
{
    if path.len() < 3 {
        return 0.0;
    }

    let mut a = 0.0;
    let mut prev = path[path.len() - 1];
    for &pt in path {
        a += (prev.y.as_f64() + pt.y.as_f64()) * (prev.x.as_f64() - pt.x.as_f64());
        prev = pt;
    }

    a * 0.5
}

/// Sum of the signed areas of all paths (holes oriented opposite to their outer rings subtract).
pub fn area_of_paths<T>(paths: &[Path<T>]) -> f64
where
    T: Coord,
{
    paths.iter().map(|p| area(p)).sum()
}

/// Returns true if the path's signed [area] is non-negative.
///
/// # Examples
///
/// ```
/// # use polyclip::*;
/// assert!(is_positive(&path64![(0, 0), (100, 0), (100, 100), (0, 100)]));
/// assert!(!is_positive(&pathd![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]));
/// ```
#[inline]
pub fn is_positive<T>(path: &[Point<T>]) -> bool
where
    T: Coord,
{
    area(path) >= 0.0
}

/// Bounding rectangle of a path, the empty (all zero) rectangle for an empty path.
pub fn bounds<T>(path: &[Point<T>]) -> Rect<T>
where
    T: Coord,
{
    if path.is_empty() {
        return Rect::default();
    }

    let mut result = Rect::inverted();
    for &pt in path {
        result.include(pt);
    }

    result
}

/// Bounding rectangle of all points in `paths`, the empty rectangle if there are none.
pub fn bounds_of_paths<T>(paths: &[Path<T>]) -> Rect<T>
where
    T: Coord,
{
    let mut result = Rect::inverted();
    let mut any = false;
    for &pt in paths.iter().flatten() {
        result.include(pt);
        any = true;
    }

    if any { result } else { Rect::default() }
}

/// Remove consecutive duplicate points, and for closed paths a last point equal to the first.
pub fn strip_duplicates<T>(path: &mut Path<T>, is_closed: bool)
where
    T: Coord,
{
    path.dedup();
    if is_closed {
        while path.len() > 1 && path.first() == path.last() {
            path.pop();
        }
    }
}

/// Reverse the point order of every path.
pub fn reverse_paths<T>(paths: &[Path<T>]) -> Paths<T>
where
    T: Coord,
{
    paths
        .iter()
        .map(|p| p.iter().rev().copied().collect())
        .collect()
}

/// Translate every point of `path` by (`dx`, `dy`).
pub fn translate_path<T>(path: &[Point<T>], dx: T, dy: T) -> Path<T>
where
    T: Coord,
{
    let delta = Point::new(dx, dy);
    path.iter().map(|&pt| pt + delta).collect()
}

/// How a single polygon edge relates to the horizontal ray cast from a test point towards +x.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum EdgeCrossing {
    On,
    Crosses,
    Misses,
}

fn edge_crossing<T>(pt: Point<T>, a: Point<T>, b: Point<T>) -> EdgeCrossing
where
    T: Coord,
{
    if b == pt {
        return EdgeCrossing::On;
    }

    if a.y == b.y {
        if b.y == pt.y && ((pt.x > a.x) != (pt.x > b.x)) {
            return EdgeCrossing::On;
        }
        return EdgeCrossing::Misses;
    }

    // half open test so a vertex on the ray is only counted once
    if (a.y > pt.y) == (b.y > pt.y) {
        return EdgeCrossing::Misses;
    }

    let d = cross_product(a, b, pt);
    if d == 0.0 {
        EdgeCrossing::On
    } else if (d > 0.0) == (b.y > a.y) {
        EdgeCrossing::Crosses
    } else {
        EdgeCrossing::Misses
    }
}

/// Locate `pt` relative to the closed `polygon` (even-odd crossing rule).
///
/// # Examples
///
/// ```
/// # use polyclip::*;
/// let square = path64![(0, 0), (10, 0), (10, 10), (0, 10)];
/// assert_eq!(point_in_polygon(Point64::new(5, 5), &square), PointInPolygonResult::IsInside);
/// assert_eq!(point_in_polygon(Point64::new(10, 5), &square), PointInPolygonResult::IsOn);
/// assert_eq!(point_in_polygon(Point64::new(15, 5), &square), PointInPolygonResult::IsOutside);
/// ```
pub fn point_in_polygon<T>(pt: Point<T>, polygon: &[Point<T>]) -> PointInPolygonResult
where
    T: Coord,
{
    if polygon.len() < 3 {
        return PointInPolygonResult::IsOutside;
    }

    let mut inside = false;
    let mut prev = polygon[polygon.len() - 1];
    for &curr in polygon {
        match edge_crossing(pt, prev, curr) {
            EdgeCrossing::On => return PointInPolygonResult::IsOn,
            EdgeCrossing::Crosses => inside = !inside,
            EdgeCrossing::Misses => {}
        }
        prev = curr;
    }

    if inside {
        PointInPolygonResult::IsInside
    } else {
        PointInPolygonResult::IsOutside
    }
}

/// Approximate an ellipse centered at `center` with `steps` vertexes (a reasonable count is
/// derived from the radii when `steps <= 2`). `radius_y <= 0` draws a circle.
pub fn ellipse<T>(center: Point<T>, radius_x: f64, radius_y: f64, steps: usize) -> Path<T>
where
    T: Coord,
{
    if radius_x <= 0.0 {
        return Vec::new();
    }

    let radius_y = if radius_y <= 0.0 { radius_x } else { radius_y };
    let steps = if steps <= 2 {
        ((std::f64::consts::PI * ((radius_x + radius_y) / 2.0).sqrt()).ceil() as usize).max(3)
    } else {
        steps
    };

    let angle = std::f64::consts::TAU / steps as f64;
    let (si, co) = angle.sin_cos();
    let (cx, cy) = (center.x.as_f64(), center.y.as_f64());
    let mut dx = co;
    let mut dy = si;
    let mut result = Vec::with_capacity(steps);
    result.push(Point::new(T::from_f64(cx + radius_x), T::from_f64(cy)));
    for _ in 1..steps {
        result.push(Point::new(
            T::from_f64(cx + radius_x * dx),
            T::from_f64(cy + radius_y * dy),
        ));
        let x = dx * co - dy * si;
        dy = dy * co + dx * si;
        dx = x;
    }

    result
}
