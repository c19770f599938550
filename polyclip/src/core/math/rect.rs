use super::Point;
use crate::core::traits::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis aligned rectangle. `left`/`top` hold the minimum x/y and `right`/`bottom` the maximum x/y.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect<T = i64> {
    pub left: T,
    pub top: T,
    pub right: T,
    pub bottom: T,
}

/// Rectangle in the exact integer coordinate domain.
pub type Rect64 = Rect<i64>;

/// Rectangle in the real coordinate domain.
pub type RectD = Rect<f64>;

impl<T> Rect<T>
where
    T: Coord,
{
    #[inline]
    pub fn new(left: T, top: T, right: T, bottom: T) -> Self {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle that any point will grow, used as the start value when accumulating bounds.
    #[inline]
    pub(crate) fn inverted() -> Self {
        Rect::new(T::max_value(), T::max_value(), T::min_value(), T::min_value())
    }

    #[inline]
    pub fn width(&self) -> T {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> T {
        self.bottom - self.top
    }

    /// Returns true if the rectangle has no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bottom <= self.top || self.right <= self.left
    }

    #[inline]
    pub fn mid_point(&self) -> Point<T> {
        let two = T::one() + T::one();
        Point::new((self.left + self.right) / two, (self.top + self.bottom) / two)
    }

    /// Returns true if `pt` is strictly inside the rectangle.
    #[inline]
    pub fn contains_point(&self, pt: Point<T>) -> bool {
        pt.x > self.left && pt.x < self.right && pt.y > self.top && pt.y < self.bottom
    }

    /// Returns true if `other` lies inside (or on the edges of) this rectangle.
    #[inline]
    pub fn contains_rect(&self, other: &Rect<T>) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }

    /// Returns true if the rectangles overlap or touch.
    #[inline]
    pub fn intersects(&self, other: &Rect<T>) -> bool {
        self.left.max_of(other.left) <= self.right.min_of(other.right)
            && self.top.max_of(other.top) <= self.bottom.min_of(other.bottom)
    }

    /// Grow the rectangle to include `pt`.
    #[inline]
    pub(crate) fn include(&mut self, pt: Point<T>) {
        self.left = self.left.min_of(pt.x);
        self.right = self.right.max_of(pt.x);
        self.top = self.top.min_of(pt.y);
        self.bottom = self.bottom.max_of(pt.y);
    }

    /// The four corners as a closed path, starting at the top left corner.
    pub fn as_path(&self) -> Vec<Point<T>> {
        vec![
            Point::new(self.left, self.top),
            Point::new(self.right, self.top),
            Point::new(self.right, self.bottom),
            Point::new(self.left, self.bottom),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_queries() {
        let r = Rect64::new(0, 0, 10, 20);
        assert_eq!(r.width(), 10);
        assert_eq!(r.height(), 20);
        assert!(!r.is_empty());
        assert_eq!(r.mid_point(), Point::new(5, 10));
        assert!(r.contains_point(Point::new(1, 1)));
        assert!(!r.contains_point(Point::new(0, 1)));
        assert!(r.contains_rect(&Rect64::new(0, 0, 10, 5)));
        assert!(!r.contains_rect(&Rect64::new(-1, 0, 10, 5)));
        assert!(r.intersects(&Rect64::new(10, 20, 30, 30)));
        assert!(!r.intersects(&Rect64::new(11, 0, 30, 30)));
    }

    #[test]
    fn empty_and_include() {
        assert!(Rect64::default().is_empty());
        let mut r = RectD::inverted();
        r.include(Point::new(1.0, 2.0));
        r.include(Point::new(-1.0, 5.0));
        assert_eq!(r, RectD::new(-1.0, 2.0, 1.0, 5.0));
    }
}
