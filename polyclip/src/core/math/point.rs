use crate::core::traits::{Coord, FuzzyEq};
use std::{fmt, ops};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D point used for path vertexes in both coordinate domains.
///
/// `Point<i64>` ([Point64]) is the exact integer domain that the sweep runs in, `Point<f64>`
/// ([PointD]) is the real domain (also used for unit normals while offsetting).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point<T = i64> {
    pub x: T,
    pub y: T,
}

/// Point in the exact integer coordinate domain.
pub type Point64 = Point<i64>;

/// Point in the real coordinate domain.
pub type PointD = Point<f64>;

impl<T> Point<T>
where
    T: Coord,
{
    /// Create a new point with x and y components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    /// Create a zero point (x = 0, y = 0).
    #[inline]
    pub fn zero() -> Self {
        Point::new(T::zero(), T::zero())
    }

    /// Uniformly scale the point by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        Point::new(scale_factor * self.x, scale_factor * self.y)
    }

    /// Convert to the real domain.
    #[inline]
    pub fn to_d(self) -> PointD {
        PointD::new(self.x.as_f64(), self.y.as_f64())
    }
}

impl PointD {
    /// Convert to the integer domain, rounding each component half away from zero.
    #[inline]
    pub fn to_64(self) -> Point64 {
        Point64::new(i64::from_f64(self.x), i64::from_f64(self.y))
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Length of the vector from the origin to this point.
    #[inline]
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Normalize the vector (length = 1), a zero length vector stays zero.
    #[inline]
    pub fn normalize(&self) -> Self {
        let h = self.length();
        if h.fuzzy_eq_zero_eps(0.001) {
            return PointD::zero();
        }

        self.scale(1.0 / h)
    }

    /// Fuzzy equal comparison with another point using `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: f64) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another point using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, f64::fuzzy_epsilon())
    }
}

impl From<Point64> for PointD {
    #[inline]
    fn from(pt: Point64) -> Self {
        pt.to_d()
    }
}

impl<T> fmt::Display for Point<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Coord> ops::$op_trait<Point<T>> for Point<T> {
            type Output = Point<T>;
            #[inline]
            fn $op_func(self, rhs: Point<T>) -> Self::Output {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Coord> ops::$op_trait<&Point<T>> for Point<T> {
            type Output = Point<T>;
            #[inline]
            fn $op_func(self, rhs: &Point<T>) -> Self::Output {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<'a, 'b, T: Coord> ops::$op_trait<&'b Point<T>> for &'a Point<T> {
            type Output = Point<T>;
            #[inline]
            fn $op_func(self, rhs: &'b Point<T>) -> Self::Output {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Coord> ops::$op_trait<Point<T>> for &Point<T> {
            type Output = Point<T>;
            #[inline]
            fn $op_func(self, rhs: Point<T>) -> Self::Output {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

impl<T: Coord> ops::Neg for Point<T> {
    type Output = Point<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        Point::new(-self.x, -self.y)
    }
}

impl<T: Coord> ops::Mul<T> for Point<T> {
    type Output = Point<T>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}
