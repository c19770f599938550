use num_traits::{Bounded, Num, NumCast, Signed};

/// Trait representing a coordinate value: `i64` for the exact integer domain and `f64` for the
/// real domain.
///
/// All accumulations that could overflow the integer domain (areas, cross products) are carried
/// out in `f64` through [Coord::as_f64].
pub trait Coord:
    Num + NumCast + Signed + Bounded + Copy + PartialOrd + Default + std::fmt::Debug + 'static
{
    /// Convert the value to `f64`.
    fn as_f64(self) -> f64;

    /// Convert from `f64`, rounding half away from zero for integer coordinates.
    fn from_f64(value: f64) -> Self;

    /// Returns the smaller of `self` and `other`.
    #[inline]
    fn min_of(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// Returns the larger of `self` and `other`.
    #[inline]
    fn max_of(self, other: Self) -> Self {
        if other > self { other } else { self }
    }
}

impl Coord for i64 {
    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value.round() as i64
    }
}

impl Coord for f64 {
    #[inline]
    fn as_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}
