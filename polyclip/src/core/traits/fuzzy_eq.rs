/// Approximate equality for the real coordinate domain.
///
/// Real domain results are scaled back from the integer sweep and offset geometry is built from
/// unit normals, so exact equality is not expected when comparing them.
///
/// # Examples
///
/// ```
/// # use polyclip::core::traits::*;
/// let a = 0.1 + 0.2;
/// assert_ne!(a, 0.3);
/// assert!(a.fuzzy_eq(0.3));
/// assert!(1.004f64.fuzzy_eq_eps(1.0, 0.01));
/// assert!(1e-12f64.fuzzy_eq_zero_eps(f64::fuzzy_epsilon()));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Default tolerance.
    fn fuzzy_epsilon() -> Self;

    /// `true` when `self` and `other` differ by less than `fuzzy_epsilon`.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// `true` when the magnitude of `self` is below `fuzzy_epsilon`.
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;
}

impl FuzzyEq for f64 {
    #[inline]
    fn fuzzy_epsilon() -> Self {
        1.0e-9
    }

    #[inline]
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
        (self - other).abs() < fuzzy_epsilon
    }

    #[inline]
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
        self.abs() < fuzzy_epsilon
    }
}
