/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing path macros. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a [Path64](crate::Path64) from a list of (x, y) integer tuples.
///
/// # Examples
///
/// ```
/// # use polyclip::*;
/// let path = path64![(0, 1), (2, 0)];
/// assert_eq!(path, vec![Point64::new(0, 1), Point64::new(2, 0)]);
/// ```
#[macro_export]
macro_rules! path64 {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut path: $crate::path::Path64 = Vec::with_capacity(size);
            $(
                path.push($crate::core::math::Point64::new($x.0, $x.1));
            )*
            path
        }
    };
}

/// Construct a [PathD](crate::PathD) from a list of (x, y) real tuples.
///
/// # Examples
///
/// ```
/// # use polyclip::*;
/// let path = pathd![(0.0, 1.5), (2.0, 0.0)];
/// assert_eq!(path, vec![PointD::new(0.0, 1.5), PointD::new(2.0, 0.0)]);
/// ```
#[macro_export]
macro_rules! pathd {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut path: $crate::path::PathD = Vec::with_capacity(size);
            $(
                path.push($crate::core::math::PointD::new($x.0, $x.1));
            )*
            path
        }
    };
}
