//! Approximate equality.
//!
//! Exact comparison (`==`) is the right default for this crate's value types,
//! but tests of numerically approximate operations (inversion, rotation,
//! normalization) need a tolerance. This module provides the [`ApproxEq`]
//! trait and the [`assert_approx_eq!`][crate::assert_approx_eq] /
//! [`assert_approx_ne!`][crate::assert_approx_ne] macros:
//!
//! ```
//! # use sl_linalg::*;
//! let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
//! assert_approx_eq!(one, 1.0);
//! assert_approx_eq!(100.0, 99.0, abs = 1.0);
//! assert_approx_eq!(100.0, 99.0, rel = 0.01);
//! assert_approx_eq!(1.0, 1.0 + f64::EPSILON, ulps = 1);
//! ```
//!
//! When several comparison methods are given, the values count as equal if
//! *any* of them matches. Without an explicit tolerance, an absolute and a
//! relative comparison with the type's default epsilon are used.

mod impls;

use std::fmt;

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of
/// their fields are.
///
/// For more information on the subtleties of approximate floating-point
/// number comparison, see:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Type of the tolerance for absolute and relative comparisons.
    ///
    /// This is almost always either [`f32`] or [`f64`], depending on which
    /// one is the underlying primitive type being compared.
    type Epsilon: DefaultTolerances + Copy;

    /// Performs an *absolute comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or
    /// equal to `tolerance`, the values are considered to be equal. This is
    /// typically a good choice for values close to zero, where a relative
    /// comparison degenerates.
    fn abs_diff_eq(&self, other: &Rhs, tolerance: Self::Epsilon) -> bool;

    /// Performs a *relative comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or
    /// equal to the larger of their magnitudes times `tolerance`, the values
    /// are considered to be equal. This is a good default for values that are
    /// not close to zero.
    fn rel_diff_eq(&self, other: &Rhs, tolerance: Self::Epsilon) -> bool;

    /// Performs a comparison of `self` and `other` by counting the number of
    /// [*units in the last place*] (ULPs) between the values.
    ///
    /// If there are at most `tolerance` representable values between the two
    /// compared values, they are considered to be equal. This respects the
    /// uneven distribution of floating-point numbers but does not work well
    /// near zero, where values of opposing sign are billions of ULPs apart.
    ///
    /// `NaN` is never considered equal to anything. `-0.0` and `+0.0` are
    /// always considered equal; other values with differing signs never are.
    ///
    /// [*units in the last place*]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
    fn ulps_diff_eq(&self, other: &Rhs, tolerance: u32) -> bool;
}

/// Trait implemented for the `Epsilon` type of [`ApproxEq`] implementations.
///
/// This supplies the default tolerances used by
/// [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne] when the call site does not
/// specify any.
pub trait DefaultTolerances {
    /// Default tolerance for *absolute comparisons* via
    /// [`ApproxEq::abs_diff_eq`].
    const DEFAULT_ABS_TOLERANCE: Self;
    /// Default tolerance for *relative comparisons* via
    /// [`ApproxEq::rel_diff_eq`].
    const DEFAULT_REL_TOLERANCE: Self;
    /// Default tolerance for *ULPs comparisons* via
    /// [`ApproxEq::ulps_diff_eq`].
    const DEFAULT_ULPS_TOLERANCE: u32;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

/// The set of comparison methods and tolerances one assertion uses.
///
/// Built by the assertion macros from their `abs = ...`, `rel = ...` and
/// `ulps = ...` arguments; an empty set falls back to the
/// [`DefaultTolerances`].
#[derive(Clone, Copy)]
pub struct Comparison<E> {
    abs: Option<E>,
    rel: Option<E>,
    ulps: Option<u32>,
}

impl<E: DefaultTolerances + Copy> Comparison<E> {
    #[doc(hidden)]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            abs: None,
            rel: None,
            ulps: None,
        }
    }

    /// Adds an *absolute comparison* with the given tolerance.
    pub fn abs(&mut self, tolerance: E) {
        self.abs = Some(tolerance);
    }

    /// Adds a *relative comparison* with the given tolerance.
    pub fn rel(&mut self, tolerance: E) {
        self.rel = Some(tolerance);
    }

    /// Adds a *ULPs comparison* with the given tolerance.
    pub fn ulps(&mut self, tolerance: u32) {
        self.ulps = Some(tolerance);
    }

    fn matches<T>(mut self, left: &T, right: &T) -> bool
    where
        T: ApproxEq<Epsilon = E> + ?Sized,
    {
        if self.abs.is_none() && self.rel.is_none() && self.ulps.is_none() {
            self.abs = Some(E::DEFAULT_ABS_TOLERANCE);
            self.rel = Some(E::DEFAULT_REL_TOLERANCE);
        }

        if let Some(abs) = self.abs {
            if left.abs_diff_eq(right, abs) {
                return true;
            }
        }
        if let Some(rel) = self.rel {
            if left.rel_diff_eq(right, rel) {
                return true;
            }
        }
        if let Some(ulps) = self.ulps {
            if left.ulps_diff_eq(right, ulps) {
                return true;
            }
        }

        false
    }
}

#[doc(hidden)]
#[track_caller]
pub fn assert_approx<T>(
    left: &T,
    right: &T,
    comparison: Comparison<T::Epsilon>,
    expect_equal: bool,
    msg: Option<fmt::Arguments<'_>>,
) where
    T: ApproxEq + fmt::Debug + ?Sized,
{
    if comparison.matches(left, right) == expect_equal {
        return;
    }

    let op = if expect_equal { "==" } else { "!=" };
    match msg {
        Some(args) => panic!(
            r#"assertion `left {op} right` failed: {args}
  left: {left:?}
 right: {right:?}"#
        ),
        None => panic!(
            r#"assertion `left {op} right` failed
  left: {left:?}
 right: {right:?}"#
        ),
    }
}

/// Asserts that two expressions are approximately equal to each other (using
/// [`ApproxEq`]).
///
/// This macro functions identically to [`assert_eq!`], except in that it uses
/// the [`ApproxEq`] trait to perform an approximate comparison. The
/// comparison methods and tolerances can be selected with trailing
/// `abs = ...`, `rel = ...` and `ulps = ...` arguments; see the
/// [module docs][crate::approx] for the exact semantics.
///
/// Also see [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// # Examples
///
/// Default approximate comparison:
///
/// ```
/// # use sl_linalg::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
/// ```
///
/// Absolute and relative comparisons with custom tolerance values:
///
/// ```
/// # use sl_linalg::*;
/// assert_approx_eq!(100.0, 99.0, abs = 1.0);
/// assert_approx_eq!(100.0, 99.0, rel = 0.01);
/// ```
///
/// Compare values via ULPs, based on the number of floats that fit between
/// them:
///
/// ```
/// # use sl_linalg::*;
/// assert_approx_eq!(1.0, 1.0 + f64::EPSILON, ulps = 1);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(, $kind:ident = $tolerance:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut comparison = $crate::approx::Comparison::new();
        $(comparison.$kind($tolerance);)*
        $crate::approx::assert_approx(
            &$left,
            &$right,
            comparison,
            true,
            ::core::option::Option::None,
        );
    }};
    ($left:expr, $right:expr, $($arg:tt)+) => {{
        $crate::approx::assert_approx(
            &$left,
            &$right,
            $crate::approx::Comparison::new(),
            true,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        );
    }};
}

/// Asserts that two expressions are *not* approximately equal to each other
/// (using [`ApproxEq`]).
///
/// This macro functions identically to [`assert_ne!`], except in that it uses
/// the [`ApproxEq`] trait to perform an approximate comparison. The
/// comparison methods and tolerances can be selected with trailing
/// `abs = ...`, `rel = ...` and `ulps = ...` arguments.
///
/// Also see [`assert_approx_eq!`][crate::assert_approx_eq].
///
/// # Examples
///
/// ```
/// # use sl_linalg::*;
/// assert_approx_ne!(100.0, 99.0, abs = 0.5);
/// assert_approx_ne!(100.0, 99.0, rel = 0.005);
/// assert_approx_ne!(1.0, 1.0 + f64::EPSILON + f64::EPSILON, ulps = 1);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($left:expr, $right:expr $(, $kind:ident = $tolerance:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut comparison = $crate::approx::Comparison::new();
        $(comparison.$kind($tolerance);)*
        $crate::approx::assert_approx(
            &$left,
            &$right,
            comparison,
            false,
            ::core::option::Option::None,
        );
    }};
    ($left:expr, $right:expr, $($arg:tt)+) => {{
        $crate::approx::assert_approx(
            &$left,
            &$right,
            $crate::approx::Comparison::new(),
            false,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        );
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "my message")]
    fn assertion_message() {
        assert_approx_eq!(1.0, 2.0, "my message");
    }

    #[test]
    fn rel() {
        assert_approx_eq!(1.0, 1.001, rel = 0.01);
        assert_approx_eq!(1.0, -1.0, rel = 2.0);
        assert_approx_eq!(0.0, 0.00001, rel = 1.0);
    }

    #[test]
    fn methods_are_ored() {
        // The relative comparison fails but the absolute one matches.
        assert_approx_eq!(0.0, 0.5, abs = 0.5, rel = 0.1);
        // Both fail.
        assert_approx_ne!(0.0, 0.5, abs = 0.1, rel = 0.1);
    }

    #[test]
    fn epsilon() {
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON);
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON, ulps = 1);
        assert_approx_ne!(1.0, 1.0 + f32::EPSILON, ulps = 0);
    }

    #[test]
    fn negative() {
        assert_approx_ne!(1.0, -1.0);
        assert_approx_ne!(1.0, -1.0, abs = 1.0);
        assert_approx_eq!(1.0, -1.0, abs = 2.0);
        assert_approx_eq!(-1.0, -1.0, abs = 0.0);
        assert_approx_eq!(-1.0, -1.0, rel = 0.0);
        assert_approx_eq!(-1.0, -1.0, ulps = 0);
    }

    #[test]
    fn nan() {
        assert_approx_ne!(f32::NAN, f32::NAN, abs = 0.0);
        assert_approx_ne!(f32::NAN, f32::NAN, rel = 0.0);
        assert_approx_ne!(f32::NAN, f32::NAN, ulps = 0);
        assert_approx_ne!(f32::NAN, f32::NAN, abs = 1.0);
        assert_approx_ne!(f32::NAN, f32::NAN, rel = 1.0);
        assert_approx_ne!(f32::NAN, f32::NAN, ulps = 100);

        assert_approx_ne!(f32::NAN, 0.0, abs = 0.0);
        assert_approx_ne!(f32::NAN, 0.0, rel = 0.0);
        assert_approx_ne!(f32::NAN, 0.0, ulps = 0);
        assert_approx_ne!(f32::NAN, 0.0, abs = 1.0);
        assert_approx_ne!(f32::NAN, 0.0, rel = 1.0);
        assert_approx_ne!(f32::NAN, 0.0, ulps = 100);
    }

    #[test]
    fn inf() {
        assert_approx_eq!(f32::INFINITY, f32::INFINITY, abs = 0.0);
        assert_approx_eq!(f32::INFINITY, f32::INFINITY, rel = 0.0);
        assert_approx_eq!(f32::INFINITY, f32::INFINITY, ulps = 0);
        assert_approx_ne!(f32::INFINITY, f32::MAX, abs = 10000.0);
        assert_approx_ne!(f32::INFINITY, f32::MAX, rel = 10000.0);
        assert_approx_ne!(f32::MAX, f32::INFINITY, abs = 10000.0);
        assert_approx_ne!(f32::MAX, f32::INFINITY, rel = 10000.0);
        assert_approx_ne!(f32::MAX, f32::INFINITY, ulps = 0);
        assert_approx_eq!(f32::MAX, f32::INFINITY, ulps = 1);

        assert_approx_eq!(f64::INFINITY, f64::INFINITY, abs = 0.0);
        assert_approx_eq!(f64::INFINITY, f64::INFINITY, rel = 0.0);
        assert_approx_eq!(f64::INFINITY, f64::INFINITY, ulps = 0);
        assert_approx_ne!(f64::INFINITY, f64::MAX, abs = 10000.0);
        assert_approx_ne!(f64::INFINITY, f64::MAX, rel = 10000.0);
        assert_approx_ne!(f64::MAX, f64::INFINITY, abs = 10000.0);
        assert_approx_ne!(f64::MAX, f64::INFINITY, rel = 10000.0);
        assert_approx_ne!(f64::MAX, f64::INFINITY, ulps = 0);
        assert_approx_eq!(f64::MAX, f64::INFINITY, ulps = 1);
    }
}
