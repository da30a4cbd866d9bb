use super::ApproxEq;

macro_rules! float_approx {
    ($($t:ty),+) => {
        $(
            impl ApproxEq for $t {
                type Epsilon = Self;

                fn abs_diff_eq(&self, other: &Self, tolerance: Self::Epsilon) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        // Ensures `inf == inf`, `-inf == -inf` and `inf != -inf`.
                        return self == other;
                    }

                    (self - other).abs() <= tolerance
                }

                fn rel_diff_eq(&self, other: &Self, tolerance: Self::Epsilon) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        // Ensures `inf == inf`, `-inf == -inf` and `inf != -inf`.
                        return self == other;
                    }

                    let largest = Self::max(self.abs(), other.abs());
                    (self - other).abs() <= largest * tolerance
                }

                fn ulps_diff_eq(&self, other: &Self, tolerance: u32) -> bool {
                    if self.is_sign_negative() != other.is_sign_negative() {
                        return self == other; // `-0.0` == `+0.0`
                    }

                    if self.is_nan() || other.is_nan() {
                        return false;
                    }

                    self.to_bits().abs_diff(other.to_bits()) <= tolerance.into()
                }
            }
        )+
    };
}
float_approx!(f32, f64);

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    type Epsilon = T::Epsilon;

    fn abs_diff_eq(&self, other: &U, tolerance: Self::Epsilon) -> bool {
        T::abs_diff_eq(self, other, tolerance)
    }

    fn rel_diff_eq(&self, other: &U, tolerance: Self::Epsilon) -> bool {
        T::rel_diff_eq(self, other, tolerance)
    }

    fn ulps_diff_eq(&self, other: &U, tolerance: u32) -> bool {
        T::ulps_diff_eq(self, other, tolerance)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Epsilon = T::Epsilon;

    fn abs_diff_eq(&self, other: &[U], tolerance: Self::Epsilon) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.abs_diff_eq(b, tolerance))
    }

    fn rel_diff_eq(&self, other: &[U], tolerance: Self::Epsilon) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.rel_diff_eq(b, tolerance))
    }

    fn ulps_diff_eq(&self, other: &[U], tolerance: u32) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.ulps_diff_eq(b, tolerance))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Epsilon = T::Epsilon;

    fn abs_diff_eq(&self, other: &[U; N], tolerance: Self::Epsilon) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), tolerance)
    }

    fn rel_diff_eq(&self, other: &[U; N], tolerance: Self::Epsilon) -> bool {
        self.as_slice().rel_diff_eq(other.as_slice(), tolerance)
    }

    fn ulps_diff_eq(&self, other: &[U; N], tolerance: u32) -> bool {
        self.as_slice().ulps_diff_eq(other.as_slice(), tolerance)
    }
}
