//! Implementations of `std::ops`.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{
    approx::ApproxEq,
    storage::Storage,
    traits::{Number, Scalar},
    Quat, Vector,
};

impl<T, U, Q, P> PartialEq<Quat<U, P>> for Quat<T, Q>
where
    T: Scalar + PartialEq<U>,
    U: Scalar,
    Q: Storage<T, 4>,
    P: Storage<U, 4>,
{
    fn eq(&self, other: &Quat<U, P>) -> bool {
        self.into_vec() == other.into_vec()
    }
}

impl<T: Scalar + Eq, Q: Storage<T, 4>> Eq for Quat<T, Q> {}

impl<T, Q> ApproxEq for Quat<T, Q>
where
    T: Scalar + ApproxEq,
    Q: Storage<T, 4>,
{
    type Epsilon = T::Epsilon;

    fn abs_diff_eq(&self, other: &Self, tolerance: Self::Epsilon) -> bool {
        self.into_vec().abs_diff_eq(&other.into_vec(), tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Self::Epsilon) -> bool {
        self.into_vec().rel_diff_eq(&other.into_vec(), tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, tolerance: u32) -> bool {
        self.into_vec().ulps_diff_eq(&other.into_vec(), tolerance)
    }
}

/// The Hamilton product: composes the rotations of both quaternions, with
/// `rhs` applied first.
impl<T: Number, Q: Storage<T, 4>> Mul for Quat<T, Q> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let [px, py, pz, pw] = self.into_vec().into_array();
        let [qx, qy, qz, qw] = rhs.into_vec().into_array();

        Self::from_components(
            pw * qx + px * qw + py * qz - pz * qy,
            pw * qy + py * qw + pz * qx - px * qz,
            pw * qz + pz * qw + px * qy - py * qx,
            pw * qw - px * qx - py * qy - pz * qz,
        )
    }
}

/// Rotates a 3-dimensional vector by the rotation `self` represents.
///
/// `self` must have unit length for the result to be a pure rotation; other
/// lengths additionally scale the vector.
impl<T: Number, Q: Storage<T, 4> + Storage<T, 3>> Mul<Vector<T, 3, Q>> for Quat<T, Q> {
    type Output = Vector<T, 3, Q>;

    fn mul(self, rhs: Vector<T, 3, Q>) -> Self::Output {
        let qv = self.into_vec().truncate();
        let uv = qv.cross(rhs);
        let uuv = qv.cross(uv);
        let [.., w] = self.into_vec().into_array();
        let two = T::ONE + T::ONE;

        rhs + (uv * w + uuv) * two
    }
}

/// Quaternion-scalar multiplication, applied to every component.
impl<T: Number, Q: Storage<T, 4>> Mul<T> for Quat<T, Q> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::from_vec(self.into_vec() * rhs)
    }
}

/// Quaternion-scalar division, applied to every component.
impl<T: Number, Q: Storage<T, 4>> Div<T> for Quat<T, Q> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::from_vec(self.into_vec() / rhs)
    }
}

/// Component-wise addition.
impl<T, Q> Add for Quat<T, Q>
where
    T: Scalar + Add<Output = T>,
    Q: Storage<T, 4>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_vec(self.into_vec() + rhs.into_vec())
    }
}

/// Component-wise subtraction.
impl<T, Q> Sub for Quat<T, Q>
where
    T: Scalar + Sub<Output = T>,
    Q: Storage<T, 4>,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_vec(self.into_vec() - rhs.into_vec())
    }
}

/// Component-wise negation; represents the same rotation.
impl<T, Q> Neg for Quat<T, Q>
where
    T: Scalar + Neg<Output = T>,
    Q: Storage<T, 4>,
{
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_vec(-self.into_vec())
    }
}

#[cfg(test)]
mod tests {
    use crate::Quatf;

    #[test]
    fn hamilton_product_units() {
        // i * j = k, j * k = i, k * i = j, i * i = -1.
        let i = Quatf::from_components(1.0, 0.0, 0.0, 0.0);
        let j = Quatf::from_components(0.0, 1.0, 0.0, 0.0);
        let k = Quatf::from_components(0.0, 0.0, 1.0, 0.0);

        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, Quatf::from_components(0.0, 0.0, 0.0, -1.0));
        assert_eq!(i * i, -Quatf::IDENTITY);
    }

    #[test]
    fn scalar_ops() {
        let q = Quatf::from_components(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q * 2.0, Quatf::from_components(2.0, 4.0, 6.0, 8.0));
        assert_eq!(q / 2.0, Quatf::from_components(0.5, 1.0, 1.5, 2.0));
        assert_eq!(q + q, q * 2.0);
        assert_eq!(q - q, Quatf::from_components(0.0, 0.0, 0.0, 0.0));
    }
}
