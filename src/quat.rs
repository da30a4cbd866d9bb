mod ops;
mod view;

use std::fmt;

use crate::{
    storage::{Highp, Storage},
    traits::{Number, Scalar, Sqrt, Trig},
    Vector,
};

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;
/// A quaternion with [`f64`] components.
pub type Quatd = Quat<f64>;

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent
/// rotations in 3D space: `q * v` rotates the 3-vector `v`, and `q2 * q1` is
/// the rotation that applies `q1` first and `q2` second.
///
/// Quaternions are represented like a 4-dimensional vector under the same
/// storage qualifier `Q`. The imaginary parts can be accessed as fields `i`,
/// `j` and `k`, the real part as `w`.
#[repr(transparent)]
pub struct Quat<T: Scalar, Q: Storage<T, 4> = Highp> {
    vec: Vector<T, 4, Q>,
}

impl<T: Scalar, Q: Storage<T, 4>> Clone for Quat<T, Q> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Scalar, Q: Storage<T, 4>> Copy for Quat<T, Q> {}

impl<T, Q> fmt::Debug for Quat<T, Q>
where
    T: Scalar + fmt::Debug,
    Q: Storage<T, 4>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.vec.into_array();
        f.debug_struct("Quat")
            .field("i", &x)
            .field("j", &y)
            .field("k", &z)
            .field("w", &w)
            .finish()
    }
}

impl<T: Scalar, Q: Storage<T, 4>> Quat<T, Q> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is
    /// multiplied with.
    pub const IDENTITY: Self = Self {
        vec: Vector::AXES[3],
    };

    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k`
    /// imaginary parts, while the `w` component corresponds to the real
    /// number part of the quaternion.
    pub fn from_vec(vec: Vector<T, 4, Q>) -> Self {
        Self { vec }
    }

    /// Returns the components of this quaternion as a 4-dimensional
    /// [`Vector`], imaginary parts first.
    pub fn into_vec(self) -> Vector<T, 4, Q> {
        self.vec
    }

    pub fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: Vector::from_array([x, y, z, w]),
        }
    }

    fn one_half() -> T
    where
        T: Number,
    {
        T::ONE / (T::ONE + T::ONE)
    }

    /// Creates a quaternion representing a rotation around the X axis.
    pub fn from_rotation_x(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(sin, T::ZERO, T::ZERO, cos)
    }

    /// Creates a quaternion representing a rotation around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(T::ZERO, sin, T::ZERO, cos)
    }

    /// Creates a quaternion representing a rotation around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(T::ZERO, T::ZERO, sin, cos)
    }

    /// Creates a quaternion representing a rotation around the X, Y, and Z
    /// axis, in sequence.
    #[doc(alias = "euler")]
    pub fn from_rotation_xyz(x: T, y: T, z: T) -> Self
    where
        T: Number + Trig,
    {
        Self::from_rotation_x(x) * Self::from_rotation_y(y) * Self::from_rotation_z(z)
    }

    /// Returns the squared length of this quaternion.
    ///
    /// If the squared length is not equal to one, multiplying a vector with
    /// this quaternion will scale the vector in addition to rotating it. When
    /// using quaternions to model rotations, it is advisable to ensure that
    /// quaternions are always of length one.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals
    /// one).
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        Self {
            vec: self.vec.normalize(),
        }
    }

    /// Computes the dot product of `self` and `other`.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.vec.dot(other.vec)
    }

    /// Returns the conjugate of this quaternion (imaginary parts negated).
    ///
    /// For unit quaternions the conjugate equals the [inverse][Self::invert]
    /// and is cheaper to compute.
    pub fn conjugate(self) -> Self
    where
        T: Number + std::ops::Neg<Output = T>,
    {
        let [x, y, z, w] = self.vec.into_array();
        Self::from_components(-x, -y, -z, w)
    }

    /// Returns the multiplicative inverse of this quaternion, its conjugate
    /// divided by its squared length.
    ///
    /// A zero quaternion has no inverse; no check is performed, and the
    /// result follows the element type's division-by-zero behavior.
    pub fn invert(self) -> Self
    where
        T: Number + std::ops::Neg<Output = T>,
    {
        self.conjugate() / self.length2()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use crate::{assert_approx_eq, vec3, Vec3f};

    use super::*;

    #[test]
    fn identity() {
        let q = Quatf::IDENTITY;
        assert_eq!(q.i, 0.0);
        assert_eq!(q.j, 0.0);
        assert_eq!(q.k, 0.0);
        assert_eq!(q.w, 1.0);
        assert_eq!(q.length(), 1.0);

        assert_eq!(q * q, q);
        assert_eq!(q * Vec3f::X, Vec3f::X);
        let v = vec3(1.5, -2.0, 0.25);
        assert_eq!(q * v, v);
    }

    #[test]
    fn rotation() {
        let quarter = Quatf::from_rotation_z(TAU / 4.0);
        assert_approx_eq!(quarter * Vec3f::X, Vec3f::Y, abs = 1e-6);
        assert_approx_eq!(quarter * Vec3f::Y, -Vec3f::X, abs = 1e-6);
        assert_approx_eq!(quarter * Vec3f::Z, Vec3f::Z, abs = 1e-6);

        let around_y = Quatf::from_rotation_y(TAU / 4.0);
        assert_approx_eq!(around_y * Vec3f::Z, Vec3f::X, abs = 1e-6);

        let around_x = Quatf::from_rotation_x(TAU / 2.0);
        assert_approx_eq!(around_x * Vec3f::Y, -Vec3f::Y, abs = 1e-6);
    }

    #[test]
    fn composition() {
        // Two quarter turns equal one half turn.
        let quarter = Quatf::from_rotation_z(TAU / 4.0);
        let half = Quatf::from_rotation_z(TAU / 2.0);
        assert_approx_eq!((quarter * quarter).into_vec(), half.into_vec(), abs = 1e-6);

        let euler = Quatf::from_rotation_xyz(0.1, 0.2, 0.3);
        let manual = Quatf::from_rotation_x(0.1)
            * Quatf::from_rotation_y(0.2)
            * Quatf::from_rotation_z(0.3);
        assert_eq!(euler.into_vec(), manual.into_vec());
    }

    #[test]
    fn inverse_undoes_rotation() {
        let q = Quatf::from_rotation_xyz(0.4, -1.2, 0.7);
        let v = vec3(1.0, 2.0, 3.0);
        assert_approx_eq!(q.invert() * (q * v), v, abs = 1e-5);
        assert_approx_eq!((q * q.invert()).into_vec(), Quatf::IDENTITY.into_vec(), abs = 1e-6);

        // For unit quaternions, conjugate and inverse coincide.
        assert_approx_eq!(q.invert().into_vec(), q.conjugate().into_vec(), abs = 1e-6);
    }

    #[test]
    fn normalize() {
        let q = Quatf::from_components(0.0, 3.0, 0.0, 4.0);
        assert_eq!(q.length2(), 25.0);
        assert_eq!(q.length(), 5.0);
        assert_eq!(q.normalize().length(), 1.0);
        assert_eq!(q.dot(q), 25.0);
    }
}
