use std::{array, fmt, hash::{Hash, Hasher}, ops::Neg};

use crate::{
    storage::{AlignedHighp, Highp, Repr, Storage},
    traits::{MinMax, Number, Scalar, Sqrt, Trig},
    Matrix,
};

mod convert;
mod ops;
mod view;

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 1-dimensional vector with [`f32`] elements.
pub type Vec1f = Vec1<f32>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// A 2-dimensional vector with [`i32`] elements.
pub type IVec2 = Vec2<i32>;
/// A 3-dimensional vector with [`i32`] elements.
pub type IVec3 = Vec3<i32>;
/// A 4-dimensional vector with [`i32`] elements.
pub type IVec4 = Vec4<i32>;

/// A 2-dimensional vector with [`u32`] elements.
pub type UVec2 = Vec2<u32>;
/// A 3-dimensional vector with [`u32`] elements.
pub type UVec3 = Vec3<u32>;
/// A 4-dimensional vector with [`u32`] elements.
pub type UVec4 = Vec4<u32>;

/// A 2-dimensional vector with [`bool`] elements.
pub type BVec2 = Vec2<bool>;
/// A 3-dimensional vector with [`bool`] elements.
pub type BVec3 = Vec3<bool>;
/// A 4-dimensional vector with [`bool`] elements.
pub type BVec4 = Vec4<bool>;

/// A register-aligned 2-dimensional vector with [`f32`] elements.
pub type Vec2fA = Vector<f32, 2, AlignedHighp>;
/// A register-aligned 3-dimensional vector with [`f32`] elements.
///
/// Occupies a full 16-byte register: 4 bytes larger than [`Vec3f`], and
/// 16-byte aligned.
pub type Vec3fA = Vector<f32, 3, AlignedHighp>;
/// A register-aligned 4-dimensional vector with [`f32`] elements.
pub type Vec4fA = Vector<f32, 4, AlignedHighp>;
/// A register-aligned 2-dimensional vector with [`f64`] elements.
pub type Vec2dA = Vector<f64, 2, AlignedHighp>;
/// A register-aligned 3-dimensional vector with [`f64`] elements.
pub type Vec3dA = Vector<f64, 3, AlignedHighp>;
/// A register-aligned 4-dimensional vector with [`f64`] elements.
pub type Vec4dA = Vector<f64, 4, AlignedHighp>;

/// An `N`-element column vector storing elements of type `T` under the
/// storage qualifier `Q`.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec1`], [`vec2`], [`vec3`] and [`vec4`] functions
///   directly create vectors from provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each
///   element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the
///   index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation,
///   and from (vector, scalar) tuples covering each way of assembling a
///   vector out of smaller pieces.
/// - The [`Default`] implementation of [`Vector`] initializes each element
///   with its default value.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - For vectors with up to 4 dimensions, `Vector::X`, `Vector::Y`,
///   `Vector::Z` and `Vector::W` can be used to obtain unit vectors pointing
///   in the given direction; [`Vector::AXES`] holds all of them.
///
/// # Element Access
///
/// - For vectors with up to 4 dimensions, elements can be accessed as fields
///   `x`, `y`, `z`, or `w`.
///   - Aliases `r`, `g`, `b`, and `a` are also provided, as well as texture
///     coordinate aliases `s`, `t`, `p`, `q`, and aliases `w` and `h` for
///     2-dimensional vectors.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays,
///   and panic like them when the index is out of bounds.
/// - The [`AsRef`] and [`AsMut`] impls can be used to access the underlying
///   elements as a slice or array.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`]
///   allow the same operations without requiring type annotations.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow
///   safe transmutation when the element type `T` also allows this.
///
/// # Storage
///
/// The qualifier `Q` selects the in-memory layout and nothing else; see the
/// [`storage`][crate::storage] module. All qualifiers expose the same API and
/// produce identical results. Mixing qualifiers in one expression requires an
/// explicit [`Vector::requalify`].
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[repr(transparent)]
pub struct Vector<T: Scalar, const N: usize, Q: Storage<T, N> = Highp>(Q::Inner);

impl<T: Scalar, const N: usize, Q: Storage<T, N>> Clone for Vector<T, N, Q> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Scalar, const N: usize, Q: Storage<T, N>> Copy for Vector<T, N, Q> {}

impl<T, const N: usize, Q> Hash for Vector<T, N, Q>
where
    T: Scalar + Hash,
    Q: Storage<T, N>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_array().hash(state);
    }
}

unsafe impl<T, const N: usize, Q> bytemuck::Zeroable for Vector<T, N, Q>
where
    T: Scalar + bytemuck::Zeroable,
    Q: Storage<T, N>,
    Q::Inner: bytemuck::Zeroable,
{
}

unsafe impl<T, const N: usize, Q> bytemuck::Pod for Vector<T, N, Q>
where
    T: Scalar + bytemuck::Pod,
    Q: Storage<T, N> + 'static,
    Q::Inner: bytemuck::Pod,
{
}

impl<T: Scalar, const N: usize, Q: Storage<T, N>> Vector<T, N, Q> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][crate::Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self(<Q::Inner as Repr<T, N>>::ZERO);

    /// The unit vectors along each axis: `AXES[i]` holds 1 in element `i` and
    /// 0 everywhere else.
    pub const AXES: [Self; N] = {
        let mut axes = [Self::ZERO; N];
        let mut i = 0;
        while i < N {
            axes[i] = Self(<Q::Inner as Repr<T, N>>::AXES[i]);
            i += 1;
        }
        axes
    };
}

impl<T: Scalar, Q: Storage<T, 1>> Vector<T, 1, Q> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self::AXES[0];
}

impl<T: Scalar, Q: Storage<T, 2>> Vector<T, 2, Q> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self::AXES[0];
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self::AXES[1];
}

impl<T: Scalar, Q: Storage<T, 3>> Vector<T, 3, Q> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self::AXES[0];
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self::AXES[1];
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self::AXES[2];
}

impl<T: Scalar, Q: Storage<T, 4>> Vector<T, 4, Q> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self::AXES[0];
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self::AXES[1];
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self::AXES[2];
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self::AXES[3];
}

impl<T: Scalar, const N: usize, Q: Storage<T, N>> Vector<T, N, Q> {
    /// Creates a vector from an array of its elements.
    #[inline]
    pub fn from_array(array: [T; N]) -> Self {
        Self(Q::Inner::from_array(array))
    }

    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self {
        Self::from_array([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a
    /// closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self::from_array(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<U, F>(self, f: F) -> Vector<U, N, Q>
    where
        U: Scalar,
        Q: Storage<U, N>,
        F: FnMut(T) -> U,
    {
        Vector::from_array(self.into_array().map(f))
    }

    /// Returns a reference to the underlying elements as an array of length
    /// `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).as_array(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        self.0.as_array()
    }

    /// Returns a mutable reference to the underlying elements as an array of
    /// length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.as_mut_array()[1] = 777;
    /// assert_eq!(v, [1, 777, 3]);
    /// ```
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        self.0.as_mut_array()
    }

    /// Returns a reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_array()
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.as_mut_slice()[1] = 777;
    /// assert_eq!(v, [1, 777, 3]);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_mut_array()
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0.into_array()
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let z = Vec3f::Z;
    /// assert_eq!(z.length(), 1.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Returns the distance between the points `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// assert_eq!(vec2(1.0, 1.0).distance(vec2(1.0, 5.0)), 4.0);
    /// ```
    pub fn distance(self, other: Self) -> T
    where
        T: Number + Sqrt,
    {
        (other - self).length()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative
    /// angle of the two vectors:
    /// - If the dot product is greater than zero, the angle between the
    ///   vectors is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// Also see [`Vector::abs_angle_to`] for computing the exact angle
    /// between them.
    ///
    /// The elements are summed in ascending index order, without
    /// reassociation, so results are reproducible across targets.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Computes the smallest positive angle between `self` and `other`, in
    /// radians.
    ///
    /// Both `self` and `other` must have non-zero length for the result to be
    /// meaningful.
    ///
    /// Also see [`Vector::signed_angle_to`] for getting a signed result
    /// depending on the relative orientation of the vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// use std::f32::consts::TAU;
    ///
    /// let a = Vec3f::Y;
    /// let b = Vec3f::X;
    /// assert_approx_eq!(a.abs_angle_to(b), TAU / 4.0);  // quarter turn
    /// assert_approx_eq!(b.abs_angle_to(a), TAU / 4.0);  // quarter turn
    /// assert_approx_eq!(a.abs_angle_to(-a), TAU / 2.0); // half a turn
    /// ```
    pub fn abs_angle_to(self, other: Self) -> T
    where
        T: Number + Trig + Sqrt,
    {
        let dot = self.dot(other);
        (dot / (self.length() * other.length())).acos()
    }

    /// Reflects `self` off a surface with the given `normal`.
    ///
    /// `normal` must have unit length for the result to be meaningful; the
    /// reflected vector then has the same length as `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let down = vec2(1.0, -1.0);
    /// assert_eq!(down.reflect(Vec2f::Y), vec2(1.0, 1.0));
    /// ```
    pub fn reflect(self, normal: Self) -> Self
    where
        T: Number,
    {
        let two = T::ONE + T::ONE;
        self - normal * normal.dot(self) * two
    }

    /// Refracts `self` through a surface with the given `normal` and ratio of
    /// refraction indices `eta`.
    ///
    /// Both `self` and `normal` must have unit length. In the case of total
    /// internal reflection the zero vector is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// // At `eta` 1 the medium does not change and the vector passes through.
    /// let v = vec2(0.6, -0.8);
    /// assert_approx_eq!(v.refract(Vec2f::Y, 1.0), v);
    /// ```
    pub fn refract(self, normal: Self, eta: T) -> Self
    where
        T: Number + Sqrt + PartialOrd,
    {
        let dot = normal.dot(self);
        let k = T::ONE - eta * eta * (T::ONE - dot * dot);
        if k < T::ZERO {
            Self::ZERO
        } else {
            self * eta - normal * (eta * dot + k.sqrt())
        }
    }

    /// Returns `self` if `reference` points against `incident`, and `-self`
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let n = Vec2f::Y;
    /// assert_eq!(n.faceforward(-Vec2f::Y, n), n);
    /// assert_eq!(n.faceforward(Vec2f::Y, n), -n);
    /// ```
    pub fn faceforward(self, incident: Self, reference: Self) -> Self
    where
        T: Number + Neg<Output = T> + PartialOrd,
    {
        if reference.dot(incident) < T::ZERO {
            self
        } else {
            -self
        }
    }

    /// Computes the outer product of `self` and `other`.
    ///
    /// The result is a matrix with one row per element of `self` and one
    /// column per element of `other`, where the cell at `(row, col)` holds
    /// `self[row] * other[col]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let m = vec2(1, 2).outer_product(vec3(3, 4, 5));
    /// assert_eq!(m, Matrix::from_rows([
    ///     [3, 4, 5],
    ///     [6, 8, 10],
    /// ]));
    /// ```
    pub fn outer_product<const C: usize>(self, other: Vector<T, C, Q>) -> Matrix<T, N, C, Q>
    where
        T: Number,
        Q: Storage<T, C>,
    {
        Matrix::from_fn(|row, col| self[row] * other[col])
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.min(b), b.min(a));
    /// assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.max(b), b.max(a));
    /// assert_eq!(a.max(b), vec3(3.0, 2.0, 0.0));
    /// ```
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and
    /// `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let v = vec3(-5.0, 0.5, 5.0);
    /// let clamped = v.clamp(Vector::splat(0.0), Vector::splat(1.0));
    /// assert_eq!(clamped, vec3(0.0, 0.5, 1.0));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }
}

impl<T: Scalar, Q: Storage<T, 1>> Vector<T, 1, Q> {
    /// Removes the last element of this vector, yielding a vector with zero
    /// elements.
    pub fn truncate(self) -> Vector<T, 0, Q>
    where
        Q: Storage<T, 0>,
    {
        Vector::from_array([])
    }

    /// Appends another value to the vector, yielding a vector with 2
    /// dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let v = vec1(-1.0).extend(5.0);
    /// assert_eq!(v, vec2(-1.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 2, Q>
    where
        Q: Storage<T, 2>,
    {
        let [x] = self.into_array();
        Vector::from_array([x, value])
    }
}

impl<T: Scalar, Q: Storage<T, 2>> Vector<T, 2, Q> {
    /// Removes the last element of this vector, yielding a vector with a
    /// single element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let v = vec2(-1.0, 2.0).truncate();
    /// assert_eq!(v, vec1(-1.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 1, Q>
    where
        Q: Storage<T, 1>,
    {
        let [x, ..] = self.into_array();
        Vector::from_array([x])
    }

    /// Appends another value to the vector, yielding a vector with 3
    /// dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3, Q>
    where
        Q: Storage<T, 3>,
    {
        let [x, y] = self.into_array();
        Vector::from_array([x, y, value])
    }

    /// Rotates `self` clockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis
    /// points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// use std::f32::consts::TAU;
    ///
    /// assert_approx_eq!(Vec2f::Y.rotate_clockwise(TAU / 4.0), Vec2f::X);
    /// assert_approx_eq!(Vec2f::Y.rotate_clockwise(TAU / 2.0), -Vec2f::Y);
    /// ```
    pub fn rotate_clockwise(self, radians: T) -> Self
    where
        T: Number + Neg<Output = T> + Trig,
    {
        Matrix::<T, 2, 2, Q>::rotation_clockwise(radians) * self
    }

    /// Rotates `self` counterclockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis
    /// points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// use std::f32::consts::TAU;
    ///
    /// assert_approx_eq!(Vec2f::Y.rotate_counterclockwise(TAU / 4.0), -Vec2f::X);
    /// assert_approx_eq!(Vec2f::X.rotate_counterclockwise(TAU / 4.0), Vec2f::Y);
    /// ```
    pub fn rotate_counterclockwise(self, radians: T) -> Self
    where
        T: Number + Neg<Output = T> + Trig,
    {
        Matrix::<T, 2, 2, Q>::rotation_counterclockwise(radians) * self
    }

    /// Computes the (signed) clockwise rotation in radians needed to align
    /// `self` with `other`.
    ///
    /// This operation assumes that the Y axis points up, and the X axis
    /// points to the right. If the Y axis points *down*, swap the arguments
    /// to make the method work correctly.
    ///
    /// Also see [`Vector::abs_angle_to`] for a more general way of getting
    /// the unsigned angle between vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// use std::f32::consts::TAU;
    ///
    /// // The Y axis can be aligned with the X axis by rotating it clockwise
    /// // by a quarter turn.
    /// assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), TAU / 4.0);
    ///
    /// // The angle of a vector to itself is, of course, 0.
    /// assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::Y), 0.0);
    /// ```
    pub fn signed_angle_to(self, other: Self) -> T
    where
        T: Number + Neg<Output = T> + Trig,
        Q: Storage<T, 3>,
    {
        -self.perp_dot(other).atan2(self.dot(other))
    }

    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// This is equivalent to the Z coordinate of the cross product of `self`
    /// and `other` (extended with Z=0 in the third dimension). Since the Z
    /// coordinates of both inputs are 0, the Z coordinate is the only
    /// non-zero coordinate of the cross product.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let x = Vec2f::X;
    /// let y = Vec2f::Y;
    /// assert_eq!(x.perp_dot(y), 1.0);
    /// assert_eq!(y.perp_dot(x), -1.0);
    /// ```
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> T
    where
        T: Number,
        Q: Storage<T, 3>,
    {
        self.extend(T::ZERO).cross(other.extend(T::ZERO)).z
    }
}

impl<T: Scalar, Q: Storage<T, 3>> Vector<T, 3, Q> {
    /// Removes the last element of this vector, yielding a vector with 2
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2, Q>
    where
        Q: Storage<T, 2>,
    {
        let [x, y, ..] = self.into_array();
        Vector::from_array([x, y])
    }

    /// Appends another value to the vector, yielding a vector with 4
    /// dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4, Q>
    where
        Q: Storage<T, 4>,
    {
        let [x, y, z] = self.into_array();
        Vector::from_array([x, y, z, value])
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and
    /// `other`. Its direction depends on the order of the arguments: swapping
    /// them will invert the direction of the resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        Self::from_array([
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        ])
    }
}

impl<T: Scalar, Q: Storage<T, 4>> Vector<T, 4, Q> {
    /// Removes the last element of this vector, yielding a vector with 3
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let v = vec4(-1.0, 2.0, 3.5, 9.0).truncate();
    /// assert_eq!(v, vec3(-1.0, 2.0, 3.5));
    /// ```
    pub fn truncate(self) -> Vector<T, 3, Q>
    where
        Q: Storage<T, 3>,
    {
        let [x, y, z, ..] = self.into_array();
        Vector::from_array([x, y, z])
    }
}

impl<T, const N: usize, Q> Default for Vector<T, N, Q>
where
    T: Scalar + Default,
    Q: Storage<T, N>,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T: Scalar, const N: usize, Q: Storage<T, N>> From<[T; N]> for Vector<T, N, Q> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self::from_array(value)
    }
}

impl<T: Scalar, const N: usize, Q: Storage<T, N>> From<Vector<T, N, Q>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N, Q>) -> Self {
        value.into_array()
    }
}

impl<T, const N: usize, Q> fmt::Debug for Vector<T, N, Q>
where
    T: Scalar + fmt::Debug,
    Q: Storage<T, N>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in self.as_array() {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize, Q> fmt::Display for Vector<T, N, Q>
where
    T: Scalar + fmt::Display,
    Q: Storage<T, N>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in self.as_array() {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T: Scalar, const N: usize, Q: Storage<T, N>> AsRef<[T]> for Vector<T, N, Q> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Scalar, const N: usize, Q: Storage<T, N>> AsRef<[T; N]> for Vector<T, N, Q> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        self.as_array()
    }
}

impl<T: Scalar, const N: usize, Q: Storage<T, N>> AsMut<[T]> for Vector<T, N, Q> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Scalar, const N: usize, Q: Storage<T, N>> AsMut<[T; N]> for Vector<T, N, Q> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        self.as_mut_array()
    }
}

/// Constructs a [`Vec1`] from its single element.
#[inline]
pub const fn vec1<T: Scalar>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T: Scalar>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T: Scalar>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T: Scalar>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::X[2], 0.0);
        assert_eq!(Vec3f::X.y, 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Y.z, 0.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec2(0, 1);
        assert_eq!(v.x, 0);
        assert_eq!(v.y, 1);
        assert_eq!(v.r, 0);
        assert_eq!(v.g, 1);
        assert_eq!(v.s, 0);
        assert_eq!(v.t, 1);
        assert_eq!(v.w, 0);
        assert_eq!(v.h, 1);

        v.r = 777;
        assert_eq!(v.x, 777);
        assert_eq!(v.g, 1);
        assert_eq!(v.w, 777);
        assert_eq!(v[0], 777);
        v.h = 9;
        assert_eq!(v.y, 9);
        assert_eq!(v.t, 9);
        assert_eq!(v, [777, 9]);
    }

    #[test]
    fn aligned_access() {
        let mut v: Vec3fA = vec3(1.0, 2.0, 3.0).requalify();
        assert_eq!(v.x, 1.0);
        assert_eq!(v.z, 3.0);
        v.z = -3.0;
        assert_eq!(v[2], -3.0);
        assert_eq!(v.as_array(), &[1.0, 2.0, -3.0]);
        assert_eq!(v.into_array(), [1.0, 2.0, -3.0]);
    }

    #[test]
    fn constants() {
        assert_eq!(Vec3f::ZERO, [0.0; 3]);
        assert_eq!(Vec3f::AXES, [Vec3f::X, Vec3f::Y, Vec3f::Z]);
        assert_eq!(Vec4fA::W.as_array(), &[0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn rotate() {
        assert_approx_eq!(Vec2f::Y.rotate_clockwise(TAU / 4.0), Vec2f::X);
        assert_approx_eq!(Vec2f::Y.rotate_clockwise(TAU / 2.0), -Vec2f::Y);
        assert_approx_eq!(Vec2f::X.rotate_clockwise(TAU / 2.0), -Vec2f::X);
        assert_approx_eq!(Vec2f::X.rotate_counterclockwise(TAU / 4.0), Vec2f::Y);
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);

        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::Y.dot(Vec2f::Y), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
        assert_eq!(Vec2f::Y.dot(Vec2f::X), 0.0);

        // Unsigned elements dot too.
        assert_eq!(vec2(3u32, 4).dot(vec2(1, 2)), 11);
    }

    #[test]
    fn abs_angle() {
        assert_approx_eq!(Vec3f::Y.abs_angle_to(Vec3f::X), TAU / 4.0);
        assert_approx_eq!(Vec3f::X.abs_angle_to(Vec3f::Y), TAU / 4.0);

        assert_approx_eq!(Vec3f::Y.abs_angle_to(Vec3f::Y), 0.0);
        assert_approx_eq!(Vec3f::Y.abs_angle_to(-Vec3f::Y), TAU / 2.0);
        assert_approx_eq!(Vec3f::Y.abs_angle_to(-Vec3f::X), TAU / 4.0);

        assert_approx_eq!(vec2(0.0, 2.0).abs_angle_to(vec2(-3.0, 0.0)), TAU / 4.0);
        assert_approx_eq!(vec2(1.0, 1.0).abs_angle_to(vec2(1.0, -1.0)), TAU / 4.0);
    }

    #[test]
    fn signed_angle() {
        assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), TAU / 4.0);
        assert_approx_eq!(Vec2f::X.signed_angle_to(Vec2f::Y), -TAU / 4.0);
        assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::Y), 0.0);
        assert_approx_eq!(Vec2f::Y.signed_angle_to(-Vec2f::Y), -TAU / 2.0);
    }

    #[test]
    fn geometry() {
        assert_eq!(vec2(1.0, 1.0) + vec2(0.0, 3.0), vec2(1.0, 4.0));
        assert_eq!(vec2(1.0, 1.0).distance(vec2(4.0, 5.0)), 5.0);

        let i = vec2(1.0, -1.0);
        assert_eq!(i.reflect(Vec2f::Y), vec2(1.0, 1.0));

        // Reflection through an aligned vector takes the same path.
        let ia: Vec2fA = i.requalify();
        assert_eq!(ia.reflect(Vec2f::Y.requalify()), vec2(1.0, 1.0));

        // Total internal reflection yields the zero vector.
        let shallow = vec2(0.999, -0.04).normalize();
        assert_eq!(shallow.refract(Vec2f::Y, 1.5), Vec2f::ZERO);
    }

    #[test]
    fn addition_is_associative_for_integers() {
        let a = vec4(1, -7, 13, 100);
        let b = vec4(-3, 11, 0, 7);
        let c = vec4(9, 2, -4, 1);
        assert_eq!((a + b) + c, a + (b + c));

        // Exactly representable floats associate exactly, too.
        let a = vec2(0.5f32, -8.0);
        let b = vec2(0.25f32, 2.0);
        let c = vec2(4.0f32, 0.125);
        assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn lossy_truncate() {
        // Dropping a non-zero element is not recoverable by zero-extension...
        let v = vec3(1, 2, 3);
        assert_ne!(v.truncate().extend(0), v);
        // ...but is when the dropped element was already zero.
        let v = vec3(1, 2, 0);
        assert_eq!(v.truncate().extend(0), v);
    }

    #[test]
    fn outer() {
        let m = vec2(1.0, 2.0).outer_product(vec3(3.0, 4.0, 5.0));
        assert_eq!(m[0], vec2(3.0, 6.0));
        assert_eq!(m[1], vec2(4.0, 8.0));
        assert_eq!(m[2], vec2(5.0, 10.0));
    }
}
