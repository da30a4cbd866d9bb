//! Size, qualifier, and composite-construction conversions.
//!
//! Every conversion that changes the number of components is explicit: a
//! shorter vector never silently widens and a longer one never silently
//! drops elements. [`From`] is implemented only for the composite tuple
//! forms, which preserve every input component in argument order.

use crate::{storage::Storage, traits::Scalar, Vector};

impl<T: Scalar, const N: usize, Q: Storage<T, N>> Vector<T, N, Q> {
    /// Returns a vector with the elements of `self` but a potentially
    /// different length.
    ///
    /// Shrinking keeps the leading elements; growing fills the new trailing
    /// elements with [`T::ZERO`][crate::Zero::ZERO]. Shrinking discards data,
    /// so a shrink-then-grow round trip only restores the original value if
    /// the dropped elements were zero already.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let v = vec2(1, 2).resize::<4>();
    /// assert_eq!(v, vec4(1, 2, 0, 0));
    /// let v = vec4(1, 2, 3, 4).resize::<2>();
    /// assert_eq!(v, vec2(1, 2));
    /// ```
    pub fn resize<const M: usize>(self) -> Vector<T, M, Q>
    where
        Q: Storage<T, M>,
    {
        let array = self.into_array();
        Vector::from_fn(|i| if i < N { array[i] } else { T::ZERO })
    }

    /// Moves the elements of `self` into storage under another qualifier.
    ///
    /// This only changes the in-memory layout; the element values are
    /// identical, and vectors compare equal across qualifiers.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let packed = vec3(1.0, 2.0, 3.0);
    /// let aligned: Vec3fA = packed.requalify();
    /// assert_eq!(packed, aligned);
    /// ```
    pub fn requalify<P>(self) -> Vector<T, N, P>
    where
        P: Storage<T, N>,
    {
        Vector::from_array(self.into_array())
    }
}

/// A 3-dimensional vector assembled from a 2-dimensional one and a trailing
/// element.
impl<T: Scalar, Q> From<(Vector<T, 2, Q>, T)> for Vector<T, 3, Q>
where
    Q: Storage<T, 2> + Storage<T, 3>,
{
    fn from((xy, z): (Vector<T, 2, Q>, T)) -> Self {
        let [x, y] = xy.into_array();
        Self::from_array([x, y, z])
    }
}

/// A 3-dimensional vector assembled from a leading element and a
/// 2-dimensional one.
impl<T: Scalar, Q> From<(T, Vector<T, 2, Q>)> for Vector<T, 3, Q>
where
    Q: Storage<T, 2> + Storage<T, 3>,
{
    fn from((x, yz): (T, Vector<T, 2, Q>)) -> Self {
        let [y, z] = yz.into_array();
        Self::from_array([x, y, z])
    }
}

/// A 4-dimensional vector assembled from a 3-dimensional one and a trailing
/// element.
impl<T: Scalar, Q> From<(Vector<T, 3, Q>, T)> for Vector<T, 4, Q>
where
    Q: Storage<T, 3> + Storage<T, 4>,
{
    fn from((xyz, w): (Vector<T, 3, Q>, T)) -> Self {
        let [x, y, z] = xyz.into_array();
        Self::from_array([x, y, z, w])
    }
}

/// A 4-dimensional vector assembled from a leading element and a
/// 3-dimensional one.
impl<T: Scalar, Q> From<(T, Vector<T, 3, Q>)> for Vector<T, 4, Q>
where
    Q: Storage<T, 3> + Storage<T, 4>,
{
    fn from((x, yzw): (T, Vector<T, 3, Q>)) -> Self {
        let [y, z, w] = yzw.into_array();
        Self::from_array([x, y, z, w])
    }
}

/// A 4-dimensional vector assembled from two 2-dimensional ones.
impl<T: Scalar, Q> From<(Vector<T, 2, Q>, Vector<T, 2, Q>)> for Vector<T, 4, Q>
where
    Q: Storage<T, 2> + Storage<T, 4>,
{
    fn from((xy, zw): (Vector<T, 2, Q>, Vector<T, 2, Q>)) -> Self {
        let [x, y] = xy.into_array();
        let [z, w] = zw.into_array();
        Self::from_array([x, y, z, w])
    }
}

/// A 4-dimensional vector assembled from a 2-dimensional one and two trailing
/// elements.
impl<T: Scalar, Q> From<(Vector<T, 2, Q>, T, T)> for Vector<T, 4, Q>
where
    Q: Storage<T, 2> + Storage<T, 4>,
{
    fn from((xy, z, w): (Vector<T, 2, Q>, T, T)) -> Self {
        let [x, y] = xy.into_array();
        Self::from_array([x, y, z, w])
    }
}

/// A 4-dimensional vector assembled from an element, a 2-dimensional vector,
/// and another element.
impl<T: Scalar, Q> From<(T, Vector<T, 2, Q>, T)> for Vector<T, 4, Q>
where
    Q: Storage<T, 2> + Storage<T, 4>,
{
    fn from((x, yz, w): (T, Vector<T, 2, Q>, T)) -> Self {
        let [y, z] = yz.into_array();
        Self::from_array([x, y, z, w])
    }
}

/// A 4-dimensional vector assembled from two leading elements and a
/// 2-dimensional vector.
impl<T: Scalar, Q> From<(T, T, Vector<T, 2, Q>)> for Vector<T, 4, Q>
where
    Q: Storage<T, 2> + Storage<T, 4>,
{
    fn from((x, y, zw): (T, T, Vector<T, 2, Q>)) -> Self {
        let [z, w] = zw.into_array();
        Self::from_array([x, y, z, w])
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4, AlignedHighp, Vec4, Vector};

    #[test]
    fn composite_construction() {
        assert_eq!(Vector::from((vec2(1, 2), 3)), vec3(1, 2, 3));
        assert_eq!(Vector::from((1, vec2(2, 3))), vec3(1, 2, 3));
        assert_eq!(Vector::from((vec3(1, 2, 3), 4)), vec4(1, 2, 3, 4));
        assert_eq!(Vector::from((1, vec3(2, 3, 4))), vec4(1, 2, 3, 4));
        assert_eq!(Vector::from((vec2(1, 2), vec2(3, 4))), vec4(1, 2, 3, 4));
        assert_eq!(Vector::from((vec2(1, 2), 3, 4)), vec4(1, 2, 3, 4));
        assert_eq!(Vector::from((1, vec2(2, 3), 4)), vec4(1, 2, 3, 4));
        assert_eq!(Vector::from((1, 2, vec2(3, 4))), vec4(1, 2, 3, 4));
    }

    #[test]
    fn composite_construction_keeps_qualifier() {
        let xy = vec2(1.0, 2.0).requalify::<AlignedHighp>();
        let v: Vector<f32, 4, AlignedHighp> = (xy, 3.0, 4.0).into();
        assert_eq!(v, vec4(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn resize_round_trip() {
        let v = vec4(7, 8, 0, 0);
        assert_eq!(v.resize::<2>().resize::<4>(), v);

        let v: Vec4<i32> = vec4(7, 8, 9, 0);
        assert_ne!(v.resize::<2>().resize::<4>(), v);
    }
}
