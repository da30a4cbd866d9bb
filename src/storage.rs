//! Storage qualifiers and layout selection.
//!
//! Every [`Vector`][crate::Vector] and [`Matrix`][crate::Matrix] carries a
//! *qualifier* type parameter that picks its in-memory layout. The packed
//! qualifiers store components back to back with the element type's natural
//! alignment. The aligned qualifiers round the value up to the next
//! power-of-two byte width so that it fills a hardware vector register; the
//! layout is the same on every architecture, whether or not matching vector
//! instructions exist, so object sizes never change between targets.
//!
//! Each family comes in three nominal precision levels ([`Highp`],
//! [`Mediump`], [`Lowp`] and their aligned counterparts). The precision level
//! is carried for interface compatibility with shading-language declarations
//! only; it never changes how anything is computed. Packed-versus-aligned is
//! the only axis with an observable effect, and that effect is limited to
//! size and alignment.
//!
//! Qualifiers select layouts at the type level through the [`Storage`] trait;
//! nothing above this module ever names a concrete layout.

use crate::traits::Scalar;

/// The in-memory representation backing an `N`-component value.
///
/// # Safety
///
/// Implementations must store the `N` logical components contiguously at
/// offset 0, in declaration order, with the exact layout of `[T; N]`. Only
/// *trailing* padding may follow them. Callers (component views, byte casts)
/// rely on this prefix layout.
pub unsafe trait Repr<T: Scalar, const N: usize>: Copy {
    /// The representation holding `N` zeroes.
    const ZERO: Self;

    /// `AXES[i]` holds 1 in component `i` and 0 everywhere else.
    const AXES: [Self; N];

    fn from_array(array: [T; N]) -> Self;
    fn into_array(self) -> [T; N];
    fn as_array(&self) -> &[T; N];
    fn as_mut_array(&mut self) -> &mut [T; N];
}

unsafe impl<T: Scalar, const N: usize> Repr<T, N> for [T; N] {
    const ZERO: Self = [T::ZERO; N];

    const AXES: [Self; N] = {
        let mut axes = [Self::ZERO; N];
        let mut i = 0;
        while i < N {
            axes[i][i] = T::ONE;
            i += 1;
        }
        axes
    };

    #[inline]
    fn from_array(array: [T; N]) -> Self {
        array
    }

    #[inline]
    fn into_array(self) -> [T; N] {
        self
    }

    #[inline]
    fn as_array(&self) -> &[T; N] {
        self
    }

    #[inline]
    fn as_mut_array(&mut self) -> &mut [T; N] {
        self
    }
}

/// Three logical components stored in a four-component footprint.
///
/// A 3-component register load covers four lanes, so the aligned qualifiers
/// store 3-vectors with one trailing lane of padding. The padding lane is
/// kept zeroed; it is never observable through the component accessors.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Pad3<T>([T; 4]);

unsafe impl<T: Scalar> Repr<T, 3> for Pad3<T> {
    const ZERO: Self = Self([T::ZERO; 4]);

    const AXES: [Self; 3] = {
        let mut axes = [Self::ZERO; 3];
        let mut i = 0;
        while i < 3 {
            axes[i].0[i] = T::ONE;
            i += 1;
        }
        axes
    };

    #[inline]
    fn from_array([x, y, z]: [T; 3]) -> Self {
        Self([x, y, z, T::ZERO])
    }

    #[inline]
    fn into_array(self) -> [T; 3] {
        let [x, y, z, _] = self.0;
        [x, y, z]
    }

    #[inline]
    fn as_array(&self) -> &[T; 3] {
        // Safety: the first three lanes are laid out exactly like `[T; 3]`.
        unsafe { &*(self.0.as_ptr() as *const [T; 3]) }
    }

    #[inline]
    fn as_mut_array(&mut self) -> &mut [T; 3] {
        // Safety: the first three lanes are laid out exactly like `[T; 3]`.
        unsafe { &mut *(self.0.as_mut_ptr() as *mut [T; 3]) }
    }
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Pad3<T> {}

macro_rules! align_wrapper {
    ($($name:ident($align:literal)),+ $(,)?) => {
        $(
            #[doc = concat!("A storage wrapper raising its contents to ", stringify!($align), "-byte alignment.")]
            #[derive(Clone, Copy)]
            #[repr(C, align($align))]
            pub struct $name<A>(A);

            unsafe impl<T: Scalar, const N: usize, A: Repr<T, N>> Repr<T, N> for $name<A> {
                const ZERO: Self = Self(A::ZERO);

                const AXES: [Self; N] = {
                    let mut axes = [Self::ZERO; N];
                    let mut i = 0;
                    while i < N {
                        axes[i] = Self(A::AXES[i]);
                        i += 1;
                    }
                    axes
                };

                #[inline]
                fn from_array(array: [T; N]) -> Self {
                    Self(A::from_array(array))
                }

                #[inline]
                fn into_array(self) -> [T; N] {
                    self.0.into_array()
                }

                #[inline]
                fn as_array(&self) -> &[T; N] {
                    self.0.as_array()
                }

                #[inline]
                fn as_mut_array(&mut self) -> &mut [T; N] {
                    self.0.as_mut_array()
                }
            }

            unsafe impl<A: bytemuck::Zeroable> bytemuck::Zeroable for $name<A> {}
        )+
    };
}

align_wrapper! {
    Align1(1),
    Align2(2),
    Align4(4),
    Align8(8),
    Align16(16),
    Align32(32),
}

/// Selects the backing store for `N` components of type `T`.
///
/// Implemented by the qualifier marker types. The packed qualifiers map every
/// `(T, N)` to a plain `[T; N]`; the aligned qualifiers map the supported
/// scalar types at lengths 1 through 4 to register-width layouts.
pub trait Storage<T: Scalar, const N: usize> {
    /// The concrete in-memory representation.
    type Inner: Repr<T, N>;
}

/// Packed storage, high nominal precision. The default qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Highp;

/// Packed storage, medium nominal precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mediump;

/// Packed storage, low nominal precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Lowp;

/// Register-aligned storage, high nominal precision.
///
/// Values under this qualifier impose their register alignment on whatever
/// holds them; code embedding them in manually allocated memory must honor
/// [`mem::align_of`][std::mem::align_of] for the concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AlignedHighp;

/// Register-aligned storage, medium nominal precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AlignedMediump;

/// Register-aligned storage, low nominal precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AlignedLowp;

macro_rules! packed_storage {
    ($($q:ident),+) => {
        $(
            impl<T: Scalar, const N: usize> Storage<T, N> for $q {
                type Inner = [T; N];
            }
        )+
    };
}
packed_storage!(Highp, Mediump, Lowp);

// One row per scalar type: the wrappers used at lengths 1, 2, 3 and 4. The
// alignment is the next power of two covering the footprint, with length 3
// rounded up to the length-4 footprint.
macro_rules! aligned_storage {
    ($($t:ty => $a1:ident, $a2:ident, $a3:ident, $a4:ident;)+) => {
        $(
            aligned_storage!(@qualifier AlignedHighp: $t => $a1, $a2, $a3, $a4);
            aligned_storage!(@qualifier AlignedMediump: $t => $a1, $a2, $a3, $a4);
            aligned_storage!(@qualifier AlignedLowp: $t => $a1, $a2, $a3, $a4);
        )+
    };
    (@qualifier $q:ident: $t:ty => $a1:ident, $a2:ident, $a3:ident, $a4:ident) => {
        impl Storage<$t, 1> for $q {
            type Inner = $a1<[$t; 1]>;
        }
        impl Storage<$t, 2> for $q {
            type Inner = $a2<[$t; 2]>;
        }
        impl Storage<$t, 3> for $q {
            type Inner = $a3<Pad3<$t>>;
        }
        impl Storage<$t, 4> for $q {
            type Inner = $a4<[$t; 4]>;
        }
    };
}

aligned_storage! {
    bool => Align1, Align2, Align4, Align4;
    u8   => Align1, Align2, Align4, Align4;
    i8   => Align1, Align2, Align4, Align4;
    u16  => Align2, Align4, Align8, Align8;
    i16  => Align2, Align4, Align8, Align8;
    u32  => Align4, Align8, Align16, Align16;
    i32  => Align4, Align8, Align16, Align16;
    f32  => Align4, Align8, Align16, Align16;
    u64  => Align8, Align16, Align32, Align32;
    i64  => Align8, Align16, Align32, Align32;
    f64  => Align8, Align16, Align32, Align32;
}

// `Pod` is restricted to the exact aligned layouts in use: for these, size
// equals alignment times nothing-left-over, so there are no padding bytes.
// (`bool` is excluded; it is not `Pod`.)
macro_rules! pod_storage {
    ($($t:ty => $a1:ident, $a2:ident, $a3:ident, $a4:ident;)+) => {
        $(
            unsafe impl bytemuck::Pod for $a1<[$t; 1]> {}
            unsafe impl bytemuck::Pod for $a2<[$t; 2]> {}
            unsafe impl bytemuck::Pod for $a3<Pad3<$t>> {}
            unsafe impl bytemuck::Pod for $a4<[$t; 4]> {}
        )+
    };
}

pod_storage! {
    u8  => Align1, Align2, Align4, Align4;
    i8  => Align1, Align2, Align4, Align4;
    u16 => Align2, Align4, Align8, Align8;
    i16 => Align2, Align4, Align8, Align8;
    u32 => Align4, Align8, Align16, Align16;
    i32 => Align4, Align8, Align16, Align16;
    f32 => Align4, Align8, Align16, Align16;
    u64 => Align8, Align16, Align32, Align32;
    i64 => Align8, Align16, Align32, Align32;
    f64 => Align8, Align16, Align32, Align32;
}

#[cfg(test)]
mod tests {
    use std::mem::{align_of, size_of};

    use super::*;
    use crate::{vec3, Vector};

    fn layout<T: Scalar, const N: usize, Q: Storage<T, N>>() -> (usize, usize) {
        (size_of::<Q::Inner>(), align_of::<Q::Inner>())
    }

    #[test]
    fn packed_layouts() {
        assert_eq!(layout::<f32, 3, Highp>(), (12, 4));
        assert_eq!(layout::<f32, 4, Mediump>(), (16, 4));
        assert_eq!(layout::<u8, 2, Lowp>(), (2, 1));
        assert_eq!(layout::<f64, 3, Highp>(), (24, 8));
    }

    #[test]
    fn aligned_layouts() {
        // Length 3 rounds up to the length-4 footprint; everything else is
        // exactly the next power of two of its packed size.
        assert_eq!(layout::<f32, 1, AlignedHighp>(), (4, 4));
        assert_eq!(layout::<f32, 2, AlignedHighp>(), (8, 8));
        assert_eq!(layout::<f32, 3, AlignedHighp>(), (16, 16));
        assert_eq!(layout::<f32, 4, AlignedHighp>(), (16, 16));
        assert_eq!(layout::<f64, 2, AlignedMediump>(), (16, 16));
        assert_eq!(layout::<f64, 3, AlignedLowp>(), (32, 32));
        assert_eq!(layout::<f64, 4, AlignedHighp>(), (32, 32));
        assert_eq!(layout::<u8, 3, AlignedHighp>(), (4, 4));
        assert_eq!(layout::<i16, 4, AlignedHighp>(), (8, 8));
        assert_eq!(layout::<u32, 2, AlignedHighp>(), (8, 8));
    }

    #[test]
    fn precision_levels_share_layouts() {
        assert_eq!(
            layout::<f32, 4, Highp>(),
            layout::<f32, 4, Lowp>(),
        );
        assert_eq!(
            layout::<f32, 4, AlignedHighp>(),
            layout::<f32, 4, AlignedMediump>(),
        );
    }

    #[test]
    fn padded_lane_is_zero() {
        let v: Vector<f32, 3, AlignedHighp> = vec3(1.0, 2.0, 3.0).requalify();
        let bytes = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[12..], &[0, 0, 0, 0]);
    }

    #[test]
    fn array_round_trip_through_padding() {
        let repr = <AlignedHighp as Storage<f32, 3>>::Inner::from_array([4.0, 5.0, 6.0]);
        assert_eq!(repr.as_array(), &[4.0, 5.0, 6.0]);
        assert_eq!(repr.into_array(), [4.0, 5.0, 6.0]);
    }

    #[test]
    fn axes() {
        let axes = <Highp as Storage<i32, 3>>::Inner::AXES;
        assert_eq!(axes, [[1, 0, 0], [0, 1, 0], [0, 0, 1]]);

        let padded = <AlignedHighp as Storage<i32, 3>>::Inner::AXES;
        assert_eq!(padded[1].as_array(), &[0, 1, 0]);
    }
}
