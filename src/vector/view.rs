//! Named component views.
//!
//! Vectors of up to 4 dimensions expose their components as fields through a
//! chain of [`Deref`] impls: positional names (`x y z w`), color names
//! (`r g b a`), texture coordinate names (`s t p q`), and `w`/`h` for
//! 2-dimensional sizes. All of them read and write the same storage; the
//! views carry no state of their own.
//!
//! The [`Repr`][crate::storage::Repr] contract guarantees that the logical
//! components sit at offset 0 in declaration order regardless of qualifier,
//! which is what makes the reference transmutes below sound.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::{storage::Storage, traits::Scalar, Vector};

// Positional names:

#[repr(C)]
pub struct X<T> {
    pub x: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

// Color names:

#[repr(C)]
pub struct R<T> {
    pub r: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct RG<T> {
    pub r: T,
    pub g: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct RGB<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct RGBA<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
    _priv: (), // prevent external construction
}

// Texture coordinate names:

#[repr(C)]
pub struct S<T> {
    pub s: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct ST<T> {
    pub s: T,
    pub t: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct STP<T> {
    pub s: T,
    pub t: T,
    pub p: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct STPQ<T> {
    pub s: T,
    pub t: T,
    pub p: T,
    pub q: T,
    _priv: (), // prevent external construction
}

// 2D sizes:

#[repr(C)]
pub struct WH<T> {
    pub w: T,
    pub h: T,
    _priv: (), // prevent external construction
}

macro_rules! vector_view {
    ($($n:literal => $target:ident,)+) => {
        $(
            impl<T: Scalar, Q: Storage<T, $n>> Deref for Vector<T, $n, Q> {
                type Target = $target<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T: Scalar, Q: Storage<T, $n>> DerefMut for Vector<T, $n, Q> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

vector_view! {
    1 => X,
    2 => XY,
    3 => XYZ,
    4 => XYZW,
}

macro_rules! view_chain {
    ($($view:ident => $target:ident,)+) => {
        $(
            impl<T> Deref for $view<T> {
                type Target = $target<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for $view<T> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

view_chain! {
    X => R,
    XY => RG,
    XYZ => RGB,
    XYZW => RGBA,
    R => S,
    RG => ST,
    RGB => STP,
    RGBA => STPQ,
    ST => WH,
}
