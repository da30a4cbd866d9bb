//! Named component views.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::{storage::Storage, traits::Scalar, Quat};

#[repr(C)]
pub struct IJKW<T> {
    pub i: T,
    pub j: T,
    pub k: T,
    pub w: T,
    _priv: (), // prevent external construction
}

impl<T: Scalar, Q: Storage<T, 4>> Deref for Quat<T, Q> {
    type Target = IJKW<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T: Scalar, Q: Storage<T, 4>> DerefMut for Quat<T, Q> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}
