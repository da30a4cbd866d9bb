//! Fixed-dimension linear algebra with shading-language operation semantics.
//!
//! # Motivation
//!
//! Graphics, simulation and geometry code that shares data and algorithms
//! with shader programs needs host-side arithmetic that matches the shader
//! side *exactly* — not just approximately. This library provides the small
//! numeric type system such code works with (2- to 4-component vectors, 2x2
//! to 4x4 column-major matrices, quaternions) with the operation semantics of
//! the shading-language numeric specification:
//!
//! - Determinants, inverses and products evaluate their sums and cofactors in
//!   the order the specification writes them, with no reassociation, so
//!   results match bit for bit. Callers running near-degenerate conditioning
//!   checks depend on this.
//! - Equality of vectors and matrices is exact. Tolerance-based comparison
//!   exists, but only as dedicated test tooling in the [`approx`] module —
//!   "improving" `==` into an epsilon comparison would silently change
//!   program behavior.
//! - Every type carries a storage qualifier that can switch its layout from
//!   tightly packed to hardware-register aligned without changing any
//!   call-site code; see the [`storage`] module.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. The API can be
//!   significantly simplified by relying on const generics to specify vector
//!   and matrix dimensions.
//! - Support only column-major matrices, stored as an array of column
//!   vectors, further simplifying their API.
//! - Be generic over the element type for the built-in scalar types
//!   (integers, floats, `bool`), but don't try to support non-[`Copy`]
//!   numeric types (eg. "big decimals").
//! - No I/O, no threads, no allocation: every operation is a pure value
//!   computation, and every type is a plain `Copy` value.
//! - Put at least some effort into designing an ergonomic API that adheres to
//!   the [Rust API Guidelines].
//!
//! [Rust API Guidelines]: https://rust-lang.github.io/api-guidelines/

pub mod approx;
pub mod storage;

mod matrix;
mod quat;
mod traits;
mod vector;

pub use matrix::*;
pub use quat::*;
pub use storage::{AlignedHighp, AlignedLowp, AlignedMediump, Highp, Lowp, Mediump, Storage};
pub use traits::*;
pub use vector::*;
