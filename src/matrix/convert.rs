//! Size and qualifier conversions.

use crate::{storage::Storage, traits::Scalar, Matrix};

impl<T: Scalar, const R: usize, const C: usize, Q: Storage<T, R>> Matrix<T, R, C, Q> {
    /// Returns a matrix with the contents of `self`, but a potentially
    /// different size.
    ///
    /// Cells present in both sizes are copied. New cells are
    /// *identity-padded*: 0 everywhere except on the diagonal (row index
    /// equal to column index), which gets 1. The same single rule applies to
    /// every size pair, so chained conversions that only grow (or only
    /// shrink) compose, and growing followed by shrinking back restores the
    /// original matrix exactly.
    ///
    /// Shrinking discards the dropped cells; they are not recoverable.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// let resized = mat.resize::<3, 3>();
    /// assert_eq!(resized, Matrix::from_rows([
    ///     [1, 2, 0],
    ///     [3, 4, 0],
    ///     [0, 0, 1],
    /// ]));
    /// assert_eq!(resized.resize::<2, 2>(), mat);
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(self) -> Matrix<T, R2, C2, Q>
    where
        Q: Storage<T, R2>,
    {
        Matrix::from_fn(|row, col| {
            if row < R && col < C {
                self[(row, col)]
            } else if row == col {
                T::ONE
            } else {
                T::ZERO
            }
        })
    }

    /// Moves the elements of `self` into storage under another qualifier.
    ///
    /// This only changes the in-memory layout of the columns; the element
    /// values are identical, and matrices compare equal across qualifiers.
    pub fn requalify<P>(self) -> Matrix<T, R, C, P>
    where
        P: Storage<T, R>,
    {
        Matrix::from_fn(|row, col| self[(row, col)])
    }
}

#[cfg(test)]
mod tests {
    use crate::{Mat2, Mat4, Matrix};

    #[rustfmt::skip]
    #[test]
    fn resize() {
        let mat = Matrix::<_, _, _>::from_rows([
            [1, 2],
            [3, 4],
        ]);

        let larger = mat.resize::<3, 3>();
        assert_eq!(larger, Matrix::<_, _, _>::from_rows([
            [1, 2, 0],
            [3, 4, 0],
            [0, 0, 1],
        ]));

        let smaller = mat.resize::<1, 2>();
        assert_eq!(smaller, Matrix::<_, _, _>::from_rows([
            [1, 2]
        ]));
    }

    #[test]
    fn resize_identity_pads_rectangles() {
        #[rustfmt::skip]
        let mat: Matrix<i32, 2, 4> = Matrix::from_rows([
            [1, 2, 3, 4],
            [5, 6, 7, 8],
        ]);

        // 2x4 -> 4x2 keeps the overlapping 2x2 block and pads the two new
        // rows with identity cells that both fall outside the kept columns.
        #[rustfmt::skip]
        assert_eq!(mat.resize::<4, 2>(), Matrix::<_, _, _>::from_rows([
            [1, 2],
            [5, 6],
            [0, 0],
            [0, 0],
        ]));

        // 4x2 -> 2x4 re-introduces diagonal ones in the new columns.
        #[rustfmt::skip]
        assert_eq!(mat.resize::<4, 2>().resize::<2, 4>(), Matrix::<_, _, _>::from_rows([
            [1, 2, 0, 0],
            [5, 6, 0, 0],
        ]));
    }

    #[test]
    fn resize_round_trips_when_growing_first() {
        let mat = Mat2::from_columns([[1, 2], [3, 4]]);
        assert_eq!(mat.resize::<4, 4>().resize::<2, 2>(), mat);
        assert_eq!(mat.resize::<3, 4>().resize::<2, 2>(), mat);

        // The grown matrix embeds the original in the upper-left block and
        // an identity block elsewhere.
        #[rustfmt::skip]
        assert_eq!(mat.resize::<4, 4>(), Matrix::<_, _, _>::from_columns([
            [1, 2, 0, 0],
            [3, 4, 0, 0],
            [0, 0, 1, 0],
            [0, 0, 0, 1],
        ]));
    }

    #[test]
    fn resize_chains_compose() {
        let mat = Mat2::from_columns([[9, 8], [7, 6]]);
        // Growing in two steps equals growing directly.
        assert_eq!(mat.resize::<3, 3>().resize::<4, 4>(), mat.resize::<4, 4>());
        // The identity grows into itself.
        assert_eq!(Mat2::<i32>::IDENTITY.resize::<4, 4>(), Mat4::IDENTITY);
    }

    #[test]
    fn requalify_preserves_values() {
        let mat = Matrix::<_, _, _>::from_fn(|row, col| (row * 3 + col) as f32);
        let aligned: Matrix<f32, 3, 3, crate::AlignedHighp> = mat.requalify();
        assert_eq!(mat, aligned);
        assert_eq!(aligned.requalify::<crate::Highp>(), mat);
    }
}
