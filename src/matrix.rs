use std::{
    array, fmt,
    hash::{Hash, Hasher},
    ops::Neg,
};

use crate::{
    storage::{AlignedHighp, Highp, Storage},
    traits::{Number, Scalar, Trig},
    Vector,
};

mod convert;
mod ops;

/// A 1x1 matrix.
pub type Mat1<T> = Matrix<T, 1, 1>;
/// A 1x1 matrix with [`f32`] elements.
pub type Mat1f = Mat1<f32>;
/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 2 columns.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A 2x2 matrix with [`f32`] elements and register-aligned columns.
pub type Mat2fA = Matrix<f32, 2, 2, AlignedHighp>;
/// A 3x3 matrix with [`f32`] elements and register-aligned columns.
pub type Mat3fA = Matrix<f32, 3, 3, AlignedHighp>;
/// A 4x4 matrix with [`f32`] elements and register-aligned columns.
pub type Mat4fA = Matrix<f32, 4, 4, AlignedHighp>;
/// A 2x2 matrix with [`f64`] elements and register-aligned columns.
pub type Mat2dA = Matrix<f64, 2, 2, AlignedHighp>;
/// A 3x3 matrix with [`f64`] elements and register-aligned columns.
pub type Mat3dA = Matrix<f64, 3, 3, AlignedHighp>;
/// A 4x4 matrix with [`f64`] elements and register-aligned columns.
pub type Mat4dA = Matrix<f64, 4, 4, AlignedHighp>;

/// A column-major matrix with `R` rows and `C` columns, element type `T`, and
/// storage qualifier `Q`.
///
/// The matrix owns its `C` columns as [`Vector<T, R, Q>`] values, so the
/// qualifier governs the layout of each column exactly as it does for a lone
/// vector.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a
///   matrix with raw elements, as well as creating them from an array of row
///   or column vectors.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with
///   its row and column.
/// - For square matrices (where `R` equals `C`), [`Matrix::from_diagonal`]
///   can be used to create a matrix with a specified diagonal and zero
///   outside of its diagonal.
/// - [`Matrix::rotation_clockwise`] and [`Matrix::rotation_counterclockwise`]
///   allow creating 2D rotation matrices from a rotation angle.
///
/// Additionally, some associated constants for commonly used matrices are
/// defined:
///
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
/// - [`Matrix::IDENTITY`] has 1 on its diagonal and 0 everywhere else. For
///   non-square matrices, every cell where the row index equals the column
///   index counts as diagonal. This is also the [`Default`] value of every
///   matrix, so that default-constructed transforms leave vectors unchanged.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of
/// `(usize, usize)`. The first element of the tuple is the *row* (Y
/// coordinate), the second is the *column* (X coordinate), matching common
/// mathematical notation. Indices are 0-based. Indexing by a plain `usize`
/// returns the column vector with that index.
///
/// ```
/// # use sl_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// assert_eq!(mat[1], vec1(1));
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for
/// slices. [`Matrix::get`] and [`Matrix::get_mut`] return [`Option`]s instead
/// and can be used for checked indexing.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[repr(transparent)]
pub struct Matrix<T: Scalar, const R: usize, const C: usize, Q: Storage<T, R> = Highp>(
    [Vector<T, R, Q>; C],
);

impl<T: Scalar, const R: usize, const C: usize, Q: Storage<T, R>> Clone for Matrix<T, R, C, Q> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Scalar, const R: usize, const C: usize, Q: Storage<T, R>> Copy for Matrix<T, R, C, Q> {}

impl<T, const R: usize, const C: usize, Q> Hash for Matrix<T, R, C, Q>
where
    T: Scalar + Hash,
    Q: Storage<T, R>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        for column in &self.0 {
            column.hash(state);
        }
    }
}

unsafe impl<T, const R: usize, const C: usize, Q> bytemuck::Zeroable for Matrix<T, R, C, Q>
where
    T: Scalar + bytemuck::Zeroable,
    Q: Storage<T, R>,
    Q::Inner: bytemuck::Zeroable,
{
}

unsafe impl<T, const R: usize, const C: usize, Q> bytemuck::Pod for Matrix<T, R, C, Q>
where
    T: Scalar + bytemuck::Pod,
    Q: Storage<T, R> + 'static,
    Q::Inner: bytemuck::Pod,
{
}

impl<T: Scalar, const R: usize, const C: usize, Q: Storage<T, R>> Matrix<T, R, C, Q> {
    /// The smallest dimension of the matrix (`R` or `C`).
    const MIN_DIMENSION: usize = if R > C { C } else { R };

    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([Vector::ZERO; C]);

    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. For
    /// non-square matrices, the diagonal consists of every cell whose row and
    /// column index are equal.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    pub const IDENTITY: Self = {
        let mut columns = [Vector::ZERO; C];
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            columns[i] = Vector::AXES[i];
            i += 1;
        }
        Self(columns)
    };

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C, Q>>>(rows: [U; R]) -> Self
    where
        Q: Storage<T, C>,
    {
        Matrix::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_columns<U: Into<Vector<T, R, Q>>>(columns: [U; C]) -> Self {
        Self(columns.map(|col| col.into()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and
    /// column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| Vector::from_fn(|row| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  2,  4],
    ///     [ 6,  8, 10],
    /// ]));
    /// ```
    pub fn map<U, F>(self, mut f: F) -> Matrix<U, R, C, Q>
    where
        U: Scalar,
        Q: Storage<U, R>,
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Returns a reference to the columns of this matrix.
    #[inline]
    pub fn as_columns(&self) -> &[Vector<T, R, Q>; C] {
        &self.0
    }

    /// Converts this matrix into an array of its columns.
    #[inline]
    pub fn into_columns(self) -> [Vector<T, R, Q>; C] {
        self.0
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// Transposing is involutive: transposing the result recovers the
    /// original matrix exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R, Q>
    where
        Q: Storage<T, C>,
    {
        Matrix::from_fn(|row, col| self[(col, row)])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out
    /// of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.as_array().get(row))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or
    /// [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let mut mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// if let Some(elem) = mat.get_mut(1, 0) {
    ///     *elem = 999;
    /// }
    /// if let Some(elem) = mat.get_mut(2, 0) {
    ///     *elem = 777;
    /// }
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [999, 4, 5],
    /// ]));
    /// ```
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0
            .get_mut(col)
            .and_then(|col| col.as_mut_array().get_mut(row))
    }

    /// Multiplies corresponding elements of `self` and `other`.
    ///
    /// This is the element-wise (Hadamard) product, not the matrix product;
    /// for the latter, use the `*` operator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let a = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(a.component_mul(a), Matrix::from_rows([
    ///     [1, 4],
    ///     [9, 16],
    /// ]));
    /// ```
    pub fn component_mul(self, other: Self) -> Self
    where
        T: Number,
    {
        Self::from_fn(|row, col| self[(row, col)] * other[(row, col)])
    }
}

impl<T: fmt::Debug + Scalar, const R: usize, const C: usize, Q: Storage<T, R>> fmt::Debug
    for Matrix<T, R, C, Q>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug + Scalar, const R: usize, const C: usize, Q: Storage<T, R>>(
            &'a Matrix<T, R, C, Q>,
            usize,
        );
        impl<'a, T: fmt::Debug + Scalar, const R: usize, const C: usize, Q: Storage<T, R>> fmt::Debug
            for FormatRow<'a, T, R, C, Q>
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..C {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

impl<T: Scalar, const N: usize, Q: Storage<T, N>> Matrix<T, N, N, Q> {
    /// Returns a [`Vector`] holding the diagonal elements of this square
    /// matrix.
    ///
    /// *Note*: This method is restricted to square matrices due to
    /// limitations in Rust's const generics.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N, Q> {
        Vector::from_fn(|i| self[(i, i)])
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// *Note*: This method is intentionally restricted to square matrices to
    /// allow type inference of the created [`Matrix`]. To create a non-square
    /// matrix from its diagonal, use [`Matrix::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N, Q>>>(diag: D) -> Self {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the
    /// diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Mat3f::IDENTITY.trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }
}

// Determinant and inverse are spelled out once per size. The shading-language
// specification fixes the evaluation order of every product and sum, and
// near-singular conditioning checks in calling code depend on reproducing it
// bit for bit, so these must not be folded into a generic loop.

impl<T: Number, Q: Storage<T, 1>> Matrix<T, 1, 1, Q> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)]
    }

    /// Inverts this 1x1 matrix.
    ///
    /// A matrix with determinant zero has no inverse; no check is performed,
    /// and the result follows the element type's division-by-zero behavior
    /// (infinities and NaN for floats).
    pub fn invert(&self) -> Self {
        Self::from_columns([[T::ONE / self[(0, 0)]]])
    }
}

impl<T: Number, Q: Storage<T, 2>> Matrix<T, 2, 2, Q> {
    /// Returns the [determinant] of the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// assert_eq!(Mat2f::IDENTITY.determinant(), 1.0);
    /// let double = Matrix::from_columns([[2.0, 0.0], [0.0, 2.0]]);
    /// assert_eq!(double.determinant(), 4.0);
    /// ```
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        let [c0, c1] = self.0;
        let [m00, m01] = c0.into_array();
        let [m10, m11] = c1.into_array();

        m00 * m11 - m10 * m01
    }

    /// Inverts this 2x2 matrix.
    ///
    /// A matrix with determinant zero has no inverse; no check is performed,
    /// and the result follows the element type's division-by-zero behavior
    /// (infinities and NaN for floats).
    ///
    /// # Examples
    ///
    /// ```
    /// # use sl_linalg::*;
    /// assert_eq!(Mat2f::IDENTITY.invert(), Mat2f::IDENTITY);
    /// ```
    pub fn invert(&self) -> Self
    where
        T: Neg<Output = T>,
    {
        let [c0, c1] = self.0;
        let [m00, m01] = c0.into_array();
        let [m10, m11] = c1.into_array();

        let one_over_det = T::ONE / (m00 * m11 - m10 * m01);

        Self::from_columns([
            [m11 * one_over_det, -m01 * one_over_det],
            [-m10 * one_over_det, m00 * one_over_det],
        ])
    }

    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY
    /// plane.
    pub fn rotation_clockwise(radians: T) -> Self
    where
        T: Neg<Output = T> + Trig,
    {
        Self::rotation_counterclockwise(-radians)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the
    /// XY plane.
    pub fn rotation_counterclockwise(radians: T) -> Self
    where
        T: Neg<Output = T> + Trig,
    {
        Self::from_columns([
            [radians.cos(), radians.sin()],
            [-radians.sin(), radians.cos()],
        ])
    }
}

impl<T: Number, Q: Storage<T, 3>> Matrix<T, 3, 3, Q> {
    /// Returns the [determinant] of the matrix, computed by cofactor
    /// expansion along the first column.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [c0, c1, c2] = self.0;
        let [m00, m01, m02] = c0.into_array();
        let [m10, m11, m12] = c1.into_array();
        let [m20, m21, m22] = c2.into_array();

        m00 * (m11 * m22 - m21 * m12) - m10 * (m01 * m22 - m21 * m02)
            + m20 * (m01 * m12 - m11 * m02)
    }

    /// Inverts this 3x3 matrix via its adjugate over its determinant.
    ///
    /// A matrix with determinant zero has no inverse; no check is performed,
    /// and the result follows the element type's division-by-zero behavior
    /// (infinities and NaN for floats).
    pub fn invert(&self) -> Self
    where
        T: Neg<Output = T>,
    {
        let [c0, c1, c2] = self.0;
        let [m00, m01, m02] = c0.into_array();
        let [m10, m11, m12] = c1.into_array();
        let [m20, m21, m22] = c2.into_array();

        let one_over_det = T::ONE
            / (m00 * (m11 * m22 - m21 * m12) - m10 * (m01 * m22 - m21 * m02)
                + m20 * (m01 * m12 - m11 * m02));

        Self::from_columns([
            [
                (m11 * m22 - m21 * m12) * one_over_det,
                -(m01 * m22 - m21 * m02) * one_over_det,
                (m01 * m12 - m11 * m02) * one_over_det,
            ],
            [
                -(m10 * m22 - m20 * m12) * one_over_det,
                (m00 * m22 - m20 * m02) * one_over_det,
                -(m00 * m12 - m10 * m02) * one_over_det,
            ],
            [
                (m10 * m21 - m20 * m11) * one_over_det,
                -(m00 * m21 - m20 * m01) * one_over_det,
                (m00 * m11 - m10 * m01) * one_over_det,
            ],
        ])
    }
}

impl<T: Number, Q: Storage<T, 4>> Matrix<T, 4, 4, Q> {
    /// Returns the [determinant] of the matrix.
    ///
    /// The six shared 2x2 sub-determinants are computed first, combined into
    /// a vector of cofactors, and dotted with the first row.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T
    where
        T: Neg<Output = T>,
    {
        let [c0, c1, c2, c3] = self.0;
        let [m00, m01, m02, m03] = c0.into_array();
        let [m10, m11, m12, m13] = c1.into_array();
        let [m20, m21, m22, m23] = c2.into_array();
        let [m30, m31, m32, m33] = c3.into_array();

        let sub00 = m22 * m33 - m32 * m23;
        let sub01 = m21 * m33 - m31 * m23;
        let sub02 = m21 * m32 - m31 * m22;
        let sub03 = m20 * m33 - m30 * m23;
        let sub04 = m20 * m32 - m30 * m22;
        let sub05 = m20 * m31 - m30 * m21;

        let cof0 = m11 * sub00 - m12 * sub01 + m13 * sub02;
        let cof1 = -(m10 * sub00 - m12 * sub03 + m13 * sub04);
        let cof2 = m10 * sub01 - m11 * sub03 + m13 * sub05;
        let cof3 = -(m10 * sub02 - m11 * sub04 + m12 * sub05);

        m00 * cof0 + m01 * cof1 + m02 * cof2 + m03 * cof3
    }

    /// Inverts this 4x4 matrix.
    ///
    /// The unscaled adjugate is built from the eighteen shared 2x2
    /// sub-determinants; the determinant is then recovered as the dot product
    /// of the first column of `self` with the first row of the adjugate, so
    /// it is not computed a second time.
    ///
    /// A matrix with determinant zero has no inverse; no check is performed,
    /// and the result follows the element type's division-by-zero behavior
    /// (infinities and NaN for floats).
    pub fn invert(&self) -> Self
    where
        T: Neg<Output = T>,
    {
        let [c0, c1, c2, c3] = self.0;
        let [m00, m01, m02, m03] = c0.into_array();
        let [m10, m11, m12, m13] = c1.into_array();
        let [m20, m21, m22, m23] = c2.into_array();
        let [m30, m31, m32, m33] = c3.into_array();

        let coef00 = m22 * m33 - m32 * m23;
        let coef02 = m12 * m33 - m32 * m13;
        let coef03 = m12 * m23 - m22 * m13;
        let coef04 = m21 * m33 - m31 * m23;
        let coef06 = m11 * m33 - m31 * m13;
        let coef07 = m11 * m23 - m21 * m13;
        let coef08 = m21 * m32 - m31 * m22;
        let coef10 = m11 * m32 - m31 * m12;
        let coef11 = m11 * m22 - m21 * m12;
        let coef12 = m20 * m33 - m30 * m23;
        let coef14 = m10 * m33 - m30 * m13;
        let coef15 = m10 * m23 - m20 * m13;
        let coef16 = m20 * m32 - m30 * m22;
        let coef18 = m10 * m32 - m30 * m12;
        let coef19 = m10 * m22 - m20 * m12;
        let coef20 = m20 * m31 - m30 * m21;
        let coef22 = m10 * m31 - m30 * m11;
        let coef23 = m10 * m21 - m20 * m11;

        let fac0 = Vector::<T, 4, Q>::from_array([coef00, coef00, coef02, coef03]);
        let fac1 = Vector::from_array([coef04, coef04, coef06, coef07]);
        let fac2 = Vector::from_array([coef08, coef08, coef10, coef11]);
        let fac3 = Vector::from_array([coef12, coef12, coef14, coef15]);
        let fac4 = Vector::from_array([coef16, coef16, coef18, coef19]);
        let fac5 = Vector::from_array([coef20, coef20, coef22, coef23]);

        let vec0 = Vector::from_array([m10, m00, m00, m00]);
        let vec1 = Vector::from_array([m11, m01, m01, m01]);
        let vec2 = Vector::from_array([m12, m02, m02, m02]);
        let vec3 = Vector::from_array([m13, m03, m03, m03]);

        let inv0 = vec1 * fac0 - vec2 * fac1 + vec3 * fac2;
        let inv1 = vec0 * fac0 - vec2 * fac3 + vec3 * fac4;
        let inv2 = vec0 * fac1 - vec1 * fac3 + vec3 * fac5;
        let inv3 = vec0 * fac2 - vec1 * fac4 + vec2 * fac5;

        let one = T::ONE;
        let sign_a = Vector::from_array([one, -one, one, -one]);
        let sign_b = Vector::from_array([-one, one, -one, one]);

        let adjugate = Self::from_columns([
            inv0 * sign_a,
            inv1 * sign_b,
            inv2 * sign_a,
            inv3 * sign_b,
        ]);

        let row0 = Vector::from_array([
            adjugate[(0, 0)],
            adjugate[(0, 1)],
            adjugate[(0, 2)],
            adjugate[(0, 3)],
        ]);

        let dot0 = c0 * row0;
        let dot1 = (dot0.x + dot0.y) + (dot0.z + dot0.w);
        let one_over_det = T::ONE / dot1;

        adjugate * one_over_det
    }
}

impl<T: Scalar, const R: usize, const C: usize, Q: Storage<T, R>> Default for Matrix<T, R, C, Q> {
    /// Returns [`Matrix::IDENTITY`].
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use crate::{assert_approx_eq, vec2, vec4, Mat4d, Vec4f};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat2x3::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::<_, _, _>::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::<_, _, _>::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.into_diagonal(), [1, 2]);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::<_, _, _>::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each
        // individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");

        // Non-square identities are identity-padded.
        assert_eq!(
            Mat2x4::<i32>::IDENTITY,
            Matrix::<_, _, _>::from_rows([[1, 0, 0, 0], [0, 1, 0, 0]]),
        );
        assert_eq!(
            Mat4x2::<i32>::IDENTITY,
            Matrix::<_, _, _>::from_rows([[1, 0], [0, 1], [0, 0], [0, 0]]),
        );

        // `Default` is the identity, so a default transform is a no-op.
        assert_eq!(Mat3f::default(), Mat3f::IDENTITY);
    }

    #[test]
    fn transpose_involution() {
        let mat = Matrix::<_, _, _>::from_rows([[0, 1, 2], [3, 4, 5]]);
        assert_eq!(mat.transpose().transpose(), mat);

        let square = Matrix::<_, _, _>::from_rows([[1.5f32, -2.0], [0.25, 9.0]]);
        assert_eq!(square.transpose().transpose(), square);

        let wide: Matrix<i64, 4, 2> = Matrix::from_rows([[1, 2], [3, 4], [5, 6], [7, 8]]);
        assert_eq!(wide.transpose().transpose(), wide);
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        let out = mat * vec;
        assert_eq!(out, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);
    }

    #[test]
    fn identity_preserves_vectors() {
        let v = vec4(1.5f32, -2.0, 0.25, 9.0);
        assert_eq!(Mat4f::IDENTITY * v, v);
        assert_eq!(v * Mat4f::IDENTITY, v);
        assert_eq!(Vec4f::ZERO, Mat4f::IDENTITY * Vec4f::ZERO);
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::<_, _, _>::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c = a * b;
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
    }

    #[test]
    fn mat_mul_associativity() {
        let a = Matrix::<_, _, _>::from_rows([[1, -2, 3], [0, 4, -1], [2, 2, 2]]);
        let b = Matrix::from_rows([[5, 0, 1], [1, 1, 1], [-3, 2, 0]]);
        let c = Matrix::from_rows([[2, 7, 0], [0, 1, 0], [4, -4, 1]]);
        assert_eq!((a * b) * c, a * (b * c));

        let af = a.map(|i| i as f64);
        let bf = b.map(|i| i as f64);
        let cf = c.map(|i| i as f64);
        assert_approx_eq!((af * bf) * cf, af * (bf * cf), rel = 1e-12);
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat1f::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat4f::ZERO.determinant(), 0.0);
        assert_eq!(Mat1f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat2f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4f::IDENTITY.determinant(), 1.0);

        let double = Mat2f::from_columns([[2.0, 0.0], [0.0, 2.0]]);
        assert_eq!(double.determinant(), 4.0);

        #[rustfmt::skip]
        let testmat = Matrix::<_, _, _>::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(testmat.determinant(), 54);
        assert_eq!(testmat.transpose().determinant(), 54);

        assert_eq!(Matrix::<_, _, _>::from_diagonal([1, 2, 3, 4]).determinant(), 24);

        // Block-diagonal: det([[2, 1], [1, 2]]) * 3 * 4.
        #[rustfmt::skip]
        let mat = Matrix::<_, _, _>::from_rows([
            [2, 0, 0, 1],
            [0, 3, 0, 0],
            [0, 0, 4, 0],
            [1, 0, 0, 2],
        ]);
        assert_eq!(mat.determinant(), 36);
        assert_eq!(mat.transpose().determinant(), 36);
    }

    #[test]
    fn invert() {
        assert_eq!(Mat1f::IDENTITY.invert(), Mat1f::IDENTITY);
        assert_eq!(Mat2f::IDENTITY.invert(), Mat2f::IDENTITY);
        assert_eq!(Mat3f::IDENTITY.invert(), Mat3f::IDENTITY);
        assert_eq!(Mat4f::IDENTITY.invert(), Mat4f::IDENTITY);

        // Powers of two stay exact through the adjugate-over-determinant path.
        let mat = Mat4d::from_diagonal([2.0, 4.0, 8.0, 16.0]);
        assert_eq!(
            mat.invert(),
            Mat4d::from_diagonal([0.5, 0.25, 0.125, 0.0625]),
        );

        #[rustfmt::skip]
        let mat: Mat3d = Matrix::from_rows([
            [ 1.0,  2.0, 0.0],
            [-1.0,  1.0, 1.0],
            [ 0.0,  0.5, 1.0],
        ]);
        assert_approx_eq!(mat * mat.invert(), Mat3d::IDENTITY, abs = 1e-12);
        assert_approx_eq!(mat.invert() * mat, Mat3d::IDENTITY, abs = 1e-12);

        // Singular matrices invert to non-finite garbage instead of
        // panicking, like scalar division by zero.
        let degenerate = Mat2f::from_columns([[1.0, 2.0], [2.0, 4.0]]);
        assert!(degenerate.invert()[(0, 0)].is_infinite());
    }

    #[test]
    fn invert_random() {
        fastrand::seed(0x5eed);
        let mut checked = 0;
        while checked < 100 {
            let mat: Mat4d = Matrix::from_fn(|_, _| fastrand::f64() * 2.0 - 1.0);
            if mat.determinant().abs() < 0.1 {
                continue;
            }
            checked += 1;
            assert_approx_eq!(mat * mat.invert(), Mat4d::IDENTITY, abs = 1e-9);

            let upper: Mat3d = Matrix::from_fn(|row, col| mat[(row, col)]);
            if upper.determinant().abs() >= 0.1 {
                assert_approx_eq!(upper * upper.invert(), Mat3d::IDENTITY, abs = 1e-9);
            }
        }
    }

    #[test]
    fn rotation() {
        let cw = Mat2f::rotation_clockwise(0.0);
        assert_eq!(cw, cw.invert());

        let ccw = Mat2f::rotation_counterclockwise(0.0);
        assert_eq!(ccw, ccw.invert());

        assert_eq!(ccw, cw);

        let cw = Mat2f::rotation_clockwise(PI);
        assert_approx_eq!(cw, cw.invert(), abs = 1e-6);
    }

    #[test]
    fn component_mul() {
        let a = Matrix::<_, _, _>::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[5, 6], [7, 8]]);
        assert_eq!(a.component_mul(b), Matrix::<_, _, _>::from_rows([[5, 12], [21, 32]]));
    }

    #[test]
    fn aligned_matrix_matches_packed() {
        let packed: Mat4d = Matrix::from_fn(|row, col| (row * 4 + col) as f64 * 0.5 + 1.0);
        let aligned = packed.requalify::<crate::AlignedHighp>();
        assert_eq!(packed, aligned);
        assert_eq!(packed.determinant(), aligned.determinant());
        assert_eq!(
            packed.invert().into_columns()[2].into_array(),
            aligned.invert().into_columns()[2].into_array(),
        );
    }
}
