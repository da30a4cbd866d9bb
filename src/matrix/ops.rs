//! Implementations of `std::ops`.

use std::{
    array,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};

use crate::{approx::ApproxEq, storage::Storage, traits::{Number, Scalar}, Matrix, Vector};

impl<T: Scalar, const R: usize, const C: usize, Q: Storage<T, R>> Index<(usize, usize)>
    for Matrix<T, R, C, Q>
{
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col].as_array()[row]
    }
}

impl<T: Scalar, const R: usize, const C: usize, Q: Storage<T, R>> IndexMut<(usize, usize)>
    for Matrix<T, R, C, Q>
{
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col].as_mut_array()[row]
    }
}

/// Indexing by column.
impl<T: Scalar, const R: usize, const C: usize, Q: Storage<T, R>> Index<usize>
    for Matrix<T, R, C, Q>
{
    type Output = Vector<T, R, Q>;

    #[inline]
    fn index(&self, col: usize) -> &Self::Output {
        &self.0[col]
    }
}

/// Indexing by column.
impl<T: Scalar, const R: usize, const C: usize, Q: Storage<T, R>> IndexMut<usize>
    for Matrix<T, R, C, Q>
{
    #[inline]
    fn index_mut(&mut self, col: usize) -> &mut Self::Output {
        &mut self.0[col]
    }
}

// More general `PartialEq` impl than what a derive would generate: matrices
// compare across element types and across storage qualifiers, column by
// column with the element type's exact equality.
impl<T, U, const R: usize, const C: usize, Q, P> PartialEq<Matrix<U, R, C, P>>
    for Matrix<T, R, C, Q>
where
    T: Scalar + PartialEq<U>,
    U: Scalar,
    Q: Storage<T, R>,
    P: Storage<U, R>,
{
    fn eq(&self, other: &Matrix<U, R, C, P>) -> bool {
        self.0 == other.0
    }
}

impl<T: Scalar + Eq, const R: usize, const C: usize, Q: Storage<T, R>> Eq for Matrix<T, R, C, Q> {}

impl<T, const R: usize, const C: usize, Q> ApproxEq for Matrix<T, R, C, Q>
where
    T: Scalar + ApproxEq,
    Q: Storage<T, R>,
{
    type Epsilon = T::Epsilon;

    fn abs_diff_eq(&self, other: &Self, tolerance: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, tolerance))
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.rel_diff_eq(b, tolerance))
    }

    fn ulps_diff_eq(&self, other: &Self, tolerance: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_diff_eq(b, tolerance))
    }
}

/// Element-wise negation.
impl<T, const R: usize, const C: usize, Q> Neg for Matrix<T, R, C, Q>
where
    T: Scalar + Neg<Output = T>,
    Q: Storage<T, R>,
{
    type Output = Self;

    fn neg(self) -> Self {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T, const R: usize, const C: usize, Q> Add for Matrix<T, R, C, Q>
where
    T: Scalar + Add<Output = T>,
    Q: Storage<T, R>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(array::from_fn(|col| self.0[col] + rhs.0[col]))
    }
}

/// Element-wise addition.
impl<T, const R: usize, const C: usize, Q> AddAssign for Matrix<T, R, C, Q>
where
    T: Scalar + Add<Output = T>,
    Q: Storage<T, R>,
{
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Element-wise subtraction.
impl<T, const R: usize, const C: usize, Q> Sub for Matrix<T, R, C, Q>
where
    T: Scalar + Sub<Output = T>,
    Q: Storage<T, R>,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(array::from_fn(|col| self.0[col] - rhs.0[col]))
    }
}

/// Element-wise subtraction.
impl<T, const R: usize, const C: usize, Q> SubAssign for Matrix<T, R, C, Q>
where
    T: Scalar + Sub<Output = T>,
    Q: Storage<T, R>,
{
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

macro_rules! matrix_scalar_op {
    ($(($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt, $doc:literal),)+) => {
        $(
            #[doc = concat!("Matrix-scalar ", $doc, ", applied to every element.")]
            impl<T, const R: usize, const C: usize, Q> $trait<T> for Matrix<T, R, C, Q>
            where
                T: Scalar + $trait<Output = T>,
                Q: Storage<T, R>,
            {
                type Output = Self;

                fn $method(self, rhs: T) -> Self {
                    self.map(|elem| elem $op rhs)
                }
            }

            #[doc = concat!("Matrix-scalar ", $doc, ", applied to every element.")]
            impl<T, const R: usize, const C: usize, Q> $assign_trait<T> for Matrix<T, R, C, Q>
            where
                T: Scalar + $trait<Output = T>,
                Q: Storage<T, R>,
            {
                fn $assign_method(&mut self, rhs: T) {
                    *self = self.map(|elem| elem $op rhs);
                }
            }
        )+
    };
}

matrix_scalar_op! {
    (Add, add, AddAssign, add_assign, +, "addition"),
    (Sub, sub, SubAssign, sub_assign, -, "subtraction"),
    (Mul, mul, MulAssign, mul_assign, *, "multiplication"),
    (Div, div, DivAssign, div_assign, /, "division"),
}

// Scalar-on-the-left arithmetic, one impl set per built-in numeric type.
macro_rules! scalar_lhs_matrix {
    ($($t:ty),+) => {
        $(
            impl<const R: usize, const C: usize, Q: Storage<$t, R>> Add<Matrix<$t, R, C, Q>> for $t {
                type Output = Matrix<$t, R, C, Q>;

                fn add(self, rhs: Matrix<$t, R, C, Q>) -> Self::Output {
                    rhs.map(|elem| self + elem)
                }
            }

            impl<const R: usize, const C: usize, Q: Storage<$t, R>> Sub<Matrix<$t, R, C, Q>> for $t {
                type Output = Matrix<$t, R, C, Q>;

                fn sub(self, rhs: Matrix<$t, R, C, Q>) -> Self::Output {
                    rhs.map(|elem| self - elem)
                }
            }

            impl<const R: usize, const C: usize, Q: Storage<$t, R>> Mul<Matrix<$t, R, C, Q>> for $t {
                type Output = Matrix<$t, R, C, Q>;

                fn mul(self, rhs: Matrix<$t, R, C, Q>) -> Self::Output {
                    rhs.map(|elem| self * elem)
                }
            }

            impl<const R: usize, const C: usize, Q: Storage<$t, R>> Div<Matrix<$t, R, C, Q>> for $t {
                type Output = Matrix<$t, R, C, Q>;

                fn div(self, rhs: Matrix<$t, R, C, Q>) -> Self::Output {
                    rhs.map(|elem| self / elem)
                }
            }
        )+
    };
}
scalar_lhs_matrix!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

/// Matrix * Column Vector.
///
/// The products contributing to each element are summed in ascending column
/// order, without reassociation.
impl<T, const R: usize, const C: usize, Q> Mul<Vector<T, C, Q>> for Matrix<T, R, C, Q>
where
    T: Number,
    Q: Storage<T, R> + Storage<T, C>,
{
    type Output = Vector<T, R, Q>;

    fn mul(self, rhs: Vector<T, C, Q>) -> Self::Output {
        Vector::from_fn(|row| (0..C).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

/// Row Vector * Matrix.
///
/// The vector is treated as a row vector; `v * m` equals `m.transpose() * v`
/// for every compatible pair.
impl<T, const R: usize, const C: usize, Q> Mul<Matrix<T, R, C, Q>> for Vector<T, R, Q>
where
    T: Number,
    Q: Storage<T, R> + Storage<T, C>,
{
    type Output = Vector<T, C, Q>;

    fn mul(self, rhs: Matrix<T, R, C, Q>) -> Self::Output {
        Vector::from_fn(|col| (0..R).fold(T::ZERO, |acc, row| acc + self[row] * rhs[(row, col)]))
    }
}

/// Matrix * Matrix.
///
/// The products contributing to each element are summed in ascending `k`
/// order, without reassociation.
impl<T, const R: usize, const N: usize, const C2: usize, Q> Mul<Matrix<T, N, C2, Q>>
    for Matrix<T, R, N, Q>
where
    T: Number,
    Q: Storage<T, R> + Storage<T, N>,
{
    type Output = Matrix<T, R, C2, Q>;

    fn mul(self, rhs: Matrix<T, N, C2, Q>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Matrix * square Matrix, in place.
impl<T, const R: usize, const C: usize, Q> MulAssign<Matrix<T, C, C, Q>> for Matrix<T, R, C, Q>
where
    T: Number,
    Q: Storage<T, R> + Storage<T, C>,
{
    fn mul_assign(&mut self, rhs: Matrix<T, C, C, Q>) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Mat2f, Matrix};

    #[test]
    fn scalar_shapes() {
        let m = Matrix::<_, _, _>::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m + 1, Matrix::<_, _, _>::from_rows([[2, 3], [4, 5]]));
        assert_eq!(1 + m, Matrix::<_, _, _>::from_rows([[2, 3], [4, 5]]));
        assert_eq!(m - 1, Matrix::<_, _, _>::from_rows([[0, 1], [2, 3]]));
        assert_eq!(10 - m, Matrix::<_, _, _>::from_rows([[9, 8], [7, 6]]));
        assert_eq!(m * 2, Matrix::<_, _, _>::from_rows([[2, 4], [6, 8]]));
        assert_eq!(2 * m, Matrix::<_, _, _>::from_rows([[2, 4], [6, 8]]));
        assert_eq!(Mat2f::IDENTITY * 2.0 / 4.0, Mat2f::from_diagonal([0.5, 0.5]));

        let mut m = m;
        m *= 10;
        assert_eq!(m[(1, 0)], 30);
        m += 1;
        assert_eq!(m[(1, 0)], 31);
    }

    #[test]
    fn matrix_sums() {
        let a = Matrix::<_, _, _>::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::<_, _, _>::from_rows([[0.5, 0.5], [0.5, 0.5]]);
        assert_eq!(a + b, Matrix::<_, _, _>::from_rows([[1.5, 2.5], [3.5, 4.5]]));
        assert_eq!(a - b, Matrix::<_, _, _>::from_rows([[0.5, 1.5], [2.5, 3.5]]));
        assert_eq!(-a, Matrix::<_, _, _>::from_rows([[-1.0, -2.0], [-3.0, -4.0]]));

        let mut acc = a;
        acc += b;
        acc -= a;
        assert_eq!(acc, b);
    }

    #[test]
    fn row_vector_times_matrix() {
        #[rustfmt::skip]
        let m = Matrix::from_rows([
            [1, 2, 3],
            [4, 5, 6],
        ]);
        let v = vec2(7, 8);
        assert_eq!(v * m, vec3(7 * 1 + 8 * 4, 7 * 2 + 8 * 5, 7 * 3 + 8 * 6));

        // Multiplying from the right matches multiplying the transpose from
        // the left.
        assert_eq!(v * m, m.transpose() * v);
    }

    #[test]
    fn mul_assign_square() {
        let mut m = Matrix::<_, _, _>::from_rows([[1, 2], [3, 4]]);
        let by = Matrix::from_rows([[0, 1], [1, 0]]);
        m *= by;
        assert_eq!(m, Matrix::<_, _, _>::from_rows([[2, 1], [4, 3]]));
    }

    #[test]
    fn column_indexing() {
        let mut m = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m[0], vec2(1, 3));
        assert_eq!(m[1], vec2(2, 4));
        m[1] = vec2(9, 9);
        assert_eq!(m[(0, 1)], 9);
    }
}
