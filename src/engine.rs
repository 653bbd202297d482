//! Determinant-based algorithms that work on any square matrix-like object.
//!
//! Determinants are computed by cofactor (Laplace) expansion over row and column masks, so
//! minors are never copied or materialized as separate types. This is `O(N!)` and intended for
//! the small matrices used in geometry, not for general numerics.

use crate::{mask::Mask, Access, Conjugate, Matrix, Number, One, Sqrt, Viewable, Zero};

/// Computes the determinant of the submatrix selected by `rows` and `columns`.
///
/// Both masks must select the same number of entries. Selecting nothing yields 1, the
/// determinant of the empty matrix.
fn expand<A, const N: usize>(mat: &A, rows: Mask<N>, columns: Mask<N>) -> A::Elem
where
    A: Access<N, N> + ?Sized,
    A::Elem: Number,
{
    let n = rows.count();
    debug_assert_eq!(n, columns.count());
    let at = |row: usize, col: usize| *mat.elem(rows.nth(row), columns.nth(col));

    match n {
        0 => <A::Elem as One>::ONE,
        1 => at(0, 0),
        2 => at(0, 0) * at(1, 1) - at(0, 1) * at(1, 0),
        _ => {
            // Expand along the first selected row.
            let rest = rows.without(0);
            (0..n).fold(<A::Elem as Zero>::ZERO, |det, col| {
                let term = at(0, col) * expand(mat, rest, columns.without(col));
                if col % 2 == 0 {
                    det + term
                } else {
                    det - term
                }
            })
        }
    }
}

/// Returns the [determinant] of a square matrix, matrix view, or transposed view.
///
/// [determinant]: https://en.wikipedia.org/wiki/Determinant
///
/// # Examples
///
/// ```
/// # use matview::*;
/// let mat = Matrix::from_rows([
///     [5, 2],
///     [7, 9],
/// ]);
/// assert_eq!(determinant(&mat), 31);
///
/// let mat = Matrix::from_rows([
///     [2, 0, 1],
///     [1, 3, 2],
///     [1, 1, 3],
/// ]);
/// assert_eq!(determinant(&mat), 12);
/// assert_eq!(determinant(&mat.transposed()), 12);
/// assert_eq!(determinant(&mat.minor::<2, 2>(2, 2)), 6);
/// ```
pub fn determinant<A, const N: usize>(mat: &A) -> A::Elem
where
    A: Access<N, N> + ?Sized,
    A::Elem: Number,
{
    expand(mat, Mask::FULL, Mask::FULL)
}

/// Returns the [adjugate] (transposed cofactor matrix) of a square matrix.
///
/// Element `(j, i)` of the result is `(-1)^(i+j)` times the determinant of the minor that
/// excludes row `i` and column `j`. The adjugate of any 1x1 matrix is `[1]`.
///
/// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
///
/// # Examples
///
/// ```
/// # use matview::*;
/// let mat = Matrix::from_rows([
///     [5, 2],
///     [7, 9],
/// ]);
/// assert_eq!(adjugate(&mat), Matrix::from_rows([
///     [9, -2],
///     [-7, 5],
/// ]));
/// ```
pub fn adjugate<A, const N: usize>(mat: &A) -> Matrix<A::Elem, N, N>
where
    A: Access<N, N> + ?Sized,
    A::Elem: Number,
{
    let full = Mask::<N>::FULL;
    Matrix::from_fn(|row, col| {
        let cofactor = expand(mat, full.without(col), full.without(row));
        if (row + col) % 2 == 0 {
            cofactor
        } else {
            -cofactor
        }
    })
}

/// Computes the inverse of a square matrix as `adjugate(mat) / determinant(mat)`.
///
/// Returns [`None`] if the matrix is singular, ie. if its [`determinant`] is exactly zero.
/// Nearly-singular floating-point matrices are not detected and produce large elements.
///
/// # Examples
///
/// ```
/// # use matview::*;
/// let mat = Matrix::from_rows([
///     [5.0, 2.0],
///     [7.0, 9.0],
/// ]);
/// let inv = inverse(&mat).unwrap();
/// assert_eq!(inv, Matrix::from_rows([
///     [9.0, -2.0],
///     [-7.0, 5.0],
/// ]) / 31.0);
///
/// let singular = Matrix::from_rows([
///     [1.0, 2.0],
///     [2.0, 4.0],
/// ]);
/// assert_eq!(inverse(&singular), None);
/// ```
#[must_use]
pub fn inverse<A, const N: usize>(mat: &A) -> Option<Matrix<A::Elem, N, N>>
where
    A: Access<N, N> + ?Sized,
    A::Elem: Number,
{
    let det = determinant(mat);
    if det == <A::Elem as Zero>::ZERO {
        log::trace!("attempted to invert singular {}x{} matrix", N, N);
        return None;
    }

    Some(adjugate(mat) / det)
}

/// Returns the Euclidean length of a row or column vector.
///
/// Using this on anything that isn't a vector is rejected at compile time.
///
/// # Examples
///
/// ```
/// # use matview::*;
/// let v = RowVector::from_rows([[3.0, 4.0]]);
/// assert_eq!(length(&v), 5.0);
/// assert_eq!(length(&v.transposed()), 5.0);
///
/// let mat = Mat3f::identity();
/// assert_eq!(length(&mat.column_vector(2)), 1.0);
/// ```
///
/// A matrix that is neither a row nor a column vector is rejected:
///
/// ```compile_fail
/// # use matview::*;
/// let _ = length(&Mat2::<f64>::identity());
/// ```
pub fn length<A, const R: usize, const C: usize>(v: &A) -> A::Elem
where
    A: Access<R, C> + ?Sized,
    A::Elem: Number + Sqrt,
{
    const {
        assert!(R == 1 || C == 1, "length is only defined for row and column vectors");
    }

    let mut sum = <A::Elem as Zero>::ZERO;
    for row in 0..R {
        for col in 0..C {
            let elem = *v.elem(row, col);
            sum = sum + elem * elem;
        }
    }
    sum.sqrt()
}

/// Returns the `N`x`N` identity matrix.
///
/// Same as [`Matrix::identity`].
pub fn identity<T, const N: usize>() -> Matrix<T, N, N>
where
    T: Zero + One,
{
    Matrix::identity()
}

/// Returns a transposed view of `handle`.
///
/// Same as [`Viewable::transposed`]; transposing a transposed view returns the handle it wraps.
pub fn transposed<V, const R: usize, const C: usize>(handle: V) -> V::Transpose
where
    V: Viewable<R, C>,
{
    handle.transposed()
}

/// Returns the [conjugate transpose] of a matrix.
///
/// For real element types this is the same as the transpose.
///
/// [conjugate transpose]: https://en.wikipedia.org/wiki/Conjugate_transpose
///
/// # Examples
///
/// ```
/// # use matview::*;
/// use num_complex::Complex;
///
/// let mat = Matrix::from_rows([
///     [Complex::new(1.0, 2.0), Complex::new(0.0, -1.0)],
/// ]);
/// assert_eq!(hermitian(&mat), Matrix::from_rows([
///     [Complex::new(1.0, -2.0)],
///     [Complex::new(0.0, 1.0)],
/// ]));
/// ```
pub fn hermitian<A, const R: usize, const C: usize>(mat: &A) -> Matrix<A::Elem, C, R>
where
    A: Access<R, C> + ?Sized,
    A::Elem: Conjugate + Copy,
{
    Matrix::from_fn(|row, col| mat.elem(col, row).conj())
}

/// Advances the state `x` of the ODE `x' = f(x)` by one step of size `dt`, using the classic
/// 4th-order [Runge-Kutta method].
///
/// [Runge-Kutta method]: https://en.wikipedia.org/wiki/Runge%E2%80%93Kutta_methods
///
/// # Examples
///
/// Simulating a point moving on the unit circle (`x' = A x`, with `A` rotating by 90°):
///
/// ```
/// # use matview::*;
/// use approx::assert_abs_diff_eq;
///
/// let a = Matrix::from_rows([
///     [0.0, -1.0],
///     [1.0, 0.0],
/// ]);
/// let mut x = ColumnVector::from_rows([[1.0], [0.0]]);
/// for _ in 0..100 {
///     x = rk4(x, 0.01, |x| a * x);
/// }
/// assert_abs_diff_eq!(x, rotation(1.0) * ColumnVector::from_rows([[1.0], [0.0]]), epsilon = 1e-8);
/// ```
pub fn rk4<T, const R: usize, const C: usize, F>(x: Matrix<T, R, C>, dt: T, mut f: F) -> Matrix<T, R, C>
where
    T: Number,
    F: FnMut(&Matrix<T, R, C>) -> Matrix<T, R, C>,
{
    let two = T::ONE + T::ONE;
    let six = two + two + two;

    let k1 = f(&x);
    let k2 = f(&(x + k1 * dt / two));
    let k3 = f(&(x + k2 * dt / two));
    let k4 = f(&(x + k3 * dt));
    x + (k1 + k2 * two + k3 * two + k4) * dt / six
}

impl<T: Number, const N: usize> Matrix<T, N, N> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        determinant(self)
    }

    /// Returns the adjugate of the matrix. See [`adjugate`].
    pub fn adjugate(&self) -> Self {
        adjugate(self)
    }

    /// Inverts this matrix, returning [`None`] if it is singular. See [`inverse`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use matview::*;
    /// assert_eq!(Mat2::<i32>::identity().inverse(), Some(Mat2::identity()));
    /// assert_eq!(Mat3f::identity().inverse(), Some(Mat3f::identity()));
    /// assert_eq!(Mat2f::ZERO.inverse(), None);
    /// ```
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        inverse(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mat1, Mat3, Mat4};

    #[test]
    fn small_determinants() {
        assert_eq!(Mat1::from_rows([[-4]]).determinant(), -4);
        assert_eq!(Matrix::from_rows([[5, 2], [7, 9]]).determinant(), 31);

        #[rustfmt::skip]
        let mat = Mat3::from_rows([
            [6, 1, 1],
            [4, -2, 5],
            [2, 8, 7],
        ]);
        assert_eq!(mat.determinant(), -306);
    }

    #[test]
    fn larger_determinants() {
        // Upper triangular: the determinant is the product of the diagonal.
        let mat = Mat4::from_fn(|row, col| if col >= row { (row + col + 1) as i64 } else { 0 });
        assert_eq!(mat.determinant(), 105);

        // Swapping two rows flips the sign.
        let mut swapped = mat;
        *swapped.row_mut(0) = *mat.row(3);
        *swapped.row_mut(3) = *mat.row(0);
        assert_eq!(swapped.determinant(), -mat.determinant());

        #[rustfmt::skip]
        let mat = Mat4::from_rows([
            [1, 0, 2, -1],
            [3, 0, 0, 5],
            [2, 1, 4, -3],
            [1, 0, 5, 0],
        ]);
        assert_eq!(mat.determinant(), 30);
    }

    #[test]
    fn determinant_of_views() {
        #[rustfmt::skip]
        let mat = Mat4::from_rows([
            [1, 0, 2, -1],
            [3, 0, 0, 5],
            [2, 1, 4, -3],
            [1, 0, 5, 0],
        ]);
        assert_eq!(determinant(&mat.transposed()), 30);
        assert_eq!(determinant(&mat.minor::<3, 3>(2, 1)), -30);
        assert_eq!(determinant(&mat.submatrix::<2, 2>(0, 0)), 0);
        assert_eq!(
            determinant(&mat.submatrix::<3, 3>(1, 1).transposed()),
            mat.submatrix::<3, 3>(1, 1).to_matrix().determinant(),
        );
    }

    #[test]
    fn adjugate_identity() {
        #[rustfmt::skip]
        let mat = Mat3::from_rows([
            [6, 1, 1],
            [4, -2, 5],
            [2, 8, 7],
        ]);
        let det = mat.determinant();
        assert_eq!(mat * mat.adjugate(), Mat3::identity() * det);
        assert_eq!(mat.adjugate() * mat, Mat3::identity() * det);
    }

    #[test]
    fn adjugate_1x1() {
        assert_eq!(Mat1::from_rows([[5]]).adjugate(), Mat1::from_rows([[1]]));
        assert_eq!(Mat1::from_rows([[4.0]]).inverse(), Some(Mat1::from_rows([[0.25]])));
    }

    #[test]
    fn inverse_2x2() {
        let mat = Matrix::from_rows([[5.0, 2.0], [7.0, 9.0]]);
        let inv = mat.inverse().unwrap();
        assert_eq!(inv, Matrix::from_rows([[9.0, -2.0], [-7.0, 5.0]]) / 31.0);
    }

    #[test]
    fn singular() {
        let mat = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [1.0, 2.0, 3.0]]);
        assert_eq!(mat.determinant(), 0.0);
        assert!(mat.inverse().is_none());
        assert!(inverse(&mat.transposed()).is_none());
    }

    #[test]
    fn length_of_vectors() {
        let v = Matrix::from_rows([[1.0f64, 2.0]]);
        assert_eq!(length(&v), 5.0f64.sqrt());
        assert_eq!(length(&v.transposed()), 5.0f64.sqrt());
        assert_eq!(length(&Matrix::from_rows([[-3.0f32]])), 3.0);
    }

    #[test]
    fn hermitian_of_real() {
        let mat = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(hermitian(&mat), mat.transpose());
        assert_eq!(hermitian(&mat.transposed()), mat);
    }

    #[test]
    fn rk4_exponential_decay() {
        // x' = -x has the solution x(t) = x(0) * exp(-t).
        let decay = |x: &Matrix<f64, 1, 1>| -*x;
        let dt = 0.1;
        let x = rk4(Matrix::from_rows([[1.0]]), dt, decay);
        assert!((x[0] - (-dt).exp()).abs() < 1e-6, "{} vs {}", x[0], (-dt).exp());

        // The 4th-order Taylor polynomial of exp(-dt) is exactly what one step computes.
        let taylor = 1.0 - dt + dt * dt / 2.0 - dt * dt * dt / 6.0 + dt * dt * dt * dt / 24.0;
        assert!((x[0] - taylor).abs() < 1e-15);

        let mut x = Matrix::from_rows([[2.0, -3.0]]);
        for _ in 0..20 {
            x = rk4(x, 0.05, decay_row);
        }
        let expected = (-1.0f64).exp();
        assert!((x[0] - 2.0 * expected).abs() < 1e-6);
        assert!((x[1] + 3.0 * expected).abs() < 1e-6);
    }

    fn decay_row(x: &Matrix<f64, 1, 2>) -> Matrix<f64, 1, 2> {
        -*x
    }

    #[test]
    fn free_helpers() {
        assert_eq!(identity::<i32, 3>(), Mat3::identity());
        assert_eq!(determinant(&identity::<f64, 7>()), 1.0);

        let mat = Matrix::from_rows([[1, 2, 3]]);
        let t = transposed(&mat);
        assert_eq!(t, Matrix::from_rows([[1], [2], [3]]));
        assert!(std::ptr::eq(transposed(t), &mat));
    }
}
