//! Operator impls that only make sense on owned matrices: indexing, negation and in-place
//! arithmetic.

use std::ops::{AddAssign, DivAssign, Index, IndexMut, MulAssign, Neg, SubAssign};

use crate::{Access, Matrix, Number};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

/// Flat, row-major indexing. For row and column vectors this is the element index.
impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

/// Element-wise negation.
impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg,
{
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// In-place element-wise addition of any matrix-like object of the same shape.
impl<T, Rhs, const R: usize, const C: usize> AddAssign<Rhs> for Matrix<T, R, C>
where
    T: Number,
    Rhs: Access<R, C, Elem = T>,
{
    fn add_assign(&mut self, rhs: Rhs) {
        for (row, elems) in self.0.iter_mut().enumerate() {
            for (col, elem) in elems.iter_mut().enumerate() {
                *elem = *elem + *rhs.elem(row, col);
            }
        }
    }
}

/// In-place element-wise subtraction of any matrix-like object of the same shape.
impl<T, Rhs, const R: usize, const C: usize> SubAssign<Rhs> for Matrix<T, R, C>
where
    T: Number,
    Rhs: Access<R, C, Elem = T>,
{
    fn sub_assign(&mut self, rhs: Rhs) {
        for (row, elems) in self.0.iter_mut().enumerate() {
            for (col, elem) in elems.iter_mut().enumerate() {
                *elem = *elem - *rhs.elem(row, col);
            }
        }
    }
}

/// In-place multiplication with a scalar.
impl<T, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: T) {
        for elem in self.as_mut_slice() {
            *elem = *elem * rhs;
        }
    }
}

/// In-place division by a scalar.
impl<T, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C>
where
    T: Number,
{
    fn div_assign(&mut self, rhs: T) {
        for elem in self.as_mut_slice() {
            *elem = *elem / rhs;
        }
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

#[cfg(test)]
mod tests {
    use crate::{Mat2, Matrix};

    #[test]
    fn compound_assignment() {
        let mut mat = Matrix::from_rows([[1, 2], [3, 4]]);
        mat += Mat2::identity();
        assert_eq!(mat, Matrix::from_rows([[2, 2], [3, 5]]));

        let other = Matrix::from_rows([[1, 1], [1, 1]]);
        mat -= &other;
        assert_eq!(mat, Matrix::from_rows([[1, 1], [2, 4]]));

        mat -= other.transposed();
        assert_eq!(mat, Matrix::from_rows([[0, 0], [1, 3]]));

        mat *= 3;
        assert_eq!(mat, Matrix::from_rows([[0, 0], [3, 9]]));

        mat /= 3;
        assert_eq!(mat, Matrix::from_rows([[0, 0], [1, 3]]));
    }

    #[test]
    fn add_assign_from_own_view() {
        let mut mat = Matrix::from_rows([[1, 2], [3, 4]]);
        let copy = mat;
        mat += copy.transposed();
        assert_eq!(mat, Matrix::from_rows([[2, 5], [5, 8]]));
    }

    #[test]
    fn negation() {
        let mat = Matrix::from_rows([[1, -2]]);
        assert_eq!(-mat, Matrix::from_rows([[-1, 2]]));
    }
}
