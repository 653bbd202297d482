//! The element access contract shared by matrices and views.

use crate::{mask::Mask, Matrix, Transposed, View};

/// Read access to the elements of an `R`x`C` matrix-like object.
///
/// This is implemented by [`Matrix`], [`View`], [`Transposed`], and references to any of them.
/// The arithmetic operators and the functions in this crate's determinant engine are written
/// against this trait, so they work the same on owned matrices and on arbitrarily nested views.
///
/// Dimensions are part of the trait's type, so shape mismatches are type errors.
pub trait Access<const R: usize, const C: usize> {
    /// The element type.
    type Elem;

    /// Returns a reference to the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= R` or `col >= C`.
    fn elem(&self, row: usize, col: usize) -> &Self::Elem;

    /// Returns the number of rows (`R`).
    #[inline]
    fn rows(&self) -> usize {
        R
    }

    /// Returns the number of columns (`C`).
    #[inline]
    fn columns(&self) -> usize {
        C
    }

    /// Copies the elements into a new, owned [`Matrix`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use matview::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// let col = mat.column_vector(1).to_matrix();
    /// assert_eq!(col, Matrix::from_rows([[2], [5]]));
    /// ```
    fn to_matrix(&self) -> Matrix<Self::Elem, R, C>
    where
        Self::Elem: Copy,
    {
        Matrix::from_fn(|row, col| *self.elem(row, col))
    }
}

/// Write access to the elements of an `R`x`C` matrix-like object.
pub trait AccessMut<const R: usize, const C: usize>: Access<R, C> {
    /// Returns a mutable reference to the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= R` or `col >= C`.
    fn elem_mut(&mut self, row: usize, col: usize) -> &mut Self::Elem;

    /// Overwrites the element at `(row, col)` with `value`.
    #[inline]
    fn set(&mut self, row: usize, col: usize, value: Self::Elem) {
        *self.elem_mut(row, col) = value;
    }

    /// Overwrites every element with the corresponding element of `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matview::*;
    /// let mut mat = Mat3::<i32>::ZERO;
    /// mat.submatrix_mut::<2, 2>(1, 0).assign(&Mat2::identity());
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 0, 0],
    ///     [1, 0, 0],
    ///     [0, 1, 0],
    /// ]));
    /// ```
    fn assign<A>(&mut self, source: &A)
    where
        A: Access<R, C, Elem = Self::Elem> + ?Sized,
        Self::Elem: Copy,
    {
        for row in 0..R {
            for col in 0..C {
                *self.elem_mut(row, col) = *source.elem(row, col);
            }
        }
    }
}

/// Handles that can be narrowed into sub-views without copying.
///
/// Implemented for `&Matrix`, `&mut Matrix`, [`View`] and [`Transposed`]. All methods consume the
/// handle, which is cheap: shared handles are [`Copy`], and mutable handles can be reborrowed
/// with [`Viewable::reborrow`] (or [`View::by_mut`] and [`Transposed::by_mut`]) first.
///
/// Every view created through this trait addresses the same storage as the handle it was created
/// from, so writes through a mutable view land in the original [`Matrix`].
pub trait Viewable<const R: usize, const C: usize>: Access<R, C> + Sized {
    /// The handle type returned when selecting an `SR`x`SC` region.
    type Sub<const SR: usize, const SC: usize>: Viewable<SR, SC, Elem = Self::Elem>;

    /// The handle type returned by [`Viewable::transposed`].
    type Transpose: Viewable<C, R, Elem = Self::Elem>;

    /// The handle type returned by [`Viewable::reborrow`].
    type Reborrow<'b>: Viewable<R, C, Elem = Self::Elem>
    where
        Self: 'b;

    /// Creates a handle to the same elements that borrows `self` instead of consuming it.
    fn reborrow(&mut self) -> Self::Reborrow<'_>;

    /// Selects the `SR`x`SC` region whose top-left element is at `(row, col)`.
    ///
    /// Requesting a region larger than `R`x`C` is rejected at compile time:
    ///
    /// ```compile_fail
    /// # use matview::*;
    /// let mat = Mat2::<i32>::ZERO;
    /// let _ = mat.transposed().submatrix::<3, 1>(0, 0);
    /// ```
    ///
    /// ```compile_fail
    /// # use matview::*;
    /// let mat = Mat3::<i32>::ZERO;
    /// let _ = mat.submatrix::<2, 2>(0, 0).submatrix::<1, 3>(0, 0);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the region extends past the last row or column.
    fn submatrix<const SR: usize, const SC: usize>(self, row: usize, col: usize) -> Self::Sub<SR, SC>;

    /// Selects every row except `row` and every column except `col`.
    ///
    /// `SR` and `SC` must be `R - 1` and `C - 1`, and the matrix must be at least 2x2. Both
    /// conditions are checked at compile time:
    ///
    /// ```compile_fail
    /// # use matview::*;
    /// let mat = Matrix::from_rows([[1]]);
    /// let _ = mat.row_vector(0).minor::<0, 0>(0, 0);
    /// ```
    ///
    /// ```compile_fail
    /// # use matview::*;
    /// let mat = Mat3::<i32>::ZERO;
    /// let _ = mat.transposed().minor::<2, 1>(0, 0);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `row >= R` or `col >= C`.
    fn minor<const SR: usize, const SC: usize>(self, row: usize, col: usize) -> Self::Sub<SR, SC>;

    /// Swaps the roles of rows and columns.
    fn transposed(self) -> Self::Transpose;

    /// Selects row `row` as a `1`x`C` view.
    fn row_vector(self, row: usize) -> Self::Sub<1, C> {
        self.submatrix::<1, C>(row, 0)
    }

    /// Selects column `col` as an `R`x`1` view.
    fn column_vector(self, col: usize) -> Self::Sub<R, 1> {
        self.submatrix::<R, 1>(0, col)
    }
}

impl<A, const R: usize, const C: usize> Access<R, C> for &A
where
    A: Access<R, C> + ?Sized,
{
    type Elem = A::Elem;

    #[inline]
    fn elem(&self, row: usize, col: usize) -> &Self::Elem {
        (**self).elem(row, col)
    }
}

impl<A, const R: usize, const C: usize> Access<R, C> for &mut A
where
    A: Access<R, C> + ?Sized,
{
    type Elem = A::Elem;

    #[inline]
    fn elem(&self, row: usize, col: usize) -> &Self::Elem {
        (**self).elem(row, col)
    }
}

impl<A, const R: usize, const C: usize> AccessMut<R, C> for &mut A
where
    A: AccessMut<R, C> + ?Sized,
{
    #[inline]
    fn elem_mut(&mut self, row: usize, col: usize) -> &mut Self::Elem {
        (**self).elem_mut(row, col)
    }
}

impl<'a, T, const R: usize, const C: usize> Viewable<R, C> for &'a Matrix<T, R, C> {
    type Sub<const SR: usize, const SC: usize> = View<Self, R, C, SR, SC>;
    type Transpose = Transposed<Self, C, R>;
    type Reborrow<'b> = &'b Matrix<T, R, C> where Self: 'b;

    fn reborrow(&mut self) -> Self::Reborrow<'_> {
        *self
    }

    fn submatrix<const SR: usize, const SC: usize>(self, row: usize, col: usize) -> Self::Sub<SR, SC> {
        check_submatrix::<R, C, SR, SC>();
        View::new(self, Mask::FULL.range(row, SR), Mask::FULL.range(col, SC))
    }

    fn minor<const SR: usize, const SC: usize>(self, row: usize, col: usize) -> Self::Sub<SR, SC> {
        check_minor::<R, C, SR, SC>();
        View::new(self, Mask::FULL.without(row), Mask::FULL.without(col))
    }

    fn transposed(self) -> Self::Transpose {
        Transposed::new(self)
    }
}

impl<'a, T, const R: usize, const C: usize> Viewable<R, C> for &'a mut Matrix<T, R, C> {
    type Sub<const SR: usize, const SC: usize> = View<Self, R, C, SR, SC>;
    type Transpose = Transposed<Self, C, R>;
    type Reborrow<'b> = &'b mut Matrix<T, R, C> where Self: 'b;

    fn reborrow(&mut self) -> Self::Reborrow<'_> {
        &mut **self
    }

    fn submatrix<const SR: usize, const SC: usize>(self, row: usize, col: usize) -> Self::Sub<SR, SC> {
        check_submatrix::<R, C, SR, SC>();
        View::new(self, Mask::FULL.range(row, SR), Mask::FULL.range(col, SC))
    }

    fn minor<const SR: usize, const SC: usize>(self, row: usize, col: usize) -> Self::Sub<SR, SC> {
        check_minor::<R, C, SR, SC>();
        View::new(self, Mask::FULL.without(row), Mask::FULL.without(col))
    }

    fn transposed(self) -> Self::Transpose {
        Transposed::new(self)
    }
}

/// Compile-time bounds check for `submatrix::<SR, SC>` on an `R`x`C` handle.
#[inline(always)]
pub(crate) fn check_submatrix<const R: usize, const C: usize, const SR: usize, const SC: usize>() {
    const {
        assert!(SR > 0 && SC > 0, "submatrix dimensions must be positive");
        assert!(SR <= R && SC <= C, "submatrix is larger than its parent");
    }
}

/// Compile-time shape check for `minor::<SR, SC>` on an `R`x`C` handle.
#[inline(always)]
pub(crate) fn check_minor<const R: usize, const C: usize, const SR: usize, const SC: usize>() {
    const {
        assert!(R > 1 && C > 1, "minor requires a matrix of at least 2x2");
        assert!(SR + 1 == R && SC + 1 == C, "minor must drop exactly one row and one column");
    }
}
