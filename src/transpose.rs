use std::ops::{Index, IndexMut};

use crate::{
    access::{check_minor, check_submatrix},
    Access, AccessMut, Viewable,
};

/// An `R`x`C` view that reads the `C`x`R` handle `P` with rows and columns swapped.
///
/// Created by [`Matrix::transposed`][crate::Matrix::transposed] and [`Viewable::transposed`].
/// Element `(i, j)` of the view is element `(j, i)` of `P`. No elements are copied.
///
/// Narrowing a transposed view narrows the underlying handle with swapped arguments and
/// transposes the result, so `m.transposed().submatrix(r, c)` and
/// `m.submatrix(c, r).transposed()` address the same elements.
/// Transposing a [`Transposed`] returns the original handle.
///
/// # Examples
///
/// ```
/// # use matview::*;
/// let mut mat = Matrix::from_rows([
///     [1, 2, 3],
///     [4, 5, 6],
/// ]);
/// let t = mat.transposed();
/// assert_eq!(t, Matrix::from_rows([
///     [1, 4],
///     [2, 5],
///     [3, 6],
/// ]));
///
/// mat.transposed_mut().row_vector(2).set(0, 1, 60);
/// assert_eq!(mat[(1, 2)], 60);
/// ```
#[derive(Clone, Copy)]
pub struct Transposed<P, const R: usize, const C: usize>(P);

impl<P, const R: usize, const C: usize> Transposed<P, R, C>
where
    P: Access<C, R>,
{
    pub(crate) fn new(parent: P) -> Self {
        Self(parent)
    }

    /// Returns the handle this view reads from.
    pub fn into_inner(self) -> P {
        self.0
    }

    /// Mutably borrows this view, so that mutable sub-views can be created without consuming it.
    ///
    /// Shared transposed views are [`Copy`] and don't need this.
    pub fn by_mut(&mut self) -> Transposed<P::Reborrow<'_>, R, C>
    where
        P: Viewable<C, R>,
    {
        Transposed(self.0.reborrow())
    }
}

impl<P, const R: usize, const C: usize> Access<R, C> for Transposed<P, R, C>
where
    P: Access<C, R>,
{
    type Elem = P::Elem;

    #[inline]
    fn elem(&self, row: usize, col: usize) -> &Self::Elem {
        self.0.elem(col, row)
    }
}

impl<P, const R: usize, const C: usize> AccessMut<R, C> for Transposed<P, R, C>
where
    P: AccessMut<C, R>,
{
    #[inline]
    fn elem_mut(&mut self, row: usize, col: usize) -> &mut Self::Elem {
        self.0.elem_mut(col, row)
    }
}

impl<P, const R: usize, const C: usize> Viewable<R, C> for Transposed<P, R, C>
where
    P: Viewable<C, R>,
{
    type Sub<const SR: usize, const SC: usize> = Transposed<P::Sub<SC, SR>, SR, SC>;
    type Transpose = P;
    type Reborrow<'b> = Transposed<P::Reborrow<'b>, R, C> where Self: 'b;

    fn reborrow(&mut self) -> Self::Reborrow<'_> {
        self.by_mut()
    }

    fn submatrix<const SR: usize, const SC: usize>(self, row: usize, col: usize) -> Self::Sub<SR, SC> {
        check_submatrix::<R, C, SR, SC>();
        Transposed(self.0.submatrix::<SC, SR>(col, row))
    }

    fn minor<const SR: usize, const SC: usize>(self, row: usize, col: usize) -> Self::Sub<SR, SC> {
        check_minor::<R, C, SR, SC>();
        Transposed(self.0.minor::<SC, SR>(col, row))
    }

    fn transposed(self) -> Self::Transpose {
        self.0
    }
}

impl<P, const R: usize, const C: usize> Index<(usize, usize)> for Transposed<P, R, C>
where
    P: Access<C, R>,
{
    type Output = P::Elem;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        self.elem(row, col)
    }
}

impl<P, const R: usize, const C: usize> IndexMut<(usize, usize)> for Transposed<P, R, C>
where
    P: AccessMut<C, R>,
{
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        self.elem_mut(row, col)
    }
}

/// Flat, row-major indexing in the transposed coordinates. A transposed row vector indexes like
/// the row vector itself.
impl<P, const R: usize, const C: usize> Index<usize> for Transposed<P, R, C>
where
    P: Access<C, R>,
{
    type Output = P::Elem;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        assert!(index < R * C, "index {} out of bounds for {}x{} view", index, R, C);
        self.elem(index / C, index % C)
    }
}

impl<P, const R: usize, const C: usize> IndexMut<usize> for Transposed<P, R, C>
where
    P: AccessMut<C, R>,
{
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        assert!(index < R * C, "index {} out of bounds for {}x{} view", index, R, C);
        self.elem_mut(index / C, index % C)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Access, AccessMut, Mat3, Matrix, Viewable};

    fn numbered<const R: usize, const C: usize>() -> Matrix<i32, R, C> {
        Matrix::from_fn(|row, col| (row * 10 + col) as i32)
    }

    #[test]
    fn elements() {
        let mat = numbered::<2, 3>();
        let t = mat.transposed();
        assert_eq!(t.rows(), 3);
        assert_eq!(t.columns(), 2);
        for row in 0..3 {
            for col in 0..2 {
                assert_eq!(t[(row, col)], mat[(col, row)]);
            }
        }
        assert_eq!(t.to_matrix(), mat.transpose());
    }

    #[test]
    fn double_transpose() {
        let mat = numbered::<2, 4>();
        let back = mat.transposed().transposed();
        assert!(std::ptr::eq(back, &mat));
        assert_eq!(*back, mat);
    }

    #[test]
    fn submatrix_commutes() {
        let mat = numbered::<4, 5>();
        let a = mat.transposed().submatrix::<2, 3>(1, 0);
        let b = mat.submatrix::<3, 2>(0, 1).transposed();
        assert_eq!(a, b);
        #[rustfmt::skip]
        assert_eq!(a, Matrix::from_rows([
            [1, 11, 21],
            [2, 12, 22],
        ]));
    }

    #[test]
    fn vectors_of_transposed() {
        let mat = numbered::<3, 3>();
        let t = mat.transposed();
        assert_eq!(t.row_vector(1), mat.column_vector(1).transposed());
        assert_eq!(t.column_vector(2), Matrix::from_rows([[20], [21], [22]]));
    }

    #[test]
    fn minor_of_transposed() {
        let mat = numbered::<3, 3>();
        let a = mat.transposed().minor::<2, 2>(0, 1);
        let b = mat.minor::<2, 2>(1, 0).transposed();
        assert_eq!(a, b);
        assert_eq!(a, Matrix::from_rows([[1, 21], [2, 22]]));
    }

    #[test]
    fn transposed_view_of_view() {
        let mat = numbered::<4, 4>();
        let t = mat.minor::<3, 3>(0, 0).transposed();
        assert_eq!(t[(0, 2)], 31);
        assert_eq!(t.transposed(), mat.minor::<3, 3>(0, 0));
    }

    #[test]
    fn write_through() {
        let mut mat = Mat3::<i32>::ZERO;
        {
            let mut t = mat.transposed_mut();
            t[(0, 2)] = 1;
            t.by_mut().column_vector(1).set(2, 0, 2);
            t.minor::<2, 2>(0, 0).set(0, 1, 3);
        }
        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [0, 0, 0],
            [0, 0, 2],
            [1, 3, 0],
        ]));
    }

    #[test]
    fn flat_index() {
        let mut v = Matrix::from_rows([[1, 2, 3]]);
        assert_eq!(v.transposed()[1], 2);
        assert_eq!(v.transposed()[2], v[2]);

        let mat = numbered::<2, 3>();
        let t = mat.transposed();
        assert_eq!(t[1], mat[(1, 0)]);
        assert_eq!(t[4], mat[(0, 2)]);
        assert_eq!(mat.row_vector(1).transposed()[2], 12);

        v.transposed_mut()[0] = 7;
        assert_eq!(v, Matrix::from_rows([[7, 2, 3]]));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn flat_index_out_of_bounds() {
        let v = Matrix::from_rows([[1, 2, 3]]);
        let _ = v.transposed()[3];
    }

    #[test]
    fn nested_composition() {
        // A transposed view of a minor of a submatrix of a transposed view.
        let mut mat = numbered::<5, 5>();
        {
            let mut view = mat
                .transposed_mut()
                .submatrix::<4, 3>(1, 1)
                .minor::<3, 2>(1, 0)
                .transposed();
            assert_eq!(view.rows(), 2);
            assert_eq!(view.columns(), 3);
            assert_eq!(view[(0, 0)], 21);
            *view.elem_mut(1, 2) = -1;
        }
        assert_eq!(mat[(3, 4)], -1);
    }
}
