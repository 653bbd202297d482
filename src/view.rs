use std::ops::{Index, IndexMut};

use crate::{
    access::{check_minor, check_submatrix},
    mask::Mask,
    Access, AccessMut, Transposed, Viewable,
};

/// A non-owning `R`x`C` selection of the rows and columns of a `PR`x`PC` parent.
///
/// The parent `P` is a handle such as `&Matrix` or `&mut Matrix` (see [`Viewable`]), so a view
/// can never outlive the matrix it reads from, and a mutable view excludes every other access to
/// its matrix for as long as it lives.
///
/// The selected parent rows and columns need not be contiguous: [`Viewable::minor`] skips one of
/// each. Element `(i, j)` of the view is the element at the `i`-th selected parent row and the
/// `j`-th selected parent column; finding those is a linear scan over the parent's dimension.
///
/// Narrowing a view further ([`Viewable::submatrix`], [`Viewable::minor`]) produces another view
/// on the same parent, not a view of a view.
///
/// # Examples
///
/// ```
/// # use matview::*;
/// let mat = Matrix::from_rows([
///     [1, 2, 3],
///     [4, 5, 6],
///     [7, 8, 9],
/// ]);
/// let minor = mat.minor::<2, 2>(1, 1);
/// assert_eq!(minor, Matrix::from_rows([
///     [1, 3],
///     [7, 9],
/// ]));
///
/// // Views compose. This is the right column of the minor, which is parent column 2.
/// let col = minor.column_vector(1);
/// assert_eq!(col, Matrix::from_rows([[3], [9]]));
/// ```
#[derive(Clone, Copy)]
pub struct View<P, const PR: usize, const PC: usize, const R: usize, const C: usize> {
    parent: P,
    rows: Mask<PR>,
    columns: Mask<PC>,
}

impl<P, const PR: usize, const PC: usize, const R: usize, const C: usize> View<P, PR, PC, R, C>
where
    P: Access<PR, PC>,
{
    pub(crate) fn new(parent: P, rows: Mask<PR>, columns: Mask<PC>) -> Self {
        debug_assert_eq!(rows.count(), R);
        debug_assert_eq!(columns.count(), C);
        Self {
            parent,
            rows,
            columns,
        }
    }

    /// Borrows this view, so that it can be narrowed or transposed without consuming it.
    pub fn by_ref(&self) -> View<&P, PR, PC, R, C> {
        View {
            parent: &self.parent,
            rows: self.rows,
            columns: self.columns,
        }
    }

    /// Mutably borrows this view, so that mutable sub-views can be created without consuming it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matview::*;
    /// let mut mat = Mat3::<i32>::ZERO;
    /// let mut view = mat.submatrix_mut::<2, 3>(1, 0);
    /// view.by_mut().row_vector(0).set(0, 2, 5);
    /// view.by_mut().row_vector(1).set(0, 0, 7);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 0, 0],
    ///     [0, 0, 5],
    ///     [7, 0, 0],
    /// ]));
    /// ```
    pub fn by_mut(&mut self) -> View<&mut P, PR, PC, R, C> {
        View {
            parent: &mut self.parent,
            rows: self.rows,
            columns: self.columns,
        }
    }

    /// Returns the parent handle this view reads from.
    pub fn into_parent(self) -> P {
        self.parent
    }

    /// Maps a view coordinate to the parent coordinate it refers to.
    #[inline]
    fn locate(&self, row: usize, col: usize) -> (usize, usize) {
        assert!(
            row < R && col < C,
            "index ({}, {}) out of bounds for {}x{} view",
            row,
            col,
            R,
            C,
        );
        (self.rows.nth(row), self.columns.nth(col))
    }
}

impl<P, const PR: usize, const PC: usize, const R: usize, const C: usize> Access<R, C>
    for View<P, PR, PC, R, C>
where
    P: Access<PR, PC>,
{
    type Elem = P::Elem;

    #[inline]
    fn elem(&self, row: usize, col: usize) -> &Self::Elem {
        let (row, col) = self.locate(row, col);
        self.parent.elem(row, col)
    }
}

impl<P, const PR: usize, const PC: usize, const R: usize, const C: usize> AccessMut<R, C>
    for View<P, PR, PC, R, C>
where
    P: AccessMut<PR, PC>,
{
    #[inline]
    fn elem_mut(&mut self, row: usize, col: usize) -> &mut Self::Elem {
        let (row, col) = self.locate(row, col);
        self.parent.elem_mut(row, col)
    }
}

impl<P, const PR: usize, const PC: usize, const R: usize, const C: usize> Viewable<R, C>
    for View<P, PR, PC, R, C>
where
    P: Access<PR, PC>,
{
    type Sub<const SR: usize, const SC: usize> = View<P, PR, PC, SR, SC>;
    type Transpose = Transposed<Self, C, R>;
    type Reborrow<'b> = View<&'b mut P, PR, PC, R, C> where Self: 'b;

    fn reborrow(&mut self) -> Self::Reborrow<'_> {
        self.by_mut()
    }

    fn submatrix<const SR: usize, const SC: usize>(self, row: usize, col: usize) -> Self::Sub<SR, SC> {
        check_submatrix::<R, C, SR, SC>();
        View::new(
            self.parent,
            self.rows.range(row, SR),
            self.columns.range(col, SC),
        )
    }

    fn minor<const SR: usize, const SC: usize>(self, row: usize, col: usize) -> Self::Sub<SR, SC> {
        check_minor::<R, C, SR, SC>();
        View::new(self.parent, self.rows.without(row), self.columns.without(col))
    }

    fn transposed(self) -> Self::Transpose {
        Transposed::new(self)
    }
}

impl<P, const PR: usize, const PC: usize, const R: usize, const C: usize> Index<(usize, usize)>
    for View<P, PR, PC, R, C>
where
    P: Access<PR, PC>,
{
    type Output = P::Elem;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        self.elem(row, col)
    }
}

impl<P, const PR: usize, const PC: usize, const R: usize, const C: usize> IndexMut<(usize, usize)>
    for View<P, PR, PC, R, C>
where
    P: AccessMut<PR, PC>,
{
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        self.elem_mut(row, col)
    }
}

/// Flat, row-major indexing, matching [`Matrix`][crate::Matrix]'s. For row and column vector
/// views this is the element index.
impl<P, const PR: usize, const PC: usize, const R: usize, const C: usize> Index<usize>
    for View<P, PR, PC, R, C>
where
    P: Access<PR, PC>,
{
    type Output = P::Elem;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        self.elem(index / C, index % C)
    }
}

impl<P, const PR: usize, const PC: usize, const R: usize, const C: usize> IndexMut<usize>
    for View<P, PR, PC, R, C>
where
    P: AccessMut<PR, PC>,
{
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.elem_mut(index / C, index % C)
    }
}
