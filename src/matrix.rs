use std::array;

use crate::{Access, AccessMut, Number, One, Transposed, View, Viewable, Zero};

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

/// A matrix with a single row.
pub type RowVector<T, const N: usize> = Matrix<T, 1, N>;
/// A matrix with a single column.
pub type ColumnVector<T, const N: usize> = Matrix<T, N, 1>;

/// A 2-element column vector with [`f32`] elements.
pub type Vec2f = ColumnVector<f32, 2>;
/// A 3-element column vector with [`f32`] elements.
pub type Vec3f = ColumnVector<f32, 3>;
/// A 4-element column vector with [`f32`] elements.
pub type Vec4f = ColumnVector<f32, 4>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// Both dimensions are part of the type and must be non-zero; this is checked at compile time.
///
/// ```compile_fail
/// # use matview::*;
/// let _ = Matrix::<f32, 0, 3>::from_fn(|_, _| 0.0);
/// ```
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix from nested arrays.
/// - [`Matrix::from_row_major`] takes all `R * C` elements as one flat array.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - [`Matrix::from_access`] copies the elements of any view.
/// - For square matrices, [`Matrix::from_diagonal`] and [`Matrix::identity`].
/// - [`Matrix::ZERO`] and the [`Default`] impl produce an all-zero matrix.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(row, col)` tuples. Indices are 0-based.
///
/// ```
/// # use matview::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing with a single `usize` addresses the row-major element buffer. This makes row and
/// column vectors indexable like a plain sequence:
///
/// ```
/// # use matview::*;
/// let col = ColumnVector::from_rows([[1], [2], [3]]);
/// assert_eq!(col[2], 3);
/// let row = RowVector::from_rows([[1, 2, 3]]);
/// assert_eq!(row[2], 3);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead.
///
/// # Views
///
/// [`Matrix::submatrix`], [`Matrix::minor`], [`Matrix::row_vector`], [`Matrix::column_vector`]
/// and [`Matrix::transposed`] borrow the matrix and return a [`View`] or [`Transposed`] that
/// reads (and, for the `_mut` variants, writes) the matrix's elements in place.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

#[inline(always)]
const fn check_dimensions<const R: usize, const C: usize>() {
    const {
        assert!(R > 0 && C > 0, "matrix dimensions must be positive");
    }
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The number of rows.
    pub const ROWS: usize = R;
    /// The number of columns.
    pub const COLUMNS: usize = C;

    /// Creates a [`Matrix`] from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matview::*;
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
    pub const fn from_rows(rows: [[T; C]; R]) -> Self {
        check_dimensions::<R, C>();
        Self(rows)
    }

    /// Creates a [`Matrix`] from an array of columns.
    pub fn from_columns(columns: [[T; R]; C]) -> Self {
        Matrix::from_rows(columns).transpose()
    }

    /// Creates a [`Matrix`] from its `R * C` elements in row-major order.
    ///
    /// Passing an array of the wrong length is a compile-time error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matview::*;
    /// let mat = Matrix::<_, 2, 2>::from_row_major([5.0, 2.0, 7.0, 9.0]);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [5.0, 2.0],
    ///     [7.0, 9.0],
    /// ]));
    /// ```
    pub fn from_row_major<const N: usize>(elems: [T; N]) -> Self {
        const {
            assert!(N == R * C, "element count does not match the matrix dimensions");
        }
        let mut elems = elems.into_iter();
        // `N == R * C`, so the iterator yields exactly one element per call.
        Self::from_fn(|_, _| elems.next().expect("element count checked at compile time"))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// Elements are produced in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matview::*;
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
        check_dimensions::<R, C>();
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Copies the elements of any matrix-like object of the same shape.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matview::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// let t = Matrix::from_access(&mat.transposed());
    /// assert_eq!(t, mat.transpose());
    /// ```
    pub fn from_access<A>(source: &A) -> Self
    where
        A: Access<R, C, Elem = T> + ?Sized,
        T: Copy,
    {
        Self::from_fn(|row, col| *source.elem(row, col))
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// This is also the way to convert between element types.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matview::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let mat = mat.map(|i| f64::from(i) * 0.5);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0.0, 0.5, 1.0],
    ///     [1.5, 2.0, 2.5],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix, returning a new matrix.
    ///
    /// Use [`Matrix::transposed`] to get a transposed *view* instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matview::*;
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
    pub fn transpose(self) -> Matrix<T, C, R> {
        let mut rows = self.0.map(|row| row.into_iter());
        // Every row iterator yields exactly `C` elements, one per output row.
        Matrix(array::from_fn(|_| {
            array::from_fn(|row| rows[row].next().expect("row length is C"))
        }))
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matview::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|r| r.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Returns a reference to row `row`.
    ///
    /// Together with array indexing this gives `mat.row(i)[j]` chained access.
    ///
    /// # Panics
    ///
    /// Panics if `row >= R`.
    #[inline]
    pub fn row(&self, row: usize) -> &[T; C] {
        &self.0[row]
    }

    /// Returns a mutable reference to row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= R`.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [T; C] {
        &mut self.0[row]
    }

    /// Returns the `R * C` elements as a slice in row-major order.
    ///
    /// This is the layout expected by graphics APIs that accept row-major ("transposed") matrix
    /// uniforms. [`bytemuck`] can be used to reinterpret the matrix as bytes as well.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matview::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.as_slice(), &[1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Returns the `R * C` elements as a mutable slice in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    /// Returns a pointer to the first of the `R * C` contiguous row-major elements.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.as_slice().as_ptr()
    }

    /// Returns the rows as nested arrays.
    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] {
        self.0
    }

    /// Returns a read-only view of the `SR`x`SC` region starting at `(row, col)`.
    ///
    /// `SR <= R` and `SC <= C` are checked at compile time.
    ///
    /// # Panics
    ///
    /// Panics if the region extends past the last row or column.
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
    /// let sub = mat.submatrix::<2, 2>(1, 1);
    /// assert_eq!(sub, Matrix::from_rows([
    ///     [5, 6],
    ///     [8, 9],
    /// ]));
    /// ```
    pub fn submatrix<const SR: usize, const SC: usize>(
        &self,
        row: usize,
        col: usize,
    ) -> View<&Self, R, C, SR, SC> {
        <&Self as Viewable<R, C>>::submatrix::<SR, SC>(self, row, col)
    }

    /// Returns a mutable view of the `SR`x`SC` region starting at `(row, col)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matview::*;
    /// let mut mat = Mat3::<i32>::ZERO;
    /// let mut sub = mat.submatrix_mut::<2, 2>(1, 1);
    /// sub[(0, 0)] = 1;
    /// sub[(1, 1)] = 2;
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 0, 0],
    ///     [0, 1, 0],
    ///     [0, 0, 2],
    /// ]));
    /// ```
    pub fn submatrix_mut<const SR: usize, const SC: usize>(
        &mut self,
        row: usize,
        col: usize,
    ) -> View<&mut Self, R, C, SR, SC> {
        <&mut Self as Viewable<R, C>>::submatrix::<SR, SC>(self, row, col)
    }

    /// Returns a read-only view of row `row`.
    pub fn row_vector(&self, row: usize) -> View<&Self, R, C, 1, C> {
        self.submatrix::<1, C>(row, 0)
    }

    /// Returns a mutable view of row `row`.
    pub fn row_vector_mut(&mut self, row: usize) -> View<&mut Self, R, C, 1, C> {
        self.submatrix_mut::<1, C>(row, 0)
    }

    /// Returns a read-only view of column `col`.
    pub fn column_vector(&self, col: usize) -> View<&Self, R, C, R, 1> {
        self.submatrix::<R, 1>(0, col)
    }

    /// Returns a mutable view of column `col`.
    pub fn column_vector_mut(&mut self, col: usize) -> View<&mut Self, R, C, R, 1> {
        self.submatrix_mut::<R, 1>(0, col)
    }

    /// Returns a read-only view of every element except those in row `row` and column `col`.
    ///
    /// `SR` and `SC` must be `R - 1` and `C - 1`; this and `R, C >= 2` are checked at compile time.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matview::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.minor::<1, 1>(0, 0), Matrix::from_rows([[4]]));
    /// ```
    pub fn minor<const SR: usize, const SC: usize>(
        &self,
        row: usize,
        col: usize,
    ) -> View<&Self, R, C, SR, SC> {
        <&Self as Viewable<R, C>>::minor::<SR, SC>(self, row, col)
    }

    /// Returns a mutable view of every element except those in row `row` and column `col`.
    pub fn minor_mut<const SR: usize, const SC: usize>(
        &mut self,
        row: usize,
        col: usize,
    ) -> View<&mut Self, R, C, SR, SC> {
        <&mut Self as Viewable<R, C>>::minor::<SR, SC>(self, row, col)
    }

    /// Returns a read-only transposed view of this matrix.
    ///
    /// Use [`Matrix::transpose`] to get a transposed copy instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matview::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    /// ]);
    /// let t = mat.transposed();
    /// assert_eq!(t[(2, 0)], 3);
    /// ```
    pub fn transposed(&self) -> Transposed<&Self, C, R> {
        Transposed::new(self)
    }

    /// Returns a mutable transposed view of this matrix.
    pub fn transposed_mut(&mut self) -> Transposed<&mut Self, C, R> {
        Transposed::new(self)
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = {
        check_dimensions::<R, C>();
        Self([[T::ZERO; C]; R])
    };
}

impl<T, const R: usize, const C: usize> Access<R, C> for Matrix<T, R, C> {
    type Elem = T;

    #[inline]
    fn elem(&self, row: usize, col: usize) -> &T {
        &self.0[row][col]
    }
}

impl<T, const R: usize, const C: usize> AccessMut<R, C> for Matrix<T, R, C> {
    #[inline]
    fn elem_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.0[row][col]
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns the `N`x`N` identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Multiplying any matrix
    /// with it returns that matrix unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matview::*;
    /// assert_eq!(Mat2::<i32>::identity(), Matrix::from_rows([
    ///     [1, 0],
    ///     [0, 1],
    /// ]));
    /// ```
    pub fn identity() -> Self
    where
        T: Zero + One,
    {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }

    /// Returns an array holding the diagonal elements of this square matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matview::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> [T; N]
    where
        T: Copy,
    {
        array::from_fn(|i| self.0[i][i])
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matview::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal(diag: [T; N]) -> Self
    where
        T: Zero + Copy,
    {
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use matview::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Mat3f::identity().trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Zero + Copy,
{
    /// Returns [`Matrix::ZERO`].
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat2x3::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
        assert_eq!(
            Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat2x3::from_row_major([1, 2, 3, 4, 5, 6]),
        );
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.into_diagonal(), [1, 2]);
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::identity()), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(Mat3::<i32>::default(), Mat3::ZERO);
        assert_eq!(Mat2x4::<u8>::ROWS, 2);
        assert_eq!(Mat2x4::<u8>::COLUMNS, 4);
    }

    #[test]
    fn row_major_layout() {
        let mut mat = Matrix::from_fn(|row, col| row * 3 + col);
        assert_eq!(mat.as_slice(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(mat.row(1), &[3, 4, 5]);
        assert_eq!(mat.row(1)[2], 5);

        mat.row_mut(0)[1] = 100;
        mat.as_mut_slice()[5] = 200;
        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [0, 100, 2],
            [3, 4, 200],
        ]));

        let raw = unsafe { std::slice::from_raw_parts(mat.as_ptr(), 6) };
        assert_eq!(raw, mat.as_slice());
    }

    #[test]
    fn bytemuck_upload() {
        let mat = Mat2f::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&mat));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);

        let vec = Vec3f::from_row_major([1.0, 2.0, 3.0]);
        assert_eq!(bytemuck::bytes_of(&vec).len(), 12);
    }

    #[test]
    fn vector_indexing() {
        let mut col = ColumnVector::<i32, 3>::from_row_major([1, 2, 3]);
        col[1] = 20;
        assert_eq!(col[(1, 0)], 20);

        let row = RowVector::<i32, 2>::from_row_major([4, 5]);
        assert_eq!(row[0], 4);
        assert_eq!(row[1], 5);
    }

    #[test]
    fn checked_access() {
        let mut mat = Matrix::from_rows([[0, 1, 2], [3, 4, 5]]);
        if let Some(elem) = mat.get_mut(1, 0) {
            *elem = 999;
        }
        assert!(mat.get_mut(2, 0).is_none());
        assert_eq!(mat.get(1, 0), Some(&999));
        assert_eq!(mat.get(0, 3), None);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let mat = Mat2::<i32>::ZERO;
        let _ = mat[(0, 2)];
    }

    #[test]
    fn transpose_roundtrip() {
        let mat = Matrix::from_fn(|row, col| (row, col));
        let t = mat.transpose();
        assert_eq!(t[(3, 1)], (1, 3));
        assert_eq!(t.transpose(), Matrix::<_, 2, 4>::from_fn(|row, col| (row, col)));
    }
}
