//! [`Debug`][fmt::Debug] and [`Display`][fmt::Display] for matrices and views.
//!
//! Views format exactly like the [`Matrix`] they would materialize into.

use std::fmt;

use crate::{Access, Matrix, Transposed, View};

/// `{:?}` prints a list of rows; `{:#?}` puts every row on its own line.
fn debug<const R: usize, const C: usize, A>(mat: &A, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    A: Access<R, C>,
    A::Elem: fmt::Debug,
{
    struct FormatRow<'a, A, const R: usize, const C: usize>(&'a A, usize);
    impl<'a, A, const R: usize, const C: usize> fmt::Debug for FormatRow<'a, A, R, C>
    where
        A: Access<R, C>,
        A::Elem: fmt::Debug,
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "[")?;
            for col in 0..C {
                if col != 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:?}", self.0.elem(self.1, col))?;
            }
            write!(f, "]")?;
            Ok(())
        }
    }

    let mut list = f.debug_list();
    for row in 0..R {
        list.entry(&FormatRow::<A, R, C>(mat, row));
    }
    list.finish()
}

/// Writes `elems` separated by `, `, forwarding the formatter's flags (eg. precision) to each.
fn display_seq<'a, T, I>(f: &mut fmt::Formatter<'_>, elems: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for (i, elem) in elems.into_iter().enumerate() {
        if i != 0 {
            write!(f, ", ")?;
        }
        fmt::Display::fmt(elem, f)?;
    }
    Ok(())
}

/// Scalars print as `[v]`, row vectors as `[v0, v1]`, column vectors as `[v0, v1]^T` and
/// everything else as `[[row0], [row1]]`.
fn display<const R: usize, const C: usize, A>(mat: &A, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    A: Access<R, C>,
    A::Elem: fmt::Display,
{
    if C == 1 && R > 1 {
        write!(f, "[")?;
        display_seq(f, (0..R).map(|row| mat.elem(row, 0)))?;
        return write!(f, "]^T");
    }
    if R == 1 {
        write!(f, "[")?;
        display_seq(f, (0..C).map(|col| mat.elem(0, col)))?;
        return write!(f, "]");
    }

    write!(f, "[")?;
    for row in 0..R {
        if row != 0 {
            write!(f, ", ")?;
        }
        write!(f, "[")?;
        display_seq(f, (0..C).map(|col| mat.elem(row, col)))?;
        write!(f, "]")?;
    }
    write!(f, "]")
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug::<R, C, _>(self, f)
    }
}

impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::<R, C, _>(self, f)
    }
}

impl<P, const PR: usize, const PC: usize, const R: usize, const C: usize> fmt::Debug
    for View<P, PR, PC, R, C>
where
    P: Access<PR, PC>,
    P::Elem: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug::<R, C, _>(self, f)
    }
}

impl<P, const PR: usize, const PC: usize, const R: usize, const C: usize> fmt::Display
    for View<P, PR, PC, R, C>
where
    P: Access<PR, PC>,
    P::Elem: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::<R, C, _>(self, f)
    }
}

impl<P, const R: usize, const C: usize> fmt::Debug for Transposed<P, R, C>
where
    P: Access<C, R>,
    P::Elem: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug::<R, C, _>(self, f)
    }
}

impl<P, const R: usize, const C: usize> fmt::Display for Transposed<P, R, C>
where
    P: Access<C, R>,
    P::Elem: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::<R, C, _>(self, f)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Mat2, Matrix, Viewable};

    #[test]
    fn display_shapes() {
        assert_eq!(Matrix::from_rows([[7]]).to_string(), "[7]");
        assert_eq!(Matrix::from_rows([[1, 2, 3]]).to_string(), "[1, 2, 3]");
        assert_eq!(Matrix::from_rows([[1], [2], [3]]).to_string(), "[1, 2, 3]^T");
        assert_eq!(
            Matrix::from_rows([[1, 2], [3, 4], [5, 6]]).to_string(),
            "[[1, 2], [3, 4], [5, 6]]",
        );
    }

    #[test]
    fn display_views() {
        let mat = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(mat.row_vector(1).to_string(), "[3, 4]");
        assert_eq!(mat.column_vector(1).to_string(), "[2, 4]^T");
        assert_eq!(mat.minor::<1, 1>(0, 0).to_string(), "[4]");
        assert_eq!(mat.transposed().to_string(), "[[1, 3], [2, 4]]");
        assert_eq!(mat.row_vector(0).transposed().to_string(), "[1, 2]^T");
    }

    #[test]
    fn display_precision() {
        let mat = Mat2::from_rows([[1.0, 0.5], [0.25, 2.0]]);
        assert_eq!(format!("{:.2}", mat), "[[1.00, 0.50], [0.25, 2.00]]");
    }

    #[test]
    fn debug() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");
        assert_eq!(format!("{:#?}", mat), "[\n    [0, 1],\n    [2, 3],\n]");
        assert_eq!(format!("{:?}", mat.transposed()), "[[0, 2], [1, 3]]");
        assert_eq!(format!("{:?}", mat.column_vector(0)), "[[0], [2]]");
    }
}
