//! Builders for common 2D and 3D transformation matrices.
//!
//! All matrices are meant to be applied to column vectors (`matrix * vector`). The `_affine`
//! variants return a matrix that is one row and column larger, for use with homogeneous
//! coordinates, where the extra row and column are those of the identity matrix.
//!
//! Angles are in radians. Rotations are counterclockwise when looking at the rotation plane from
//! the side the remaining axis points towards.

use crate::{Access, AccessMut, Mat2, Mat3, Mat4, Matrix, Number, Trig};

#[inline(always)]
fn check_affine<const N: usize, const M: usize>() {
    const {
        assert!(M == N + 1, "affine matrices must have one more dimension than the transformed space");
    }
}

/// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane.
///
/// # Examples
///
/// ```
/// # use matview::*;
/// use std::f64::consts::FRAC_PI_2;
/// use approx::assert_abs_diff_eq;
///
/// let rot = rotation(FRAC_PI_2);
/// let v = rot * ColumnVector::from_rows([[1.0], [0.0]]);
/// assert_abs_diff_eq!(v, ColumnVector::from_rows([[0.0], [1.0]]), epsilon = 1e-9);
/// ```
pub fn rotation<T: Number + Trig>(angle: T) -> Mat2<T> {
    let (sin, cos) = (angle.sin(), angle.cos());
    #[rustfmt::skip]
    let mat = Matrix::from_rows([
        [cos, -sin],
        [sin,  cos],
    ]);
    mat
}

/// Creates a 3x3 matrix rotating 2D homogeneous coordinates counterclockwise.
pub fn rotation_affine<T: Number + Trig>(angle: T) -> Mat3<T> {
    rotation_xy(angle)
}

/// Creates a 3x3 matrix rotating 2D homogeneous coordinates counterclockwise around the point
/// `(x, y)`.
///
/// The pivot point is left unchanged by the transformation.
pub fn rotation_at<T: Number + Trig>(angle: T, x: T, y: T) -> Mat3<T> {
    let (sin, cos) = (angle.sin(), angle.cos());
    let (zero, one) = (T::ZERO, T::ONE);
    Matrix::from_rows([
        [cos, -sin, x - x * cos + y * sin],
        [sin, cos, y - x * sin - y * cos],
        [zero, zero, one],
    ])
}

/// Creates a 3x3 matrix rotating 3D vectors in the XY plane (around the Z axis).
pub fn rotation_xy<T: Number + Trig>(angle: T) -> Mat3<T> {
    let (sin, cos) = (angle.sin(), angle.cos());
    let (zero, one) = (T::ZERO, T::ONE);
    #[rustfmt::skip]
    let mat = Matrix::from_rows([
        [cos,  -sin, zero],
        [sin,  cos,  zero],
        [zero, zero, one],
    ]);
    mat
}

/// Creates a 3x3 matrix rotating 3D vectors in the XZ plane (around the Y axis).
pub fn rotation_xz<T: Number + Trig>(angle: T) -> Mat3<T> {
    let (sin, cos) = (angle.sin(), angle.cos());
    let (zero, one) = (T::ZERO, T::ONE);
    #[rustfmt::skip]
    let mat = Matrix::from_rows([
        [cos,  zero, -sin],
        [zero, one,  zero],
        [sin,  zero, cos],
    ]);
    mat
}

/// Creates a 3x3 matrix rotating 3D vectors in the YZ plane (around the X axis).
pub fn rotation_yz<T: Number + Trig>(angle: T) -> Mat3<T> {
    let (sin, cos) = (angle.sin(), angle.cos());
    let (zero, one) = (T::ZERO, T::ONE);
    #[rustfmt::skip]
    let mat = Matrix::from_rows([
        [one,  zero, zero],
        [zero, cos,  -sin],
        [zero, sin,  cos],
    ]);
    mat
}

/// Extends a 3x3 linear transformation to act on homogeneous coordinates.
fn affine3<T: Number>(linear: Mat3<T>) -> Mat4<T> {
    let mut out = Mat4::identity();
    out.submatrix_mut::<3, 3>(0, 0).assign(&linear);
    out
}

/// Like [`rotation_xy`], but for 3D homogeneous coordinates.
pub fn rotation_xy_affine<T: Number + Trig>(angle: T) -> Mat4<T> {
    affine3(rotation_xy(angle))
}

/// Like [`rotation_xz`], but for 3D homogeneous coordinates.
pub fn rotation_xz_affine<T: Number + Trig>(angle: T) -> Mat4<T> {
    affine3(rotation_xz(angle))
}

/// Like [`rotation_yz`], but for 3D homogeneous coordinates.
pub fn rotation_yz_affine<T: Number + Trig>(angle: T) -> Mat4<T> {
    affine3(rotation_yz(angle))
}

/// Creates an `N`x`N` matrix scaling each axis by the corresponding element of `scale`.
///
/// # Examples
///
/// ```
/// # use matview::*;
/// assert_eq!(scaling([2, 3]), Matrix::from_rows([
///     [2, 0],
///     [0, 3],
/// ]));
/// ```
pub fn scaling<T: Number, const N: usize>(scale: [T; N]) -> Matrix<T, N, N> {
    Matrix::from_diagonal(scale)
}

/// Creates an `M`x`M` matrix scaling homogeneous coordinates. `M` must be `N + 1`.
///
/// # Examples
///
/// ```
/// # use matview::*;
/// let mat: Mat3<i32> = scaling_affine([2, 3]);
/// assert_eq!(mat, Matrix::from_diagonal([2, 3, 1]));
/// ```
pub fn scaling_affine<T: Number, const N: usize, const M: usize>(scale: [T; N]) -> Matrix<T, M, M> {
    check_affine::<N, M>();
    Matrix::from_fn(|row, col| {
        if row != col {
            T::ZERO
        } else if row < N {
            scale[row]
        } else {
            T::ONE
        }
    })
}

/// Creates an `M`x`M` matrix translating homogeneous coordinates by `offset`. `M` must be
/// `N + 1`.
///
/// `offset` can be any column-shaped vector: a [`ColumnVector`][crate::ColumnVector], a column
/// view of a matrix, or a row vector passed as `&row.transposed()`.
///
/// # Examples
///
/// ```
/// # use matview::*;
/// let offset = ColumnVector::from_rows([[5], [6]]);
/// let mat: Mat3<i32> = translation::<_, 2, 3>(&offset);
/// assert_eq!(mat, Matrix::from_rows([
///     [1, 0, 5],
///     [0, 1, 6],
///     [0, 0, 1],
/// ]));
/// assert_eq!(mat * ColumnVector::from_rows([[1], [1], [1]]), Matrix::from_rows([[6], [7], [1]]));
///
/// let row = RowVector::from_rows([[5, 6]]);
/// assert_eq!(translation::<_, 2, 3>(&row.transposed()), mat);
/// ```
pub fn translation<T: Number, const N: usize, const M: usize>(
    offset: &impl Access<N, 1, Elem = T>,
) -> Matrix<T, M, M> {
    check_affine::<N, M>();
    let mut out = Matrix::identity();
    for row in 0..N {
        out[(row, N)] = *offset.elem(row, 0);
    }
    out
}

/// Creates an `M`x`M` matrix scaling homogeneous coordinates by `scale`, using `position` as the
/// fixed point. `M` must be `N + 1`. Like [`translation`], `position` can be any column-shaped
/// vector.
///
/// This is `translation(position) * scaling_affine(scale) * translation(-position)`.
///
/// # Examples
///
/// ```
/// # use matview::*;
/// let pos = ColumnVector::from_rows([[1.0], [2.0]]);
/// let mat: Mat3f = scaling_at([2.0, 4.0], &pos);
///
/// // The fixed point stays where it is.
/// let p = ColumnVector::from_rows([[1.0], [2.0], [1.0]]);
/// assert_eq!(mat * p, p);
///
/// let q = ColumnVector::from_rows([[2.0], [3.0], [1.0]]);
/// assert_eq!(mat * q, Matrix::from_rows([[3.0], [6.0], [1.0]]));
/// ```
pub fn scaling_at<T: Number, const N: usize, const M: usize>(
    scale: [T; N],
    position: &impl Access<N, 1, Elem = T>,
) -> Matrix<T, M, M> {
    let to_origin: Matrix<T, M, M> = translation::<T, N, M>(&-position.to_matrix());
    let scale: Matrix<T, M, M> = scaling_affine(scale);
    let back: Matrix<T, M, M> = translation::<T, N, M>(position);
    back * scale * to_origin
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{ColumnVector, RowVector};

    const EPS: f64 = 1e-9;

    #[test]
    fn rotation_2d() {
        let rot = rotation(FRAC_PI_2);
        let x = ColumnVector::from_rows([[1.0], [0.0]]);
        assert_abs_diff_eq!(rot * x, ColumnVector::from_rows([[0.0], [1.0]]), epsilon = EPS);
        assert_abs_diff_eq!(rotation(PI) * x, -x, epsilon = EPS);
        assert_abs_diff_eq!(rotation(0.3) * rotation(-0.3), Mat2::identity(), epsilon = EPS);
        assert_abs_diff_eq!(rotation(0.3).determinant(), 1.0, epsilon = EPS);
    }

    #[test]
    fn rotation_affine_inverse() {
        for &angle in &[0.0, 0.5, FRAC_PI_3, 2.0, -1.25] {
            let product = rotation_affine(angle) * rotation_affine(-angle);
            assert_abs_diff_eq!(product, Mat3::identity(), epsilon = EPS);

            let inv = rotation_affine(angle).inverse().unwrap();
            assert_abs_diff_eq!(inv, rotation_affine(-angle), epsilon = EPS);
        }
    }

    #[test]
    fn rotation_about_point() {
        let mat = rotation_at(FRAC_PI_2, 1.0, 1.0);
        let pivot = ColumnVector::from_rows([[1.0], [1.0], [1.0]]);
        assert_abs_diff_eq!(mat * pivot, pivot, epsilon = EPS);

        let p = ColumnVector::from_rows([[2.0], [1.0], [1.0]]);
        assert_abs_diff_eq!(mat * p, ColumnVector::from_rows([[1.0], [2.0], [1.0]]), epsilon = EPS);
    }

    #[test]
    fn rotation_3d() {
        let x = ColumnVector::from_rows([[1.0], [0.0], [0.0]]);
        let y = ColumnVector::from_rows([[0.0], [1.0], [0.0]]);
        let z = ColumnVector::from_rows([[0.0], [0.0], [1.0]]);

        assert_abs_diff_eq!(rotation_xy(FRAC_PI_2) * x, y, epsilon = EPS);
        assert_abs_diff_eq!(rotation_xy(FRAC_PI_2) * z, z, epsilon = EPS);
        assert_abs_diff_eq!(rotation_yz(FRAC_PI_2) * y, z, epsilon = EPS);
        assert_abs_diff_eq!(rotation_yz(FRAC_PI_2) * x, x, epsilon = EPS);
        assert_abs_diff_eq!(rotation_xz(FRAC_PI_2) * x, z, epsilon = EPS);
        assert_abs_diff_eq!(rotation_xz(FRAC_PI_2) * y, y, epsilon = EPS);
    }

    #[test]
    fn rotation_3d_affine() {
        for (linear, affine) in [
            (rotation_xy(0.7), rotation_xy_affine(0.7)),
            (rotation_xz(0.7), rotation_xz_affine(0.7)),
            (rotation_yz(0.7), rotation_yz_affine(0.7)),
        ] {
            assert_eq!(affine.submatrix::<3, 3>(0, 0), linear);
            assert_eq!(affine.row_vector(3), Matrix::from_rows([[0.0, 0.0, 0.0, 1.0]]));
            assert_eq!(affine.column_vector(3), Matrix::from_rows([[0.0], [0.0], [0.0], [1.0]]));
        }
    }

    #[test]
    fn scale_and_translate() {
        assert_eq!(scaling([1.0, 2.0, 3.0]), Mat3::from_diagonal([1.0, 2.0, 3.0]));

        let mat: Mat4<f64> = scaling_affine([1.0, 2.0, 3.0]);
        assert_eq!(mat, Mat4::from_diagonal([1.0, 2.0, 3.0, 1.0]));

        let offset = ColumnVector::from_rows([[1.0], [2.0], [3.0]]);
        let mat: Mat4<f64> = translation::<_, 3, 4>(&offset);
        let p = ColumnVector::from_rows([[1.0], [1.0], [1.0], [1.0]]);
        assert_eq!(mat * p, Matrix::from_rows([[2.0], [3.0], [4.0], [1.0]]));

        let back: Mat4<f64> = translation::<_, 3, 4>(&-offset);
        assert_eq!(mat * back, Mat4::identity());
    }

    #[test]
    fn translation_from_any_vector() {
        let expected: Mat3<f64> = translation::<_, 2, 3>(&ColumnVector::from_rows([[2.0], [-1.0]]));

        let row = RowVector::from_rows([[2.0, -1.0]]);
        assert_eq!(translation::<_, 2, 3>(&row.transposed()), expected);

        let points = Matrix::from_rows([[0.0, 2.0], [5.0, -1.0]]);
        assert_eq!(translation::<_, 2, 3>(&points.column_vector(1)), expected);

        let mat: Mat3<f64> = scaling_at([2.0, 2.0], &row.transposed());
        let pivot = ColumnVector::from_rows([[2.0], [-1.0], [1.0]]);
        assert_eq!(mat * pivot, pivot);
    }

    #[test]
    fn scale_about_point() {
        let pos = ColumnVector::from_rows([[3.0], [-1.0]]);
        let mat: Mat3<f64> = scaling_at([0.5, 2.0], &pos);
        let pivot = ColumnVector::from_rows([[3.0], [-1.0], [1.0]]);
        assert_abs_diff_eq!(mat * pivot, pivot, epsilon = EPS);

        let p = ColumnVector::from_rows([[5.0], [0.0], [1.0]]);
        assert_abs_diff_eq!(mat * p, ColumnVector::from_rows([[4.0], [1.0], [1.0]]), epsilon = EPS);
    }
}
