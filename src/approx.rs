//! Approximate equality via the [`approx`] crate.
//!
//! Matrices are approximately equal if all of their elements are. This allows using
//! [`approx::assert_abs_diff_eq!`], [`approx::assert_relative_eq!`] and
//! [`approx::assert_ulps_eq!`] on computed matrices, where exact `==` comparison is too strict.
//!
//! Views can be compared by materializing them with [`Access::to_matrix`][crate::Access::to_matrix].

use ::approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::Matrix;

impl<T, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const R: usize, const C: usize> UlpsEq for Matrix<T, R, C>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use ::approx::{assert_abs_diff_eq, assert_relative_eq, assert_ulps_eq, relative_ne};

    use crate::{Mat2f, Matrix};

    #[test]
    fn tolerant_comparison() {
        let a = Mat2f::from_rows([[0.1 + 0.2, 1.0], [2.0, 3.0]]);
        let b = Mat2f::from_rows([[0.3, 1.0], [2.0, 3.0]]);
        assert_relative_eq!(a, b);
        assert_ulps_eq!(a, b);
        assert_abs_diff_eq!(a, b, epsilon = 1e-6);

        let c = Mat2f::from_rows([[0.3, 1.0], [2.0, 3.1]]);
        assert!(relative_ne!(a, c));
    }

    #[test]
    fn one_element_differs() {
        let a = Matrix::from_rows([[1.0f64, 2.0, 3.0]]);
        let b = Matrix::from_rows([[1.0f64, 2.0, 3.001]]);
        assert_abs_diff_eq!(a, b, epsilon = 0.01);
        assert!(!::approx::abs_diff_eq!(a, b, epsilon = 0.0001));
    }
}
