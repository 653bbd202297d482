use std::ops;

use num_complex::Complex;

/// Types that support the trigonometric functions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types with a complex conjugate.
///
/// Real numbers are their own conjugate.
pub trait Conjugate {
    fn conj(self) -> Self;
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// This is the element bound used by the arithmetic operators and the determinant engine.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

macro_rules! int_consts {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }
            impl One for $types {
                const ONE: Self = 1;
            }
            impl Conjugate for $types {
                #[inline]
                fn conj(self) -> Self {
                    self
                }
            }
        )+
    };
}
int_consts!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }
            impl One for $types {
                const ONE: Self = 1.0;
            }
            impl Conjugate for $types {
                #[inline]
                fn conj(self) -> Self {
                    self
                }
            }
            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }
            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }
            }
        )+
    };
}
float_impls!(f32, f64);

impl<T: Zero> Zero for Complex<T> {
    const ZERO: Self = Complex {
        re: T::ZERO,
        im: T::ZERO,
    };
}

impl<T: Zero + One> One for Complex<T> {
    const ONE: Self = Complex {
        re: T::ONE,
        im: T::ZERO,
    };
}

impl<T: ops::Neg<Output = T>> Conjugate for Complex<T> {
    #[inline]
    fn conj(self) -> Self {
        Complex {
            re: self.re,
            im: -self.im,
        }
    }
}

// Principal square root.
impl Sqrt for Complex<f32> {
    fn sqrt(self) -> Self {
        Complex::sqrt(self)
    }
}
impl Sqrt for Complex<f64> {
    fn sqrt(self) -> Self {
        Complex::sqrt(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complex_constants() {
        assert_eq!(Complex::<f64>::ZERO, Complex::new(0.0, 0.0));
        assert_eq!(Complex::<f64>::ONE, Complex::new(1.0, 0.0));
        assert_eq!(Complex::new(1.0, 2.0).conj(), Complex::new(1.0, -2.0));
        assert_eq!(Conjugate::conj(3.5f32), 3.5);
    }

    #[test]
    fn pointer_sized_integers() {
        use crate::Matrix;

        let mat = Matrix::<isize, 2, 2>::from_rows([[2, 1], [1, 3]]);
        assert_eq!(mat.determinant(), 5);
        assert_eq!(mat * Matrix::identity(), mat);
        assert_eq!(2 * mat + mat, mat * 3);

        // Unsigned types have no negation, so they're not `Number`s, but can still be constructed.
        assert_eq!(Matrix::<usize, 2, 2>::identity(), Matrix::from_diagonal([1, 1]));
        assert_eq!(Matrix::<usize, 1, 3>::ZERO, Matrix::from_rows([[0, 0, 0]]));
    }
}
