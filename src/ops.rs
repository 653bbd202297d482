//! Arithmetic between any two matrix-like operands.
//!
//! Every operator here accepts [`Matrix`], [`View`] and [`Transposed`] (by value or by reference)
//! on the left, and produces an owned [`Matrix`]. Element-wise operators accept any [`Access`]
//! implementor of the same shape on the right. Matrix multiplication is implemented for every
//! pair of the six operand types, since its inner dimension can't be inferred from a generic
//! right-hand side.
//!
//! Scalars can be on either side of `*`. With the scalar on the left, the built-in numeric types
//! and [`Complex`] are supported.
//!
//! ```
//! # use matview::*;
//! let mat = Matrix::from_rows([[1.0f64, 2.0], [3.0, 4.0]]);
//! assert_eq!(2.0f64 * mat.transposed(), mat.transposed() * 2.0);
//! assert_eq!(mat * mat.column_vector(0), Matrix::from_rows([[7.0], [15.0]]));
//! ```
//!
//! Operands must have the same shape for `+` and `-`:
//!
//! ```compile_fail
//! # use matview::*;
//! let _ = Mat2::<i32>::ZERO + Mat3::<i32>::ZERO;
//! ```
//!
//! ```compile_fail
//! # use matview::*;
//! let mat = Mat3::<i32>::ZERO;
//! let _ = mat.row_vector(0) - mat.column_vector(0);
//! ```
//!
//! And the inner dimensions of a product must agree:
//!
//! ```compile_fail
//! # use matview::*;
//! let _ = Mat2x3::<i32>::ZERO * Mat2x3::<i32>::ZERO;
//! ```

use std::ops::{Add, Div, Mul, Sub};

use num_complex::Complex;

use crate::{Access, Matrix, Number, Transposed, View, Zero};

/// Computes `f(a(i, j), b(i, j))` for every element.
fn elementwise<const R: usize, const C: usize, A, B, F>(a: &A, b: &B, mut f: F) -> Matrix<A::Elem, R, C>
where
    A: Access<R, C>,
    B: Access<R, C, Elem = A::Elem>,
    A::Elem: Copy,
    F: FnMut(A::Elem, A::Elem) -> A::Elem,
{
    Matrix::from_fn(|row, col| f(*a.elem(row, col), *b.elem(row, col)))
}

/// Standard `O(M*N*K)` matrix product.
fn multiply<const M: usize, const N: usize, const K: usize, A, B>(a: &A, b: &B) -> Matrix<A::Elem, M, K>
where
    A: Access<M, N>,
    B: Access<N, K, Elem = A::Elem>,
    A::Elem: Number,
{
    Matrix::from_fn(|row, col| {
        (0..N).fold(<A::Elem as Zero>::ZERO, |acc, i| acc + *a.elem(row, i) * *b.elem(i, col))
    })
}

fn equal<const R: usize, const C: usize, A, B>(a: &A, b: &B) -> bool
where
    A: Access<R, C>,
    B: Access<R, C, Elem = A::Elem>,
    A::Elem: PartialEq,
{
    (0..R).all(|row| (0..C).all(|col| a.elem(row, col) == b.elem(row, col)))
}

// Each operand is described as `{[lifetime] [generic params] type; [where-clauses]}`, with
// element type `T` and shape `R`x`C`.
macro_rules! elementwise_ops {
    ( $( {[$($lt:lifetime)?] [$($gen:tt)*] $ty:ty; [$($bounds:tt)*]} )* ) => { $(
        impl<$($lt,)? T, Rhs, $($gen)* const R: usize, const C: usize> Add<Rhs> for $ty
        where
            T: Number,
            Rhs: Access<R, C, Elem = T>,
            $($bounds)*
        {
            type Output = Matrix<T, R, C>;

            fn add(self, rhs: Rhs) -> Self::Output {
                elementwise::<R, C, _, _, _>(&self, &rhs, |a, b| a + b)
            }
        }

        impl<$($lt,)? T, Rhs, $($gen)* const R: usize, const C: usize> Sub<Rhs> for $ty
        where
            T: Number,
            Rhs: Access<R, C, Elem = T>,
            $($bounds)*
        {
            type Output = Matrix<T, R, C>;

            fn sub(self, rhs: Rhs) -> Self::Output {
                elementwise::<R, C, _, _, _>(&self, &rhs, |a, b| a - b)
            }
        }

        impl<$($lt,)? T, $($gen)* const R: usize, const C: usize> Mul<T> for $ty
        where
            T: Number,
            $($bounds)*
        {
            type Output = Matrix<T, R, C>;

            fn mul(self, rhs: T) -> Self::Output {
                Matrix::from_fn(|row, col| *Access::<R, C>::elem(&self, row, col) * rhs)
            }
        }

        impl<$($lt,)? T, $($gen)* const R: usize, const C: usize> Div<T> for $ty
        where
            T: Number,
            $($bounds)*
        {
            type Output = Matrix<T, R, C>;

            fn div(self, rhs: T) -> Self::Output {
                Matrix::from_fn(|row, col| *Access::<R, C>::elem(&self, row, col) / rhs)
            }
        }
    )* };
}

elementwise_ops! {
    {[] [] Matrix<T, R, C>; []}
    {['a] [] &'a Matrix<T, R, C>; []}
    {[] [P, const PR: usize, const PC: usize,] View<P, PR, PC, R, C>; [P: Access<PR, PC, Elem = T>,]}
    {['a] [P, const PR: usize, const PC: usize,] &'a View<P, PR, PC, R, C>; [P: Access<PR, PC, Elem = T>,]}
    {[] [P,] Transposed<P, R, C>; [P: Access<C, R, Elem = T>,]}
    {['a] [P,] &'a Transposed<P, R, C>; [P: Access<C, R, Elem = T>,]}
}

// References compare through the standard library's `&A == &B` impl.
macro_rules! eq_impls {
    ( $( {[$($gen:tt)*] $ty:ty; [$($bounds:tt)*]} )* ) => { $(
        impl<T, Rhs, $($gen)* const R: usize, const C: usize> PartialEq<Rhs> for $ty
        where
            T: PartialEq,
            Rhs: Access<R, C, Elem = T>,
            $($bounds)*
        {
            fn eq(&self, other: &Rhs) -> bool {
                equal::<R, C, _, _>(self, other)
            }
        }
    )* };
}

eq_impls! {
    {[] Matrix<T, R, C>; []}
    {[P, const PR: usize, const PC: usize,] View<P, PR, PC, R, C>; [P: Access<PR, PC, Elem = T>,]}
    {[P,] Transposed<P, R, C>; [P: Access<C, R, Elem = T>,]}
}

// Same operand descriptors as above, but the left operand is `M`x`N` and the right one is
// `N`x`K`. Left-hand generics are named `P`, right-hand ones `Q`.
macro_rules! matmul {
    (@one
        {[$($llt:lifetime)?] [$($lgen:tt)*] $lty:ty; [$($lbounds:tt)*]}
        {[$($rlt:lifetime)?] [$($rgen:tt)*] $rty:ty; [$($rbounds:tt)*]}
    ) => {
        impl<$($llt,)? $($rlt,)? T, $($lgen)* $($rgen)* const M: usize, const N: usize, const K: usize>
            Mul<$rty> for $lty
        where
            T: Number,
            $($lbounds)*
            $($rbounds)*
        {
            type Output = Matrix<T, M, K>;

            fn mul(self, rhs: $rty) -> Self::Output {
                multiply::<M, N, K, _, _>(&self, &rhs)
            }
        }
    };
    (@lhs $lhs:tt [$($rhs:tt)*]) => {
        $( matmul!(@one $lhs $rhs); )*
    };
    ([$($lhs:tt)*] $rhs:tt) => {
        $( matmul!(@lhs $lhs $rhs); )*
    };
}

matmul! {
    [
        {[] [] Matrix<T, M, N>; []}
        {['l] [] &'l Matrix<T, M, N>; []}
        {[] [P, const PR: usize, const PC: usize,] View<P, PR, PC, M, N>; [P: Access<PR, PC, Elem = T>,]}
        {['l] [P, const PR: usize, const PC: usize,] &'l View<P, PR, PC, M, N>; [P: Access<PR, PC, Elem = T>,]}
        {[] [P,] Transposed<P, M, N>; [P: Access<N, M, Elem = T>,]}
        {['l] [P,] &'l Transposed<P, M, N>; [P: Access<N, M, Elem = T>,]}
    ]
    [
        {[] [] Matrix<T, N, K>; []}
        {['r] [] &'r Matrix<T, N, K>; []}
        {[] [Q, const QR: usize, const QC: usize,] View<Q, QR, QC, N, K>; [Q: Access<QR, QC, Elem = T>,]}
        {['r] [Q, const QR: usize, const QC: usize,] &'r View<Q, QR, QC, N, K>; [Q: Access<QR, QC, Elem = T>,]}
        {[] [Q,] Transposed<Q, N, K>; [Q: Access<K, N, Elem = T>,]}
        {['r] [Q,] &'r Transposed<Q, N, K>; [Q: Access<K, N, Elem = T>,]}
    ]
}

// `impl<T> Mul<Matrix<T, R, C>> for T` is not allowed by the orphan rules, so this is
// implemented for each supported scalar type.
macro_rules! scalar_lhs {
    ($($s:ty),+) => { $(
        impl<const R: usize, const C: usize> Mul<Matrix<$s, R, C>> for $s {
            type Output = Matrix<$s, R, C>;

            fn mul(self, rhs: Matrix<$s, R, C>) -> Self::Output {
                rhs.map(|elem| self * elem)
            }
        }

        impl<'a, const R: usize, const C: usize> Mul<&'a Matrix<$s, R, C>> for $s {
            type Output = Matrix<$s, R, C>;

            fn mul(self, rhs: &'a Matrix<$s, R, C>) -> Self::Output {
                (*rhs).map(|elem| self * elem)
            }
        }

        impl<P, const PR: usize, const PC: usize, const R: usize, const C: usize>
            Mul<View<P, PR, PC, R, C>> for $s
        where
            P: Access<PR, PC, Elem = $s>,
        {
            type Output = Matrix<$s, R, C>;

            fn mul(self, rhs: View<P, PR, PC, R, C>) -> Self::Output {
                Matrix::from_fn(|row, col| self * *rhs.elem(row, col))
            }
        }

        impl<'a, P, const PR: usize, const PC: usize, const R: usize, const C: usize>
            Mul<&'a View<P, PR, PC, R, C>> for $s
        where
            P: Access<PR, PC, Elem = $s>,
        {
            type Output = Matrix<$s, R, C>;

            fn mul(self, rhs: &'a View<P, PR, PC, R, C>) -> Self::Output {
                Matrix::from_fn(|row, col| self * *rhs.elem(row, col))
            }
        }

        impl<P, const R: usize, const C: usize> Mul<Transposed<P, R, C>> for $s
        where
            P: Access<C, R, Elem = $s>,
        {
            type Output = Matrix<$s, R, C>;

            fn mul(self, rhs: Transposed<P, R, C>) -> Self::Output {
                Matrix::from_fn(|row, col| self * *rhs.elem(row, col))
            }
        }

        impl<'a, P, const R: usize, const C: usize> Mul<&'a Transposed<P, R, C>> for $s
        where
            P: Access<C, R, Elem = $s>,
        {
            type Output = Matrix<$s, R, C>;

            fn mul(self, rhs: &'a Transposed<P, R, C>) -> Self::Output {
                Matrix::from_fn(|row, col| self * *rhs.elem(row, col))
            }
        }
    )+ };
}

scalar_lhs!(f32, f64, i8, i16, i32, i64, i128, isize, Complex<f32>, Complex<f64>);
