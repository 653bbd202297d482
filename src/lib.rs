//! A fixed-dimension matrix library with zero-copy views.
//!
//! # Motivation
//!
//! Small geometric transforms (rotations, scalings, translations, their inverses) need a matrix
//! type whose dimensions are known at compile time, that can be uploaded to the GPU as-is, and
//! that lets algorithms look at parts of a matrix (a row, a column, a minor, the transpose)
//! without copying it around.
//!
//! This library provides that in a small package:
//!
//! - [`Matrix`] is the only type that owns elements. It is a plain row-major array of arrays.
//! - [`View`] selects a sub-region of a matrix (a [submatrix], a [row] or [column], or a
//!   [minor]), and [`Transposed`] swaps its rows and columns. Both borrow the matrix, so Rust's
//!   lifetimes ensure they never outlive it, and mutable views write straight into it.
//! - Views compose freely: a transposed view of a minor of a submatrix of a transposed view
//!   still reads and writes the original matrix's elements.
//! - Arithmetic, formatting, and the determinant engine ([`determinant`], [`adjugate`],
//!   [`inverse`]) are written once against the [`Access`] trait and accept owned matrices and
//!   views alike.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized matrices. Relying on const generics for the dimensions
//!   turns shape mismatches into compile errors, and lets the crate reject oversized submatrices
//!   or minors of 1x1 matrices at compile time.
//! - Support a single, row-major, unpadded data layout.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types.
//!   Complex numbers from [`num_complex`] are supported.
//! - Inversion uses the adjugate and determinant. This is exact for integer-valued inputs and
//!   fine for the small, well-conditioned matrices this crate targets. There is no pivoting, LU
//!   or QR decomposition, and no attempt to detect nearly-singular matrices.
//!
//! [submatrix]: Matrix::submatrix
//! [row]: Matrix::row_vector
//! [column]: Matrix::column_vector
//! [minor]: Matrix::minor

mod access;
mod approx;
mod engine;
mod fmt;
mod geometry;
mod mask;
mod matrix;
mod ops;
mod traits;
mod transpose;
mod view;

pub use access::*;
pub use engine::*;
pub use geometry::*;
pub use matrix::*;
pub use traits::*;
pub use transpose::*;
pub use view::*;
