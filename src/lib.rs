//! __densemat__ is a minimal dense-matrix arithmetic kernel.  A matrix is a
//! flat, contiguous, row-major buffer plus its logical dimensions.  The crate
//! provides element access, matrix-matrix multiplication, content equality and
//! a zero-copy logical transpose implemented purely by index remapping.
//!
//! # Storage and ownership
//!
//! The core type [`DenseStorageMatrix`] is generic over its storage, so
//! ownership is expressed at the type level rather than by a runtime flag:
//!
//! * [`Matrix<T>`] owns its buffer (`Vec<T>`) and releases it on drop.
//! * [`BorrowedMatrix<'a, T>`] is a read-only view over a caller's slice.
//! * [`BorrowedMatrixMut<'a, T>`] is a writable view; writes reach the
//!   caller's buffer.
//!
//! None of these types implement `Clone`.  Duplicating a matrix is always an
//! explicit, fallible operation ([`DenseStorageMatrix::try_to_owned`]), which
//! rules out accidental deep copies and double-ownership of borrowed data.
//!
//! # Transpose
//!
//! [`DenseStorageMatrix::transpose`] is O(1): it flips an orientation flag and
//! swaps the logical dimensions.  The buffer never moves.  Element access,
//! multiplication, equality and rendering all route through the single
//! transpose-aware [`DenseMatrix::index_linear`] mapping, so either operand of
//! a product may be in transposed orientation with no special-casing.
//!
//! # Error handling contract
//!
//! Allocation failure is the only recoverable error and is surfaced as
//! [`MatrixError`] from the fallible constructors and [`Matrix::initialize`].
//! Everything else is a programmer error enforced by assertions:
//! dimension-compatibility checks in [`MultiplyMat::matmul`] always panic on
//! violation, while per-element bounds checks are `debug_assert!` only.
//! **In release builds an out-of-range element access is not caught by this
//! crate and yields an arbitrary in-buffer element or an out-of-bounds slice
//! panic** — callers are responsible for staying within the logical shape.

mod error_types;
mod matmul;
mod matrix_traits;
mod matrix_types;
mod storage;

pub use error_types::*;
pub use matrix_traits::*;
pub use matrix_types::*;
