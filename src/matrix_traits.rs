#![allow(non_snake_case)]

use crate::MatrixShape;
use num_traits::NumAssign;
use std::ops::Index;

/// Scalar element trait for matrix entries.
///
/// A blanket implementation covers every `Copy` numeric type with the
/// standard arithmetic and compound-assignment operators, so both integer
/// and floating point matrices work from the same code.
pub trait ScalarT: 'static + Copy + NumAssign + PartialEq + std::fmt::Debug {}
impl<T> ScalarT for T where T: 'static + Copy + NumAssign + PartialEq + std::fmt::Debug {}

/// Logical shape of a matrix as currently presented to callers.
pub trait ShapedMatrix {
    /// logical row count, post any transpose
    fn nrows(&self) -> usize;
    /// logical column count, post any transpose
    fn ncols(&self) -> usize;
    /// current orientation
    fn shape(&self) -> MatrixShape;
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    /// true when the logical row and column counts agree
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

//NB: the concrete owned type is just called "Matrix".  The "DenseMatrix"
//trait is implemented across the owned and borrowed storage flavours to
//allow indexing, multiplication and equality over any of those formats.
pub trait DenseMatrix<T>: ShapedMatrix + Index<(usize, usize), Output = T> {
    /// Maps a logical `(row, col)` pair to an offset into the physical
    /// buffer.  This is the single transpose-aware mapping shared by every
    /// access path in the crate.
    fn index_linear(&self, idx: (usize, usize)) -> usize;
    fn data(&self) -> &[T];
}

pub trait DenseMatrixMut<T>: DenseMatrix<T> {
    fn data_mut(&mut self) -> &mut [T];
}

/// Matrix-matrix multiplication into a preallocated result.
pub trait MultiplyMat {
    type T;
    /// implements self = A * B
    ///
    /// # Panics
    /// Panics unless `A.ncols() == B.nrows()`, `self.nrows() == A.nrows()`,
    /// `self.ncols() == B.ncols()` and `self` is allocated to the full
    /// output extent.
    fn matmul<MATA, MATB>(&mut self, A: &MATA, B: &MATB) -> &Self
    where
        MATA: DenseMatrix<Self::T>,
        MATB: DenseMatrix<Self::T>;
}
