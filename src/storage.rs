use crate::{
    BorrowedMatrix, BorrowedMatrixMut, DenseMatrix, DenseMatrixMut, DenseStorageMatrix, Matrix,
    MatrixError, MatrixShape, ScalarT, ShapedMatrix,
};
use itertools::iproduct;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

impl<S, T> ShapedMatrix for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    fn nrows(&self) -> usize {
        self.size.0
    }
    fn ncols(&self) -> usize {
        self.size.1
    }
    fn shape(&self) -> MatrixShape {
        match self.transposed {
            false => MatrixShape::N,
            true => MatrixShape::T,
        }
    }
    fn size(&self) -> (usize, usize) {
        self.size
    }
}

impl<S, T> DenseMatrix<T> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        let (row, col) = idx;
        let (m, n) = self.size;
        debug_assert!(row < m && col < n);
        if self.transposed {
            // logical (row, col) of the transposed view lives at physical
            // (col, row) of the row-major buffer, whose rows have length
            // equal to the current (post-swap) logical row count
            col * m + row
        } else {
            row * n + col
        }
    }
    fn data(&self) -> &[T] {
        self.data.as_ref()
    }
}

impl<S, T> DenseMatrixMut<T> for DenseStorageMatrix<S, T>
where
    S: AsMut<[T]> + AsRef<[T]>,
{
    fn data_mut(&mut self) -> &mut [T] {
        self.data.as_mut()
    }
}

impl<S, T> Index<(usize, usize)> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: Sized,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        let lidx = self.index_linear(idx);
        &self.data()[lidx]
    }
}

impl<S, T> IndexMut<(usize, usize)> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
    T: Sized,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data_mut()[lidx]
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    /// Flips the logical orientation and swaps the dimensions.  O(1); the
    /// buffer is never touched, so this is valid on read-only borrowed
    /// storage and on empty matrices.  Two calls restore the original view.
    pub fn transpose(&mut self) {
        self.transposed = !self.transposed;
        self.size = (self.size.1, self.size.0);
    }

    /// Copies the full physical extent and the orientation flag into new
    /// owned storage.  This is the only way to duplicate a matrix and the
    /// way to detach a borrowed buffer before mutating it.  On allocation
    /// failure `self` is untouched.
    pub fn try_to_owned(&self) -> Result<Matrix<T>, MatrixError>
    where
        T: ScalarT,
    {
        let src = self.data();
        let mut data = Vec::new();
        data.try_reserve_exact(src.len())?;
        data.extend_from_slice(src);
        Ok(Matrix {
            size: self.size,
            data,
            transposed: self.transposed,
            phantom: PhantomData,
        })
    }

    /// Contiguous view of one logical row.  Only the untransposed
    /// orientation is row-contiguous.
    pub fn row_slice(&self, row: usize) -> &[T] {
        let (m, n) = self.size;
        assert!(!self.transposed && row < m);
        &self.data()[(row * n)..(row + 1) * n]
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsMut<[T]> + AsRef<[T]>,
{
    pub fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        let (m, n) = self.size;
        assert!(!self.transposed && row < m);
        &mut self.data_mut()[(row * n)..(row + 1) * n]
    }

    /// Overwrites the buffer contents in place from a row-major slice of
    /// exactly the physical length, without reallocating or reshaping.
    pub fn copy_from_slice(&mut self, src: &[T]) -> &mut Self
    where
        T: Copy,
    {
        self.data_mut().copy_from_slice(src);
        self
    }
}

impl<T> Default for Matrix<T>
where
    T: ScalarT,
{
    /// An empty 0 x 0 matrix with no storage, intended to be given a shape
    /// later via [`Matrix::initialize`].
    fn default() -> Self {
        Self {
            size: (0, 0),
            data: Vec::new(),
            transposed: false,
            phantom: PhantomData,
        }
    }
}

impl<T> Matrix<T>
where
    T: ScalarT,
{
    /// Allocates a zero-filled owned matrix of the given size, surfacing
    /// allocation failure instead of aborting.
    pub fn try_new(size: (usize, usize)) -> Result<Self, MatrixError> {
        let mut mat = Self::default();
        mat.initialize(size)?;
        Ok(mat)
    }

    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Self {
        let (m, n) = size;
        assert!(m * n == src.len());
        Self {
            size,
            data: src.to_vec(),
            transposed: false,
            phantom: PhantomData,
        }
    }

    /// (Re-)initializes owned storage for the given logical size.
    ///
    /// Clears the orientation flag.  If the requested size equals the
    /// current size the existing buffer is reused without reallocation and
    /// its contents are retained; otherwise a fresh zero-filled buffer
    /// replaces the old one.  On allocation failure the previous storage
    /// and dimensions are kept intact and only the orientation flag has
    /// been reset.
    pub fn initialize(&mut self, size: (usize, usize)) -> Result<(), MatrixError> {
        self.transposed = false;

        let (m, n) = size;
        if self.size == size && self.data.len() == m * n {
            return Ok(());
        }

        let mut data = Vec::new();
        data.try_reserve_exact(m * n)?;
        data.resize(m * n, T::zero());
        self.data = data;
        self.size = size;
        Ok(())
    }
}

impl<'a, T> BorrowedMatrix<'a, T>
where
    T: ScalarT,
{
    /// Binds a read-only view over a caller's row-major buffer.  Never
    /// fails; the slice must hold exactly `m * n` elements.
    pub fn from_slice(data: &'a [T], m: usize, n: usize) -> Self {
        assert!(data.len() == m * n);
        Self {
            size: (m, n),
            data,
            transposed: false,
            phantom: PhantomData,
        }
    }
}

impl<'a, T> BorrowedMatrixMut<'a, T>
where
    T: ScalarT,
{
    /// Binds a writable view over a caller's row-major buffer.
    pub fn from_slice_mut(data: &'a mut [T], m: usize, n: usize) -> Self {
        assert!(data.len() == m * n);
        Self {
            size: (m, n),
            data,
            transposed: false,
            phantom: PhantomData,
        }
    }
}

// Content equivalence under the current logical shape, across any mix of
// storage flavours.  Untransposed layouts are canonical row-major, so when
// neither side is transposed the buffers compare directly as flat slices.
// Otherwise the physical layouts differ and comparison goes element by
// element through the transpose-aware mapping.
impl<SA, SB, T> PartialEq<DenseStorageMatrix<SB, T>> for DenseStorageMatrix<SA, T>
where
    SA: AsRef<[T]>,
    SB: AsRef<[T]>,
    T: ScalarT,
{
    fn eq(&self, other: &DenseStorageMatrix<SB, T>) -> bool {
        if self.size() != other.size() {
            return false;
        }
        if !self.transposed && !other.transposed {
            return self.data() == other.data();
        }
        let (m, n) = self.size();
        iproduct!(0..m, 0..n).all(|idx| self[idx] == other[idx])
    }
}

impl<S, T> std::fmt::Display for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: ScalarT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}

fn display_matrix<M, T>(m: &M, f: &mut std::fmt::Formatter) -> std::fmt::Result
where
    M: DenseMatrix<T>,
    T: ScalarT,
{
    writeln!(f, "Dim({},{})", m.nrows(), m.ncols())?;
    for i in 0..m.nrows() {
        write!(f, "[ ")?;
        for j in 0..m.ncols() {
            write!(f, " {:?}", m[(i, j)])?;
        }
        writeln!(f, "]")?;
    }
    Ok(())
}
