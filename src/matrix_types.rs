use std::marker::PhantomData;

/// Matrix orientation marker
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixShape {
    /// Normal matrix orientation
    N,
    /// Transposed matrix orientation
    T,
}

/// Dense matrix over owned or borrowed storage.
///
/// Data is a flat slice in row-major format, always stored in the
/// *untransposed* orientation.  The `transposed` flag implements a logical
/// transpose by index remapping only; the buffer layout never changes, so a
/// read-only borrowed buffer can be transposed freely.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDenseStorageMatrix<S, T>"))]
pub struct DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: Sized,
{
    /// current logical dimensions, post any transpose
    pub(crate) size: (usize, usize),
    /// flat data in row-major format, untransposed orientation
    pub(crate) data: S,
    /// logical transpose marker
    pub(crate) transposed: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) phantom: PhantomData<T>,
}

// Unvalidated wire form.  Deserialization routes through this shadow so
// that a shape/data length mismatch is rejected instead of admitting a
// matrix whose element accesses would land out of bounds.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
pub(crate) struct RawDenseStorageMatrix<S, T> {
    size: (usize, usize),
    data: S,
    transposed: bool,
    #[serde(skip)]
    phantom: PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<S, T> TryFrom<RawDenseStorageMatrix<S, T>> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    type Error = crate::MatrixError;

    fn try_from(raw: RawDenseStorageMatrix<S, T>) -> Result<Self, Self::Error> {
        let (m, n) = raw.size;
        if raw.data.as_ref().len() != m * n {
            return Err(crate::MatrixError::IncompatibleDimension);
        }
        Ok(Self {
            size: raw.size,
            data: raw.data,
            transposed: raw.transposed,
            phantom: raw.phantom,
        })
    }
}

/// Owned dense matrix.  Its buffer is released on drop and may be
/// reinitialized in place via [`Matrix::initialize`].
pub type Matrix<T> = DenseStorageMatrix<Vec<T>, T>;

/// Read-only dense view over a caller's flat buffer.  The entity never
/// frees or writes the buffer; its lifetime is the caller's responsibility.
pub type BorrowedMatrix<'a, T> = DenseStorageMatrix<&'a [T], T>;

/// Writable dense view over a caller's flat buffer.  Writes reach the
/// original storage, including writes made through a transposed view.
pub type BorrowedMatrixMut<'a, T> = DenseStorageMatrix<&'a mut [T], T>;
