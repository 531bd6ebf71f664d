use std::collections::TryReserveError;
use thiserror::Error;

/// Error type returned by fallible matrix storage operations.
#[derive(Error, Debug)]
pub enum MatrixError {
    /// The allocator refused the requested buffer
    #[error("Matrix storage allocation failed")]
    AllocError(#[from] TryReserveError),
    /// Matrix dimension fields and/or data length are incompatible
    #[error("Matrix dimension fields and/or data length are incompatible")]
    IncompatibleDimension,
}
