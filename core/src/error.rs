//! Error type shared by every collection in the crate.
//!
//! All failures are caller errors reported synchronously at the point of the
//! call. Nothing is retried and nothing is logged.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by collection operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An explicit length, index or range fell outside `0..=bound`.
    #[error("index {index} out of range (bound {bound})")]
    OutOfRange { index: usize, bound: usize },

    /// A mutation was attempted on an immutable collection.
    #[error("unsupported operation: {operation}")]
    Unsupported { operation: &'static str },

    /// A fixed-arity collection was built from a source of the wrong size.
    #[error("illegal argument: {0}")]
    IllegalArgument(String),

    /// A checked iterator step was requested with no elements remaining.
    #[error("iterator exhausted")]
    Exhausted,
}

impl Error {
    pub(crate) fn out_of_range(index: usize, bound: usize) -> Self {
        Error::OutOfRange { index, bound }
    }

    pub(crate) fn unsupported(operation: &'static str) -> Self {
        Error::Unsupported { operation }
    }

    /// Whether this error rejects a mutation.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported { .. })
    }
}

/// Fails with [`Error::OutOfRange`] unless `length <= capacity`.
pub fn check_length(length: usize, capacity: usize) -> Result<usize> {
    if length > capacity {
        return Err(Error::out_of_range(length, capacity));
    }
    Ok(length)
}
