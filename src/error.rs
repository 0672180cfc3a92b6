//! Error type shared by every fallible [`RingSequence`](crate::RingSequence) operation.

use thiserror::Error;

/// Precondition violations reported by the container.
///
/// Every check runs before the container is touched, so an `Err` always
/// leaves the sequence exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("initial capacity must be at least 1")]
    ZeroCapacity,
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = RingError> = core::result::Result<T, E>;
