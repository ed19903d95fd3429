//! Errors reported at the boundary of `IntervalTree` construction and queries.

use thiserror::Error;

/// The error type of `centered_interval_tree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An input interval has `start > stop`
    #[error("interval at position {index} has start greater than stop")]
    InvalidInterval {
        /// Zero-based position of the offending interval in the input
        index: usize,
    },
    /// A query range has `start > stop`, or a half-open range is empty
    #[error("query range is empty or has start greater than stop")]
    InvalidRange,
    /// An aggregate bound was requested from a tree without intervals
    #[error("the tree holds no intervals")]
    EmptyTree,
}

/// Result alias with [`Error`] as the error type
pub type Result<T> = std::result::Result<T, Error>;
