//! Error types for todo list operations

use thiserror::Error;

/// Result type for todo list operations
pub type Result<T> = std::result::Result<T, TodoError>;

/// Errors that can occur during todo list operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    /// Index outside the list's current bounds
    #[error("index {index} out of bounds for todo list of length {len}")]
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// List length at the time of the call
        len: usize,
    },
}
