//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task code is empty after trimming.
    #[error("task code must not be empty")]
    EmptyTaskCode,

    /// The task code exceeds the maximum length.
    #[error("task code has {length} characters, exceeds limit of {max}")]
    TaskCodeTooLong {
        /// Number of characters in the rejected code.
        length: usize,
        /// Maximum number of characters allowed.
        max: usize,
    },
}
