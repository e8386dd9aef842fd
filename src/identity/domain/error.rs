//! Error types for identity domain validation.

use thiserror::Error;

/// Errors returned while constructing identity values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityDomainError {
    /// The employee number is empty after trimming.
    #[error("employee number must not be empty")]
    EmptyEmployeeNumber,
}
