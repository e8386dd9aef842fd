//! Repository ports for user and role lookup.

use crate::identity::domain::{EmployeeNumber, User, UserRole, UserRoleId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for identity repository operations.
pub type IdentityRepositoryResult<T> = Result<T, IdentityRepositoryError>;

/// User lookup contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by employee number.
    ///
    /// Returns `None` when no user carries the employee number. The returned
    /// user never has a role attached.
    async fn find_by_employee_number(
        &self,
        employee_number: &EmployeeNumber,
    ) -> IdentityRepositoryResult<Option<User>>;
}

/// Role lookup contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRoleRepository: Send + Sync {
    /// Finds a role by identifier.
    ///
    /// Returns `None` when the role does not exist.
    async fn find_by_id(&self, id: UserRoleId) -> IdentityRepositoryResult<Option<UserRole>>;
}

/// Errors returned by identity repository implementations.
#[derive(Debug, Clone, Error)]
pub enum IdentityRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl IdentityRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
