//! Resolves employee numbers into users with their roles attached.

use crate::{
    error::ErrorKind,
    identity::{
        domain::{EmployeeNumber, User},
        ports::{UserRepository, UserRoleRepository},
    },
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Service-level errors for identity resolution.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    /// The user does not exist, or their role could not be resolved.
    #[error("user {0} does not exist")]
    UserNotFound(EmployeeNumber),

    /// The backing store failed.
    #[error("error retrieving user")]
    DataAccess,
}

impl IdentityError {
    /// Classifies the error for API callers.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotFound(_) => ErrorKind::UserNotFound,
            Self::DataAccess => ErrorKind::DataAccess,
        }
    }
}

/// Result type for identity resolution.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Resolves the acting user for inbound requests.
#[derive(Clone)]
pub struct IdentityResolutionService<U, R>
where
    U: UserRepository,
    R: UserRoleRepository,
{
    users: Arc<U>,
    roles: Arc<R>,
}

impl<U, R> IdentityResolutionService<U, R>
where
    U: UserRepository,
    R: UserRoleRepository,
{
    /// Creates a new identity resolution service.
    #[must_use]
    pub const fn new(users: Arc<U>, roles: Arc<R>) -> Self {
        Self { users, roles }
    }

    /// Resolves an employee number into a user with its role attached.
    ///
    /// A user whose role cannot be found is reported as
    /// [`IdentityError::UserNotFound`], the same as a missing user.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::UserNotFound`] when either lookup finds
    /// nothing and [`IdentityError::DataAccess`] when a repository fails.
    pub async fn resolve(&self, employee_number: &EmployeeNumber) -> IdentityResult<User> {
        let lookup = self
            .users
            .find_by_employee_number(employee_number)
            .await
            .map_err(|err| {
                error!(%employee_number, error = %err, "error retrieving user");
                IdentityError::DataAccess
            })?;
        let Some(user) = lookup else {
            error!(%employee_number, "user does not exist");
            return Err(IdentityError::UserNotFound(employee_number.clone()));
        };

        let role_id = user.user_role_id();
        let role = self.roles.find_by_id(role_id).await.map_err(|err| {
            error!(%employee_number, %role_id, error = %err, "error retrieving user role");
            IdentityError::DataAccess
        })?;
        let Some(role) = role else {
            error!(%employee_number, %role_id, "unable to identify user role");
            return Err(IdentityError::UserNotFound(employee_number.clone()));
        };

        let resolved = user.with_role(role);
        info!(
            %employee_number,
            user_id = %resolved.id(),
            is_manager = resolved.is_manager(),
            "resolved acting user"
        );
        Ok(resolved)
    }
}
