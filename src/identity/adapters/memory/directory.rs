//! In-memory user and role directory for tests and scenarios.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::{
    domain::{EmployeeNumber, User, UserRole, UserRoleId},
    ports::{
        IdentityRepositoryError, IdentityRepositoryResult, UserRepository, UserRoleRepository,
    },
};

/// Thread-safe in-memory directory implementing both identity ports.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentityRepository {
    state: Arc<RwLock<InMemoryIdentityState>>,
}

#[derive(Debug, Default)]
struct InMemoryIdentityState {
    users: HashMap<EmployeeNumber, User>,
    roles: HashMap<UserRoleId, UserRole>,
}

fn lock_error(err: impl std::fmt::Display) -> IdentityRepositoryError {
    IdentityRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

impl InMemoryIdentityRepository {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a user, keyed by employee number.
    ///
    /// Any role attached to `user` is discarded; lookups return users
    /// without roles, as a database would.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityRepositoryError::Persistence`] if the state lock is
    /// poisoned.
    pub fn insert_user(&self, user: User) -> IdentityRepositoryResult<()> {
        let stored = User::new(
            user.id(),
            user.employee_number().clone(),
            user.name(),
            user.user_role_id(),
        );
        let mut state = self.state.write().map_err(lock_error)?;
        state.users.insert(stored.employee_number().clone(), stored);
        Ok(())
    }

    /// Adds or replaces a role.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityRepositoryError::Persistence`] if the state lock is
    /// poisoned.
    pub fn insert_role(&self, role: UserRole) -> IdentityRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.roles.insert(role.id(), role);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryIdentityRepository {
    async fn find_by_employee_number(
        &self,
        employee_number: &EmployeeNumber,
    ) -> IdentityRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.users.get(employee_number).cloned())
    }
}

#[async_trait]
impl UserRoleRepository for InMemoryIdentityRepository {
    async fn find_by_id(&self, id: UserRoleId) -> IdentityRepositoryResult<Option<UserRole>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.roles.get(&id).cloned())
    }
}
