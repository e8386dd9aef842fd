//! `PostgreSQL` repository implementation for user and role lookup.

use super::{
    models::{UserRoleRow, UserRow},
    schema::{user_roles, users},
};
use crate::{
    identity::{
        domain::{EmployeeNumber, User, UserId, UserRole, UserRoleId},
        ports::{
            IdentityRepositoryError, IdentityRepositoryResult, UserRepository, UserRoleRepository,
        },
    },
    persistence::{PgPool, get_conn_with, run_blocking_with},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed user and role directory.
#[derive(Debug, Clone)]
pub struct PostgresIdentityRepository {
    pool: PgPool,
}

impl PostgresIdentityRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> IdentityRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> IdentityRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        run_blocking_with(
            move || {
                let mut connection =
                    get_conn_with(&pool, IdentityRepositoryError::persistence)?;
                f(&mut connection)
            },
            IdentityRepositoryError::persistence,
        )
        .await
    }
}

#[async_trait]
impl UserRepository for PostgresIdentityRepository {
    async fn find_by_employee_number(
        &self,
        employee_number: &EmployeeNumber,
    ) -> IdentityRepositoryResult<Option<User>> {
        let lookup = employee_number.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::employee_number.eq(lookup))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(IdentityRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }
}

#[async_trait]
impl UserRoleRepository for PostgresIdentityRepository {
    async fn find_by_id(&self, id: UserRoleId) -> IdentityRepositoryResult<Option<UserRole>> {
        self.run_blocking(move |connection| {
            let row = user_roles::table
                .filter(user_roles::id.eq(id.into_inner()))
                .select(UserRoleRow::as_select())
                .first::<UserRoleRow>(connection)
                .optional()
                .map_err(IdentityRepositoryError::persistence)?;
            Ok(row.map(|role| UserRole::new(UserRoleId::from_uuid(role.id), role.description)))
        })
        .await
    }
}

pub(crate) fn row_to_user(row: UserRow) -> IdentityRepositoryResult<User> {
    let UserRow {
        id,
        employee_number: persisted_employee_number,
        name,
        user_role_id,
    } = row;
    let employee_number = EmployeeNumber::new(persisted_employee_number)
        .map_err(IdentityRepositoryError::persistence)?;
    Ok(User::new(
        UserId::from_uuid(id),
        employee_number,
        name,
        UserRoleId::from_uuid(user_role_id),
    ))
}
