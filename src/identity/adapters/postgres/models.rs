//! Diesel row models for identity lookup.

use super::schema::{user_roles, users};
use diesel::prelude::*;

/// Query result row for users.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Employee number.
    pub employee_number: String,
    /// Display name.
    pub name: String,
    /// Role identifier.
    pub user_role_id: uuid::Uuid,
}

/// Query result row for roles.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = user_roles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRoleRow {
    /// Role identifier.
    pub id: uuid::Uuid,
    /// Role description.
    pub description: String,
}
