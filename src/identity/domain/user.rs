//! User and role records.

use super::{EmployeeNumber, UserId, UserRoleId};
use serde::{Deserialize, Serialize};

/// Role description that grants visibility over every task.
pub const MANAGER_ROLE_DESCRIPTION: &str = "Manager";

/// Immutable role reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRole {
    id: UserRoleId,
    description: String,
}

impl UserRole {
    /// Creates a role record.
    #[must_use]
    pub fn new(id: UserRoleId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }

    /// Returns the role identifier.
    #[must_use]
    pub const fn id(&self) -> UserRoleId {
        self.id
    }

    /// Returns the role description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns `true` when this role is the manager role.
    #[must_use]
    pub fn is_manager(&self) -> bool {
        self.description == MANAGER_ROLE_DESCRIPTION
    }
}

/// An employee known to the system.
///
/// A user loaded from storage has no role attached. The identity resolution
/// service attaches it through [`User::with_role`], which is also the only
/// place the manager flag is derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    employee_number: EmployeeNumber,
    name: String,
    user_role_id: UserRoleId,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<UserRole>,
    is_manager: bool,
}

impl User {
    /// Creates a user without a resolved role.
    #[must_use]
    pub fn new(
        id: UserId,
        employee_number: EmployeeNumber,
        name: impl Into<String>,
        user_role_id: UserRoleId,
    ) -> Self {
        Self {
            id,
            employee_number,
            name: name.into(),
            user_role_id,
            role: None,
            is_manager: false,
        }
    }

    /// Attaches the resolved role and derives the manager flag from it.
    #[must_use]
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.is_manager = role.is_manager();
        self.role = Some(role);
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the employee number.
    #[must_use]
    pub const fn employee_number(&self) -> &EmployeeNumber {
        &self.employee_number
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the identifier of the user's role.
    #[must_use]
    pub const fn user_role_id(&self) -> UserRoleId {
        self.user_role_id
    }

    /// Returns the resolved role, if one has been attached.
    #[must_use]
    pub const fn role(&self) -> Option<&UserRole> {
        self.role.as_ref()
    }

    /// Returns `true` once a role has been attached.
    #[must_use]
    pub const fn has_resolved_role(&self) -> bool {
        self.role.is_some()
    }

    /// Returns `true` when the attached role is the manager role.
    #[must_use]
    pub const fn is_manager(&self) -> bool {
        self.is_manager
    }
}
