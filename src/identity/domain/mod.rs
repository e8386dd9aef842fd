//! Domain model for employees and their roles.

mod error;
mod ids;
mod user;

pub use error::IdentityDomainError;
pub use ids::{EmployeeNumber, UserId, UserRoleId};
pub use user::{MANAGER_ROLE_DESCRIPTION, User, UserRole};
