//! Port contracts for identity resolution.
//!
//! Ports define infrastructure-agnostic interfaces used by the identity
//! resolution service.

pub mod repository;

pub use repository::{
    IdentityRepositoryError, IdentityRepositoryResult, UserRepository, UserRoleRepository,
};

#[cfg(test)]
pub use repository::{MockUserRepository, MockUserRoleRepository};
