//! `PostgreSQL` adapters for identity lookup.

mod models;
mod repository;
mod schema;

#[cfg(test)]
pub(crate) use repository::row_to_user;
#[cfg(test)]
pub(crate) use models::UserRow;

pub use repository::PostgresIdentityRepository;
