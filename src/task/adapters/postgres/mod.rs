//! `PostgreSQL` adapters for task persistence.

mod models;
mod repository;
mod schema;

#[cfg(test)]
pub(crate) use repository::row_to_task;
#[cfg(test)]
pub(crate) use models::TaskRow;

pub use repository::PostgresTaskRepository;
