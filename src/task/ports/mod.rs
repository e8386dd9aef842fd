//! Port contracts for task access management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod events;
pub mod repository;

pub use events::{TaskEventPublisher, TaskEventPublisherError};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};

#[cfg(test)]
pub use events::MockTaskEventPublisher;
#[cfg(test)]
pub use repository::MockTaskRepository;
