//! Repository port for task persistence and lookup.

use crate::{
    identity::domain::UserId,
    task::domain::{Task, TaskCode},
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Write operations report whether a record was affected instead of failing
/// on a missing row, leaving the interpretation to the service layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every task.
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the tasks owned by `user_id`.
    async fn list_by_owner(&self, user_id: UserId) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by code.
    ///
    /// Returns `None` when no task carries the code.
    async fn find_by_code(&self, code: &TaskCode) -> TaskRepositoryResult<Option<Task>>;

    /// Stores a new task.
    ///
    /// Returns `true` when a record was written.
    async fn create(&self, task: &Task) -> TaskRepositoryResult<bool>;

    /// Overwrites the summary, sensitivity flag and closing date of the task
    /// identified by `code`.
    ///
    /// Returns `true` when a record was changed.
    async fn update(&self, code: &TaskCode, task: &Task) -> TaskRepositoryResult<bool>;

    /// Deletes the task identified by `code`.
    ///
    /// Returns `true` when a record was removed.
    async fn delete(&self, code: &TaskCode) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
