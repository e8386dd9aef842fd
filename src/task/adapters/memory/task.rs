//! In-memory repository for task access tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::{
    identity::domain::UserId,
    task::{
        domain::{Task, TaskCode},
        ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    },
};

/// Thread-safe in-memory task repository.
///
/// Tasks are kept ordered by code so listings are deterministic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<BTreeMap<TaskCode, Task>>>,
}

fn lock_error(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `tasks`.
    ///
    /// Later tasks replace earlier ones with the same code.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let state = tasks
            .into_iter()
            .map(|task| (task.code().clone(), task))
            .collect();
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.values().cloned().collect())
    }

    async fn list_by_owner(&self, user_id: UserId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .values()
            .filter(|task| task.is_owned_by(user_id))
            .cloned()
            .collect())
    }

    async fn find_by_code(&self, code: &TaskCode) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.get(code).cloned())
    }

    async fn create(&self, task: &Task) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.contains_key(task.code()) {
            return Ok(false);
        }
        state.insert(task.code().clone(), task.clone());
        Ok(true)
    }

    async fn update(&self, code: &TaskCode, task: &Task) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        let Some(stored) = state.get_mut(code) else {
            return Ok(false);
        };
        // Code and owner are not writable through updates.
        *stored = Task::new(
            stored.code().clone(),
            task.summary().map(str::to_owned),
            task.has_sensitive_data(),
            task.closed_date(),
            stored.user_id(),
        );
        Ok(true)
    }

    async fn delete(&self, code: &TaskCode) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        Ok(state.remove(code).is_some())
    }
}
