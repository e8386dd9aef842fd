//! Service layer enforcing task visibility, ownership and lifecycle rules.
//!
//! Managers may read and remove every task; other users only their own.
//! Only the owner may update or close a task, and closed tasks accept no
//! further updates. Tasks the actor may not see are reported exactly like
//! tasks that do not exist, so ownership never leaks through error kinds.

use crate::{
    error::ErrorKind,
    identity::domain::User,
    task::{
        domain::{Task, TaskClosedEvent, TaskCode, TaskPatch},
        ports::{TaskEventPublisher, TaskRepository, TaskRepositoryError},
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

/// Service-level errors for task access operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskAccessError {
    /// The task does not exist or is not visible to the actor.
    #[error("task {0} does not exist")]
    TaskNotFound(TaskCode),

    /// Another task already uses the code.
    #[error("task code {0} must be unique")]
    TaskAlreadyExists(TaskCode),

    /// The task is closed and cannot be changed.
    #[error("cannot update already closed task {0}")]
    TaskAlreadyClosed(TaskCode),

    /// The backing store failed or did not apply a write.
    #[error("{0}")]
    DataAccess(&'static str),
}

impl TaskAccessError {
    /// Classifies the error for API callers.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TaskNotFound(_) => ErrorKind::TaskNotFound,
            Self::TaskAlreadyExists(_) => ErrorKind::TaskAlreadyExists,
            Self::TaskAlreadyClosed(_) => ErrorKind::TaskAlreadyClosed,
            Self::DataAccess(_) => ErrorKind::DataAccess,
        }
    }
}

/// Result type for task access operations.
pub type TaskAccessResult<T> = Result<T, TaskAccessError>;

/// Which actors may act on a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    /// Owner or any manager.
    OwnerOrManager,
    /// Owner only.
    OwnerOnly,
}

/// Logs a repository fault and replaces it with a safe message.
fn data_access(message: &'static str, err: &TaskRepositoryError) -> TaskAccessError {
    error!(error = %err, "{message}");
    TaskAccessError::DataAccess(message)
}

/// Panics when the acting user was never passed through identity resolution.
fn ensure_role_resolved(current_user: &User) {
    assert!(
        current_user.has_resolved_role(),
        "acting user {} has no resolved role",
        current_user.id()
    );
}

/// Authorisation-aware task service.
#[derive(Clone)]
pub struct TaskAccessService<R, P, C>
where
    R: TaskRepository,
    P: TaskEventPublisher,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    publisher: Arc<P>,
    clock: Arc<C>,
}

impl<R, P, C> TaskAccessService<R, P, C>
where
    R: TaskRepository,
    P: TaskEventPublisher,
    C: Clock + Send + Sync,
{
    /// Creates a new task access service.
    #[must_use]
    pub const fn new(repository: Arc<R>, publisher: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            repository,
            publisher,
            clock,
        }
    }

    /// Lists the tasks visible to `current_user`.
    ///
    /// Managers see every task, other users only their own. Sensitive
    /// summaries of tasks the actor does not own are redacted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAccessError::DataAccess`] when the repository fails.
    ///
    /// # Panics
    ///
    /// Panics if `current_user` has no resolved role.
    #[instrument(skip_all, fields(user_id = %current_user.id()))]
    pub async fn list(&self, current_user: &User) -> TaskAccessResult<Vec<Task>> {
        ensure_role_resolved(current_user);
        let viewer = current_user.id();
        let fetched = if current_user.is_manager() {
            self.repository.list().await
        } else {
            self.repository.list_by_owner(viewer).await
        };
        let tasks = fetched.map_err(|err| data_access("error retrieving tasks", &err))?;

        Ok(tasks
            .into_iter()
            .map(|task| task.visible_to(viewer))
            .collect())
    }

    /// Returns a single task visible to `current_user`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAccessError::TaskNotFound`] when the task does not exist
    /// or belongs to another user and the actor is not a manager, and
    /// [`TaskAccessError::DataAccess`] when the repository fails.
    ///
    /// # Panics
    ///
    /// Panics if `current_user` has no resolved role.
    #[instrument(skip_all, fields(user_id = %current_user.id(), task_code = %code))]
    pub async fn get(&self, current_user: &User, code: &TaskCode) -> TaskAccessResult<Task> {
        ensure_role_resolved(current_user);
        let task = self
            .load_authorised(current_user, code, Access::OwnerOrManager)
            .await?;
        Ok(task.visible_to(current_user.id()))
    }

    /// Creates a task owned by `current_user`.
    ///
    /// The owner and closing date supplied in `task` are ignored: the task is
    /// always stored open and owned by the actor.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAccessError::TaskAlreadyExists`] when the code is in use
    /// and [`TaskAccessError::DataAccess`] when the repository fails or does
    /// not store the task.
    ///
    /// # Panics
    ///
    /// Panics if `current_user` has no resolved role.
    #[instrument(skip_all, fields(user_id = %current_user.id(), task_code = %task.code()))]
    pub async fn create(&self, current_user: &User, task: Task) -> TaskAccessResult<Task> {
        ensure_role_resolved(current_user);
        let code = task.code().clone();
        let existing = self
            .repository
            .find_by_code(&code)
            .await
            .map_err(|err| data_access("error saving task", &err))?;
        if existing.is_some() {
            warn!("task code already in use");
            return Err(TaskAccessError::TaskAlreadyExists(code));
        }

        let task = task.into_open_task_for(current_user.id());
        let created = self
            .repository
            .create(&task)
            .await
            .map_err(|err| data_access("error saving task", &err))?;
        if !created {
            error!("task was not created");
            return Err(TaskAccessError::DataAccess("task was not created"));
        }

        info!("task created");
        Ok(task)
    }

    /// Applies a partial update to a task owned by `current_user`.
    ///
    /// Fields the patch omits keep their stored values. Returns the merged
    /// record as persisted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAccessError::TaskNotFound`] when the task does not exist
    /// or is owned by someone else, [`TaskAccessError::TaskAlreadyClosed`]
    /// when it is closed, and [`TaskAccessError::DataAccess`] when the
    /// repository fails or does not apply the write.
    ///
    /// # Panics
    ///
    /// Panics if `current_user` has no resolved role.
    #[instrument(skip_all, fields(user_id = %current_user.id(), task_code = %code))]
    pub async fn update(
        &self,
        current_user: &User,
        code: &TaskCode,
        patch: TaskPatch,
    ) -> TaskAccessResult<Task> {
        ensure_role_resolved(current_user);
        let existing = self.load_open_owned(current_user, code).await?;
        let merged = patch.merge_onto(&existing);
        self.write(code, &merged, "task was not updated").await?;

        info!("task updated");
        Ok(merged)
    }

    /// Closes a task owned by `current_user` and publishes a notification.
    ///
    /// The closing date comes from the service clock. Publishing happens
    /// after the write and its failure does not affect the result.
    ///
    /// # Errors
    ///
    /// Same as [`TaskAccessService::update`].
    ///
    /// # Panics
    ///
    /// Panics if `current_user` has no resolved role.
    #[instrument(skip_all, fields(user_id = %current_user.id(), task_code = %code))]
    pub async fn close(&self, current_user: &User, code: &TaskCode) -> TaskAccessResult<Task> {
        ensure_role_resolved(current_user);
        let mut task = self.load_open_owned(current_user, code).await?;
        let closed_at = self.clock.utc();
        task.close(closed_at);
        self.write(code, &task, "task was not closed").await?;
        info!(%closed_at, "task closed");

        let event = TaskClosedEvent::new(
            code.clone(),
            current_user.id(),
            current_user.name(),
            closed_at,
        );
        if let Err(err) = self.publisher.publish_task_closed(&event).await {
            warn!(error = %err, "failed to publish task closed event");
        }

        Ok(task)
    }

    /// Removes a task. Managers may remove any task, other users only their
    /// own. Closed tasks can be removed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAccessError::TaskNotFound`] when the task does not exist
    /// or is not visible to the actor, and [`TaskAccessError::DataAccess`]
    /// when the repository fails or does not delete the task.
    ///
    /// # Panics
    ///
    /// Panics if `current_user` has no resolved role.
    #[instrument(skip_all, fields(user_id = %current_user.id(), task_code = %code))]
    pub async fn remove(&self, current_user: &User, code: &TaskCode) -> TaskAccessResult<bool> {
        ensure_role_resolved(current_user);
        self.load_authorised(current_user, code, Access::OwnerOrManager)
            .await?;

        let removed = self
            .repository
            .delete(code)
            .await
            .map_err(|err| data_access("error removing task", &err))?;
        if !removed {
            error!("task was not removed");
            return Err(TaskAccessError::DataAccess("task was not removed"));
        }

        info!("task removed");
        Ok(true)
    }

    /// Loads a task and checks the actor may act on it under `access`.
    async fn load_authorised(
        &self,
        current_user: &User,
        code: &TaskCode,
        access: Access,
    ) -> TaskAccessResult<Task> {
        let found = self
            .repository
            .find_by_code(code)
            .await
            .map_err(|err| data_access("error retrieving task", &err))?;
        let Some(task) = found else {
            warn!("task was not found");
            return Err(TaskAccessError::TaskNotFound(code.clone()));
        };

        let permitted = task.is_owned_by(current_user.id())
            || (access == Access::OwnerOrManager && current_user.is_manager());
        if !permitted {
            warn!(owner_id = %task.user_id(), "task belongs to another user");
            return Err(TaskAccessError::TaskNotFound(code.clone()));
        }

        Ok(task)
    }

    async fn load_open_owned(
        &self,
        current_user: &User,
        code: &TaskCode,
    ) -> TaskAccessResult<Task> {
        let task = self
            .load_authorised(current_user, code, Access::OwnerOnly)
            .await?;
        if task.is_closed() {
            warn!("cannot update already closed task");
            return Err(TaskAccessError::TaskAlreadyClosed(code.clone()));
        }
        Ok(task)
    }

    async fn write(
        &self,
        code: &TaskCode,
        task: &Task,
        not_applied: &'static str,
    ) -> TaskAccessResult<()> {
        let updated = self
            .repository
            .update(code, task)
            .await
            .map_err(|err| data_access("error updating task", &err))?;
        if !updated {
            error!("{not_applied}");
            return Err(TaskAccessError::DataAccess(not_applied));
        }
        Ok(())
    }
}
