//! Task endpoints expressed as transport-free handlers.

use super::ApiReply;
use crate::{
    error::ErrorKind,
    identity::domain::User,
    task::{
        domain::{Task, TaskCode, TaskPatch, validate_new_task, validate_task_patch},
        ports::{TaskEventPublisher, TaskRepository},
        services::{TaskAccessError, TaskAccessService},
    },
};
use mockable::Clock;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

const EMPTY_BODY_MESSAGE: &str = "request body cannot be empty";

/// Creation body accepted by [`TaskApi::post`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewTaskBody {
    code: TaskCode,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    has_sensitive_data: Option<bool>,
}

/// Task handlers for an authenticated actor.
#[derive(Clone)]
pub struct TaskApi<R, P, C>
where
    R: TaskRepository,
    P: TaskEventPublisher,
    C: Clock + Send + Sync,
{
    service: Arc<TaskAccessService<R, P, C>>,
}

fn service_failure(err: &TaskAccessError) -> ApiReply {
    ApiReply::from_error(err.kind(), err.to_string())
}

/// Parses a task code taken from the request path.
///
/// A code that cannot be valid cannot name an existing task, so it is
/// reported as not found.
fn path_code(raw_code: &str) -> Result<TaskCode, ApiReply> {
    TaskCode::new(raw_code).map_err(|err| {
        warn!(error = %err, "rejected task code from request path");
        ApiReply::from_error(
            ErrorKind::TaskNotFound,
            format!("task {raw_code} does not exist"),
        )
    })
}

impl<R, P, C> TaskApi<R, P, C>
where
    R: TaskRepository,
    P: TaskEventPublisher,
    C: Clock + Send + Sync,
{
    /// Creates handlers over a shared task access service.
    #[must_use]
    pub const fn new(service: Arc<TaskAccessService<R, P, C>>) -> Self {
        Self { service }
    }

    /// `GET /`: lists the tasks visible to `actor`.
    pub async fn list(&self, actor: &User) -> ApiReply {
        match self.service.list(actor).await {
            Ok(tasks) => ApiReply::ok(&tasks),
            Err(err) => service_failure(&err),
        }
    }

    /// `GET /{code}`: returns one task.
    pub async fn get(&self, actor: &User, raw_code: &str) -> ApiReply {
        let code = match path_code(raw_code) {
            Ok(code) => code,
            Err(reply) => return reply,
        };
        match self.service.get(actor, &code).await {
            Ok(task) => ApiReply::ok(&task),
            Err(err) => service_failure(&err),
        }
    }

    /// `POST /`: validates the body and creates a task owned by `actor`.
    pub async fn post(&self, actor: &User, body: Option<&Value>) -> ApiReply {
        let Some(body) = body else {
            return ApiReply::bad_request(&EMPTY_BODY_MESSAGE);
        };
        let report = validate_new_task(body);
        if !report.is_valid() {
            return ApiReply::bad_request(&report);
        }
        let parsed = match NewTaskBody::deserialize(body) {
            Ok(parsed) => parsed,
            Err(err) => return ApiReply::bad_request(&err.to_string()),
        };

        let task = Task::new(
            parsed.code,
            parsed.summary,
            parsed.has_sensitive_data.unwrap_or(false),
            None,
            actor.id(),
        );
        match self.service.create(actor, task).await {
            Ok(created) => ApiReply::created(&created),
            Err(err) => service_failure(&err),
        }
    }

    /// `PATCH /{code}`: validates the body and applies a partial update.
    pub async fn patch(&self, actor: &User, raw_code: &str, body: Option<&Value>) -> ApiReply {
        let Some(body) = body else {
            return ApiReply::bad_request(&EMPTY_BODY_MESSAGE);
        };
        let report = validate_task_patch(body);
        if !report.is_valid() {
            return ApiReply::bad_request(&report);
        }
        let patch = match TaskPatch::deserialize(body) {
            Ok(patch) => patch,
            Err(err) => return ApiReply::bad_request(&err.to_string()),
        };
        let code = match path_code(raw_code) {
            Ok(code) => code,
            Err(reply) => return reply,
        };

        match self.service.update(actor, &code, patch).await {
            Ok(_) => ApiReply::no_content(),
            Err(err) => service_failure(&err),
        }
    }

    /// `PATCH /{code}/close`: closes a task owned by `actor`.
    pub async fn close(&self, actor: &User, raw_code: &str) -> ApiReply {
        let code = match path_code(raw_code) {
            Ok(code) => code,
            Err(reply) => return reply,
        };
        match self.service.close(actor, &code).await {
            Ok(_) => ApiReply::no_content(),
            Err(err) => service_failure(&err),
        }
    }

    /// `DELETE /{code}`: removes a task.
    pub async fn delete(&self, actor: &User, raw_code: &str) -> ApiReply {
        let code = match path_code(raw_code) {
            Ok(code) => code,
            Err(reply) => return reply,
        };
        match self.service.remove(actor, &code).await {
            Ok(_) => ApiReply::no_content(),
            Err(err) => service_failure(&err),
        }
    }
}
