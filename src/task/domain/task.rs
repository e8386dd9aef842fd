//! Task record and its lifecycle queries.

use super::TaskCode;
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Summary shown in place of sensitive content to anyone but the owner.
pub const REDACTION_PLACEHOLDER: &str =
    "This content cannot be displayed because it contains sensitive data.";

/// Maximum number of characters in a task summary.
pub const MAX_SUMMARY_LENGTH: usize = 2500;

/// A unit of work owned by one employee.
///
/// A task is open while `closed_date` is `None`. Once closed it accepts no
/// further updates, although it can still be removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    code: TaskCode,
    summary: Option<String>,
    has_sensitive_data: bool,
    closed_date: Option<DateTime<Utc>>,
    user_id: UserId,
}

impl Task {
    /// Creates a task record.
    #[must_use]
    pub const fn new(
        code: TaskCode,
        summary: Option<String>,
        has_sensitive_data: bool,
        closed_date: Option<DateTime<Utc>>,
        user_id: UserId,
    ) -> Self {
        Self {
            code,
            summary,
            has_sensitive_data,
            closed_date,
            user_id,
        }
    }

    /// Returns the task code.
    #[must_use]
    pub const fn code(&self) -> &TaskCode {
        &self.code
    }

    /// Returns the summary, if any.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Returns `true` when the summary must be hidden from non-owners.
    #[must_use]
    pub const fn has_sensitive_data(&self) -> bool {
        self.has_sensitive_data
    }

    /// Returns the closing timestamp, if the task is closed.
    #[must_use]
    pub const fn closed_date(&self) -> Option<DateTime<Utc>> {
        self.closed_date
    }

    /// Returns the owner's identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns `true` once the task has been closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed_date.is_some()
    }

    /// Returns `true` when `user_id` owns this task.
    #[must_use]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    /// Replaces the summary with [`REDACTION_PLACEHOLDER`].
    pub fn redact_sensitive_data(&mut self) {
        self.summary = Some(REDACTION_PLACEHOLDER.to_owned());
    }

    /// Returns the task as `viewer` is allowed to see it.
    ///
    /// Sensitive summaries are redacted unless `viewer` owns the task.
    #[must_use]
    pub fn visible_to(mut self, viewer: UserId) -> Self {
        if self.has_sensitive_data && !self.is_owned_by(viewer) {
            self.redact_sensitive_data();
        }
        self
    }

    /// Returns a copy owned by `owner` and still open.
    ///
    /// Used on creation so callers cannot create tasks on behalf of others
    /// or create them already closed.
    #[must_use]
    pub fn into_open_task_for(self, owner: UserId) -> Self {
        Self {
            closed_date: None,
            user_id: owner,
            ..self
        }
    }

    /// Marks the task as closed at `closed_at`.
    pub const fn close(&mut self, closed_at: DateTime<Utc>) {
        self.closed_date = Some(closed_at);
    }
}
