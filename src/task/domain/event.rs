//! Events emitted after task lifecycle changes.

use super::TaskCode;
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Emitted after a task has been closed and the change persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskClosedEvent {
    code: TaskCode,
    closed_by_id: UserId,
    closed_by_name: String,
    closed_at: DateTime<Utc>,
}

impl TaskClosedEvent {
    /// Creates a closed-task event.
    #[must_use]
    pub fn new(
        code: TaskCode,
        closed_by_id: UserId,
        closed_by_name: impl Into<String>,
        closed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            closed_by_id,
            closed_by_name: closed_by_name.into(),
            closed_at,
        }
    }

    /// Returns the closed task's code.
    #[must_use]
    pub const fn code(&self) -> &TaskCode {
        &self.code
    }

    /// Returns the identifier of the user who closed the task.
    #[must_use]
    pub const fn closed_by_id(&self) -> UserId {
        self.closed_by_id
    }

    /// Returns the display name of the user who closed the task.
    #[must_use]
    pub fn closed_by_name(&self) -> &str {
        &self.closed_by_name
    }

    /// Returns the closing timestamp.
    #[must_use]
    pub const fn closed_at(&self) -> DateTime<Utc> {
        self.closed_at
    }

    /// Renders the human-readable notification text.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Task {} has been closed by {} on {}",
            self.code,
            self.closed_by_name,
            self.closed_at.format("%a, %d %b %Y %H:%M:%S GMT")
        )
    }
}
