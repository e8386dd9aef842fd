//! Error catalog shared by the identity and task services.
//!
//! Each service exposes its own `thiserror` enum; both classify their
//! variants into an [`ErrorKind`] so adapters can map failures to transport
//! outcomes without matching on service-specific types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable classification of failures visible to API callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Storage or infrastructure fault.
    DataAccess,
    /// The task does not exist or is not visible to the actor.
    TaskNotFound,
    /// A task with the same code already exists.
    TaskAlreadyExists,
    /// The task has been closed and can no longer be changed.
    TaskAlreadyClosed,
    /// The employee identifier could not be resolved to a user with a role.
    UserNotFound,
}

impl ErrorKind {
    /// Returns the numeric catalog code for this kind.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::DataAccess => 101,
            Self::TaskNotFound => 201,
            Self::TaskAlreadyExists => 202,
            Self::TaskAlreadyClosed => 203,
            Self::UserNotFound => 301,
        }
    }

    /// Returns the HTTP status code adapters should report for this kind.
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::DataAccess => 500,
            Self::TaskNotFound | Self::UserNotFound => 404,
            Self::TaskAlreadyExists | Self::TaskAlreadyClosed => 400,
        }
    }

    /// Returns the canonical snake-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DataAccess => "data_access",
            Self::TaskNotFound => "task_not_found",
            Self::TaskAlreadyExists => "task_already_exists",
            Self::TaskAlreadyClosed => "task_already_closed",
            Self::UserNotFound => "user_not_found",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
