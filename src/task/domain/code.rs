//! Validated task code.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of characters in a task code.
pub const MAX_TASK_CODE_LENGTH: usize = 16;

/// Unique, immutable, caller-chosen task code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskCode(String);

impl TaskCode {
    /// Creates a validated task code.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskCode`] when the value is empty or
    /// whitespace only, or [`TaskDomainError::TaskCodeTooLong`] when it has
    /// more than [`MAX_TASK_CODE_LENGTH`] characters. Surrounding whitespace
    /// is kept and counts towards the length.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyTaskCode);
        }
        let length = raw.chars().count();
        if length > MAX_TASK_CODE_LENGTH {
            return Err(TaskDomainError::TaskCodeTooLong {
                length,
                max: MAX_TASK_CODE_LENGTH,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the code as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskCode {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskCode> for String {
    fn from(value: TaskCode) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
