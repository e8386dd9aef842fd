//! Partial task updates.

use super::Task;
use serde::{Deserialize, Deserializer};

/// Partial update for an open task.
///
/// Each field is three-state: omitted (`None`) keeps the stored value,
/// explicit null (`Some(None)`) clears it, and a value replaces it. The
/// code, owner and closing date cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default, deserialize_with = "explicit_field")]
    summary: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_field")]
    has_sensitive_data: Option<Option<bool>>,
}

/// Distinguishes an explicit JSON `null` from an omitted field.
fn explicit_field<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl TaskPatch {
    /// Creates an empty patch that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the summary.
    #[must_use]
    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Sets or clears the sensitivity flag. Clearing it stores `false`.
    #[must_use]
    pub const fn with_sensitive_data(mut self, has_sensitive_data: Option<bool>) -> Self {
        self.has_sensitive_data = Some(has_sensitive_data);
        self
    }

    /// Returns `true` when the patch changes no field.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.summary.is_none() && self.has_sensitive_data.is_none()
    }

    /// Completes the patch from `existing`, yielding the full record to
    /// persist.
    #[must_use]
    pub fn merge_onto(self, existing: &Task) -> Task {
        let summary = self
            .summary
            .unwrap_or_else(|| existing.summary().map(str::to_owned));
        let has_sensitive_data = self
            .has_sensitive_data
            .map_or(existing.has_sensitive_data(), |value| {
                value.unwrap_or(false)
            });

        Task::new(
            existing.code().clone(),
            summary,
            has_sensitive_data,
            existing.closed_date(),
            existing.user_id(),
        )
    }
}
