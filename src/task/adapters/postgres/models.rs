//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task code.
    pub code: String,
    /// Optional summary.
    pub summary: Option<String>,
    /// Sensitivity flag.
    pub has_sensitive_data: bool,
    /// Closing timestamp.
    pub closed_date: Option<DateTime<Utc>>,
    /// Owner identifier.
    pub user_id: uuid::Uuid,
}

/// Insert model for task records.
///
/// New tasks are always open, so the closing date is not inserted.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task code.
    pub code: String,
    /// Optional summary.
    pub summary: Option<String>,
    /// Sensitivity flag.
    pub has_sensitive_data: bool,
    /// Owner identifier.
    pub user_id: uuid::Uuid,
}

/// Changeset for task updates.
///
/// `treat_none_as_null` lets a cleared summary or reopened date be written
/// as `NULL` instead of being skipped.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Replacement summary.
    pub summary: Option<String>,
    /// Replacement sensitivity flag.
    pub has_sensitive_data: bool,
    /// Replacement closing timestamp.
    pub closed_date: Option<DateTime<Utc>>,
}
