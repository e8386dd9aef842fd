//! Request-body validation for task creation and patching.
//!
//! Rules run against the raw JSON body so type mismatches can be reported
//! per field. Every rule runs; violations accumulate into one report keyed
//! by field path rather than stopping at the first failure.

use super::{MAX_SUMMARY_LENGTH, MAX_TASK_CODE_LENGTH};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

const CODE_FIELD: &str = "code";
const SUMMARY_FIELD: &str = "summary";
const SENSITIVE_FIELD: &str = "hasSensitiveData";

/// Field-path to message mapping produced by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    errors: BTreeMap<String, String>,
}

impl ValidationReport {
    /// Returns `true` when no rule was violated.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the message recorded for `path`, if any.
    #[must_use]
    pub fn message_for(&self, path: &str) -> Option<&str> {
        self.errors.get(path).map(String::as_str)
    }

    /// Returns all recorded violations.
    #[must_use]
    pub const fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    fn record(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(format!("task.{field}"), message.into());
    }
}

/// Validates a request body for task creation.
///
/// `code` is required and limited to 16 characters, `summary` is limited
/// to 2500 characters and `hasSensitiveData` must be a boolean when present.
#[must_use]
pub fn validate_new_task(body: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();
    let Some(fields) = object_fields(body, &mut report) else {
        return report;
    };

    check_code(fields, &mut report);
    check_summary(fields, &mut report);
    check_sensitive_flag(fields, &mut report);
    report
}

/// Validates a request body for a partial task update.
///
/// Same as [`validate_new_task`] except that `code` is neither required nor
/// inspected, since codes are immutable.
#[must_use]
pub fn validate_task_patch(body: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();
    let Some(fields) = object_fields(body, &mut report) else {
        return report;
    };

    check_summary(fields, &mut report);
    check_sensitive_flag(fields, &mut report);
    report
}

fn object_fields<'a>(
    body: &'a Value,
    report: &mut ValidationReport,
) -> Option<&'a Map<String, Value>> {
    let fields = body.as_object();
    if fields.is_none() {
        report
            .errors
            .insert("task".to_owned(), "request body must be a JSON object.".to_owned());
    }
    fields
}

fn check_code(fields: &Map<String, Value>, report: &mut ValidationReport) {
    match fields.get(CODE_FIELD) {
        None | Some(Value::Null) => report.record(CODE_FIELD, "property cannot be empty."),
        Some(Value::String(code)) if code.trim().is_empty() => {
            report.record(CODE_FIELD, "property cannot be empty.");
        }
        Some(Value::String(code)) if code.chars().count() > MAX_TASK_CODE_LENGTH => {
            report.record(
                CODE_FIELD,
                format!("property exceeds allowed length of {MAX_TASK_CODE_LENGTH} characters."),
            );
        }
        Some(Value::String(_)) => {}
        Some(_) => report.record(CODE_FIELD, "property must be of type string."),
    }
}

fn check_summary(fields: &Map<String, Value>, report: &mut ValidationReport) {
    match fields.get(SUMMARY_FIELD) {
        None | Some(Value::Null) => {}
        Some(Value::String(summary)) if summary.chars().count() > MAX_SUMMARY_LENGTH => {
            report.record(
                SUMMARY_FIELD,
                format!("property exceeds allowed length of {MAX_SUMMARY_LENGTH} characters."),
            );
        }
        Some(Value::String(_)) => {}
        Some(_) => report.record(SUMMARY_FIELD, "property must be of type string."),
    }
}

fn check_sensitive_flag(fields: &Map<String, Value>, report: &mut ValidationReport) {
    match fields.get(SENSITIVE_FIELD) {
        None | Some(Value::Null | Value::Bool(_)) => {}
        Some(_) => report.record(SENSITIVE_FIELD, "property must be of type boolean."),
    }
}
