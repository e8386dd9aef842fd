//! Response envelope and reply shaping.

use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::error::ErrorKind;

/// Body sent for every reply that has one.
///
/// Exactly one of `error` and `data` is populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    /// Error message or validation map, when the request failed.
    pub error: Option<Value>,
    /// Payload, when the request succeeded.
    pub data: Option<Value>,
}

/// Status code and optional body produced for a request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    status: u16,
    body: Option<ApiResponse>,
}

impl ApiReply {
    /// `200 OK` carrying `data`.
    #[must_use]
    pub fn ok(data: &impl Serialize) -> Self {
        Self::with_data(200, data)
    }

    /// `201 Created` carrying `data`.
    #[must_use]
    pub fn created(data: &impl Serialize) -> Self {
        Self::with_data(201, data)
    }

    /// `204 No Content`.
    #[must_use]
    pub const fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }

    /// `400 Bad Request` carrying `error`.
    #[must_use]
    pub fn bad_request(error: &impl Serialize) -> Self {
        Self::failure(400, error)
    }

    /// Reply for a classified service error.
    #[must_use]
    pub fn from_error(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self::failure(kind.http_status(), &message)
    }

    /// Returns the status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&ApiResponse> {
        self.body.as_ref()
    }

    /// Returns the error value, if the reply carries one.
    #[must_use]
    pub fn error(&self) -> Option<&Value> {
        self.body.as_ref().and_then(|body| body.error.as_ref())
    }

    /// Returns the data value, if the reply carries one.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.body.as_ref().and_then(|body| body.data.as_ref())
    }

    fn with_data(status: u16, data: &impl Serialize) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => Self {
                status,
                body: Some(ApiResponse {
                    error: None,
                    data: Some(value),
                }),
            },
            Err(err) => {
                error!(error = %err, "failed to serialise response payload");
                Self::internal()
            }
        }
    }

    fn failure(status: u16, error: &impl Serialize) -> Self {
        match serde_json::to_value(error) {
            Ok(value) => Self {
                status,
                body: Some(ApiResponse {
                    error: Some(value),
                    data: None,
                }),
            },
            Err(err) => {
                error!(error = %err, "failed to serialise error payload");
                Self::internal()
            }
        }
    }

    fn internal() -> Self {
        Self {
            status: ErrorKind::DataAccess.http_status(),
            body: Some(ApiResponse {
                error: Some(Value::String("internal error".to_owned())),
                data: None,
            }),
        }
    }
}
