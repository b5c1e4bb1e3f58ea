//! Response envelope shared by every endpoint
//!
//! Success or failure, every body has the same shape:
//!
//! ```json
//! { "success": true, "message": "...", "data": {...}, "errors": null,
//!   "statusCode": 200, "pagination": { "total": 25, "page": 2, "limit": 10, "pages": 3 } }
//! ```
//!
//! `pagination` only appears on list endpoints.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::pagination::Pagination;

/// Error detail carried by a failure envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    List(Vec<String>),
}

impl From<String> for ErrorDetail {
    fn from(message: String) -> Self {
        ErrorDetail::Message(message)
    }
}

impl From<&str> for ErrorDetail {
    fn from(message: &str) -> Self {
        ErrorDetail::Message(message.to_string())
    }
}

impl From<Vec<String>> for ErrorDetail {
    fn from(messages: Vec<String>) -> Self {
        ErrorDetail::List(messages)
    }
}

/// The envelope itself
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub errors: Option<ErrorDetail>,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: None,
            status_code: status.as_u16(),
            pagination: None,
            status,
        }
    }

    /// 200 OK
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::success(StatusCode::OK, message, data)
    }

    /// 201 Created
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::success(StatusCode::CREATED, message, data)
    }

    /// 200 OK for a list endpoint, with the page metadata attached
    pub fn paginated(message: impl Into<String>, data: T, pagination: Pagination) -> Self {
        Self {
            pagination: Some(pagination),
            ..Self::success(StatusCode::OK, message, data)
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl ApiResponse<()> {
    /// Failure envelope: `success` is false and `data` is null
    pub fn failure(
        status: StatusCode,
        message: impl Into<String>,
        errors: impl Into<ErrorDetail>,
    ) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors: Some(errors.into()),
            status_code: status.as_u16(),
            pagination: None,
            status,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
