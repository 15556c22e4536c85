//! Error responses for the HTTP boundary.

use crate::task::{ports::TaskRepositoryError, services::TaskServiceError};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::error;

const MESSAGE_FIELD: &str = "message";
const NOT_FOUND_MESSAGE: &str = "Task not found";
const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// Machine-readable category reported in the `code` field of an error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApiErrorCode {
    /// Task fields failed validation.
    Validation,
    /// The request body, query or path could not be parsed.
    InvalidRequest,
    /// The addressed task does not exist.
    NotFound,
    /// An unexpected server-side failure.
    Internal,
}

impl ApiErrorCode {
    const fn status(self) -> StatusCode {
        match self {
            Self::Validation | Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Failure returned from a task endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Field-level validation failures.
    #[error("validation failed")]
    Validation(BTreeMap<String, String>),
    /// Malformed request input, keyed by the offending part.
    #[error("invalid request: {1}")]
    InvalidRequest(String, String),
    /// Unknown task.
    #[error("task not found")]
    NotFound,
    /// Server-side failure; the detail is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the error category.
    #[must_use]
    pub const fn code(&self) -> ApiErrorCode {
        match self {
            Self::Validation(_) => ApiErrorCode::Validation,
            Self::InvalidRequest(..) => ApiErrorCode::InvalidRequest,
            Self::NotFound => ApiErrorCode::NotFound,
            Self::Internal(_) => ApiErrorCode::Internal,
        }
    }

    fn into_errors(self) -> BTreeMap<String, String> {
        match self {
            Self::Validation(errors) => errors,
            Self::InvalidRequest(field, message) => BTreeMap::from([(field, message)]),
            Self::NotFound => single_message(NOT_FOUND_MESSAGE),
            Self::Internal(detail) => {
                error!(%detail, "request failed");
                single_message(INTERNAL_MESSAGE)
            }
        }
    }
}

fn single_message(message: &str) -> BTreeMap<String, String> {
    BTreeMap::from([(MESSAGE_FIELD.to_owned(), message.to_owned())])
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    code: ApiErrorCode,
    status_code: u16,
    errors: BTreeMap<String, String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.code();
        let status = code.status();
        let body = ErrorBody {
            code,
            status_code: status.as_u16(),
            errors: self.into_errors(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Validation(validation) => Self::Validation(validation.into_errors()),
            TaskServiceError::NotFound(_)
            | TaskServiceError::Repository(TaskRepositoryError::NotFound(_)) => Self::NotFound,
            TaskServiceError::Repository(other) => Self::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest("body".to_owned(), rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidRequest("query".to_owned(), rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidRequest("id".to_owned(), rejection.body_text())
    }
}
