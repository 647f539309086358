//! HTTP error responses of the fake server.
//!
//! Engine errors are turned into statuses here and nowhere else. Endpoints
//! do not all agree on how an *unknown* engine error is reported, so each
//! family of handlers picks its own constructor:
//!
//! - [`AppError::from_engine`]: unknown → 500 with `{"error": "unknown error: ..."}`
//! - [`AppError::from_bucket_engine`]: unknown → 400 with the structured body
//! - [`AppError::from_status_engine`]: every engine error → 404 as plain text

use crate::models::api_error::ErrorBody;
use crate::services::error::{EngineError, ErrorType};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// An error response: a status plus one of the body shapes the API uses.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    body: ErrorPayload,
}

#[derive(Debug)]
enum ErrorPayload {
    /// `{"error": {"code", "message", "trace_id", "errors"}}`
    Detail(ErrorBody),
    /// `{"error": "..."}`
    Error(String),
    /// `{"msg": "..."}`, used for malformed path parameters.
    Msg(String),
    /// `text/plain` body.
    Text(String),
}

impl AppError {
    /// Map an engine error for the common handlers.
    pub fn from_engine(err: EngineError) -> Self {
        debug!("engine rejected request: {}", err);
        match typed_status(err.kind) {
            Some(status) => Self::detail(status, &err),
            None => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: ErrorPayload::Error(format!("unknown error: {err}")),
            },
        }
    }

    /// Map an engine error for the bucket handlers, whose documented
    /// failure response is a 400.
    pub fn from_bucket_engine(err: EngineError) -> Self {
        debug!("engine rejected bucket request: {}", err);
        let status = typed_status(err.kind).unwrap_or(StatusCode::BAD_REQUEST);
        Self::detail(status, &err)
    }

    /// Map an engine error for the site status handler.
    pub fn from_status_engine(err: EngineError) -> Self {
        debug!("engine rejected status request: {}", err);
        Self {
            status: StatusCode::NOT_FOUND,
            body: ErrorPayload::Text(err.to_string()),
        }
    }

    /// 400 for a request body that could not be decoded.
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorPayload::Error(msg.into()),
        }
    }

    /// 400 for a path parameter of the wrong format.
    pub fn invalid_param(name: &str, reason: impl fmt::Display) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorPayload::Msg(format!("Invalid format for parameter {name}: {reason}")),
        }
    }

    fn detail(status: StatusCode, err: &EngineError) -> Self {
        Self {
            status,
            body: ErrorPayload::Detail(ErrorBody::new(
                status.as_u16(),
                err.to_string(),
                Uuid::new_v4().to_string(),
            )),
        }
    }

    fn message(&self) -> &str {
        match &self.body {
            ErrorPayload::Detail(body) => &body.detail.message,
            ErrorPayload::Error(msg) | ErrorPayload::Msg(msg) | ErrorPayload::Text(msg) => msg,
        }
    }
}

/// Status for the error kinds every endpoint agrees on.
fn typed_status(kind: ErrorType) -> Option<StatusCode> {
    match kind {
        ErrorType::InvalidRequest => Some(StatusCode::BAD_REQUEST),
        ErrorType::NotFound => Some(StatusCode::NOT_FOUND),
        ErrorType::Conflict => Some(StatusCode::CONFLICT),
        ErrorType::Unknown => None,
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.body {
            ErrorPayload::Detail(body) => (self.status, Json(body)).into_response(),
            ErrorPayload::Error(msg) => (self.status, Json(json!({ "error": msg }))).into_response(),
            ErrorPayload::Msg(msg) => (self.status, Json(json!({ "msg": msg }))).into_response(),
            ErrorPayload::Text(msg) => (self.status, msg).into_response(),
        }
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        AppError::from_engine(err)
    }
}
