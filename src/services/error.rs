//! Error taxonomy of the simulation engine.

use std::fmt;
use thiserror::Error;

/// Closed set of failure kinds the engine reports.
///
/// The transport layer picks HTTP statuses from this; the engine never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    Unknown,
    InvalidRequest,
    NotFound,
    Conflict,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorType::InvalidRequest => "invalid request",
            ErrorType::NotFound => "not found",
            ErrorType::Conflict => "conflict",
            ErrorType::Unknown => "unknown error",
        })
    }
}

/// An engine failure, tagged with the resource and identifier involved.
///
/// Renders as `"{kind}: {resource}[{id}] {message}"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {resource}[{id}]{}", .message.as_deref().map(|m| format!(" {m}")).unwrap_or_default())]
pub struct EngineError {
    pub kind: ErrorType,
    pub resource: &'static str,
    /// Offending identifier; empty when the failure is not about one item.
    pub id: String,
    pub message: Option<String>,
}

pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    pub fn new(kind: ErrorType, resource: &'static str, id: impl fmt::Display) -> Self {
        Self {
            kind,
            resource,
            id: id.to_string(),
            message: None,
        }
    }

    pub fn unknown(resource: &'static str, id: impl fmt::Display) -> Self {
        Self::new(ErrorType::Unknown, resource, id)
    }

    pub fn invalid_request(resource: &'static str, id: impl fmt::Display) -> Self {
        Self::new(ErrorType::InvalidRequest, resource, id)
    }

    pub fn not_found(resource: &'static str, id: impl fmt::Display) -> Self {
        Self::new(ErrorType::NotFound, resource, id)
    }

    pub fn conflict(resource: &'static str, id: impl fmt::Display) -> Self {
        Self::new(ErrorType::Conflict, resource, id)
    }

    /// Attach a human readable detail message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorType::NotFound
    }

    pub fn is_conflict(&self) -> bool {
        self.kind == ErrorType::Conflict
    }
}
