//! HTTP handlers, one module per resource.
//!
//! Handlers only extract, call the engine and wrap the result; status
//! selection for failures lives in [`crate::errors`].

pub mod account_keys;
pub mod accounts;
pub mod buckets;
pub mod clusters;
pub mod health_handlers;
pub mod permission_keys;
pub mod permissions;
pub mod site_status;

use crate::errors::AppError;
use crate::models::permission::PermissionId;
use axum::{Json, extract::rejection::JsonRejection};

/// Unwrap a JSON body, turning decode failures into a 400.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::bad_request(rejection.body_text()))
}

/// `permission_id` path segments must be integers.
pub(crate) fn parse_permission_id(raw: &str) -> Result<PermissionId, AppError> {
    raw.parse::<PermissionId>()
        .map_err(|err| AppError::invalid_param("permission_id", err))
}
