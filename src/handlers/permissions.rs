//! Permission handlers.
//!
//! `permission_id` arrives as a string so a non-numeric segment can be
//! reported with the API's `{"msg": ...}` body instead of axum's default
//! path rejection.

use crate::{
    errors::AppError,
    handlers::{json_body, parse_permission_id},
    models::{
        envelope::DataBody,
        permission::{Permission, PermissionRequestBody},
    },
    services::engine::Engine,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

/// `GET /{site_id}/v2/permissions`
pub async fn list_permissions(
    State(engine): State<Arc<Engine>>,
    Path(site_id): Path<String>,
) -> Result<Json<DataBody<Vec<Permission>>>, AppError> {
    let permissions = engine.list_permissions(&site_id).await?;
    Ok(Json(DataBody::new(permissions)))
}

/// `POST /{site_id}/v2/permissions`
pub async fn create_permission(
    State(engine): State<Arc<Engine>>,
    Path(site_id): Path<String>,
    payload: Result<Json<PermissionRequestBody>, JsonRejection>,
) -> Result<(StatusCode, Json<DataBody<Permission>>), AppError> {
    let params = json_body(payload)?;
    let permission = engine.create_permission(&site_id, params).await?;
    Ok((StatusCode::CREATED, Json(DataBody::new(permission))))
}

/// `GET /{site_id}/v2/permissions/{permission_id}`
pub async fn read_permission(
    State(engine): State<Arc<Engine>>,
    Path((site_id, permission_id)): Path<(String, String)>,
) -> Result<Json<DataBody<Permission>>, AppError> {
    let permission_id = parse_permission_id(&permission_id)?;
    let permission = engine.read_permission(&site_id, permission_id).await?;
    Ok(Json(DataBody::new(permission)))
}

/// `PUT /{site_id}/v2/permissions/{permission_id}`
pub async fn update_permission(
    State(engine): State<Arc<Engine>>,
    Path((site_id, permission_id)): Path<(String, String)>,
    payload: Result<Json<PermissionRequestBody>, JsonRejection>,
) -> Result<Json<DataBody<Permission>>, AppError> {
    let permission_id = parse_permission_id(&permission_id)?;
    let params = json_body(payload)?;
    let permission = engine
        .update_permission(&site_id, permission_id, params)
        .await?;
    Ok(Json(DataBody::new(permission)))
}

/// `DELETE /{site_id}/v2/permissions/{permission_id}`
pub async fn delete_permission(
    State(engine): State<Arc<Engine>>,
    Path((site_id, permission_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let permission_id = parse_permission_id(&permission_id)?;
    engine.delete_permission(&site_id, permission_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
