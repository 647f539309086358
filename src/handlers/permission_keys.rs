//! Permission access key handlers.

use crate::{
    errors::AppError,
    handlers::parse_permission_id,
    models::{envelope::DataBody, permission::PermissionKey},
    services::engine::Engine,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

/// `GET /{site_id}/v2/permissions/{permission_id}/keys`
pub async fn list_permission_access_keys(
    State(engine): State<Arc<Engine>>,
    Path((site_id, permission_id)): Path<(String, String)>,
) -> Result<Json<DataBody<Vec<PermissionKey>>>, AppError> {
    let permission_id = parse_permission_id(&permission_id)?;
    let keys = engine
        .list_permission_access_keys(&site_id, permission_id)
        .await?;
    Ok(Json(DataBody::new(keys)))
}

/// `POST /{site_id}/v2/permissions/{permission_id}/keys`
pub async fn create_permission_access_key(
    State(engine): State<Arc<Engine>>,
    Path((site_id, permission_id)): Path<(String, String)>,
) -> Result<(StatusCode, Json<DataBody<PermissionKey>>), AppError> {
    let permission_id = parse_permission_id(&permission_id)?;
    let key = engine
        .create_permission_access_key(&site_id, permission_id)
        .await?;
    Ok((StatusCode::CREATED, Json(DataBody::new(key))))
}

/// `GET /{site_id}/v2/permissions/{permission_id}/keys/{permission_key_id}`
pub async fn read_permission_access_key(
    State(engine): State<Arc<Engine>>,
    Path((site_id, permission_id, key_id)): Path<(String, String, String)>,
) -> Result<Json<DataBody<PermissionKey>>, AppError> {
    let permission_id = parse_permission_id(&permission_id)?;
    let key = engine
        .read_permission_access_key(&site_id, permission_id, &key_id)
        .await?;
    Ok(Json(DataBody::new(key)))
}

/// `DELETE /{site_id}/v2/permissions/{permission_id}/keys/{permission_key_id}`
pub async fn delete_permission_access_key(
    State(engine): State<Arc<Engine>>,
    Path((site_id, permission_id, key_id)): Path<(String, String, String)>,
) -> Result<StatusCode, AppError> {
    let permission_id = parse_permission_id(&permission_id)?;
    engine
        .delete_permission_access_key(&site_id, permission_id, &key_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
