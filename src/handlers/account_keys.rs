//! Root access key handlers.

use crate::{
    errors::AppError,
    models::{account::AccountKey, envelope::DataBody},
    services::engine::Engine,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

/// `GET /{site_id}/v2/account/keys`
pub async fn list_account_access_keys(
    State(engine): State<Arc<Engine>>,
    Path(site_id): Path<String>,
) -> Result<Json<DataBody<Vec<AccountKey>>>, AppError> {
    let keys = engine.list_account_access_keys(&site_id).await?;
    Ok(Json(DataBody::new(keys)))
}

/// `POST /{site_id}/v2/account/keys`
pub async fn create_account_access_key(
    State(engine): State<Arc<Engine>>,
    Path(site_id): Path<String>,
) -> Result<(StatusCode, Json<DataBody<AccountKey>>), AppError> {
    let key = engine.create_account_access_key(&site_id).await?;
    Ok((StatusCode::CREATED, Json(DataBody::new(key))))
}

/// `GET /{site_id}/v2/account/keys/{account_key_id}`
pub async fn read_account_access_key(
    State(engine): State<Arc<Engine>>,
    Path((site_id, key_id)): Path<(String, String)>,
) -> Result<Json<DataBody<AccountKey>>, AppError> {
    let key = engine.read_account_access_key(&site_id, &key_id).await?;
    Ok(Json(DataBody::new(key)))
}

/// `DELETE /{site_id}/v2/account/keys/{account_key_id}`
pub async fn delete_account_access_key(
    State(engine): State<Arc<Engine>>,
    Path((site_id, key_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    engine.delete_account_access_key(&site_id, &key_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
