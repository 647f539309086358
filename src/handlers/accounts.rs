//! Site account handlers.

use crate::{
    errors::AppError,
    models::{account::Account, envelope::DataBody},
    services::engine::Engine,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

/// `POST /{site_id}/v2/account`
pub async fn create_site_account(
    State(engine): State<Arc<Engine>>,
    Path(site_id): Path<String>,
) -> Result<(StatusCode, Json<DataBody<Account>>), AppError> {
    let account = engine.create_site_account(&site_id).await?;
    Ok((StatusCode::CREATED, Json(DataBody::new(account))))
}

/// `GET /{site_id}/v2/account`
pub async fn read_site_account(
    State(engine): State<Arc<Engine>>,
    Path(site_id): Path<String>,
) -> Result<Json<DataBody<Account>>, AppError> {
    let account = engine.read_site_account(&site_id).await?;
    Ok(Json(DataBody::new(account)))
}

/// `DELETE /{site_id}/v2/account`
pub async fn delete_site_account(
    State(engine): State<Arc<Engine>>,
    Path(site_id): Path<String>,
) -> Result<StatusCode, AppError> {
    engine.delete_site_account(&site_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
