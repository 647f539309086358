//! Site health handler.

use crate::{
    errors::AppError,
    models::{envelope::DataBody, status::SiteStatus},
    services::engine::Engine,
};
use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

/// `GET /{site_id}/v2/status`
///
/// Any failure is a plain-text 404.
pub async fn read_site_status(
    State(engine): State<Arc<Engine>>,
    Path(site_id): Path<String>,
) -> Result<Json<DataBody<SiteStatus>>, AppError> {
    let status = engine
        .read_site_status(&site_id)
        .await
        .map_err(AppError::from_status_engine)?;
    Ok(Json(DataBody::new(status)))
}
