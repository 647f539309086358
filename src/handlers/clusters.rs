//! Site (cluster) handlers under the federation API.

use crate::{
    errors::AppError,
    models::{cluster::Cluster, envelope::DataBody},
    services::engine::Engine,
};
use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

/// `GET /fed/v1/clusters`
pub async fn list_clusters(
    State(engine): State<Arc<Engine>>,
) -> Result<Json<DataBody<Vec<Cluster>>>, AppError> {
    let clusters = engine.list_clusters().await?;
    Ok(Json(DataBody::new(clusters)))
}

/// `GET /fed/v1/clusters/{site_id}`
pub async fn read_cluster(
    State(engine): State<Arc<Engine>>,
    Path(site_id): Path<String>,
) -> Result<Json<DataBody<Cluster>>, AppError> {
    let cluster = engine.read_cluster(&site_id).await?;
    Ok(Json(DataBody::new(cluster)))
}
