//! Bucket handlers.
//!
//! The site comes from the request body rather than the path. Failures go
//! through [`AppError::from_bucket_engine`], which reports unknown engine
//! errors (such as deleting a missing bucket) as 400.

use crate::{
    errors::AppError,
    handlers::json_body,
    models::{
        bucket::{Bucket, CreateBucketRequestBody},
        envelope::DataBody,
    },
    services::engine::Engine,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

/// `PUT /fed/v1/buckets/{bucket_name}`
pub async fn create_bucket(
    State(engine): State<Arc<Engine>>,
    Path(bucket_name): Path<String>,
    payload: Result<Json<CreateBucketRequestBody>, JsonRejection>,
) -> Result<(StatusCode, Json<DataBody<Bucket>>), AppError> {
    let body = json_body(payload)?;
    let bucket = engine
        .create_bucket(&body.cluster_id, &bucket_name)
        .await
        .map_err(AppError::from_bucket_engine)?;
    Ok((StatusCode::CREATED, Json(DataBody::new(bucket))))
}

/// `DELETE /fed/v1/buckets/{bucket_name}`
pub async fn delete_bucket(
    State(engine): State<Arc<Engine>>,
    Path(bucket_name): Path<String>,
    payload: Result<Json<CreateBucketRequestBody>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let body = json_body(payload)?;
    engine
        .delete_bucket(&body.cluster_id, &bucket_name)
        .await
        .map_err(AppError::from_bucket_engine)?;
    Ok(StatusCode::NO_CONTENT)
}
