//! Defines routes for the object storage management API.
//!
//! ## Structure
//! - **Federation endpoints** (not scoped by site)
//!   - `GET    /fed/v1/clusters`: list sites
//!   - `GET    /fed/v1/clusters/{site_id}`: read site
//!   - `PUT    /fed/v1/buckets/{bucket_name}`: create bucket (site in body)
//!   - `DELETE /fed/v1/buckets/{bucket_name}`: delete bucket (site in body)
//!
//! - **Site endpoints** under `/{site_id}/v2`
//!   - `account`: create / read / delete the site account
//!   - `account/keys[/{account_key_id}]`: root access keys
//!   - `permissions[/{permission_id}]`: permissions, including `PUT` update
//!   - `permissions/{permission_id}/keys[/{permission_key_id}]`: permission keys
//!   - `status`: site health
//!
//! `GET /ping` answers `pong` for liveness checks.

use crate::{
    handlers::{
        account_keys::{
            create_account_access_key, delete_account_access_key, list_account_access_keys,
            read_account_access_key,
        },
        accounts::{create_site_account, delete_site_account, read_site_account},
        buckets::{create_bucket, delete_bucket},
        clusters::{list_clusters, read_cluster},
        health_handlers::ping,
        permission_keys::{
            create_permission_access_key, delete_permission_access_key,
            list_permission_access_keys, read_permission_access_key,
        },
        permissions::{
            create_permission, delete_permission, list_permissions, read_permission,
            update_permission,
        },
        site_status::read_site_status,
    },
    services::engine::Engine,
};
use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

/// Build and return the router for every API route.
///
/// The router carries the shared engine (`Arc<Engine>`) to all handlers.
pub fn routes() -> Router<Arc<Engine>> {
    Router::new()
        .route("/ping", get(ping))
        // Federation routes
        .route("/fed/v1/clusters", get(list_clusters))
        .route("/fed/v1/clusters/{site_id}", get(read_cluster))
        .route(
            "/fed/v1/buckets/{bucket_name}",
            put(create_bucket).delete(delete_bucket),
        )
        // Account routes
        .route(
            "/{site_id}/v2/account",
            post(create_site_account)
                .get(read_site_account)
                .delete(delete_site_account),
        )
        .route(
            "/{site_id}/v2/account/keys",
            get(list_account_access_keys).post(create_account_access_key),
        )
        .route(
            "/{site_id}/v2/account/keys/{account_key_id}",
            get(read_account_access_key).delete(delete_account_access_key),
        )
        // Permission routes
        .route(
            "/{site_id}/v2/permissions",
            get(list_permissions).post(create_permission),
        )
        .route(
            "/{site_id}/v2/permissions/{permission_id}",
            get(read_permission)
                .put(update_permission)
                .delete(delete_permission),
        )
        .route(
            "/{site_id}/v2/permissions/{permission_id}/keys",
            get(list_permission_access_keys).post(create_permission_access_key),
        )
        .route(
            "/{site_id}/v2/permissions/{permission_id}/keys/{permission_key_id}",
            get(read_permission_access_key).delete(delete_permission_access_key),
        )
        // Site status
        .route("/{site_id}/v2/status", get(read_site_status))
}
