//! Liveness probe.

use axum::response::IntoResponse;

/// `GET /ping`
///
/// Always `pong`; never touches the engine.
pub async fn ping() -> impl IntoResponse {
    "pong"
}
