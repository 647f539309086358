//! Simulated site health.

use crate::models::status::{SiteStatus, SiteStatusCode};
use crate::services::engine::Engine;
use crate::services::error::EngineResult;

impl Engine {
    /// `GET /{site_id}/v2/status`
    ///
    /// Every seeded site reports itself healthy since the engine started.
    pub async fn read_site_status(&self, site_id: &str) -> EngineResult<SiteStatus> {
        let state = self.state().read().await;
        state.site_exists(site_id)?;

        Ok(SiteStatus {
            accept_new: true,
            message: String::new(),
            started_at: self.started_at(),
            status_code: SiteStatusCode {
                id: 1,
                status: "ok".into(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::services::engine::testing::*;

    #[tokio::test]
    async fn known_site_is_healthy() {
        let engine = site_only();
        let status = engine.read_site_status(SITE_ID).await.unwrap();

        assert!(status.accept_new);
        assert_eq!(status.status_code.status, "ok");
        assert_eq!(status.started_at, engine.started_at());
    }

    #[tokio::test]
    async fn unknown_site_is_not_found() {
        let engine = site_only();
        let err = engine.read_site_status("invalid").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
