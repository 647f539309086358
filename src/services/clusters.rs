//! Sites (clusters): read-only reference data.

use crate::models::cluster::Cluster;
use crate::services::engine::{Engine, EngineData};
use crate::services::error::{EngineError, EngineResult};
use tracing::debug;

impl Engine {
    /// `GET /fed/v1/clusters`
    pub async fn list_clusters(&self) -> EngineResult<Vec<Cluster>> {
        let state = self.state().read().await;
        Ok(state.clusters.clone())
    }

    /// `GET /fed/v1/clusters/{site_id}`
    pub async fn read_cluster(&self, id: &str) -> EngineResult<Cluster> {
        let state = self.state().read().await;
        state
            .find_cluster(id)
            .cloned()
            .ok_or_else(|| EngineError::not_found("cluster", id))
    }

    /// Seed a site. Sites are fixture data: the API never creates them.
    pub async fn add_cluster(&self, cluster: Cluster) -> EngineResult<Cluster> {
        let mut state = self.state().write().await;
        if cluster.id.is_empty() {
            return Err(EngineError::invalid_request("cluster", "")
                .with_message("site id must not be empty"));
        }
        if state.find_cluster(&cluster.id).is_some() {
            return Err(EngineError::conflict("cluster", &cluster.id)
                .with_message("site already exists"));
        }
        debug!("seeding site {}", cluster.id);
        state.clusters.push(cluster.clone());
        Ok(cluster)
    }
}

impl EngineData {
    pub(crate) fn find_cluster(&self, id: &str) -> Option<&Cluster> {
        if id.is_empty() {
            return None;
        }
        self.clusters.iter().find(|c| c.id == id)
    }
}
