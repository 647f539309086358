//! Access keys owned by a permission.

use crate::models::permission::{PermissionId, PermissionKey};
use crate::services::engine::{Engine, EngineData, FAKE_SECRET, PermissionKeyRecord};
use crate::services::error::{EngineError, EngineResult};
use chrono::Utc;
use tracing::debug;

impl Engine {
    /// `GET /{site_id}/v2/permissions/{permission_id}/keys`
    ///
    /// Secrets are blanked.
    pub async fn list_permission_access_keys(
        &self,
        site_id: &str,
        permission_id: PermissionId,
    ) -> EngineResult<Vec<PermissionKey>> {
        let state = self.state().read().await;
        state.site_and_permission_exist(site_id, permission_id)?;
        Ok(state
            .permission_keys
            .iter()
            .filter(|r| r.permission_id == permission_id)
            .map(|r| redacted(&r.key))
            .collect())
    }

    /// `POST /{site_id}/v2/permissions/{permission_id}/keys`
    ///
    /// The only response that carries the secret.
    pub async fn create_permission_access_key(
        &self,
        site_id: &str,
        permission_id: PermissionId,
    ) -> EngineResult<PermissionKey> {
        let mut state = self.state().write().await;
        state.site_and_permission_exist(site_id, permission_id)?;

        let key = PermissionKey {
            created_at: Utc::now(),
            id: state.next_id()?.to_string(),
            secret: FAKE_SECRET.to_string(),
        };
        debug!("created key {} for permission {}", key.id, permission_id);
        state.permission_keys.push(PermissionKeyRecord {
            permission_id,
            key: key.clone(),
        });
        Ok(key)
    }

    /// `GET /{site_id}/v2/permissions/{permission_id}/keys/{permission_key_id}`
    pub async fn read_permission_access_key(
        &self,
        site_id: &str,
        permission_id: PermissionId,
        key_id: &str,
    ) -> EngineResult<PermissionKey> {
        let state = self.state().read().await;
        state.site_and_permission_exist(site_id, permission_id)?;
        state
            .find_permission_key(permission_id, key_id)
            .map(redacted)
            .ok_or_else(|| permission_key_not_found(site_id, permission_id, key_id))
    }

    /// `DELETE /{site_id}/v2/permissions/{permission_id}/keys/{permission_key_id}`
    pub async fn delete_permission_access_key(
        &self,
        site_id: &str,
        permission_id: PermissionId,
        key_id: &str,
    ) -> EngineResult<()> {
        let mut state = self.state().write().await;
        state.site_and_permission_exist(site_id, permission_id)?;
        if state.find_permission_key(permission_id, key_id).is_none() {
            return Err(permission_key_not_found(site_id, permission_id, key_id));
        }

        debug!("deleted key {} of permission {}", key_id, permission_id);
        state
            .permission_keys
            .retain(|r| !(r.permission_id == permission_id && r.key.id == key_id));
        Ok(())
    }
}

impl EngineData {
    pub(crate) fn find_permission_key(
        &self,
        permission_id: PermissionId,
        key_id: &str,
    ) -> Option<&PermissionKey> {
        if key_id.is_empty() {
            return None;
        }
        self.permission_keys
            .iter()
            .find(|r| r.permission_id == permission_id && r.key.id == key_id)
            .map(|r| &r.key)
    }
}

fn redacted(key: &PermissionKey) -> PermissionKey {
    PermissionKey {
        secret: String::new(),
        ..key.clone()
    }
}

fn permission_key_not_found(
    site_id: &str,
    permission_id: PermissionId,
    key_id: &str,
) -> EngineError {
    EngineError::not_found("permission_key", key_id).with_message(format!(
        "permission key does not exist. site_id: {site_id}, permission_id: {permission_id}, permission_key_id: {key_id}"
    ))
}
