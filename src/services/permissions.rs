//! Permissions: named grants over buckets.

use crate::models::permission::{BucketControl, Permission, PermissionId, PermissionRequestBody};
use crate::services::engine::{Engine, EngineData};
use crate::services::error::{EngineError, EngineResult};
use chrono::{DateTime, Utc};
use tracing::debug;

impl Engine {
    /// `GET /{site_id}/v2/permissions`
    pub async fn list_permissions(&self, site_id: &str) -> EngineResult<Vec<Permission>> {
        let state = self.state().read().await;
        state.site_exists(site_id)?;
        Ok(state.permissions.clone())
    }

    /// `POST /{site_id}/v2/permissions`
    ///
    /// Bucket names in the controls are not checked against existing buckets.
    pub async fn create_permission(
        &self,
        site_id: &str,
        params: PermissionRequestBody,
    ) -> EngineResult<Permission> {
        let mut state = self.state().write().await;
        state.site_exists(site_id)?;

        let now = Utc::now();
        let permission = Permission {
            bucket_controls: stamped(params.bucket_controls, now),
            created_at: now,
            display_name: params.display_name,
            id: state.next_id()?,
        };
        debug!("created permission {} on {}", permission.id, site_id);
        state.permissions.push(permission.clone());
        Ok(permission)
    }

    /// `GET /{site_id}/v2/permissions/{permission_id}`
    pub async fn read_permission(
        &self,
        site_id: &str,
        permission_id: PermissionId,
    ) -> EngineResult<Permission> {
        let state = self.state().read().await;
        state.site_and_permission_exist(site_id, permission_id)?;
        state
            .find_permission(permission_id)
            .cloned()
            .ok_or_else(|| EngineError::not_found("permission", permission_id))
    }

    /// `PUT /{site_id}/v2/permissions/{permission_id}`
    ///
    /// Display name and bucket controls are replaced, never merged.
    pub async fn update_permission(
        &self,
        site_id: &str,
        permission_id: PermissionId,
        params: PermissionRequestBody,
    ) -> EngineResult<Permission> {
        let mut state = self.state().write().await;
        state.site_and_permission_exist(site_id, permission_id)?;

        let permission = state
            .find_permission_mut(permission_id)
            .ok_or_else(|| EngineError::not_found("permission", permission_id))?;
        permission.bucket_controls = stamped(params.bucket_controls, Utc::now());
        permission.display_name = params.display_name;
        debug!("updated permission {} on {}", permission_id, site_id);
        Ok(permission.clone())
    }

    /// `DELETE /{site_id}/v2/permissions/{permission_id}`
    ///
    /// Keys owned by the permission go with it.
    pub async fn delete_permission(
        &self,
        site_id: &str,
        permission_id: PermissionId,
    ) -> EngineResult<()> {
        let mut state = self.state().write().await;
        state.site_and_permission_exist(site_id, permission_id)?;

        debug!("deleted permission {} on {}", permission_id, site_id);
        state.permissions.retain(|p| p.id != permission_id);
        state
            .permission_keys
            .retain(|k| k.permission_id != permission_id);
        Ok(())
    }
}

impl EngineData {
    pub(crate) fn find_permission(&self, id: PermissionId) -> Option<&Permission> {
        if id == 0 {
            return None;
        }
        self.permissions.iter().find(|p| p.id == id)
    }

    fn find_permission_mut(&mut self, id: PermissionId) -> Option<&mut Permission> {
        if id == 0 {
            return None;
        }
        self.permissions.iter_mut().find(|p| p.id == id)
    }
}

/// Fill in `created_at` on controls that came without one.
fn stamped(controls: Vec<BucketControl>, now: DateTime<Utc>) -> Vec<BucketControl> {
    controls
        .into_iter()
        .map(|control| BucketControl {
            created_at: control.created_at.or(Some(now)),
            ..control
        })
        .collect()
}
