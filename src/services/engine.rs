//! src/services/engine.rs
//!
//! Engine: the in-memory simulation behind the fake server. It holds every
//! resource the API exposes and enforces the same existence, uniqueness and
//! conflict rules the real service does.
//!
//! All state lives in one [`EngineData`] guarded by a single readers-writer
//! lock. Public operations (spread over the sibling modules, one per
//! resource) take the lock for their whole body; the lookup and check
//! helpers are plain methods on `EngineData` and never lock, so an operation
//! can compose them freely.
//!
//! The engine models a single-site deployment: the account, account keys and
//! bucket namespace are engine-global even though the API is nominally
//! scoped by site.

use crate::models::{
    account::{Account, AccountKey},
    bucket::Bucket,
    cluster::Cluster,
    permission::{Permission, PermissionId, PermissionKey},
};
use crate::services::error::{EngineError, EngineResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Secret handed out for every new access key.
pub const FAKE_SECRET: &str = "secret";

/// Snapshot of the engine's resources.
///
/// This is also the fixture format accepted by [`Engine::from_json`]: the
/// top-level keys are PascalCase while the resources themselves use the
/// API's wire format.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct EngineData {
    pub clusters: Vec<Cluster>,

    /// The site account; the engine holds at most one.
    pub account: Option<Account>,

    pub account_keys: Vec<AccountKey>,

    pub buckets: Vec<Bucket>,

    pub permissions: Vec<Permission>,

    pub permission_keys: Vec<PermissionKeyRecord>,

    /// Last ID handed out. Not reconciled against seeded resources, so
    /// fixtures must keep it above any numeric ID they contain.
    #[serde(rename = "GeneratedID")]
    pub generated_id: i64,
}

/// A permission key together with the permission owning it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PermissionKeyRecord {
    pub permission_id: PermissionId,

    #[serde(flatten)]
    pub key: PermissionKey,
}

/// In-memory fake of the object-storage management API.
///
/// Construct one per test (or per server) and share it behind an `Arc`.
#[derive(Debug)]
pub struct Engine {
    state: RwLock<EngineData>,
    started_at: DateTime<Utc>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// An engine with no sites and no resources.
    pub fn new() -> Self {
        Self::from_data(EngineData::default())
    }

    pub fn from_data(data: EngineData) -> Self {
        Self {
            state: RwLock::new(data),
            started_at: Utc::now(),
        }
    }

    /// Build an engine from fixture JSON (see [`EngineData`]).
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let data: EngineData = serde_json::from_str(json)?;
        Ok(Self::from_data(data))
    }

    /// When this engine was constructed; reported as the sites' start time.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Copy of the whole store, for assertions and fixture export.
    pub async fn snapshot(&self) -> EngineData {
        self.state.read().await.clone()
    }

    pub(crate) fn state(&self) -> &RwLock<EngineData> {
        &self.state
    }
}

impl EngineData {
    /// Advance the shared ID counter and return the new value.
    ///
    /// Callers must hold the write lock. An exhausted counter is left
    /// untouched and reported as an unknown error.
    pub(crate) fn next_id(&mut self) -> EngineResult<i64> {
        let id = self.generated_id.checked_add(1).ok_or_else(|| {
            EngineError::unknown("id", "").with_message("id counter exhausted")
        })?;
        self.generated_id = id;
        Ok(id)
    }

    /// Fails with not-found unless `site_id` names a seeded site.
    pub(crate) fn site_exists(&self, site_id: &str) -> EngineResult<()> {
        if self.find_cluster(site_id).is_none() {
            return Err(EngineError::not_found("cluster", site_id)
                .with_message(format!("site does not exist. cluster: {site_id}")));
        }
        Ok(())
    }

    pub(crate) fn site_and_account_exist(&self, site_id: &str) -> EngineResult<()> {
        self.site_exists(site_id)?;
        if self.account.is_none() {
            return Err(EngineError::not_found("account", "")
                .with_message(format!("site has no account. cluster: {site_id}")));
        }
        Ok(())
    }

    pub(crate) fn site_and_permission_exist(
        &self,
        site_id: &str,
        permission_id: PermissionId,
    ) -> EngineResult<()> {
        self.site_exists(site_id)?;
        if self.find_permission(permission_id).is_none() {
            return Err(
                EngineError::not_found("permission", permission_id).with_message(format!(
                    "permission does not exist. site_id: {site_id}, id: {permission_id}"
                )),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    pub const SITE_ID: &str = "isk01";

    pub fn isk01() -> Cluster {
        Cluster {
            id: SITE_ID.into(),
            control_panel_url: "https://secure.sakura.ad.jp/objectstorage/".into(),
            display_name: "石狩第1サイト".into(),
            display_name_en_us: "Ishikari Site #1".into(),
            display_name_ja: "石狩第1サイト".into(),
            display_order: 1,
            endpoint_base: "isk01.sakurastorage.jp".into(),
            ..Default::default()
        }
    }

    pub fn account() -> Account {
        Account {
            code: format!("member@account@{SITE_ID}"),
            created_at: Utc::now(),
            resource_id: "100000000001".into(),
        }
    }

    pub fn bucket(name: &str) -> Bucket {
        Bucket {
            cluster_id: SITE_ID.into(),
            name: name.into(),
        }
    }

    /// One site, nothing else.
    pub fn site_only() -> Engine {
        Engine::from_data(EngineData {
            clusters: vec![isk01()],
            ..Default::default()
        })
    }

    /// One site with its account and two buckets.
    pub fn populated() -> Engine {
        Engine::from_data(EngineData {
            clusters: vec![isk01()],
            account: Some(account()),
            buckets: vec![bucket("bucket1"), bucket("bucket2")],
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::services::error::ErrorType;

    #[tokio::test]
    async fn ids_are_shared_across_resource_kinds() {
        let engine = populated();

        let key = engine.create_account_access_key(SITE_ID).await.unwrap();
        let permission = engine
            .create_permission(SITE_ID, Default::default())
            .await
            .unwrap();
        let pkey = engine
            .create_permission_access_key(SITE_ID, permission.id)
            .await
            .unwrap();

        assert_eq!(key.id, "1");
        assert_eq!(permission.id, 2);
        assert_eq!(pkey.id, "3");
        assert_eq!(engine.snapshot().await.generated_id, 3);
    }

    #[tokio::test]
    async fn ids_continue_from_seeded_counter() {
        let engine = Engine::from_data(EngineData {
            clusters: vec![isk01()],
            generated_id: 100,
            ..Default::default()
        });
        let permission = engine
            .create_permission(SITE_ID, Default::default())
            .await
            .unwrap();
        assert_eq!(permission.id, 101);
    }

    #[tokio::test]
    async fn exhausted_counter_fails_without_mutating() {
        let engine = Engine::from_data(EngineData {
            clusters: vec![isk01()],
            account: Some(account()),
            generated_id: i64::MAX,
            ..Default::default()
        });

        let err = engine
            .create_permission(SITE_ID, Default::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorType::Unknown);
        assert_eq!(err.resource, "id");

        let err = engine.create_account_access_key(SITE_ID).await.unwrap_err();
        assert_eq!(err.kind, ErrorType::Unknown);

        let data = engine.snapshot().await;
        assert_eq!(data.generated_id, i64::MAX);
        assert!(data.permissions.is_empty());
        assert!(data.account_keys.is_empty());
    }

    #[tokio::test]
    async fn site_check_precedes_deeper_checks() {
        let engine = site_only();
        let state = engine.state().read().await;

        let err = state.site_and_account_exist("invalid").unwrap_err();
        assert_eq!(err.resource, "cluster");
        let err = state.site_and_account_exist(SITE_ID).unwrap_err();
        assert_eq!(err.resource, "account");

        let err = state.site_and_permission_exist("invalid", 1).unwrap_err();
        assert_eq!(err.resource, "cluster");
        let err = state.site_and_permission_exist(SITE_ID, 1).unwrap_err();
        assert_eq!(err.resource, "permission");
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn fixture_json_loads() {
        let json = r#"{
            "Clusters": [{"id": "isk01", "display_name": "Ishikari", "display_order": 1}],
            "Account": {"code": "member@account@isk01", "created_at": "2022-06-01T00:00:00Z", "resource_id": "100000000001"},
            "Buckets": [{"cluster_id": "isk01", "name": "bucket1"}],
            "PermissionKeys": [{"permission_id": 5, "id": "6", "created_at": "2022-06-01T00:00:00Z"}],
            "GeneratedID": 6
        }"#;
        let engine = Engine::from_json(json).unwrap();
        let data = engine.snapshot().await;

        assert_eq!(data.clusters[0].id, "isk01");
        assert_eq!(data.clusters[0].display_order, 1);
        assert_eq!(data.account.unwrap().resource_id, "100000000001");
        assert_eq!(data.buckets.len(), 1);
        assert_eq!(data.permission_keys[0].permission_id, 5);
        assert_eq!(data.permission_keys[0].key.secret, "");
        assert_eq!(data.generated_id, 6);
    }

    #[tokio::test]
    async fn snapshot_round_trips_through_json() {
        let data = EngineData {
            clusters: vec![isk01()],
            account: Some(account()),
            buckets: vec![bucket("bucket1")],
            generated_id: 9,
            ..Default::default()
        };
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"GeneratedID\":9"));

        let engine = Engine::from_json(&json).unwrap();
        assert_eq!(engine.snapshot().await, data);
    }
}
