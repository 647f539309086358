//! The site account singleton.

use crate::models::account::Account;
use crate::services::engine::Engine;
use crate::services::error::{EngineError, EngineResult};
use chrono::Utc;
use tracing::debug;

impl Engine {
    /// `POST /{site_id}/v2/account`
    pub async fn create_site_account(&self, site_id: &str) -> EngineResult<Account> {
        let mut state = self.state().write().await;

        // the real API answers 404 for unknown sites here, reported against the account
        if state.find_cluster(site_id).is_none() {
            return Err(EngineError::not_found("account", "")
                .with_message(format!("site does not exist. cluster: {site_id}")));
        }
        if state.account.is_some() {
            return Err(EngineError::conflict("account", "")
                .with_message(format!("site already has an account. cluster: {site_id}")));
        }

        let account = Account {
            code: format!("member@account@{site_id}"),
            created_at: Utc::now(),
            resource_id: state.next_id()?.to_string(),
        };
        debug!("created account {} on {}", account.resource_id, site_id);
        state.account = Some(account.clone());
        Ok(account)
    }

    /// `GET /{site_id}/v2/account`
    pub async fn read_site_account(&self, site_id: &str) -> EngineResult<Account> {
        let state = self.state().read().await;
        state.site_and_account_exist(site_id)?;
        state
            .account
            .clone()
            .ok_or_else(|| EngineError::not_found("account", ""))
    }

    /// `DELETE /{site_id}/v2/account`
    ///
    /// Refused while any bucket remains. Deleting when no account exists is
    /// accepted, as the real API does.
    pub async fn delete_site_account(&self, site_id: &str) -> EngineResult<()> {
        let mut state = self.state().write().await;

        if state.find_cluster(site_id).is_none() {
            return Err(EngineError::not_found("account", "")
                .with_message(format!("site does not exist. cluster: {site_id}")));
        }
        if !state.buckets.is_empty() {
            return Err(EngineError::conflict("account", "").with_message(format!(
                "account still owns buckets. cluster: {site_id}"
            )));
        }

        debug!("deleted account on {}", site_id);
        state.account = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::services::engine::testing::*;

    #[tokio::test]
    async fn account_lifecycle() {
        let engine = site_only();

        let account = engine.create_site_account(SITE_ID).await.unwrap();
        assert_eq!(account.code, "member@account@isk01");
        assert_eq!(account.resource_id, "1");
        assert!(engine.snapshot().await.account.is_some());

        let err = engine.create_site_account(SITE_ID).await.unwrap_err();
        assert!(err.is_conflict());

        let read = engine.read_site_account(SITE_ID).await.unwrap();
        assert_eq!(read, account);

        engine.delete_site_account(SITE_ID).await.unwrap();
        assert!(engine.snapshot().await.account.is_none());

        let err = engine.read_site_account(SITE_ID).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.resource, "account");
    }

    #[tokio::test]
    async fn unknown_site_is_not_found() {
        let engine = populated();

        let err = engine.create_site_account("invalid").await.unwrap_err();
        assert!(err.is_not_found());
        let err = engine.read_site_account("invalid").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.resource, "cluster");
        let err = engine.delete_site_account("invalid").await.unwrap_err();
        assert!(err.is_not_found());

        assert!(engine.snapshot().await.account.is_some());
    }

    #[tokio::test]
    async fn delete_refused_while_buckets_exist() {
        let engine = populated();

        let err = engine.delete_site_account(SITE_ID).await.unwrap_err();
        assert!(err.is_conflict());
        assert!(engine.snapshot().await.account.is_some());

        engine.delete_bucket(SITE_ID, "bucket1").await.unwrap();
        engine.delete_bucket(SITE_ID, "bucket2").await.unwrap();
        engine.delete_site_account(SITE_ID).await.unwrap();
        assert!(engine.snapshot().await.account.is_none());
    }
}
