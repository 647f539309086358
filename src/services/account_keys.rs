//! Root access keys of the site account.

use crate::models::account::AccountKey;
use crate::services::engine::{Engine, EngineData, FAKE_SECRET};
use crate::services::error::{EngineError, EngineResult};
use chrono::Utc;
use tracing::debug;

impl Engine {
    /// `GET /{site_id}/v2/account/keys`
    ///
    /// Secrets are blanked.
    pub async fn list_account_access_keys(
        &self,
        site_id: &str,
    ) -> EngineResult<Vec<AccountKey>> {
        let state = self.state().read().await;
        state.site_and_account_exist(site_id)?;
        Ok(state.account_keys.iter().map(redacted).collect())
    }

    /// `POST /{site_id}/v2/account/keys`
    ///
    /// The only response that carries the secret.
    pub async fn create_account_access_key(&self, site_id: &str) -> EngineResult<AccountKey> {
        let mut state = self.state().write().await;
        state.site_and_account_exist(site_id)?;

        // keys are not partitioned per site, so there is no per-site limit to enforce
        let key = AccountKey {
            created_at: Utc::now(),
            id: state.next_id()?.to_string(),
            secret: FAKE_SECRET.to_string(),
        };
        debug!("created account key {} on {}", key.id, site_id);
        state.account_keys.push(key.clone());
        Ok(key)
    }

    /// `GET /{site_id}/v2/account/keys/{account_key_id}`
    pub async fn read_account_access_key(
        &self,
        site_id: &str,
        id: &str,
    ) -> EngineResult<AccountKey> {
        let state = self.state().read().await;
        state.site_and_account_exist(site_id)?;
        state
            .find_account_key(id)
            .map(redacted)
            .ok_or_else(|| account_key_not_found(id))
    }

    /// `DELETE /{site_id}/v2/account/keys/{account_key_id}`
    pub async fn delete_account_access_key(&self, site_id: &str, id: &str) -> EngineResult<()> {
        let mut state = self.state().write().await;
        state.site_and_account_exist(site_id)?;
        if state.find_account_key(id).is_none() {
            return Err(account_key_not_found(id));
        }

        debug!("deleted account key {} on {}", id, site_id);
        state.account_keys.retain(|k| k.id != id);
        Ok(())
    }
}

impl EngineData {
    pub(crate) fn find_account_key(&self, id: &str) -> Option<&AccountKey> {
        if id.is_empty() {
            return None;
        }
        self.account_keys.iter().find(|k| k.id == id)
    }
}

/// Copy of `key` without its secret.
fn redacted(key: &AccountKey) -> AccountKey {
    AccountKey {
        secret: String::new(),
        ..key.clone()
    }
}

fn account_key_not_found(id: &str) -> EngineError {
    EngineError::not_found("account_key", id)
        .with_message(format!("account key does not exist. id: {id}"))
}
