//! Site account and its root access keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The account owning a site's buckets and root access keys.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Account {
    /// Account code, `member@account@{site_id}`.
    pub code: String,

    pub created_at: DateTime<Utc>,

    /// Generated resource ID.
    pub resource_id: String,
}

/// A root user access key.
///
/// `secret` is only populated in the response that created the key.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AccountKey {
    pub created_at: DateTime<Utc>,

    /// Access key ID.
    pub id: String,

    /// Secret access key.
    #[serde(default)]
    pub secret: String,
}
