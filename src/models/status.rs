use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health payload of a site, returned by `GET /{site_id}/v2/status`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SiteStatus {
    pub accept_new: bool,
    pub message: String,
    pub started_at: DateTime<Utc>,
    pub status_code: SiteStatusCode,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SiteStatusCode {
    pub id: i32,
    pub status: String,
}
