//! Represents a site (cluster), the tenancy root of the storage service.

use serde::{Deserialize, Serialize};

/// A deployment site.
///
/// Sites are reference data: they are seeded from fixtures and never
/// created or removed through the simulated API.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Cluster {
    /// Site identifier, e.g. `isk01`.
    pub id: String,

    /// API server zones.
    pub api_zone: Vec<String>,

    /// URL of the control panel.
    pub control_panel_url: String,

    /// Display name (depending on `Accept-Language`).
    pub display_name: String,

    /// Display name (en-us).
    pub display_name_en_us: String,

    /// Display name (ja).
    pub display_name_ja: String,

    /// Display order, may be ignored by clients.
    pub display_order: i32,

    /// Endpoint base of the site, e.g. `isk01.sakurastorage.jp`.
    pub endpoint_base: String,

    /// URL of the IAM-compatible API.
    pub iam_endpoint: String,

    /// URL of the IAM-compatible API (with re-signing).
    pub iam_endpoint_for_control_panel: String,

    /// URL of the S3-compatible API.
    pub s3_endpoint: String,

    /// URL of the S3-compatible API (with re-signing).
    pub s3_endpoint_for_control_panel: String,

    /// Storage server zones.
    pub storage_zone: Vec<String>,
}
