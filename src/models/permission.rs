//! Permissions: named read/write grants over a set of buckets, each able to
//! own its own access keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Numeric permission identifier.
pub type PermissionId = i64;

/// Read/write flags for one bucket.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BucketControl {
    pub bucket_name: String,

    /// The flag to read bucket contents.
    #[serde(default)]
    pub can_read: bool,

    /// The flag to write bucket contents.
    #[serde(default)]
    pub can_write: bool,

    /// Stamped by the server when absent from the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl BucketControl {
    pub fn new(bucket_name: impl Into<String>, can_read: bool, can_write: bool) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            can_read,
            can_write,
            created_at: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Permission {
    pub bucket_controls: Vec<BucketControl>,

    pub created_at: DateTime<Utc>,

    pub display_name: String,

    pub id: PermissionId,
}

/// Body of permission create and update requests.
///
/// An update replaces both fields wholesale.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PermissionRequestBody {
    #[serde(default)]
    pub bucket_controls: Vec<BucketControl>,

    pub display_name: String,
}

/// An access key owned by a permission.
///
/// `secret` is only populated in the response that created the key.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PermissionKey {
    pub created_at: DateTime<Utc>,

    /// Access key ID.
    pub id: String,

    /// Permission secret key.
    #[serde(default)]
    pub secret: String,
}
