//! Represents a bucket registered through the federation API.

use serde::{Deserialize, Serialize};

/// A storage bucket owned by a site (cluster).
///
/// Bucket names are unique across the whole store, regardless of the site
/// they were created on.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Bucket {
    /// ID of the site (cluster) hosting this bucket.
    pub cluster_id: String,

    /// Globally unique bucket name.
    pub name: String,
}

/// Body of `PUT /fed/v1/buckets/{bucket_name}` and
/// `DELETE /fed/v1/buckets/{bucket_name}`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateBucketRequestBody {
    /// Site the bucket operation is scoped to.
    pub cluster_id: String,
}
