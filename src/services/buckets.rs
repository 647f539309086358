//! Buckets managed through the federation API.

use crate::models::bucket::Bucket;
use crate::services::engine::{Engine, EngineData};
use crate::services::error::{EngineError, EngineResult};
use tracing::debug;

impl Engine {
    /// `PUT /fed/v1/buckets/{bucket_name}`
    ///
    /// Bucket names are unique across the whole store.
    pub async fn create_bucket(&self, site_id: &str, name: &str) -> EngineResult<Bucket> {
        let mut state = self.state().write().await;
        state.site_exists(site_id)?;

        if state.find_bucket(name).is_some() {
            return Err(EngineError::conflict("bucket", name).with_message(format!(
                "a bucket with the same name already exists. cluster: {site_id}, bucket: {name}"
            )));
        }

        // single-site: buckets always belong to the first seeded site
        let cluster_id = match state.clusters.first() {
            Some(cluster) => cluster.id.clone(),
            None => {
                return Err(EngineError::unknown("bucket", "")
                    .with_message("no site to host the bucket"));
            }
        };

        let bucket = Bucket {
            cluster_id,
            name: name.to_string(),
        };
        debug!("created bucket {} on {}", name, bucket.cluster_id);
        state.buckets.push(bucket.clone());
        Ok(bucket)
    }

    /// `DELETE /fed/v1/buckets/{bucket_name}`
    ///
    /// A missing bucket is an *unknown* error rather than not-found: the
    /// real API's behavior for this case is undocumented.
    pub async fn delete_bucket(&self, site_id: &str, name: &str) -> EngineResult<()> {
        let mut state = self.state().write().await;
        state.site_exists(site_id)?;

        if state.find_bucket(name).is_none() {
            return Err(EngineError::unknown("bucket", name).with_message(format!(
                "bucket does not exist. cluster: {site_id}, bucket: {name}"
            )));
        }

        debug!("deleted bucket {} on {}", name, site_id);
        state.buckets.retain(|b| b.name != name);
        Ok(())
    }
}

impl EngineData {
    pub(crate) fn find_bucket(&self, name: &str) -> Option<&Bucket> {
        if name.is_empty() {
            return None;
        }
        self.buckets.iter().find(|b| b.name == name)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::bucket::Bucket;
    use crate::services::engine::testing::*;
    use crate::services::error::ErrorType;

    fn names(buckets: &[Bucket]) -> Vec<&str> {
        buckets.iter().map(|b| b.name.as_str()).collect()
    }

    #[tokio::test]
    async fn create_then_delete() {
        let engine = populated();

        let created = engine.create_bucket(SITE_ID, "foobar").await.unwrap();
        assert_eq!(created, bucket("foobar"));
        assert_eq!(engine.snapshot().await.buckets.len(), 3);

        engine.delete_bucket(SITE_ID, "foobar").await.unwrap();
        let buckets = engine.snapshot().await.buckets;
        assert_eq!(names(&buckets), ["bucket1", "bucket2"]);
    }

    #[tokio::test]
    async fn duplicate_name_conflicts() {
        let engine = site_only();

        engine.create_bucket(SITE_ID, "bucket1").await.unwrap();
        let err = engine.create_bucket(SITE_ID, "bucket1").await.unwrap_err();
        assert!(err.is_conflict());

        let buckets = engine.snapshot().await.buckets;
        assert_eq!(names(&buckets), ["bucket1"]);
    }

    #[tokio::test]
    async fn deleting_missing_bucket_is_unknown_error() {
        let engine = site_only();

        engine.create_bucket(SITE_ID, "bucket1").await.unwrap();
        engine.delete_bucket(SITE_ID, "bucket1").await.unwrap();

        let err = engine.delete_bucket(SITE_ID, "bucket1").await.unwrap_err();
        assert_eq!(err.kind, ErrorType::Unknown);
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn delete_keeps_remaining_order() {
        let engine = populated();
        engine.create_bucket(SITE_ID, "bucket3").await.unwrap();

        engine.delete_bucket(SITE_ID, "bucket2").await.unwrap();
        let buckets = engine.snapshot().await.buckets;
        assert_eq!(names(&buckets), ["bucket1", "bucket3"]);
    }

    #[tokio::test]
    async fn unknown_site_is_checked_first() {
        let engine = populated();

        let err = engine.create_bucket("invalid", "bucket1").await.unwrap_err();
        assert!(err.is_not_found());
        let err = engine.delete_bucket("invalid", "missing").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(engine.snapshot().await.buckets.len(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_admit_one_bucket() {
        let engine = std::sync::Arc::new(site_only());

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let engine = engine.clone();
                tokio::spawn(async move { engine.create_bucket(SITE_ID, "b").await })
            })
            .collect();

        let mut created = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(_) => created += 1,
                Err(err) => assert_eq!(err.kind, ErrorType::Conflict),
            }
        }
        assert_eq!(created, 1);
        assert_eq!(names(&engine.snapshot().await.buckets), ["b"]);
    }
}
