//! Read-through cache for the built pipeline.
//!
//! Holds at most one pipeline, keyed by the SHA-256 hash of the dataset
//! bytes it was built from. A changed dataset hashes differently and
//! replaces the entry on the next request.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use course_recommend::Pipeline;

struct CachedPipeline {
    content_hash: String,
    pipeline: Arc<Pipeline>,
}

/// Single-slot pipeline cache.
#[derive(Default)]
pub struct PipelineCache {
    slot: RwLock<Option<CachedPipeline>>,
}

impl PipelineCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached pipeline, if it was built from `content_hash`.
    pub async fn get(&self, content_hash: &str) -> Option<Arc<Pipeline>> {
        let slot = self.slot.read().await;
        match slot.as_ref() {
            Some(cached) if cached.content_hash == content_hash => {
                debug!(hash = content_hash, "Pipeline cache hit");
                Some(Arc::clone(&cached.pipeline))
            }
            _ => None,
        }
    }

    /// Replace the cached pipeline.
    pub async fn put(&self, content_hash: String, pipeline: Arc<Pipeline>) {
        let mut slot = self.slot.write().await;
        debug!(hash = %content_hash, "Pipeline cache store");
        *slot = Some(CachedPipeline {
            content_hash,
            pipeline,
        });
    }

    /// Hash of the cached dataset, if any.
    pub async fn cached_hash(&self) -> Option<String> {
        self.slot
            .read()
            .await
            .as_ref()
            .map(|cached| cached.content_hash.clone())
    }
}
