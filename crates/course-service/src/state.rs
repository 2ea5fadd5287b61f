//! Application context shared by all handlers.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use course_catalog::{content_hash, load_catalog, parse_catalog, read_dataset, LoadedCatalog};
use course_recommend::Pipeline;
use course_types::{RecommendConfig, Settings};

use crate::cache::PipelineCache;
use crate::error::ApiError;

/// Handler context: where the dataset lives and how to build pipelines.
///
/// Cheap to clone; all clones share one pipeline cache.
#[derive(Clone)]
pub struct AppState {
    dataset_path: Arc<PathBuf>,
    recommend: Arc<RecommendConfig>,
    cache: Option<Arc<PipelineCache>>,
}

impl AppState {
    pub fn new(
        dataset_path: impl Into<PathBuf>,
        recommend: RecommendConfig,
        cache_pipeline: bool,
    ) -> Self {
        Self {
            dataset_path: Arc::new(dataset_path.into()),
            recommend: Arc::new(recommend),
            cache: cache_pipeline.then(|| Arc::new(PipelineCache::new())),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.expanded_dataset_path(),
            settings.recommend.clone(),
            settings.cache_pipeline,
        )
    }

    pub fn dataset_path(&self) -> &PathBuf {
        &self.dataset_path
    }

    pub fn recommend_config(&self) -> &RecommendConfig {
        &self.recommend
    }

    /// The shared pipeline cache, when caching is enabled.
    pub fn pipeline_cache(&self) -> Option<&PipelineCache> {
        self.cache.as_deref()
    }

    /// Load the dataset without building the recommendation pipeline.
    pub async fn catalog(&self) -> Result<LoadedCatalog, ApiError> {
        let path = Arc::clone(&self.dataset_path);
        let loaded = tokio::task::spawn_blocking(move || load_catalog(&path)).await??;
        Ok(loaded)
    }

    /// Load the dataset and return a pipeline built from its current content.
    pub async fn pipeline(&self) -> Result<Arc<Pipeline>, ApiError> {
        let path = Arc::clone(&self.dataset_path);
        let bytes = tokio::task::spawn_blocking(move || read_dataset(&path)).await??;
        let hash = content_hash(&bytes);

        if let Some(cache) = &self.cache {
            if let Some(pipeline) = cache.get(&hash).await {
                return Ok(pipeline);
            }
        }

        debug!(hash = %hash, "Building pipeline for dataset");
        let config = Arc::clone(&self.recommend);
        let pipeline = tokio::task::spawn_blocking(move || {
            parse_catalog(bytes.as_slice()).map(|catalog| Pipeline::build(catalog, &config))
        })
        .await??;
        let pipeline = Arc::new(pipeline);

        if let Some(cache) = &self.cache {
            cache.put(hash, Arc::clone(&pipeline)).await;
        }
        Ok(pipeline)
    }
}
