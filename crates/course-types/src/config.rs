//! Configuration loading for the course finder.
//!
//! Layered config: defaults -> config file -> env vars -> CLI flags.
//! The default config file lives at ~/.config/course-finder/config.toml.

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::CourseError;

/// Term weighting used when vectorizing clean titles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Weighting {
    /// Raw term counts
    Count,
    /// Term counts scaled by smoothed inverse document frequency
    #[default]
    TfIdf,
}

/// Recommendation engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Number of recommendations returned when the caller does not ask.
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Upper bound on a caller-supplied top_k.
    #[serde(default = "default_max_top_k")]
    pub max_top_k: usize,

    /// Term weighting scheme.
    #[serde(default)]
    pub weighting: Weighting,

    /// Drop English stopwords while building clean titles.
    #[serde(default = "default_remove_stopwords")]
    pub remove_stopwords: bool,
}

fn default_top_k() -> usize {
    10
}

fn default_max_top_k() -> usize {
    50
}

fn default_remove_stopwords() -> bool {
    true
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            max_top_k: default_max_top_k(),
            weighting: Weighting::default(),
            remove_stopwords: default_remove_stopwords(),
        }
    }
}

impl RecommendConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.top_k == 0 {
            return Err("top_k must be > 0".to_string());
        }
        if self.top_k > self.max_top_k {
            return Err(format!(
                "top_k ({}) must not exceed max_top_k ({})",
                self.top_k, self.max_top_k
            ));
        }
        Ok(())
    }

    /// Resolve a caller-requested top_k against the configured bounds.
    ///
    /// `None` and `Some(0)` fall back to the default.
    pub fn effective_top_k(&self, requested: Option<usize>) -> usize {
        match requested {
            Some(k) if k > 0 => k.min(self.max_top_k),
            _ => self.top_k,
        }
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path to the course dataset (CSV)
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    /// HTTP server host
    #[serde(default = "default_http_host")]
    pub http_host: String,

    /// HTTP server port
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Reuse the built pipeline while the dataset content is unchanged
    #[serde(default = "default_cache_pipeline")]
    pub cache_pipeline: bool,

    /// Recommendation engine configuration
    #[serde(default)]
    pub recommend: RecommendConfig,
}

fn default_dataset_path() -> String {
    "UdemyCleanedTitle.csv".to_string()
}

fn default_http_host() -> String {
    "127.0.0.1".to_string()
}

fn default_http_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_cache_pipeline() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            http_host: default_http_host(),
            http_port: default_http_port(),
            log_level: default_log_level(),
            cache_pipeline: default_cache_pipeline(),
            recommend: RecommendConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/course-finder/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (COURSE_*, nested keys joined with `__`)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, CourseError> {
        let config_dir = ProjectDirs::from("", "", "course-finder")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("dataset_path", default_dataset_path())
            .map_err(|e| CourseError::Config(e.to_string()))?
            .set_default("http_host", default_http_host())
            .map_err(|e| CourseError::Config(e.to_string()))?
            .set_default("http_port", default_http_port() as i64)
            .map_err(|e| CourseError::Config(e.to_string()))?
            .set_default("log_level", default_log_level())
            .map_err(|e| CourseError::Config(e.to_string()))?
            .set_default("cache_pipeline", default_cache_pipeline())
            .map_err(|e| CourseError::Config(e.to_string()))?
            .set_default("recommend.top_k", default_top_k() as i64)
            .map_err(|e| CourseError::Config(e.to_string()))?
            .set_default("recommend.max_top_k", default_max_top_k() as i64)
            .map_err(|e| CourseError::Config(e.to_string()))?
            .set_default("recommend.weighting", "tfidf")
            .map_err(|e| CourseError::Config(e.to_string()))?
            .set_default("recommend.remove_stopwords", default_remove_stopwords())
            .map_err(|e| CourseError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // COURSE_HTTP_PORT, COURSE_RECOMMEND__TOP_K, ...
        builder = builder.add_source(
            Environment::with_prefix("COURSE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| CourseError::Config(e.to_string()))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| CourseError::Config(e.to_string()))?;

        settings.recommend.validate().map_err(CourseError::Config)?;
        Ok(settings)
    }

    /// Socket address string for the HTTP server
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// Expand ~ in dataset_path to the home directory
    pub fn expanded_dataset_path(&self) -> PathBuf {
        if let Some(rest) = self.dataset_path.strip_prefix("~/") {
            if let Some(dirs) = directories::BaseDirs::new() {
                return dirs.home_dir().join(rest);
            }
        }
        PathBuf::from(&self.dataset_path)
    }
}
