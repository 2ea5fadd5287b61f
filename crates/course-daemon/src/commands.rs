//! Command implementations for the course finder.
//!
//! Handles:
//! - serve: Load config, start the HTTP server
//! - search / recommend / stats: Load the dataset once and print JSON

use std::net::SocketAddr;

use anyhow::{Context, Result};
use serde_json::{json, Value};
use tokio::signal;
use tracing::{error, info};

use course_catalog::load_catalog;
use course_dashboard::DashboardSummary;
use course_recommend::{top_by_subscribers, Pipeline, QueryOutcome};
use course_service::responses::{course_map_from_hits, course_map_from_recommendations};
use course_service::{run_server_with_shutdown, AppState, QueryMode};
use course_types::{Series, Settings};

/// Load settings and apply the overrides shared by every command.
///
/// Configuration order: defaults -> file -> env -> CLI.
pub fn load_settings(
    config_path: Option<&str>,
    dataset_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<Settings> {
    let mut settings = Settings::load(config_path).context("Failed to load configuration")?;

    if let Some(dataset) = dataset_override {
        settings.dataset_path = dataset.to_string();
    }
    if let Some(log_level) = log_level_override {
        settings.log_level = log_level.to_string();
    }

    Ok(settings)
}

/// Install the global tracing subscriber. `RUST_LOG` wins over the configured level.
///
/// Output goes to stderr so JSON printed by one-shot commands stays clean.
fn init_logging(settings: &Settings) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.log_level)),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}

/// Start the HTTP server and block until shutdown.
pub async fn start_server(
    config_path: Option<&str>,
    port_override: Option<u16>,
    host_override: Option<&str>,
    dataset_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<()> {
    let mut settings = load_settings(config_path, dataset_override, log_level_override)?;
    if let Some(port) = port_override {
        settings.http_port = port;
    }
    if let Some(host) = host_override {
        settings.http_host = host.to_string();
    }

    init_logging(&settings)?;

    info!("Course finder starting...");
    info!("Configuration:");
    info!("  Dataset path: {}", settings.expanded_dataset_path().display());
    info!("  HTTP address: {}", settings.http_addr());
    info!("  Log level: {}", settings.log_level);
    info!("  Pipeline cache: {}", settings.cache_pipeline);

    let addr: SocketAddr = settings
        .http_addr()
        .parse()
        .context("Invalid HTTP address")?;

    let state = AppState::from_settings(&settings);

    run_server_with_shutdown(addr, state, shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}

/// Keyword search, printed as a course map.
pub fn run_search(
    config_path: Option<&str>,
    dataset_override: Option<&str>,
    log_level_override: Option<&str>,
    term: &str,
    limit: Option<usize>,
) -> Result<Value> {
    let settings = load_settings(config_path, dataset_override, log_level_override)?;
    init_logging(&settings)?;
    search_command(&settings, term, limit)
}

/// Similar courses for an exact title, or keyword matches when the title is unknown.
pub fn run_recommend(
    config_path: Option<&str>,
    dataset_override: Option<&str>,
    log_level_override: Option<&str>,
    title: &str,
    top_k: Option<usize>,
) -> Result<Value> {
    let settings = load_settings(config_path, dataset_override, log_level_override)?;
    init_logging(&settings)?;
    recommend_command(&settings, title, top_k)
}

/// Dashboard statistics for the configured dataset.
pub fn run_stats(
    config_path: Option<&str>,
    dataset_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<Value> {
    let settings = load_settings(config_path, dataset_override, log_level_override)?;
    init_logging(&settings)?;
    stats_command(&settings)
}

pub fn search_command(settings: &Settings, term: &str, limit: Option<usize>) -> Result<Value> {
    let path = settings.expanded_dataset_path();
    let loaded = load_catalog(&path)
        .with_context(|| format!("Failed to load dataset {}", path.display()))?;

    let mut hits = course_recommend::search(&loaded.catalog, term);
    if let Some(n) = limit {
        hits = top_by_subscribers(hits, n);
    }

    Ok(json!({
        "query": term,
        "matches": hits.len(),
        "coursemap": course_map_from_hits(&hits),
    }))
}

pub fn recommend_command(
    settings: &Settings,
    title: &str,
    top_k: Option<usize>,
) -> Result<Value> {
    let path = settings.expanded_dataset_path();
    let loaded = load_catalog(&path)
        .with_context(|| format!("Failed to load dataset {}", path.display()))?;
    let pipeline = Pipeline::build(loaded.catalog, &settings.recommend);
    let k = settings.recommend.effective_top_k(top_k);

    let (mode, coursemap) = match pipeline.recommend_or_search(Some(title), k) {
        QueryOutcome::Empty => (QueryMode::NoQuery, Series::new()),
        QueryOutcome::Recommendations(recs) => (
            QueryMode::Recommendations,
            course_map_from_recommendations(&recs),
        ),
        QueryOutcome::SearchFallback(hits) => {
            (QueryMode::SearchFallback, course_map_from_hits(&hits))
        }
    };

    Ok(json!({
        "query": title,
        "mode": mode,
        "coursemap": coursemap,
    }))
}

pub fn stats_command(settings: &Settings) -> Result<Value> {
    let path = settings.expanded_dataset_path();
    let loaded = load_catalog(&path)
        .with_context(|| format!("Failed to load dataset {}", path.display()))?;
    let summary = DashboardSummary::from_catalog(&loaded.catalog);
    serde_json::to_value(summary).context("Failed to serialize dashboard summary")
}
