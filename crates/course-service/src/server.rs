//! HTTP server setup.

use std::future::Future;
use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers;
use crate::state::AppState;

/// Build the router with every route attached to `state`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home_get).post(handlers::home_post))
        .route(
            "/recommend",
            get(handlers::recommend_get).post(handlers::recommend_post),
        )
        .route(
            "/dashboard",
            get(handlers::dashboard).post(handlers::dashboard),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Bind `addr` and run the server with graceful shutdown support.
pub async fn run_server_with_shutdown<F>(
    addr: SocketAddr,
    state: AppState,
    shutdown_signal: F,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!(
        "Starting HTTP server on {} (dataset: {})",
        addr,
        state.dataset_path().display()
    );

    let listener = TcpListener::bind(addr).await?;

    info!("HTTP server ready on {}", listener.local_addr()?);

    serve(listener, state, shutdown_signal).await?;

    info!("HTTP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tower::ServiceExt;

    use course_types::RecommendConfig;

    const DATASET: &str = "course_title,url,price,num_subscribers,level,published_timestamp,subject\n\
        Learn Python Programming,https://u/1,20,500,Beginner Level,2017-01-18T20:58:58Z,Web Development\n\
        Python for Data Science,https://u/2,Free,900,All Levels,2016-05-02T00:00:00Z,Business Finance\n\
        Guitar Basics,https://u/3,TRUE,50,Beginner Level,2015-03-10T10:00:00Z,Musical Instruments\n";

    fn dataset_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(DATASET.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_home_search() {
        let file = dataset_file();
        let router = create_router(AppState::new(file.path(), RecommendConfig::default(), true));

        let (status, body) = get_json(router, "/?q=python").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["showtitle"], true);
        assert_eq!(body["showerror"], false);
        assert_eq!(body["coursename"], "python");
        let map = body["coursemap"].as_object().unwrap();
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("Learn Python Programming"));
    }

    #[tokio::test]
    async fn test_home_search_skips_pipeline() {
        let file = dataset_file();
        let state = AppState::new(file.path(), RecommendConfig::default(), true);

        let (status, body) = get_json(create_router(state.clone()), "/?q=guitar").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["coursemap"].as_object().unwrap().len(), 1);

        let cache = state.pipeline_cache().unwrap();
        assert_eq!(cache.cached_hash().await, None);

        get_json(create_router(state.clone()), "/recommend?q=guitar").await;
        assert!(cache.cached_hash().await.is_some());
    }

    #[tokio::test]
    async fn test_home_without_query_returns_empty_map() {
        let file = dataset_file();
        let router = create_router(AppState::new(file.path(), RecommendConfig::default(), false));

        let (status, body) = get_json(router, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["showtitle"], false);
        assert_eq!(body["showerror"], false);
        assert!(body["coursemap"].as_object().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_home_post_form() {
        let file = dataset_file();
        let router = create_router(AppState::new(file.path(), RecommendConfig::default(), true));

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("course=guitar"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["coursemap"].as_object().unwrap().len(), 1);
        assert_eq!(body["coursename"], "guitar");
    }

    #[tokio::test]
    async fn test_recommend_exact_title() {
        let file = dataset_file();
        let router = create_router(AppState::new(file.path(), RecommendConfig::default(), true));

        let (status, body) = get_json(router, "/recommend?q=Learn%20Python%20Programming").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "recommendations");
        let map = body["coursemap"].as_object().unwrap();
        assert!(!map.contains_key("Learn Python Programming"));
        assert_eq!(map.len(), 2);
    }

    #[tokio::test]
    async fn test_recommend_falls_back_to_search() {
        let file = dataset_file();
        let router = create_router(AppState::new(file.path(), RecommendConfig::default(), true));

        let (_, body) = get_json(router, "/recommend?q=guitar").await;
        assert_eq!(body["mode"], "search_fallback");
        assert!(body["coursemap"]
            .as_object()
            .unwrap()
            .contains_key("Guitar Basics"));
    }

    #[tokio::test]
    async fn test_recommend_invalid_top_k() {
        let file = dataset_file();
        let router = create_router(AppState::new(file.path(), RecommendConfig::default(), true));

        let (status, body) = get_json(router, "/recommend?q=x&top_k=many").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "bad_request");
    }

    #[tokio::test]
    async fn test_dashboard_and_health() {
        let file = dataset_file();
        let state = AppState::new(file.path(), RecommendConfig::default(), true);

        let (status, body) = get_json(create_router(state.clone()), "/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["levelcounts"]["Beginner Level"], 2);
        assert_eq!(body["valuecounts"]["Business Finance"], 900);

        let (status, body) = get_json(create_router(state), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["courses"], 3);
    }

    #[tokio::test]
    async fn test_missing_dataset_is_server_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let state = AppState::new(
            dir.path().join("absent.csv"),
            RecommendConfig::default(),
            true,
        );

        let (status, body) = get_json(create_router(state), "/").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "dataset_error");
    }
}
