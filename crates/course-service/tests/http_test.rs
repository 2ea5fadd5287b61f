//! HTTP-level tests against a dataset file that changes between requests.

use std::fs;
use std::path::Path;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use tower::ServiceExt;

use course_service::{create_router, serve, AppState};
use course_types::RecommendConfig;

const HEADER: &str = "course_title,url,price,num_subscribers,level,published_timestamp,subject\n";

fn write_dataset(path: &Path, rows: &[&str]) {
    let mut data = HEADER.to_string();
    for row in rows {
        data.push_str(row);
        data.push('\n');
    }
    fs::write(path, data).unwrap();
}

async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
    let response = create_router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_dataset_edits_are_visible_without_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("courses.csv");
    write_dataset(
        &path,
        &["Rust Basics,https://u/1,10,5,All Levels,2019-01-01T00:00:00Z,Web Development"],
    );
    let state = AppState::new(&path, RecommendConfig::default(), true);

    let (_, body) = get_json(state.clone(), "/?q=rust").await;
    assert_eq!(body["coursemap"].as_object().unwrap().len(), 1);

    write_dataset(
        &path,
        &[
            "Rust Basics,https://u/1,10,5,All Levels,2019-01-01T00:00:00Z,Web Development",
            "Advanced Rust,https://u/2,30,7,Expert Level,2020-06-01T00:00:00Z,Web Development",
        ],
    );

    let (_, body) = get_json(state.clone(), "/?q=rust").await;
    assert_eq!(body["coursemap"].as_object().unwrap().len(), 2);

    let (_, body) = get_json(state, "/recommend?q=Rust%20Basics").await;
    assert_eq!(body["mode"], "recommendations");
    assert!(body["coursemap"]
        .as_object()
        .unwrap()
        .contains_key("Advanced Rust"));
}

#[tokio::test]
async fn test_schema_error_reports_missing_columns() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.csv");
    fs::write(&path, "course_title,url\nRust Basics,https://u/1\n").unwrap();
    let state = AppState::new(&path, RecommendConfig::default(), false);

    let (status, body) = get_json(state, "/dashboard").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "dataset_error");
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("missing required columns"));
    assert!(message.contains("num_subscribers"));
}

#[tokio::test]
async fn test_top_k_limits_recommendations() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("courses.csv");
    write_dataset(
        &path,
        &[
            "Python One,u1,1,1,All Levels,2019-01-01T00:00:00Z,Web Development",
            "Python Two,u2,1,1,All Levels,2019-01-01T00:00:00Z,Web Development",
            "Python Three,u3,1,1,All Levels,2019-01-01T00:00:00Z,Web Development",
            "Python Four,u4,1,1,All Levels,2019-01-01T00:00:00Z,Web Development",
        ],
    );
    let state = AppState::new(&path, RecommendConfig::default(), true);

    let (_, body) = get_json(state, "/recommend?q=Python%20One&top_k=2").await;
    assert_eq!(body["coursemap"].as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_serve_over_tcp_with_graceful_shutdown() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("courses.csv");
    write_dataset(
        &path,
        &["Rust Basics,https://u/1,10,5,All Levels,2019-01-01T00:00:00Z,Web Development"],
    );
    let state = AppState::new(&path, RecommendConfig::default(), true);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(serve(listener, state, async {
        let _ = shutdown_rx.await;
    }));

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.contains("\"courses\":1"));

    shutdown_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
