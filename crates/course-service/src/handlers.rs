//! Route handlers.

use std::collections::HashMap;

use axum::extract::{Form, Query, State};
use axum::Json;
use serde_json::{json, Value};
use tracing::{debug, info};

use course_dashboard::DashboardSummary;
use course_recommend::{search, QueryOutcome};
use course_types::Series;

use crate::error::ApiError;
use crate::params::{first_present, supplied, top_k, FORM_FIELD_NAMES, QUERY_PARAM_NAMES};
use crate::responses::{
    course_map_from_hits, course_map_from_recommendations, HomeResponse, QueryMode,
    RecommendResponse,
};
use crate::state::AppState;

pub async fn home_get(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<HomeResponse>, ApiError> {
    home(&state, first_present(&params, &QUERY_PARAM_NAMES)).await
}

pub async fn home_post(
    State(state): State<AppState>,
    Form(params): Form<HashMap<String, String>>,
) -> Result<Json<HomeResponse>, ApiError> {
    home(&state, first_present(&params, &FORM_FIELD_NAMES)).await
}

async fn home(state: &AppState, query: Option<String>) -> Result<Json<HomeResponse>, ApiError> {
    let loaded = state.catalog().await?;

    let hits = search(&loaded.catalog, query.as_deref().unwrap_or_default());
    let coursename = supplied(query.as_deref()).map(|q| q.trim().to_string());
    let showtitle = coursename.is_some();
    let showerror = showtitle && hits.is_empty();

    debug!(query = ?coursename, matches = hits.len(), "Keyword search");

    Ok(Json(HomeResponse {
        coursemap: course_map_from_hits(&hits),
        showerror,
        showtitle,
        coursename,
    }))
}

pub async fn recommend_get(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let query = first_present(&params, &QUERY_PARAM_NAMES);
    recommend(&state, query, top_k(&params)?).await
}

pub async fn recommend_post(
    State(state): State<AppState>,
    Form(params): Form<HashMap<String, String>>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let query = first_present(&params, &FORM_FIELD_NAMES);
    recommend(&state, query, top_k(&params)?).await
}

async fn recommend(
    state: &AppState,
    query: Option<String>,
    requested_top_k: Option<usize>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let pipeline = state.pipeline().await?;
    let k = state.recommend_config().effective_top_k(requested_top_k);

    let (mode, coursemap) = match pipeline.recommend_or_search(query.as_deref(), k) {
        QueryOutcome::Empty => (QueryMode::NoQuery, Series::new()),
        QueryOutcome::Recommendations(recs) => (
            QueryMode::Recommendations,
            course_map_from_recommendations(&recs),
        ),
        QueryOutcome::SearchFallback(hits) => {
            (QueryMode::SearchFallback, course_map_from_hits(&hits))
        }
    };

    let coursename = supplied(query.as_deref()).map(|q| q.trim().to_string());
    let showtitle = coursename.is_some();
    let showerror = showtitle && coursemap.is_empty();

    info!(query = ?coursename, ?mode, results = coursemap.len(), top_k = k, "Recommendation request");

    Ok(Json(RecommendResponse {
        mode,
        coursemap,
        showerror,
        showtitle,
        coursename,
    }))
}

pub async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardSummary>, ApiError> {
    let loaded = state.catalog().await?;
    Ok(Json(DashboardSummary::from_catalog(&loaded.catalog)))
}

pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let loaded = state.catalog().await?;
    Ok(Json(json!({
        "status": "ok",
        "courses": loaded.catalog.len(),
        "dataset_hash": loaded.content_hash,
    })))
}
