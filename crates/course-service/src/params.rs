//! Request parameter handling.
//!
//! Queries arrive either as URL parameters (GET) or form fields (POST), under
//! any of several names. The first non-empty value wins.

use std::collections::HashMap;

use crate::error::ApiError;

/// Parameter names checked for GET requests, in order.
pub const QUERY_PARAM_NAMES: [&str; 3] = ["q", "course", "title"];

/// Form field names checked for POST requests, in order.
pub const FORM_FIELD_NAMES: [&str; 3] = ["course", "q", "title"];

/// First non-empty value among `names`.
pub fn first_present(params: &HashMap<String, String>, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| params.get(*name))
        .find(|value| !value.is_empty())
        .cloned()
}

/// Query text counts as supplied only when it has non-whitespace content.
pub fn supplied(query: Option<&str>) -> Option<&str> {
    query.filter(|q| !q.trim().is_empty())
}

/// Optional `top_k` parameter.
pub fn top_k(params: &HashMap<String, String>) -> Result<Option<usize>, ApiError> {
    match params.get("top_k").map(|v| v.trim()) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse::<usize>().map(Some).map_err(|_| {
            ApiError::BadRequest(format!(
                "top_k must be a non-negative integer, got {raw:?}"
            ))
        }),
    }
}
