// src/api/http/parameters.rs

use axum::{response::IntoResponse, Json};
use serde_json::json;

use crate::analysis::parameters;

/// GET /parameters — the static analysis parameter catalog.
pub async fn parameters_handler() -> impl IntoResponse {
    Json(json!({ "parameters": parameters::catalog() }))
}
