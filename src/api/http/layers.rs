// src/api/http/layers.rs
// GIS layer listing and retrieval endpoints.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::api::error::{ApiError, ApiResult, IntoApiError};
use crate::state::AppState;

/// GET /layers
pub async fn list_layers_handler(
    State(app): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    let layers = app
        .layers
        .summaries()
        .await
        .into_api_error("Failed to read layer store")?;

    info!("Listing {} available layers", layers.len());
    Ok(Json(json!({ "layers": layers })))
}

/// GET /layers/{name}
pub async fn get_layer_handler(
    State(app): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let layer = app
        .layers
        .layer(&name)
        .await
        .into_api_error("Failed to read layer store")?
        .ok_or_else(|| ApiError::not_found(format!("Layer '{name}' not found")))?;

    Ok(Json(layer))
}
