// src/api/http/handlers.rs
// Service banner and health endpoints.

use axum::{response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

/// Service banner handler
pub async fn root_handler() -> impl IntoResponse {
    Json(json!({
        "message": "Siterank Restaurant Location Intelligence API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
