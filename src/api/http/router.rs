// src/api/http/router.rs
// HTTP router composition for REST API endpoints

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::{
    analysis::{analysis_handler, report_handler},
    handlers::{health_handler, root_handler},
    layers::{get_layer_handler, list_layers_handler},
    parameters::parameters_handler,
};
use crate::state::AppState;

/// Main HTTP router for the analysis, report, parameter, and layer endpoints.
pub fn router(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))

        // Suitability analysis
        .route("/analysis", post(analysis_handler))
        .route("/report", post(report_handler))

        // Parameter catalog
        .route("/parameters", get(parameters_handler))

        // GIS layers
        .route("/layers", get(list_layers_handler))
        .route("/layers/{name}", get(get_layer_handler))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
