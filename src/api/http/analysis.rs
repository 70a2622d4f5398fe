// src/api/http/analysis.rs
// Suitability analysis and report endpoints.

use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use crate::analysis::report::build_report;
use crate::analysis::scoring::{suitability_score, Criterion};
use crate::analysis::stats::{mean, median, round2};
use crate::api::error::{ApiError, ApiResult};
use crate::locations::ScoredLocation;
use crate::state::AppState;

/// Score at or above which a location counts as suitable.
const SUITABILITY_THRESHOLD: f64 = 60.0;

#[derive(Debug, Deserialize)]
pub struct CriteriaPayload {
    #[serde(default)]
    pub criteria: BTreeMap<String, Criterion>,
}

#[derive(Debug, Serialize)]
pub struct BestLocation {
    pub coordinates: String,
    pub suitability_score: f64,
    pub address: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisSummary {
    pub average_score: f64,
    pub median_score: f64,
    pub parameters_count: usize,
    pub total_weight: f64,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResults {
    pub status: &'static str,
    pub message: &'static str,
    pub criteria_used: BTreeMap<String, Criterion>,
    pub total_locations_analyzed: usize,
    pub suitable_locations_found: usize,
    pub best_location: Option<BestLocation>,
    pub top_10_locations: Vec<ScoredLocation>,
    pub analysis_summary: AnalysisSummary,
}

/// POST /analysis
///
/// Generates a fresh batch of candidate locations, scores each against the
/// supplied criteria, and returns the ranked results.
pub async fn analysis_handler(
    State(app): State<Arc<AppState>>,
    Json(payload): Json<CriteriaPayload>,
) -> ApiResult<impl IntoResponse> {
    let criteria = payload.criteria;
    if criteria.is_empty() {
        return Err(ApiError::bad_request("No criteria provided"));
    }

    let candidates = app.locations.candidates(app.config.analysis_candidates);
    let total_analyzed = candidates.len();

    let mut scored: Vec<ScoredLocation> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let score = suitability_score(&candidate, &criteria)?;
        // locations with no suitability at all are dropped from the results
        if score > 0.0 {
            scored.push(ScoredLocation { candidate, suitability_score: round2(score) });
        }
    }
    scored.sort_by(|a, b| b.suitability_score.total_cmp(&a.suitability_score));

    let scores: Vec<f64> = scored.iter().map(|s| s.suitability_score).collect();
    let suitable_found =
        scored.iter().filter(|s| s.suitability_score >= SUITABILITY_THRESHOLD).count();

    let best_location = scored.first().map(|best| BestLocation {
        coordinates: format!("{:.6}, {:.6}", best.candidate.latitude, best.candidate.longitude),
        suitability_score: best.suitability_score,
        address: best.candidate.address.clone(),
    });

    let total_weight = criteria.values().map(|c| c.weight).sum();
    let analysis_summary = AnalysisSummary {
        average_score: round2(mean(&scores)),
        median_score: round2(median(&scores)),
        parameters_count: criteria.len(),
        total_weight,
    };

    info!(
        "Analysis complete: {} candidates, {} suitable, {} criteria",
        total_analyzed,
        suitable_found,
        criteria.len()
    );

    let top_10_locations = scored.into_iter().take(10).collect();
    Ok(Json(AnalysisResults {
        status: "success",
        message: "GIS analysis completed successfully",
        criteria_used: criteria,
        total_locations_analyzed: total_analyzed,
        suitable_locations_found: suitable_found,
        best_location,
        top_10_locations,
        analysis_summary,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    #[serde(rename = "analysisResults")]
    pub analysis_results: serde_json::Value,
}

/// POST /report
///
/// Renders the templated report from a previous analysis response. Pure
/// substitution; no scores are recomputed here.
pub async fn report_handler(Json(request): Json<ReportRequest>) -> ApiResult<impl IntoResponse> {
    let report = build_report(&request.analysis_results);
    info!("Generated report {}", report["report_id"]);
    Ok(Json(json!({ "report": report, "status": "generated" })))
}
