// src/analysis/report.rs
// Templated report generation. Everything here is pure substitution from the
// analysis results payload; no new computation happens on the data.

use chrono::Utc;
use rand::Rng;
use serde_json::{json, Value};

fn number(results: &Value, path: &[&str]) -> f64 {
    let mut current = results;
    for key in path {
        current = &current[*key];
    }
    current.as_f64().unwrap_or(0.0)
}

fn text<'a>(results: &'a Value, path: &[&str], default: &'a str) -> &'a str {
    let mut current = results;
    for key in path {
        current = &current[*key];
    }
    current.as_str().unwrap_or(default)
}

/// Build the analysis report from a previously returned `/analysis` payload.
pub fn build_report(results: &Value) -> Value {
    let total_analyzed = number(results, &["total_locations_analyzed"]);
    let suitable_found = number(results, &["suitable_locations_found"]);
    let parameters_count = number(results, &["analysis_summary", "parameters_count"]);
    let average_score = number(results, &["analysis_summary", "average_score"]);
    let median_score = number(results, &["analysis_summary", "median_score"]);
    let best_score = number(results, &["best_location", "suitability_score"]);
    let best_coordinates = text(results, &["best_location", "coordinates"], "N/A");

    let report_id = format!("RPT_{}", rand::rng().random_range(100000..=999999));

    json!({
        "report_id": report_id,
        "generated_at": Utc::now().to_rfc3339(),
        "title": "Restaurant Location Suitability Analysis Report",
        "executive_summary": format!(
            "Based on the comprehensive GIS analysis of {total_analyzed} potential locations \
             using {parameters_count} weighted criteria, we identified {suitable_found} \
             locations with high suitability scores. The optimal location has a suitability \
             score of {best_score}% and is located at {best_coordinates}."
        ),
        "key_findings": [
            format!("Average suitability score: {average_score}%"),
            format!("Median suitability score: {median_score}%"),
            format!("{suitable_found} locations meet the minimum suitability threshold"),
            "Top locations show strong alignment with specified criteria",
        ],
        "recommendations": [
            "Focus on the top 3-5 locations for detailed site inspection",
            "Consider seasonal variations in foot traffic patterns",
            "Verify actual rental costs and negotiate terms",
            "Conduct customer demographic analysis for top locations",
        ],
        "methodology": {
            "analysis_type": "Multi-criteria GIS suitability analysis",
            "weighting_method": "User-defined weighted criteria",
            "scoring_scale": "0-100% suitability index",
            "data_sources": "Simulated urban location data",
        },
        "download_formats": ["PDF", "Excel", "GeoJSON", "Shapefile"],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_substitutes_analysis_fields() {
        let results = json!({
            "total_locations_analyzed": 200,
            "suitable_locations_found": 42,
            "best_location": {
                "coordinates": "40.712800, -74.006000",
                "suitability_score": 91.5,
            },
            "analysis_summary": {
                "average_score": 63.21,
                "median_score": 61.0,
                "parameters_count": 3,
            },
        });

        let report = build_report(&results);
        let summary = report["executive_summary"].as_str().unwrap();
        assert!(summary.contains("200 potential locations"));
        assert!(summary.contains("3 weighted criteria"));
        assert!(summary.contains("91.5%"));
        assert!(summary.contains("40.712800, -74.006000"));

        let findings = report["key_findings"].as_array().unwrap();
        assert_eq!(findings.len(), 4);
        assert!(findings[0].as_str().unwrap().contains("63.21%"));

        let id = report["report_id"].as_str().unwrap();
        assert!(id.starts_with("RPT_"));
        assert_eq!(id.len(), "RPT_".len() + 6);
    }

    #[test]
    fn test_report_tolerates_missing_fields() {
        let report = build_report(&json!({}));
        let summary = report["executive_summary"].as_str().unwrap();
        assert!(summary.contains("0 potential locations"));
        assert!(summary.contains("located at N/A"));
    }
}
