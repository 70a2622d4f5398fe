// src/analysis/scoring.rs
// The criteria scorer: maps (candidate location, user criteria) to a single
// 0-100 suitability score. Pure and deterministic given the fixed catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use super::parameters::{self, Parameter, ValueKind};
use crate::locations::Candidate;

/// One user-supplied criterion: a target value (threshold) and a 0-100 weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Criterion {
    pub value: f64,
    pub weight: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    /// A zero target value would divide by zero in the distance and
    /// non-inverted scale branches. Rejected up front instead of letting
    /// NaN/Infinity leak into results.
    #[error("criterion '{parameter}' has a zero target value")]
    ZeroThreshold { parameter: String },
}

/// Score a single parameter in [0, 100].
///
/// - Distance: at or under the threshold scores 100 down to 50; past it the
///   score falls linearly to 0 at twice the threshold.
/// - Inverted scale: lower raw value is better; the threshold is ignored.
/// - Scale: 100 at or above the threshold, proportional below it.
pub fn parameter_score(param: &Parameter, raw: f64, threshold: f64) -> Result<f64, ScoreError> {
    let score = match param.kind {
        ValueKind::Distance => {
            if threshold == 0.0 {
                return Err(ScoreError::ZeroThreshold { parameter: param.id.to_string() });
            }
            if raw <= threshold {
                100.0 - (raw / threshold * 50.0)
            } else {
                (50.0 - ((raw - threshold) / threshold * 50.0)).max(0.0)
            }
        }
        ValueKind::Scale if param.inverted => (100.0 - (raw / 10.0 * 100.0)).max(0.0),
        ValueKind::Scale => {
            if raw >= threshold {
                100.0
            } else if threshold == 0.0 {
                return Err(ScoreError::ZeroThreshold { parameter: param.id.to_string() });
            } else {
                (raw / threshold) * 100.0
            }
        }
    };
    Ok(score)
}

/// Aggregate the candidate's per-parameter scores into one suitability score.
///
/// Criteria naming unknown parameter ids are silently skipped (deliberate
/// leniency, not an error). A candidate missing a raw value scores it as 0.
/// No matched criteria yields 0. The result is clamped to [0, 100].
pub fn suitability_score(
    candidate: &Candidate,
    criteria: &BTreeMap<String, Criterion>,
) -> Result<f64, ScoreError> {
    let mut total_score = 0.0;
    let mut total_weight = 0.0;

    for (param_id, criterion) in criteria {
        let Some(param) = parameters::get(param_id) else {
            continue;
        };
        let raw = candidate.parameters.get(param_id.as_str()).copied().unwrap_or(0) as f64;
        let param_score = parameter_score(param, raw, criterion.value)?;

        total_score += param_score * (criterion.weight / 100.0);
        total_weight += criterion.weight;
    }

    if total_weight > 0.0 {
        Ok((total_score / total_weight * 100.0).clamp(0.0, 100.0))
    } else {
        Ok(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(values: &[(&str, i64)]) -> Candidate {
        Candidate {
            id: 1,
            latitude: 40.7128,
            longitude: -74.0060,
            address: "Sample Location 1".to_string(),
            parameters: values.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }

    fn criteria(entries: &[(&str, f64, f64)]) -> BTreeMap<String, Criterion> {
        entries
            .iter()
            .map(|(id, value, weight)| {
                (id.to_string(), Criterion { value: *value, weight: *weight })
            })
            .collect()
    }

    #[test]
    fn test_distance_score_at_threshold_is_fifty() {
        let param = parameters::get("competitors").unwrap();
        assert_eq!(parameter_score(param, 500.0, 500.0).unwrap(), 50.0);
    }

    #[test]
    fn test_distance_score_under_and_over_threshold() {
        let param = parameters::get("competitors").unwrap();
        // v = 0 is the best possible distance score
        assert_eq!(parameter_score(param, 0.0, 500.0).unwrap(), 100.0);
        // halfway to the threshold
        assert_eq!(parameter_score(param, 250.0, 500.0).unwrap(), 75.0);
        // past twice the threshold the score floors at 0
        assert_eq!(parameter_score(param, 2000.0, 500.0).unwrap(), 0.0);
    }

    #[test]
    fn test_inverted_scale_endpoints_and_monotonicity() {
        let param = parameters::get("rent_cost").unwrap();
        assert_eq!(parameter_score(param, 0.0, 5.0).unwrap(), 100.0);
        assert_eq!(parameter_score(param, 10.0, 5.0).unwrap(), 0.0);

        let mut previous = f64::INFINITY;
        for raw in 0..=10 {
            let score = parameter_score(param, raw as f64, 5.0).unwrap();
            assert!(score < previous, "inverted scale must strictly decrease");
            previous = score;
        }
    }

    #[test]
    fn test_inverted_scale_ignores_threshold() {
        let param = parameters::get("rent_cost").unwrap();
        let a = parameter_score(param, 4.0, 1.0).unwrap();
        let b = parameter_score(param, 4.0, 9.0).unwrap();
        assert_eq!(a, b);
        // and a zero threshold is fine here since nothing divides by it
        assert_eq!(parameter_score(param, 4.0, 0.0).unwrap(), a);
    }

    #[test]
    fn test_scale_score_at_and_below_threshold() {
        let param = parameters::get("foot_traffic").unwrap();
        assert_eq!(parameter_score(param, 7.0, 7.0).unwrap(), 100.0);
        assert_eq!(parameter_score(param, 9.0, 7.0).unwrap(), 100.0);
        assert_eq!(parameter_score(param, 3.0, 6.0).unwrap(), 50.0);
        assert_eq!(parameter_score(param, 2.0, 8.0).unwrap(), 25.0);
    }

    #[test]
    fn test_zero_threshold_is_an_error() {
        let distance = parameters::get("competitors").unwrap();
        assert_eq!(
            parameter_score(distance, 100.0, 0.0),
            Err(ScoreError::ZeroThreshold { parameter: "competitors".to_string() })
        );

        let c = candidate(&[("competitors", 400)]);
        let result = suitability_score(&c, &criteria(&[("competitors", 0.0, 50.0)]));
        assert!(result.is_err());
    }

    #[test]
    fn test_worked_scenario_scores_seventy_five() {
        // competitors = 500m against a 500m target scores 50; foot traffic 7
        // against a required 7 scores 100; equal weights average to 75.
        let c = candidate(&[("competitors", 500), ("foot_traffic", 7)]);
        let crit = criteria(&[("competitors", 500.0, 50.0), ("foot_traffic", 7.0, 50.0)]);
        assert_eq!(suitability_score(&c, &crit).unwrap(), 75.0);
    }

    #[test]
    fn test_unknown_parameter_ids_are_skipped() {
        let c = candidate(&[("foot_traffic", 7)]);
        let crit = criteria(&[("foot_traffic", 7.0, 50.0), ("helipad_access", 5.0, 50.0)]);
        // the unknown criterion contributes neither score nor weight
        assert_eq!(suitability_score(&c, &crit).unwrap(), 100.0);
    }

    #[test]
    fn test_empty_criteria_scores_zero() {
        let c = candidate(&[("foot_traffic", 7)]);
        assert_eq!(suitability_score(&c, &BTreeMap::new()).unwrap(), 0.0);

        // all-unknown criteria behave the same as empty
        let crit = criteria(&[("helipad_access", 5.0, 100.0)]);
        assert_eq!(suitability_score(&c, &crit).unwrap(), 0.0);
    }

    #[test]
    fn test_aggregate_is_clamped_to_0_100() {
        let c = candidate(&[("foot_traffic", 10), ("parking", 10)]);
        // weights far above 100 must not push the aggregate past 100
        let crit = criteria(&[("foot_traffic", 1.0, 5000.0), ("parking", 1.0, 5000.0)]);
        assert_eq!(suitability_score(&c, &crit).unwrap(), 100.0);

        // negative weights must not drag the aggregate below 0
        let crit = criteria(&[("foot_traffic", 10.0, -50.0), ("parking", 1.0, 60.0)]);
        let score = suitability_score(&c, &crit).unwrap();
        assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn test_missing_candidate_value_defaults_to_zero() {
        let c = candidate(&[]);
        let crit = criteria(&[("foot_traffic", 8.0, 100.0)]);
        // raw 0 against a scale threshold of 8 scores 0
        assert_eq!(suitability_score(&c, &crit).unwrap(), 0.0);
    }

    #[test]
    fn test_score_is_deterministic() {
        let c = candidate(&[("competitors", 742), ("rent_cost", 3), ("visibility", 9)]);
        let crit = criteria(&[
            ("competitors", 600.0, 40.0),
            ("rent_cost", 5.0, 35.0),
            ("visibility", 6.0, 25.0),
        ]);
        let first = suitability_score(&c, &crit).unwrap();
        for _ in 0..10 {
            assert_eq!(suitability_score(&c, &crit).unwrap(), first);
        }
    }
}
