// src/analysis/parameters.rs
// Static catalog of the evaluation parameters used by the scorer.
// Fixed at compile time and immutable at runtime.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

/// How a parameter's raw value is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Distance in meters (lower raw values are closer).
    Distance,
    /// Subjective 1-10 scale.
    Scale,
}

/// One evaluation dimension for candidate locations.
#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    #[serde(skip)]
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: ValueKind,
    pub weight_factor: f64,
    pub optimal_range: (u32, u32),
    /// Lower raw value is better (e.g. rent cost). Omitted from the API
    /// payload when false, matching the published parameter schema.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub inverted: bool,
}

const fn param(
    id: &'static str,
    name: &'static str,
    kind: ValueKind,
    weight_factor: f64,
    optimal_range: (u32, u32),
    inverted: bool,
) -> Parameter {
    Parameter { id, name, kind, weight_factor, optimal_range, inverted }
}

static CATALOG: Lazy<BTreeMap<&'static str, Parameter>> = Lazy::new(|| {
    [
        param("competitors", "Competitors Distance", ValueKind::Distance, 0.15, (300, 800), false),
        param("foot_traffic", "Foot Traffic Density", ValueKind::Scale, 0.20, (6, 10), false),
        param("public_transport", "Public Transport Access", ValueKind::Distance, 0.12, (100, 400), false),
        param("parking", "Parking Availability", ValueKind::Scale, 0.10, (5, 10), false),
        param("rent_cost", "Rental Cost", ValueKind::Scale, 0.18, (1, 6), true),
        param("population_density", "Population Density", ValueKind::Scale, 0.15, (6, 10), false),
        param("office_buildings", "Office Buildings Proximity", ValueKind::Distance, 0.08, (200, 1000), false),
        param("shopping_centers", "Shopping Centers", ValueKind::Distance, 0.10, (300, 800), false),
        param("safety_level", "Safety Level", ValueKind::Scale, 0.07, (7, 10), false),
        param("visibility", "Street Visibility", ValueKind::Scale, 0.05, (6, 10), false),
    ]
    .into_iter()
    .map(|p| (p.id, p))
    .collect()
});

/// Full parameter catalog keyed by parameter id.
pub fn catalog() -> &'static BTreeMap<&'static str, Parameter> {
    &CATALOG
}

/// Look up a single parameter definition.
pub fn get(id: &str) -> Option<&'static Parameter> {
    CATALOG.get(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_exactly_the_ten_parameters() {
        let ids: Vec<&str> = catalog().keys().copied().collect();
        let mut expected = vec![
            "competitors",
            "foot_traffic",
            "public_transport",
            "parking",
            "rent_cost",
            "population_density",
            "office_buildings",
            "shopping_centers",
            "safety_level",
            "visibility",
        ];
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_only_rent_cost_is_inverted() {
        let inverted: Vec<&str> = catalog()
            .values()
            .filter(|p| p.inverted)
            .map(|p| p.id)
            .collect();
        assert_eq!(inverted, vec!["rent_cost"]);
    }

    #[test]
    fn test_serialized_parameter_shape() {
        let json = serde_json::to_value(get("competitors").unwrap()).unwrap();
        assert_eq!(json["name"], "Competitors Distance");
        assert_eq!(json["type"], "distance");
        assert_eq!(json["optimal_range"][0], 300);
        // Non-inverted entries omit the flag entirely
        assert!(json.get("inverted").is_none());

        let rent = serde_json::to_value(get("rent_cost").unwrap()).unwrap();
        assert_eq!(rent["inverted"], true);
    }
}
