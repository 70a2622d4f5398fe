// src/geo/mod.rs
// GeoJSON-shaped types and the flat layer store.

pub mod seed;
pub mod store;

pub use store::{LayerStore, LayerSummary};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// GeoJSON geometry. Seeded layers only ever contain points, but the store
/// round-trips whatever geometry type it is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Value,
}

impl Geometry {
    /// GeoJSON point (note: longitude first).
    pub fn point(lng: f64, lat: f64) -> Self {
        Self { kind: "Point".to_string(), coordinates: serde_json::json!([lng, lat]) }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry: Geometry,
    pub properties: Map<String, Value>,
}

impl Feature {
    pub fn new(geometry: Geometry, properties: Map<String, Value>) -> Self {
        Self { kind: "Feature".to_string(), geometry, properties }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { kind: "FeatureCollection".to_string(), features }
    }
}
