// src/geo/store.rs
// Flat layer store: one JSON file mapping layer name -> FeatureCollection,
// written once at first startup and read in full on each lookup. No
// indexing, pagination, or update path.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::FeatureCollection;

/// Display metadata for the layers the API knows how to describe.
pub struct LayerInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

pub const KNOWN_LAYERS: [LayerInfo; 10] = [
    LayerInfo { id: "restaurants", name: "Existing Restaurants", icon: "fa-utensils" },
    LayerInfo { id: "potential_locations", name: "Potential Locations", icon: "fa-map-pin" },
    LayerInfo { id: "transport_stops", name: "Public Transport", icon: "fa-bus" },
    LayerInfo { id: "shopping_areas", name: "Shopping Centers", icon: "fa-shopping-cart" },
    LayerInfo { id: "office_buildings", name: "Office Buildings", icon: "fa-building" },
    LayerInfo { id: "parking_lots", name: "Parking Areas", icon: "fa-parking" },
    LayerInfo { id: "high_traffic_areas", name: "High Traffic Zones", icon: "fa-walking" },
    LayerInfo { id: "commercial_zones", name: "Commercial Zones", icon: "fa-store" },
    LayerInfo { id: "residential_areas", name: "Residential Areas", icon: "fa-home" },
    LayerInfo { id: "safety_zones", name: "Safety Zones", icon: "fa-shield-alt" },
];

/// Per-layer metadata returned by the layer listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LayerSummary {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub feature_count: usize,
    pub geometry_type: String,
}

pub struct LayerStore {
    path: PathBuf,
}

impl LayerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read every layer into memory.
    pub async fn read_all(&self) -> Result<BTreeMap<String, FeatureCollection>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("failed to read layer store {}", self.path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("layer store {} is not valid JSON", self.path.display()))
    }

    /// Write the full set of layers, replacing any existing file.
    pub async fn write_all(&self, layers: &BTreeMap<String, FeatureCollection>) -> Result<()> {
        let bytes = serde_json::to_vec(layers).context("failed to serialize layer store")?;
        tokio::fs::write(&self.path, bytes)
            .await
            .with_context(|| format!("failed to write layer store {}", self.path.display()))
    }

    /// Fetch one layer by name; None if the store has no such layer.
    pub async fn layer(&self, name: &str) -> Result<Option<FeatureCollection>> {
        let mut layers = self.read_all().await?;
        Ok(layers.remove(name))
    }

    /// Metadata for each known layer present in the store. Layers missing
    /// from the file are silently omitted, as are unknown layer names.
    pub async fn summaries(&self) -> Result<Vec<LayerSummary>> {
        let layers = self.read_all().await?;

        let mut summaries = Vec::new();
        for info in &KNOWN_LAYERS {
            let Some(collection) = layers.get(info.id) else {
                warn!("layer '{}' missing from store, skipping", info.id);
                continue;
            };
            let geometry_type = collection
                .features
                .first()
                .map(|f| f.geometry.kind.clone())
                .unwrap_or_else(|| "Unknown".to_string());
            summaries.push(LayerSummary {
                id: info.id.to_string(),
                name: info.name.to_string(),
                icon: info.icon.to_string(),
                feature_count: collection.features.len(),
                geometry_type,
            });
        }
        Ok(summaries)
    }
}
