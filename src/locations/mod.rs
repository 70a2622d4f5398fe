// src/locations/mod.rs
// Candidate locations and the data-provider seam. The random generator is a
// stand-in for real siting data; anything implementing `LocationProvider`
// can be swapped in without touching the scorer.

pub mod generator;

pub use generator::RandomLocations;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A synthetic point under consideration, with one raw value per catalog
/// parameter. Regenerated on every analysis request; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub parameters: BTreeMap<String, i64>,
}

/// A candidate plus its derived suitability score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredLocation {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub suitability_score: f64,
}

/// Source of candidate locations for an analysis run.
pub trait LocationProvider: Send + Sync {
    fn candidates(&self, count: usize) -> Vec<Candidate>;
}
