// src/geo/seed.rs
// First-run sample data: writes the demo layers into the store if the file
// does not exist yet. Everything here is synthetic stand-in data.

use anyhow::Result;
use rand::prelude::*;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::info;

use super::store::LayerStore;
use super::{Feature, FeatureCollection, Geometry};
use crate::config::Config;
use crate::locations::{Candidate, LocationProvider};

const CUISINES: [&str; 5] = ["Italian", "Chinese", "Mexican", "American", "Japanese"];
const ZONE_TYPES: [&str; 3] = ["Commercial", "Mixed-Use", "Retail"];

const THEMED_LAYERS: [(&str, &str); 8] = [
    ("transport_stops", "Public Transport"),
    ("shopping_areas", "Shopping Centers"),
    ("office_buildings", "Office Buildings"),
    ("parking_lots", "Parking Areas"),
    ("high_traffic_areas", "High Traffic Zones"),
    ("commercial_zones", "Commercial Zones"),
    ("residential_areas", "Residential Areas"),
    ("safety_zones", "Safety Zones"),
];

fn properties(entries: Vec<(&str, Value)>) -> Map<String, Value> {
    entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

fn restaurants_layer(pool: &[Candidate], count: usize, rng: &mut impl Rng) -> FeatureCollection {
    let features = (0..count)
        .map(|i| {
            let loc = pool.choose(rng).expect("seed pool is never empty");
            let rating = (rng.random_range(3.5_f64..=4.8) * 10.0).round() / 10.0;
            Feature::new(
                Geometry::point(loc.longitude, loc.latitude),
                properties(vec![
                    ("id", Value::from(i as u64 + 1)),
                    ("name", Value::from(format!("Restaurant {}", i + 1))),
                    ("cuisine", Value::from(*CUISINES.choose(rng).unwrap())),
                    ("rating", Value::from(rating)),
                ]),
            )
        })
        .collect();
    FeatureCollection::new(features)
}

fn potential_locations_layer(
    pool: &[Candidate],
    count: usize,
    rng: &mut impl Rng,
) -> FeatureCollection {
    let features = pool
        .iter()
        .take(count)
        .map(|loc| {
            Feature::new(
                Geometry::point(loc.longitude, loc.latitude),
                properties(vec![
                    ("id", Value::from(loc.id)),
                    ("name", Value::from(format!("Location {}", loc.id))),
                    ("address", Value::from(loc.address.clone())),
                    ("zone_type", Value::from(*ZONE_TYPES.choose(rng).unwrap())),
                ]),
            )
        })
        .collect();
    FeatureCollection::new(features)
}

fn themed_layer(
    pool: &[Candidate],
    display_name: &str,
    count: usize,
    rng: &mut impl Rng,
) -> FeatureCollection {
    let features = (0..count)
        .map(|i| {
            let loc = pool.choose(rng).expect("seed pool is never empty");
            Feature::new(
                Geometry::point(loc.longitude, loc.latitude),
                properties(vec![
                    ("id", Value::from(i as u64 + 1)),
                    ("name", Value::from(format!("{} {}", display_name, i + 1))),
                    ("category", Value::from(display_name)),
                    ("importance", Value::from(rng.random_range(1..=10))),
                ]),
            )
        })
        .collect();
    FeatureCollection::new(features)
}

/// Seed the layer store with sample data unless the file already exists.
/// Returns true if a new store was written.
pub async fn seed_if_missing(
    store: &LayerStore,
    provider: &dyn LocationProvider,
    config: &Config,
) -> Result<bool> {
    if store.exists() {
        return Ok(false);
    }

    info!("Creating layer store {}", store.path().display());
    let mut rng = rand::rng();
    let pool = provider.candidates(config.seed_pool_size);
    anyhow::ensure!(!pool.is_empty(), "seed pool is empty, check SITERANK_SEED_POOL_SIZE");

    let mut layers = BTreeMap::new();
    layers.insert(
        "restaurants".to_string(),
        restaurants_layer(&pool, config.seed_restaurants, &mut rng),
    );
    layers.insert(
        "potential_locations".to_string(),
        potential_locations_layer(&pool, config.seed_potential_locations, &mut rng),
    );
    for (layer_id, display_name) in THEMED_LAYERS {
        let count =
            rng.random_range(config.seed_layer_features_min..=config.seed_layer_features_max);
        layers.insert(layer_id.to_string(), themed_layer(&pool, display_name, count, &mut rng));
    }

    store.write_all(&layers).await?;
    info!("Created {} sample layers", layers.len());
    Ok(true)
}
