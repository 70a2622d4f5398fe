// src/locations/generator.rs

use rand::Rng;
use std::collections::BTreeMap;

use super::{Candidate, LocationProvider};
use crate::analysis::parameters::{self, ValueKind};

/// Randomized candidate generator. Points are jittered within roughly 5 km
/// of the configured center, with independently randomized raw values per
/// catalog parameter.
pub struct RandomLocations {
    center_lat: f64,
    center_lng: f64,
}

impl RandomLocations {
    pub fn new(center_lat: f64, center_lng: f64) -> Self {
        Self { center_lat, center_lng }
    }
}

impl LocationProvider for RandomLocations {
    fn candidates(&self, count: usize) -> Vec<Candidate> {
        let mut rng = rand::rng();
        (0..count)
            .map(|i| {
                let lat = self.center_lat + rng.random_range(-0.045..=0.045);
                let lng = self.center_lng + rng.random_range(-0.06..=0.06);

                let values: BTreeMap<String, i64> = parameters::catalog()
                    .values()
                    .map(|param| {
                        let value = match param.kind {
                            ValueKind::Distance => rng.random_range(50..=2000),
                            ValueKind::Scale => rng.random_range(1..=10),
                        };
                        (param.id.to_string(), value)
                    })
                    .collect();

                Candidate {
                    id: i as u32 + 1,
                    latitude: lat,
                    longitude: lng,
                    address: format!("Sample Location {}", i + 1),
                    parameters: values,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_have_every_catalog_parameter_in_range() {
        let provider = RandomLocations::new(40.7128, -74.0060);
        let candidates = provider.candidates(25);
        assert_eq!(candidates.len(), 25);

        for candidate in &candidates {
            assert_eq!(candidate.parameters.len(), parameters::catalog().len());
            for (id, value) in &candidate.parameters {
                let param = parameters::get(id).unwrap();
                match param.kind {
                    ValueKind::Distance => assert!((50..=2000).contains(value)),
                    ValueKind::Scale => assert!((1..=10).contains(value)),
                }
            }
            assert!((candidate.latitude - 40.7128).abs() <= 0.045);
            assert!((candidate.longitude + 74.0060).abs() <= 0.06);
        }
    }

    #[test]
    fn test_candidate_ids_and_addresses_are_sequential() {
        let provider = RandomLocations::new(40.7128, -74.0060);
        let candidates = provider.candidates(3);
        assert_eq!(candidates[0].id, 1);
        assert_eq!(candidates[2].id, 3);
        assert_eq!(candidates[1].address, "Sample Location 2");
    }
}
