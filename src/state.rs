// src/state.rs
// Shared application state: configuration, the layer store, and the
// candidate-location provider. Immutable after startup.

use std::sync::Arc;

use crate::config::Config;
use crate::geo::LayerStore;
use crate::locations::{LocationProvider, RandomLocations};

pub struct AppState {
    pub config: Config,
    pub layers: LayerStore,
    pub locations: Arc<dyn LocationProvider>,
}

impl AppState {
    /// State with the default randomized location provider.
    pub fn new(config: Config) -> Self {
        let locations = Arc::new(RandomLocations::new(config.center_lat, config.center_lng));
        Self::with_provider(config, locations)
    }

    /// State with an explicit provider (real data source, or a test stub).
    pub fn with_provider(config: Config, locations: Arc<dyn LocationProvider>) -> Self {
        let layers = LayerStore::new(&config.layer_file);
        Self { config, layers, locations }
    }
}
