// src/config/mod.rs
// Explicit runtime configuration, built once in main and carried in
// AppState. Values come from the environment (plus .env) with defaults.

use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    // ── Server
    pub host: String,
    pub port: u16,
    pub log_level: String,

    // ── Layer store
    pub layer_file: String,

    // ── Analysis
    pub center_lat: f64,
    pub center_lng: f64,
    pub analysis_candidates: usize,

    // ── Sample data seeding
    pub seed_pool_size: usize,
    pub seed_restaurants: usize,
    pub seed_potential_locations: usize,
    pub seed_layer_features_min: usize,
    pub seed_layer_features_max: usize,
}

// Tolerates trailing comments and whitespace in .env values
fn parse_value_or<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr,
{
    let clean_val = raw.split('#').next().unwrap_or("").trim();
    match clean_val.parse::<T>() {
        Ok(parsed) => parsed,
        Err(_) => {
            eprintln!("Config: {} = '{}' (parse failed, using default)", key, raw);
            default
        }
    }
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => parse_value_or(key, &val, default),
        Err(_) => default,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8888,
            log_level: "info".to_string(),
            layer_file: "gis_data.layers.json".to_string(),
            center_lat: 40.7128,
            center_lng: -74.0060,
            analysis_candidates: 200,
            seed_pool_size: 150,
            seed_restaurants: 20,
            seed_potential_locations: 50,
            seed_layer_features_min: 15,
            seed_layer_features_max: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        // Load .env if present; plain environment variables still apply.
        let _ = dotenvy::dotenv();

        let defaults = Self::default();
        Self {
            host: env_var_or("SITERANK_HOST", defaults.host),
            port: env_var_or("SITERANK_PORT", defaults.port),
            log_level: env_var_or("SITERANK_LOG_LEVEL", defaults.log_level),
            layer_file: env_var_or("SITERANK_LAYER_FILE", defaults.layer_file),
            center_lat: env_var_or("SITERANK_CENTER_LAT", defaults.center_lat),
            center_lng: env_var_or("SITERANK_CENTER_LNG", defaults.center_lng),
            analysis_candidates: env_var_or(
                "SITERANK_ANALYSIS_CANDIDATES",
                defaults.analysis_candidates,
            ),
            seed_pool_size: env_var_or("SITERANK_SEED_POOL_SIZE", defaults.seed_pool_size),
            seed_restaurants: env_var_or("SITERANK_SEED_RESTAURANTS", defaults.seed_restaurants),
            seed_potential_locations: env_var_or(
                "SITERANK_SEED_POTENTIAL_LOCATIONS",
                defaults.seed_potential_locations,
            ),
            seed_layer_features_min: env_var_or(
                "SITERANK_SEED_LAYER_FEATURES_MIN",
                defaults.seed_layer_features_min,
            ),
            seed_layer_features_max: env_var_or(
                "SITERANK_SEED_LAYER_FEATURES_MAX",
                defaults.seed_layer_features_max,
            ),
        }
    }

    /// Server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8888);
        assert_eq!(config.analysis_candidates, 200);
        assert_eq!(config.layer_file, "gis_data.layers.json");
        assert!(config.seed_layer_features_min <= config.seed_layer_features_max);
    }

    #[test]
    fn test_bind_address() {
        let config = Config::default();
        assert_eq!(config.bind_address(), "127.0.0.1:8888");
    }

    #[test]
    fn test_parse_value_strips_comments_and_whitespace() {
        let value: u16 = parse_value_or("SITERANK_PORT", "9999 # demo port", 1);
        assert_eq!(value, 9999);
        let value: f64 = parse_value_or("SITERANK_CENTER_LAT", "  40.7128  ", 0.0);
        assert_eq!(value, 40.7128);
    }

    #[test]
    fn test_parse_value_falls_back_on_garbage() {
        let value: usize = parse_value_or("SITERANK_ANALYSIS_CANDIDATES", "not-a-number", 42);
        assert_eq!(value, 42);
        let value: u16 = parse_value_or("SITERANK_PORT", "", 8888);
        assert_eq!(value, 8888);
    }

    #[test]
    fn test_env_var_or_uses_default_when_unset() {
        let value: usize = env_var_or("SITERANK_NO_SUCH_VARIABLE", 7);
        assert_eq!(value, 7);
    }
}
