//! Lookup configuration.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::models::NetworkKind;

pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Overpass API endpoint.
    pub overpass_url: String,
    /// Radius of the road network fetched around the query point, meters.
    pub graph_radius_m: f64,
    /// Search radius for the landmark lookup, meters.
    pub landmark_radius_m: f64,
    /// Tag key that qualifies an element as a point of interest.
    pub poi_filter: String,
    /// Which network profile to request.
    pub network: NetworkKind,
    /// HTTP timeout for provider requests, seconds.
    pub http_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            overpass_url: DEFAULT_OVERPASS_URL.to_string(),
            graph_radius_m: 500.0,
            landmark_radius_m: 120.0,
            poi_filter: "amenity".to_string(),
            network: NetworkKind::Drivable,
            http_timeout_secs: 25,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.graph_radius_m, 500.0);
        assert_eq!(config.network, NetworkKind::Drivable);
        assert_eq!(config.poi_filter, "amenity");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("graph_radius_m = 250.0\nnetwork = \"all\"").unwrap();
        assert_eq!(config.graph_radius_m, 250.0);
        assert_eq!(config.network, NetworkKind::All);
        assert_eq!(config.overpass_url, DEFAULT_OVERPASS_URL);
    }
}
