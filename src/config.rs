//! Configuration Module
//!
//! Handles loading and managing CLI configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::client::DEFAULT_BASE_URL;

/// CLI configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the PokeAPI service
    pub base_url: String,
    /// How long fetched responses stay cached; also the reap period
    pub cache_interval: Duration,
    /// Catch rolls above this value fail
    pub catch_threshold: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_BASE_URL` - PokeAPI base URL (default: `https://pokeapi.co/api/v2`)
    /// - `CACHE_INTERVAL_SECS` - response cache interval in seconds (default: 3600)
    /// - `CATCH_THRESHOLD` - catch roll threshold (default: 50)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("POKEDEX_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            cache_interval: Duration::from_secs(
                env::var("CACHE_INTERVAL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(3600),
            ),
            catch_threshold: env::var("CATCH_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_interval: Duration::from_secs(3600),
            catch_threshold: 50,
        }
    }
}
