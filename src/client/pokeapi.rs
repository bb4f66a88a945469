//! PokeAPI Client
//!
//! HTTP client for the PokeAPI REST service with a timed response
//! cache. Responses are cached as raw bytes keyed by request URL, so a
//! lookup repeated within the cache interval never touches the network.

use std::time::Duration;

use tracing::debug;

use crate::cache::TimedCache;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage, Pokemon};

/// Base URL of the public PokeAPI service.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Page size for location-area listings.
const PAGE_LIMIT: u32 = 20;

// == PokeAPI Client ==
/// Cache-first client for the PokeAPI endpoints the REPL uses.
///
/// Cloning is cheap; clones share the underlying HTTP connection pool
/// and response cache.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    cache: TimedCache,
    base_url: String,
}

impl PokeApiClient {
    // == Constructors ==
    /// Creates a client against the public PokeAPI whose responses stay
    /// cached for `cache_interval`.
    pub fn new(cache_interval: Duration) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, cache_interval)
    }

    /// Creates a client against a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>, cache_interval: Duration) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            cache: TimedCache::new(cache_interval)?,
            base_url: base_url.into(),
        })
    }

    // == List Location Areas ==
    /// Fetches one page of the location-area index.
    ///
    /// `page_url` is a `next`/`previous` cursor from a previously
    /// fetched page; `None` fetches the first page.
    pub async fn list_location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => format!(
                "{}/location-area?offset=0&limit={}",
                self.base_url, PAGE_LIMIT
            ),
        };

        let bytes = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // == Explore Location ==
    /// Fetches the encounter list for a named location area.
    pub async fn explore_location(&self, area: &str) -> Result<LocationAreaDetail> {
        let url = format!("{}/location-area/{}", self.base_url, area);

        let bytes = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // == Get Pokemon ==
    /// Fetches a Pokemon's detail record by name.
    pub async fn get_pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);

        let bytes = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // == Fetch ==
    /// Cache-first GET for `url`.
    ///
    /// Hits return the cached body without a network call. On a miss the
    /// response body is fetched and cached raw, and only for success
    /// statuses. The cache holds unparsed bytes, so one cache serves
    /// every response shape; each endpoint re-decodes on hit.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(bytes) = self.cache.get(url).await {
            debug!(url, "cache hit");
            return Ok(bytes);
        }

        debug!(url, "cache miss, fetching");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status.as_u16() > 399 {
            return Err(PokedexError::BadStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?.to_vec();
        self.cache.add(url, bytes.clone()).await;

        Ok(bytes)
    }

    // == Shutdown ==
    /// Stops the response cache's background reaper.
    ///
    /// Safe to call more than once; lookups keep working afterwards.
    pub fn shutdown(&self) {
        self.cache.shutdown();
    }
}
