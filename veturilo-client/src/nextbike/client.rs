//! Nextbike locations HTTP client.
//!
//! Provides async query methods over the Veturilo locations feed. Every
//! query fetches the feed afresh, so results are point-in-time snapshots
//! with no cache and no cross-call ordering guarantee.

use tracing::debug;

use crate::domain::{Bike, Station};

use super::convert::convert_places;
use super::error::NextbikeError;
use super::types::{RawPlace, ResponseBlock, places_from_response};

/// Default endpoint: the veturilo.waw.pl proxy in front of the Nextbike
/// maps API.
const DEFAULT_BASE_URL: &str = "https://veturilo.waw.pl/wp-json/nbmap/v1/data";

/// Locations feed the proxy forwards to, passed as the `target` query
/// parameter.
const LOCATIONS_TARGET: &str = "https://api-gateway.nextbike.pl/api/maps/locations?serviceUid=vw";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How much of a bad response body to keep in errors.
const BODY_SNIPPET_LEN: usize = 500;

/// Configuration for the Nextbike client.
#[derive(Debug, Clone)]
pub struct NextbikeConfig {
    /// Base URL of the locations proxy (defaults to production
    /// Veturilo).
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl NextbikeConfig {
    /// Create a config pointing at the production feed.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for NextbikeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the Veturilo locations feed.
#[derive(Debug, Clone)]
pub struct NextbikeClient {
    http: reqwest::Client,
    base_url: String,
}

impl NextbikeClient {
    /// Create a new client with the given configuration.
    pub fn new(config: NextbikeConfig) -> Result<Self, NextbikeError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the raw place list.
    ///
    /// The feed nests places under `response[0].cities[0].places`; any
    /// absent segment degrades to an empty list. A body that is not JSON
    /// of the expected shape is an error, as is a non-success status.
    pub async fn fetch_raw_places(&self) -> Result<Vec<RawPlace>, NextbikeError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("target", LOCATIONS_TARGET)])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            return Err(NextbikeError::Api {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        let body = response.text().await?;

        let blocks: Vec<ResponseBlock> =
            serde_json::from_str(&body).map_err(|e| NextbikeError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(BODY_SNIPPET_LEN).collect()),
            })?;

        let places = places_from_response(blocks);

        debug!(places = places.len(), "fetched locations feed");

        Ok(places)
    }

    /// Get every place in the network, in feed order.
    pub async fn get_all_stations(&self) -> Result<Vec<Station>, NextbikeError> {
        let places = self.fetch_raw_places().await?;
        Ok(convert_places(&places)?)
    }

    /// Get the station with the given station number.
    ///
    /// Matching is on the normalized number, so freestanding bike spots
    /// never match even when their raw place number collides with
    /// `number`. If the feed ever lists two stations with the same
    /// number, the first in feed order wins. Returns `Ok(None)` when no
    /// station matches; not-found is not an error.
    pub async fn get_station_by_number(
        &self,
        number: u32,
    ) -> Result<Option<Station>, NextbikeError> {
        let places = self.fetch_raw_places().await?;
        let stations = convert_places(&places)?;
        Ok(stations.into_iter().find(|s| s.number == Some(number)))
    }

    /// Get the bike with the given bike number, wherever it currently
    /// is.
    ///
    /// Scans every place's bike list in feed order. Returns `Ok(None)`
    /// when no bike matches.
    pub async fn get_bike_by_number(&self, number: u32) -> Result<Option<Bike>, NextbikeError> {
        let places = self.fetch_raw_places().await?;
        let stations = convert_places(&places)?;
        Ok(stations
            .into_iter()
            .flat_map(|s| s.bikes)
            .find(|b| b.number == number))
    }

    /// Get the bikes at the station with the given number.
    ///
    /// Returns an empty list both when the station does not exist and
    /// when it exists with no bikes.
    pub async fn get_bikes_at_station(&self, number: u32) -> Result<Vec<Bike>, NextbikeError> {
        Ok(self
            .get_station_by_number(number)
            .await?
            .map(|station| station.bikes)
            .unwrap_or_default())
    }
}
