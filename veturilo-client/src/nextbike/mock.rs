//! Mock Nextbike client for testing without network access.
//!
//! Serves a locations payload from a JSON fixture file (or from raw
//! places built in-process) behind the same query surface as the real
//! client, so callers can swap it in wherever a `NextbikeClient` would
//! go.

use std::path::Path;

use crate::domain::{Bike, Station};

use super::convert::convert_places;
use super::error::NextbikeError;
use super::types::{RawPlace, ResponseBlock, places_from_response};

/// Mock client that answers queries from a fixed payload.
#[derive(Debug, Clone)]
pub struct MockNextbikeClient {
    places: Vec<RawPlace>,
}

impl MockNextbikeClient {
    /// Create a mock from a locations feed JSON file, in the same format
    /// the real endpoint serves.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, NextbikeError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| NextbikeError::Api {
            status: 0,
            message: format!("failed to read fixture {}: {}", path.display(), e),
        })?;

        let blocks: Vec<ResponseBlock> =
            serde_json::from_str(&json).map_err(|e| NextbikeError::Json {
                message: e.to_string(),
                body: None,
            })?;

        Ok(Self {
            places: places_from_response(blocks),
        })
    }

    /// Create a mock directly from raw places.
    pub fn from_places(places: Vec<RawPlace>) -> Self {
        Self { places }
    }

    /// Mirrors the real `NextbikeClient::get_all_stations` interface.
    pub async fn get_all_stations(&self) -> Result<Vec<Station>, NextbikeError> {
        Ok(convert_places(&self.places)?)
    }

    /// Mirrors the real `NextbikeClient::get_station_by_number`
    /// interface.
    pub async fn get_station_by_number(
        &self,
        number: u32,
    ) -> Result<Option<Station>, NextbikeError> {
        let stations = convert_places(&self.places)?;
        Ok(stations.into_iter().find(|s| s.number == Some(number)))
    }

    /// Mirrors the real `NextbikeClient::get_bike_by_number` interface.
    pub async fn get_bike_by_number(&self, number: u32) -> Result<Option<Bike>, NextbikeError> {
        let stations = convert_places(&self.places)?;
        Ok(stations
            .into_iter()
            .flat_map(|s| s.bikes)
            .find(|b| b.number == number))
    }

    /// Mirrors the real `NextbikeClient::get_bikes_at_station`
    /// interface.
    pub async fn get_bikes_at_station(&self, number: u32) -> Result<Vec<Bike>, NextbikeError> {
        Ok(self
            .get_station_by_number(number)
            .await?
            .map(|station| station.bikes)
            .unwrap_or_default())
    }
}
