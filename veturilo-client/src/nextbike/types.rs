//! Nextbike locations feed DTOs.
//!
//! These types map directly to the JSON served by the Veturilo proxy in
//! front of the Nextbike maps API. They use `Option` and defaults
//! liberally because the feed omits empty collections, and numeric
//! identifiers arrive either as JSON numbers or as numeric strings.

use serde::{Deserialize, Deserializer};

/// One top-level response block. The feed's root is an array of these.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseBlock {
    /// Cities covered by this block.
    #[serde(default)]
    pub cities: Vec<RawCity>,
}

/// A city entry within a response block.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCity {
    /// City display name.
    pub name: Option<String>,

    /// Places (stations and freestanding bike spots) in this city.
    #[serde(default)]
    pub places: Vec<RawPlace>,
}

/// A place record: a docked station or a freestanding bike's spot.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlace {
    /// Place identifier. Numeric, whichever way it is serialized.
    #[serde(deserialize_with = "number_or_string")]
    pub uid: u32,

    /// Display name.
    pub name: String,

    /// Place number. Only a docked station's number has station
    /// semantics; freestanding spots carry one too.
    #[serde(deserialize_with = "number_or_string")]
    pub number: u32,

    /// Raw category string, e.g. "STATION" or "FREESTANDING_BIKE".
    pub place_type: String,

    /// Location of this place.
    pub geo_coords: RawGeoCoords,

    /// The feed's own aggregate counts. Diagnostics only; the domain
    /// model recounts from `bikes`.
    pub availability_status: Option<RawAvailability>,

    /// Bikes currently at this place. Omitted when empty.
    #[serde(default)]
    pub bikes: Vec<RawBike>,
}

/// Latitude/longitude as serialized by the feed.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawGeoCoords {
    pub lat: f64,
    pub lng: f64,
}

/// The feed's aggregate availability summary for a place.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAvailability {
    /// Total bikes at the place.
    #[serde(default)]
    pub bikes: u32,

    /// Bikes available for rent.
    #[serde(default)]
    pub available_bikes: u32,

    /// Free docking racks.
    #[serde(default)]
    pub free_racks: u32,

    /// Total docking racks.
    #[serde(default)]
    pub bike_racks: u32,
}

/// A bike record embedded in a place.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBike {
    /// Bike number, unique across the network.
    #[serde(deserialize_with = "number_or_string")]
    pub number: u32,

    /// Raw model code, e.g. "STANDARD_4G".
    pub bike_type: String,

    /// Battery charge percentage. Null or omitted for non-electric
    /// bikes.
    #[serde(default)]
    pub battery: Option<u8>,
}

/// Pull the place list out of a parsed feed response.
///
/// The feed nests places under `response[0].cities[0].places`; any
/// absent segment yields an empty list.
pub fn places_from_response(blocks: Vec<ResponseBlock>) -> Vec<RawPlace> {
    blocks
        .into_iter()
        .next()
        .and_then(|block| block.cities.into_iter().next())
        .map(|city| city.places)
        .unwrap_or_default()
}

/// Accept a numeric field serialized as either a JSON number or a
/// string of digits.
fn number_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        String(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::String(s) => s.parse().map_err(serde::de::Error::custom),
    }
}
