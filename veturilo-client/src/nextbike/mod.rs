//! Nextbike locations client.
//!
//! This module provides an HTTP client for the Veturilo (Warsaw
//! Nextbike) locations feed, which reports every place in the network
//! together with the bikes currently parked there.
//!
//! Key characteristics of the feed:
//! - One fixed endpoint, fetched whole on every query. There is no
//!   pagination and no per-station endpoint, so point lookups scan the
//!   full snapshot.
//! - Numeric identifiers are serialized inconsistently (JSON number or
//!   numeric string); both forms are accepted.
//! - The aggregate availability counts in the payload are unreliable and
//!   are recomputed from the bike lists.

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{NextbikeClient, NextbikeConfig};
pub use convert::{ConversionError, convert_place, convert_places};
pub use error::NextbikeError;
pub use mock::MockNextbikeClient;
pub use types::{
    RawAvailability, RawBike, RawCity, RawGeoCoords, RawPlace, ResponseBlock, places_from_response,
};
