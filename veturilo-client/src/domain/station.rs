//! Station and availability types.

use std::fmt;

use serde::Serialize;

use super::{Bike, BikeType, GeoCoords};

/// Kind of place a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StationType {
    /// A docked station with its own station number.
    Station,
    /// A drop point for bikes left outside any station. Carries no
    /// station number.
    FreestandingBike,
}

impl fmt::Display for StationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationType::Station => f.write_str("station"),
            StationType::FreestandingBike => f.write_str("freestanding bike"),
        }
    }
}

/// Per-category counts of bikes available at a place.
///
/// Invariant: each count equals the number of bikes of that category in
/// the `Station`'s bike list. The feed's own aggregate counts are not
/// trusted; use [`AvailabilityStatus::count`] to derive these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AvailabilityStatus {
    pub available_standard_bikes: u32,
    pub available_electric_bikes: u32,
    pub available_tandem_bikes: u32,
}

impl AvailabilityStatus {
    /// Count `bikes` by category.
    pub fn count(bikes: &[Bike]) -> Self {
        let mut status = Self::default();
        for bike in bikes {
            match bike.bike_type {
                BikeType::Standard => status.available_standard_bikes += 1,
                BikeType::Electric => status.available_electric_bikes += 1,
                BikeType::Tandem => status.available_tandem_bikes += 1,
            }
        }
        status
    }

    /// The count for a single category.
    pub fn of_type(&self, bike_type: BikeType) -> u32 {
        match bike_type {
            BikeType::Standard => self.available_standard_bikes,
            BikeType::Electric => self.available_electric_bikes,
            BikeType::Tandem => self.available_tandem_bikes,
        }
    }

    /// Total bikes across all categories.
    pub fn total(&self) -> u32 {
        self.available_standard_bikes + self.available_electric_bikes + self.available_tandem_bikes
    }
}

/// A normalized place: a docked station or a freestanding bike's spot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    /// Place identifier from the feed.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Station number. `Some` exactly when `place_type` is
    /// [`StationType::Station`].
    pub number: Option<u32>,

    /// Kind of place.
    pub place_type: StationType,

    /// Location of this place.
    pub geo_coords: GeoCoords,

    /// Bike counts per category, derived from `bikes`.
    pub availability_status: AvailabilityStatus,

    /// Bikes currently at this place, in feed order.
    pub bikes: Vec<Bike>,
}
