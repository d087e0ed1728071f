//! Bike types.

use std::fmt;

use serde::Serialize;

use super::GeoCoords;

/// Category of a bike, translated from the feed's model codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BikeType {
    Standard,
    Electric,
    Tandem,
}

impl fmt::Display for BikeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BikeType::Standard => f.write_str("standard"),
            BikeType::Electric => f.write_str("electric"),
            BikeType::Tandem => f.write_str("tandem"),
        }
    }
}

/// A single bike in the network.
///
/// Bike numbers are unique across the whole network at any point in
/// time, so a bike can be looked up without knowing where it is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bike {
    /// Network-wide bike number.
    pub number: u32,

    /// Bike category.
    pub bike_type: BikeType,

    /// Battery charge percentage. `None` for non-electric bikes or when
    /// the feed does not report it.
    pub battery: Option<u8>,

    /// Number of the station this bike is docked at. `None` for bikes
    /// left at freestanding drop points.
    pub station_number: Option<u32>,

    /// Location of the place this bike currently sits at.
    pub geo_coords: GeoCoords,
}
