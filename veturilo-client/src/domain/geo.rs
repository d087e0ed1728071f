//! Geographic coordinates.

use serde::Serialize;

/// A WGS84 latitude/longitude pair.
///
/// Bikes have no independent location in the feed; every bike carries the
/// coordinates of the place it currently sits at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoCoords {
    pub lat: f64,
    pub lng: f64,
}
