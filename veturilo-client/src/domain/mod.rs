//! Domain types for the Veturilo bike network.
//!
//! This module contains the normalized model derived from the raw
//! Nextbike locations feed. Values are immutable snapshots: every query
//! constructs them fresh, and the per-category availability counts are
//! always recomputed from the bike list they describe, never copied from
//! the feed's own aggregates.

mod bike;
mod geo;
mod station;

pub use bike::{Bike, BikeType};
pub use geo::GeoCoords;
pub use station::{AvailabilityStatus, Station, StationType};
