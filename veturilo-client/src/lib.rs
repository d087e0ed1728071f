//! Warsaw Veturilo public bike system client.
//!
//! A library that answers: "which bikes are available where, right now?"
//! Data comes from the Veturilo (Nextbike) locations feed and is
//! normalized into typed stations and bikes before callers see it.

pub mod domain;
pub mod nextbike;
