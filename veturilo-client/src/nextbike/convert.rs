//! Conversion from Nextbike DTOs to domain types.
//!
//! This module turns raw place records into validated `Station` and
//! `Bike` values. Category strings are matched exhaustively: a code this
//! library does not recognize is a hard error, never a silent default,
//! so callers cannot act on misclassified data.

use tracing::debug;

use crate::domain::{AvailabilityStatus, Bike, BikeType, GeoCoords, Station, StationType};

use super::types::{RawBike, RawPlace};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The feed introduced a place category this library does not know.
    #[error("unknown place type: {0}")]
    UnknownPlaceType(String),

    /// The feed introduced a bike model code this library does not know.
    #[error("unknown bike type: {0}")]
    UnknownBikeType(String),
}

/// Convert a whole fetch's worth of places, preserving feed order.
pub fn convert_places(places: &[RawPlace]) -> Result<Vec<Station>, ConversionError> {
    places.iter().map(convert_place).collect()
}

/// Convert a single raw place to a [`Station`].
///
/// The availability counts are recomputed from the bike list, and every
/// bike inherits the place's coordinates and station number.
pub fn convert_place(place: &RawPlace) -> Result<Station, ConversionError> {
    let place_type = convert_place_type(&place.place_type)?;

    // A freestanding spot's raw number is not a station number.
    let number = match place_type {
        StationType::Station => Some(place.number),
        StationType::FreestandingBike => None,
    };

    let geo_coords = GeoCoords {
        lat: place.geo_coords.lat,
        lng: place.geo_coords.lng,
    };

    let bikes = place
        .bikes
        .iter()
        .map(|bike| convert_bike(bike, number, geo_coords))
        .collect::<Result<Vec<_>, _>>()?;

    let availability_status = AvailabilityStatus::count(&bikes);

    if let Some(raw) = &place.availability_status {
        if raw.bikes != availability_status.total() {
            debug!(
                uid = place.uid,
                reported = raw.bikes,
                counted = availability_status.total(),
                "feed aggregate disagrees with bike list"
            );
        }
    }

    Ok(Station {
        id: place.uid,
        name: place.name.clone(),
        number,
        place_type,
        geo_coords,
        availability_status,
        bikes,
    })
}

fn convert_bike(
    bike: &RawBike,
    station_number: Option<u32>,
    geo_coords: GeoCoords,
) -> Result<Bike, ConversionError> {
    Ok(Bike {
        number: bike.number,
        bike_type: convert_bike_type(&bike.bike_type)?,
        battery: bike.battery,
        station_number,
        geo_coords,
    })
}

fn convert_place_type(raw: &str) -> Result<StationType, ConversionError> {
    match raw {
        "STATION" => Ok(StationType::Station),
        "FREESTANDING_BIKE" | "FREESTANDING_ELECTRIC_BIKE" | "FREESTANDING_TANDEM_BIKE" => {
            Ok(StationType::FreestandingBike)
        }
        other => Err(ConversionError::UnknownPlaceType(other.to_string())),
    }
}

fn convert_bike_type(raw: &str) -> Result<BikeType, ConversionError> {
    match raw {
        "STANDARD_4G" => Ok(BikeType::Standard),
        "ELECTRIC_4G" => Ok(BikeType::Electric),
        "TANDEM_4G" => Ok(BikeType::Tandem),
        other => Err(ConversionError::UnknownBikeType(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nextbike::types::{RawAvailability, RawGeoCoords};

    fn make_bike(number: u32, bike_type: &str, battery: Option<u8>) -> RawBike {
        RawBike {
            number,
            bike_type: bike_type.to_string(),
            battery,
        }
    }

    fn make_place(uid: u32, number: u32, place_type: &str, bikes: Vec<RawBike>) -> RawPlace {
        RawPlace {
            uid,
            name: "Plac X".to_string(),
            number,
            place_type: place_type.to_string(),
            geo_coords: RawGeoCoords { lat: 52.2, lng: 21.0 },
            availability_status: None,
            bikes,
        }
    }

    #[test]
    fn convert_docked_station() {
        let place = make_place(
            1001,
            9648,
            "STATION",
            vec![make_bike(613712, "STANDARD_4G", None)],
        );

        let station = convert_place(&place).unwrap();

        assert_eq!(station.id, 1001);
        assert_eq!(station.name, "Plac X");
        assert_eq!(station.number, Some(9648));
        assert_eq!(station.place_type, StationType::Station);
        assert_eq!(station.geo_coords, GeoCoords { lat: 52.2, lng: 21.0 });
        assert_eq!(station.availability_status.available_standard_bikes, 1);
        assert_eq!(station.availability_status.available_electric_bikes, 0);
        assert_eq!(station.availability_status.available_tandem_bikes, 0);

        assert_eq!(station.bikes.len(), 1);
        let bike = &station.bikes[0];
        assert_eq!(bike.number, 613712);
        assert_eq!(bike.bike_type, BikeType::Standard);
        assert_eq!(bike.battery, None);
        assert_eq!(bike.station_number, Some(9648));
        assert_eq!(bike.geo_coords, station.geo_coords);
    }

    #[test]
    fn counts_cover_every_category() {
        let place = make_place(
            1,
            100,
            "STATION",
            vec![
                make_bike(1, "STANDARD_4G", None),
                make_bike(2, "ELECTRIC_4G", Some(64)),
                make_bike(3, "STANDARD_4G", None),
                make_bike(4, "TANDEM_4G", None),
                make_bike(5, "ELECTRIC_4G", Some(12)),
            ],
        );

        let station = convert_place(&place).unwrap();

        assert_eq!(station.availability_status.available_standard_bikes, 2);
        assert_eq!(station.availability_status.available_electric_bikes, 2);
        assert_eq!(station.availability_status.available_tandem_bikes, 1);
    }

    #[test]
    fn counts_ignore_feed_aggregate() {
        let mut place = make_place(1, 100, "STATION", vec![make_bike(1, "STANDARD_4G", None)]);
        // The feed claims five bikes; the list has one. The list wins.
        place.availability_status = Some(RawAvailability {
            bikes: 5,
            available_bikes: 5,
            free_racks: 10,
            bike_racks: 15,
        });

        let station = convert_place(&place).unwrap();

        assert_eq!(station.availability_status.total(), 1);
    }

    #[test]
    fn empty_bike_list_counts_zero() {
        let station = convert_place(&make_place(1, 100, "STATION", vec![])).unwrap();

        assert_eq!(station.availability_status.total(), 0);
        assert!(station.bikes.is_empty());
    }

    #[test]
    fn freestanding_places_have_no_station_number() {
        for place_type in [
            "FREESTANDING_BIKE",
            "FREESTANDING_ELECTRIC_BIKE",
            "FREESTANDING_TANDEM_BIKE",
        ] {
            let place = make_place(
                77,
                42,
                place_type,
                vec![make_bike(900001, "ELECTRIC_4G", Some(55))],
            );

            let station = convert_place(&place).unwrap();

            assert_eq!(station.number, None);
            assert_eq!(station.place_type, StationType::FreestandingBike);
            for bike in &station.bikes {
                assert_eq!(bike.station_number, None);
            }
        }
    }

    #[test]
    fn unknown_place_type_fails_with_offending_string() {
        let place = make_place(1, 100, "SCOOTER", vec![]);

        let err = convert_place(&place).unwrap_err();

        assert_eq!(err, ConversionError::UnknownPlaceType("SCOOTER".to_string()));
        assert_eq!(err.to_string(), "unknown place type: SCOOTER");
    }

    #[test]
    fn unknown_bike_type_fails_with_offending_string() {
        let place = make_place(1, 100, "STATION", vec![make_bike(1, "HOVERBOARD_5G", None)]);

        let err = convert_place(&place).unwrap_err();

        assert_eq!(
            err,
            ConversionError::UnknownBikeType("HOVERBOARD_5G".to_string())
        );
    }

    #[test]
    fn battery_passes_through() {
        let place = make_place(
            1,
            100,
            "STATION",
            vec![
                make_bike(1, "ELECTRIC_4G", Some(87)),
                make_bike(2, "STANDARD_4G", None),
            ],
        );

        let station = convert_place(&place).unwrap();

        assert_eq!(station.bikes[0].battery, Some(87));
        assert_eq!(station.bikes[1].battery, None);
    }

    #[test]
    fn conversion_is_idempotent() {
        let place = make_place(
            1001,
            9648,
            "STATION",
            vec![
                make_bike(613712, "STANDARD_4G", None),
                make_bike(613713, "ELECTRIC_4G", Some(40)),
            ],
        );

        assert_eq!(convert_place(&place).unwrap(), convert_place(&place).unwrap());
    }

    #[test]
    fn convert_places_preserves_order() {
        let places = vec![
            make_place(1, 10, "STATION", vec![]),
            make_place(2, 11, "FREESTANDING_BIKE", vec![]),
            make_place(3, 12, "STATION", vec![]),
        ];

        let stations = convert_places(&places).unwrap();

        assert_eq!(
            stations.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn convert_places_fails_on_first_bad_record() {
        let places = vec![
            make_place(1, 10, "STATION", vec![]),
            make_place(2, 11, "SCOOTER", vec![]),
        ];

        assert!(convert_places(&places).is_err());
    }
}
