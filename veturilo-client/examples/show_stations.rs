//! Fetches the live Veturilo feed and walks the query surface: all
//! stations, one station by number, its bikes, and one bike by number.
//!
//! Run with `RUST_LOG=debug` to see the fetch diagnostics.

use veturilo_client::nextbike::{NextbikeClient, NextbikeConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = NextbikeClient::new(NextbikeConfig::new())?;

    let stations = client.get_all_stations().await?;
    println!("total places: {}", stations.len());
    if let Some(first) = stations.first() {
        println!("sample place: {} ({})", first.name, first.place_type);
    }

    let station_number = 9648;
    match client.get_station_by_number(station_number).await? {
        Some(station) => {
            println!("\nstation {station_number}: {}", station.name);
            println!(
                "  location: ({}, {})",
                station.geo_coords.lat, station.geo_coords.lng
            );
            let availability = station.availability_status;
            println!("  standard bikes: {}", availability.available_standard_bikes);
            println!("  electric bikes: {}", availability.available_electric_bikes);
            println!("  tandem bikes:   {}", availability.available_tandem_bikes);
        }
        None => println!("\nstation {station_number} not found"),
    }

    println!("\nbikes at station {station_number}:");
    let bikes = client.get_bikes_at_station(station_number).await?;
    if bikes.is_empty() {
        println!("  none (or the station does not exist)");
    }
    for bike in bikes {
        let battery = bike
            .battery
            .map_or_else(|| "n/a".to_string(), |b| format!("{b}%"));
        println!("  bike {} ({}), battery {}", bike.number, bike.bike_type, battery);
    }

    let bike_number = 613712;
    match client.get_bike_by_number(bike_number).await? {
        Some(bike) => match bike.station_number {
            Some(station) => println!("\nbike {bike_number} is at station {station}"),
            None => println!(
                "\nbike {bike_number} is freestanding at ({}, {})",
                bike.geo_coords.lat, bike.geo_coords.lng
            ),
        },
        None => println!("\nbike {bike_number} not found"),
    }

    Ok(())
}
