//! `search` subcommand: list stations matching a name.

use log::info;
use smhi_api::{ApiClient, City, ClientConfig, SearchController, SearchResults};

pub async fn run_search(config: ClientConfig, query: &str) -> anyhow::Result<()> {
    let search = SearchController::new(ApiClient::new(config)?);
    let cities = search.search(query).await?;
    info!("{} stations match '{}'", cities.len(), query.trim());

    let results = SearchResults::from_outcome(Ok(cities));
    if let Some(message) = results.message() {
        println!("{}", message);
    }
    for city in results.matches() {
        println!("{}", station_row(city));
    }
    Ok(())
}

fn optional(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.*}", precision, v))
}

/// `id, name, lat, lon, height`, with `(inactive)` appended for closed stations.
pub fn station_row(city: &City) -> String {
    let row = format!(
        "{}, {}, {}, {}, {}",
        city.id,
        city.name,
        optional(city.latitude, 4),
        optional(city.longitude, 4),
        optional(city.height, 0)
    );
    if city.active {
        row
    } else {
        format!("{} (inactive)", row)
    }
}
