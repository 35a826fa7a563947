use serde::{Deserialize, Serialize};

/// The five cities offered as shortcuts, with the backend station id that
/// backs each of them.
pub const MAJOR_CITIES: [(&str, i64); 5] = [
    ("Stockholm", 97400),
    ("Göteborg", 72420),
    ("Malmö", 53430),
    ("Uppsala", 97510),
    ("Umeå", 140480),
];

/// A city (weather station) that can be charted.
///
/// Search results carry the full station record; major-city shortcuts only
/// know the id and name. Both are valid selections.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct City {
    /// SMHI station identifier
    pub id: i64,
    pub name: String,
    /// Latitude in WGS84 decimal degrees
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude in WGS84 decimal degrees
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Height above sea level in meters
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl City {
    /// A city known only by id and name, as used by the shortcut buttons.
    pub fn shortcut(name: &str, id: i64) -> Self {
        City {
            id,
            name: name.to_string(),
            latitude: None,
            longitude: None,
            height: None,
            active: true,
        }
    }

    /// All major-city shortcuts in display order.
    pub fn major_cities() -> Vec<City> {
        MAJOR_CITIES
            .iter()
            .map(|(name, id)| City::shortcut(name, *id))
            .collect()
    }

    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}
