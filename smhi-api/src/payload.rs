//! Temperature payloads returned by the `/graph/*` endpoints.
//!
//! Two shapes exist: the all-cities view carries a map of city name to
//! series (plus an optional cross-city average), while the single-city
//! endpoints carry one series and, for the monthly/historical variants,
//! station and time-range metadata.
//!
//! Every series is aligned index-for-index with `months`. A missing reading
//! is `None` (JSON `null`), never dropped, so months and values stay aligned.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One monthly mean temperature in °C, `None` when the station has no data.
pub type Reading = Option<f64>;

/// Start and end of the period covered by a single-city payload.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

/// A named series within a multi-city payload.
#[derive(Debug, PartialEq, Clone)]
pub struct CitySeries {
    pub name: String,
    pub temperatures: Vec<Reading>,
}

/// `GET /graph/cities` response.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MultiCityPayload {
    pub months: Vec<String>,
    /// Series in the order the backend listed them.
    #[serde(with = "ordered_series")]
    pub cities: Vec<CitySeries>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average: Option<Vec<Reading>>,
}

/// `GET /graph/{city,monthly,historical}/{name}` response.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SingleCityPayload {
    pub months: Vec<String>,
    pub city: String,
    pub temperatures: Vec<Reading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemperaturePayload {
    MultiCity(MultiCityPayload),
    SingleCity(SingleCityPayload),
}

/// A payload whose series do not line up with its month labels.
#[derive(Error, Debug, PartialEq, Clone)]
#[error("series '{series}' has {found} readings for {expected} months")]
pub struct PayloadError {
    pub series: String,
    pub expected: usize,
    pub found: usize,
}

impl TemperaturePayload {
    pub fn months(&self) -> &[String] {
        match self {
            TemperaturePayload::MultiCity(p) => &p.months,
            TemperaturePayload::SingleCity(p) => &p.months,
        }
    }

    /// Check that every series has exactly one reading per month label.
    pub fn validate(&self) -> Result<(), PayloadError> {
        let expected = self.months().len();
        let check = |series: &str, readings: &[Reading]| {
            if readings.len() == expected {
                Ok(())
            } else {
                Err(PayloadError {
                    series: series.to_string(),
                    expected,
                    found: readings.len(),
                })
            }
        };
        match self {
            TemperaturePayload::MultiCity(p) => {
                for series in &p.cities {
                    check(&series.name, &series.temperatures)?;
                }
                if let Some(average) = &p.average {
                    check("Average", average)?;
                }
                Ok(())
            }
            TemperaturePayload::SingleCity(p) => check(&p.city, &p.temperatures),
        }
    }
}

/// (De)serializes `Vec<CitySeries>` as a JSON object, keeping key order.
mod ordered_series {
    use super::{CitySeries, Reading};
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(series: &[CitySeries], serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(series.len()))?;
        for entry in series {
            map.serialize_entry(&entry.name, &entry.temperatures)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<CitySeries>, D::Error> {
        struct SeriesVisitor;

        impl<'de> Visitor<'de> for SeriesVisitor {
            type Value = Vec<CitySeries>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of city name to temperature series")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut series = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, temperatures)) = access.next_entry::<String, Vec<Reading>>()? {
                    series.push(CitySeries { name, temperatures });
                }
                Ok(series)
            }
        }

        deserializer.deserialize_map(SeriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_city_keeps_backend_order() {
        let json = r#"{
            "months": ["2024-01", "2024-02"],
            "cities": {
                "Umeå": [-12.1, null],
                "Stockholm": [-2.5, -1.0],
                "Göteborg": [0.4, 1.2]
            },
            "average": [-4.73, 0.1]
        }"#;
        let payload: TemperaturePayload = serde_json::from_str(json).unwrap();
        let TemperaturePayload::MultiCity(multi) = &payload else {
            panic!("expected a multi-city payload");
        };
        let names: Vec<&str> = multi.cities.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Umeå", "Stockholm", "Göteborg"]);
        assert_eq!(multi.cities[0].temperatures, vec![Some(-12.1), None]);
        assert_eq!(multi.average, Some(vec![Some(-4.73), Some(0.1)]));
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_single_city_with_metadata() {
        let json = r#"{
            "months": ["2023-05", "2023-06", "2023-07"],
            "city": "Uppsala",
            "temperatures": [10.2, null, 18.9],
            "station_name": "Uppsala Aut",
            "station_id": 97510,
            "period": "monthly",
            "time_range": {"start": "2023-05", "end": "2024-04"}
        }"#;
        let payload: TemperaturePayload = serde_json::from_str(json).unwrap();
        let TemperaturePayload::SingleCity(single) = &payload else {
            panic!("expected a single-city payload");
        };
        assert_eq!(single.city, "Uppsala");
        assert_eq!(single.temperatures[1], None);
        assert_eq!(single.station_name.as_deref(), Some("Uppsala Aut"));
        assert_eq!(single.station_id, Some(97510));
        assert_eq!(single.time_range.as_ref().map(|t| t.end.as_str()), Some("2024-04"));
        assert_eq!(payload.months().len(), 3);
    }

    #[test]
    fn test_single_city_minimal() {
        let json = r#"{"months": ["Jan"], "city": "Malmö", "temperatures": [1.5]}"#;
        let payload: TemperaturePayload = serde_json::from_str(json).unwrap();
        assert!(matches!(payload, TemperaturePayload::SingleCity(_)));
    }

    #[test]
    fn test_validate_reports_misaligned_series() {
        let json = r#"{
            "months": ["2024-01", "2024-02", "2024-03"],
            "cities": {"Stockholm": [1.0, 2.0, 3.0], "Malmö": [1.0, 2.0]}
        }"#;
        let payload: TemperaturePayload = serde_json::from_str(json).unwrap();
        let err = payload.validate().unwrap_err();
        assert_eq!(err.series, "Malmö");
        assert_eq!(err.expected, 3);
        assert_eq!(err.found, 2);
    }

    #[test]
    fn test_validate_checks_average() {
        let json = r#"{
            "months": ["2024-01"],
            "cities": {"Stockholm": [1.0]},
            "average": []
        }"#;
        let payload: TemperaturePayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.validate().unwrap_err().series, "Average");
    }

    #[test]
    fn test_multi_city_serializes_as_object() {
        let payload = TemperaturePayload::MultiCity(MultiCityPayload {
            months: vec!["2024-01".into()],
            cities: vec![CitySeries {
                name: "Stockholm".into(),
                temperatures: vec![None],
            }],
            average: None,
        });
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["cities"]["Stockholm"], serde_json::json!([null]));
        assert!(value.get("average").is_none());
    }
}
