use crate::city::City;
use crate::route::ApiRoute;
use serde::{Deserialize, Serialize};

/// Time-aggregation mode of a requested series.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Short recent window
    #[default]
    Recent,
    /// Last twelve months
    Monthly,
    /// Full archive
    Historical,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Recent, Period::Monthly, Period::Historical];

    /// Human-readable label used in titles and toggle buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Period::Recent => "Recent",
            Period::Monthly => "Last 12 Months",
            Period::Historical => "Historical",
        }
    }

    /// Whether the backend attaches a `time_range` to this period's payloads.
    pub fn has_time_range(&self) -> bool {
        matches!(self, Period::Monthly | Period::Historical)
    }
}

/// What the user asked for: a city (or all major cities) and a period.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Selection {
    /// `None` means the all-major-cities view.
    pub city: Option<City>,
    pub period: Period,
}

impl Selection {
    pub fn all_cities() -> Self {
        Selection::default()
    }

    pub fn city(city: City, period: Period) -> Self {
        Selection {
            city: Some(city),
            period,
        }
    }

    /// The endpoint serving this selection.
    ///
    /// The all-cities view has a single endpoint regardless of period.
    pub fn route(&self) -> ApiRoute {
        match &self.city {
            None => ApiRoute::AllCities,
            Some(city) => match self.period {
                Period::Recent => ApiRoute::City(city.name.clone()),
                Period::Monthly => ApiRoute::Monthly(city.name.clone()),
                Period::Historical => ApiRoute::Historical(city.name.clone()),
            },
        }
    }

    /// Display name of the target, used in fallback error messages.
    pub fn target_name(&self) -> &str {
        self.city
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("the major cities")
    }
}
