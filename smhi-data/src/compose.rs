//! Payload → `ChartSpec`.
//!
//! `compose` is pure: it never mutates the payload and never fails on a
//! payload whose series line up with its months. The same payload and period
//! always yield the same `ChartSpec`.

use crate::chart::{ChartDataset, ChartSpec, ChartTitle, Emphasis, TickPolicy};
use crate::palette::{color_for, AVERAGE_LABEL};
use smhi_api::{MultiCityPayload, Period, SingleCityPayload, TemperaturePayload};

/// Title used when no city is selected.
pub const ALL_CITIES_NAME: &str = "Major Swedish Cities";

pub const Y_AXIS_LABEL: &str = "Temperature (°C)";

/// Above this many x labels the axis gets thinned and rotated.
pub const TICK_THINNING_THRESHOLD: usize = 30;

pub const THINNED_TICKS: TickPolicy = TickPolicy {
    max_ticks: 20,
    rotation_degrees: 45,
};

/// Chart heading for a selected city (or the all-cities view).
///
/// The period label is only appended when a city is selected; the
/// all-cities view has no period toggle.
pub fn chart_title(city: Option<&str>, period: Period) -> String {
    match city {
        Some(name) => format!("Temperature Data for {} ({})", name, period.label()),
        None => format!("Temperature Data for {}", ALL_CITIES_NAME),
    }
}

pub fn axis_label(period: Period) -> &'static str {
    match period {
        Period::Recent => "Month",
        Period::Monthly => "Year-Month (Last 12 Months)",
        Period::Historical => "Year-Month",
    }
}

pub fn tick_policy(label_count: usize) -> Option<TickPolicy> {
    (label_count > TICK_THINNING_THRESHOLD).then_some(THINNED_TICKS)
}

/// Build the chart for `payload`, fetched for `period`.
pub fn compose(payload: &TemperaturePayload, period: Period) -> ChartSpec {
    let (title, datasets) = match payload {
        TemperaturePayload::MultiCity(multi) => (
            ChartTitle::Single(chart_title(None, period)),
            multi_city_datasets(multi),
        ),
        TemperaturePayload::SingleCity(single) => {
            (single_city_title(single, period), vec![single_city_dataset(single)])
        }
    };
    let labels = payload.months().to_vec();

    ChartSpec {
        title,
        x_axis_label: axis_label(period).to_string(),
        y_axis_label: Y_AXIS_LABEL.to_string(),
        tick_policy: tick_policy(labels.len()),
        labels,
        datasets,
    }
}

fn multi_city_datasets(payload: &MultiCityPayload) -> Vec<ChartDataset> {
    let mut datasets: Vec<ChartDataset> = payload
        .cities
        .iter()
        .map(|series| ChartDataset {
            label: series.name.clone(),
            points: series.temperatures.clone(),
            color: color_for(&series.name),
            emphasis: Emphasis::Normal,
        })
        .collect();

    // Last so it is drawn over the city lines
    if let Some(average) = &payload.average {
        datasets.push(ChartDataset {
            label: AVERAGE_LABEL.to_string(),
            points: average.clone(),
            color: color_for(AVERAGE_LABEL),
            emphasis: Emphasis::Average,
        });
    }
    datasets
}

fn single_city_dataset(payload: &SingleCityPayload) -> ChartDataset {
    let label = match payload.station_name.as_deref() {
        Some(station) if station != payload.city => format!("{} ({})", payload.city, station),
        _ => payload.city.clone(),
    };
    ChartDataset {
        label,
        points: payload.temperatures.clone(),
        color: color_for(&payload.city),
        emphasis: Emphasis::Normal,
    }
}

fn single_city_title(payload: &SingleCityPayload, period: Period) -> ChartTitle {
    let heading = chart_title(Some(&payload.city), period);
    match (&payload.time_range, period.has_time_range()) {
        (Some(range), true) => {
            ChartTitle::Lines(vec![heading, format!("{} – {}", range.start, range.end)])
        }
        _ => ChartTitle::Single(heading),
    }
}
