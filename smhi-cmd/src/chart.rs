//! `chart` subcommand: fetch, compose and export one chart.

use crate::{emit, OutputFormat};
use anyhow::Context;
use log::info;
use smhi_api::{ApiClient, City, ClientConfig, DataFetcher, Period, Selection, MAJOR_CITIES};
use smhi_data::{compose, ChartSpec};

/// Resolve a city name to a selectable city.
///
/// Major cities match case-insensitively and get their station id. Any other
/// name is passed through; routing only needs the name.
pub fn resolve_city(name: &str) -> City {
    let name = name.trim();
    MAJOR_CITIES
        .iter()
        .find(|(major, _)| major.to_lowercase() == name.to_lowercase())
        .map(|(major, id)| City::shortcut(major, *id))
        .unwrap_or_else(|| City::shortcut(name, 0))
}

pub async fn run_chart(
    config: ClientConfig,
    city: Option<&str>,
    period: Period,
    format: OutputFormat,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let selection = match city {
        Some(name) => Selection::city(resolve_city(name), period),
        None => Selection::all_cities(),
    };
    let fetcher = DataFetcher::new(ApiClient::new(config)?);

    info!(
        "Fetching {} ({})",
        selection.target_name(),
        selection.period.label()
    );
    let payload = fetcher.fetch(&selection).await?;
    let spec = compose(&payload, selection.period);

    let contents = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&spec)?,
        OutputFormat::Csv => chart_csv(&spec)?,
    };
    emit(&contents, output)
}

/// One row per month: `month` then one column per dataset.
///
/// Missing readings become empty cells.
pub fn chart_csv(spec: &ChartSpec) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["month".to_string()];
    header.extend(spec.datasets.iter().map(|d| d.label.clone()));
    wtr.write_record(&header)?;

    for (i, month) in spec.labels.iter().enumerate() {
        let mut row = vec![month.clone()];
        row.extend(spec.datasets.iter().map(|d| {
            d.points
                .get(i)
                .copied()
                .flatten()
                .map_or(String::new(), |v| format!("{:.1}", v))
        }));
        wtr.write_record(&row)?;
    }

    let bytes = wtr.into_inner().context("failed to flush CSV")?;
    Ok(String::from_utf8(bytes)?)
}
