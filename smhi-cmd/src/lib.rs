//! Command implementations for the SMHI temperature CLI.
//!
//! Runs the same fetch → compose pipeline as the web app, headless, and
//! writes the result as JSON or CSV. Useful for checking what the backend
//! returns for a city without opening a browser.

use clap::{Subcommand, ValueEnum};
use smhi_api::{ClientConfig, Period};

pub mod chart;
pub mod search;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch a city's (or all major cities') series and print the chart data
    Chart {
        /// City name; omit for the all-major-cities view
        #[arg(short, long)]
        city: Option<String>,

        /// Time period to fetch
        #[arg(short, long, value_enum, default_value_t = PeriodArg::Recent)]
        period: PeriodArg,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Search stations by name
    Search {
        /// At least two characters of the station name
        query: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PeriodArg {
    Recent,
    Monthly,
    Historical,
}

impl From<PeriodArg> for Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Recent => Period::Recent,
            PeriodArg::Monthly => Period::Monthly,
            PeriodArg::Historical => Period::Historical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

pub async fn run(command: Command, config: ClientConfig) -> anyhow::Result<()> {
    match command {
        Command::Chart {
            city,
            period,
            format,
            output,
        } => chart::run_chart(config, city.as_deref(), period.into(), format, output.as_deref()).await,
        Command::Search { query } => search::run_search(config, &query).await,
    }
}

/// Write `contents` to `output`, or stdout when no path is given.
pub(crate) fn emit(contents: &str, output: Option<&str>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, contents)?;
            log::info!("Wrote {} bytes to {}", contents.len(), path);
        }
        None => println!("{}", contents),
    }
    Ok(())
}
