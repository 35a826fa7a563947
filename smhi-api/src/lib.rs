//! Core types and REST client for the SMHI temperature backend.
//!
//! The backend proxies SMHI open data and exposes monthly mean temperatures
//! under an `/api` prefix. This crate models its responses and wraps the
//! calls the chart apps need:
//! - `client`: `ApiClient` and the `DataFetcher` for chart payloads
//! - `search`: validated city search
//! - `payload`: the single-city and multi-city response shapes

pub mod city;
pub mod client;
pub mod error;
pub mod payload;
pub mod period;
pub mod route;
pub mod search;

pub use city::{City, MAJOR_CITIES};
pub use client::{ApiClient, ClientConfig, DataFetcher, DEFAULT_API_URL, REQUEST_TIMEOUT};
pub use error::{ClientError, FETCH_FAILED_MESSAGE, SEARCH_FAILED_MESSAGE};
pub use payload::{
    CitySeries, MultiCityPayload, PayloadError, Reading, SingleCityPayload, TemperaturePayload,
    TimeRange,
};
pub use period::{Period, Selection};
pub use route::ApiRoute;
pub use search::{validate_query, SearchController, SearchResults, MIN_QUERY_CHARS};
