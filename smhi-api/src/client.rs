//! HTTP access to the temperature backend.
//!
//! `ApiClient` owns the shared `reqwest::Client` and the configuration.
//! `DataFetcher` issues the chart payload requests and tracks whether any
//! of them is still in flight. Failures are logged here with full detail and
//! converted to `ClientError` values that only carry user-facing text.

use crate::error::{ClientError, FETCH_FAILED_MESSAGE};
use crate::payload::TemperaturePayload;
use crate::period::Selection;
use crate::route::ApiRoute;
use log::{debug, info, warn};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// API base used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Upper bound on a single request; there is no retry.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL including the `/api` prefix
    pub base_url: Url,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::Config(format!("invalid API URL '{}': {}", base_url, e)))?;
        Ok(Self {
            base_url,
            timeout: REQUEST_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Why a request did not produce a decoded body. Detail has already been
/// logged by the time one of these is returned.
#[derive(Debug, PartialEq)]
pub(crate) enum Failure {
    /// HTTP 404, with the backend's `detail` string when it sent one
    NotFound(Option<String>),
    Other { status: Option<u16> },
}

impl Failure {
    pub(crate) fn status(&self) -> Option<u16> {
        match self {
            Failure::NotFound(_) => Some(404),
            Failure::Other { status } => *status,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

fn not_found_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .filter(|d| !d.trim().is_empty())
}

/// Shared HTTP client for all backend calls.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET `route` and decode its JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, route: &ApiRoute) -> Result<T, Failure> {
        let url = route.url(&self.config.base_url).map_err(|e| {
            warn!("Cannot build URL for {:?}: {}", route, e);
            Failure::Other { status: None }
        })?;
        debug!("GET {}", url);

        let response = match self
            .http
            .get(url.clone())
            .timeout(self.config.timeout)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!("Request to {} failed: {}", url, e);
                return Err(Failure::Other { status: None });
            }
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            let body = response.text().await.unwrap_or_default();
            warn!("{} returned 404: {}", url, body);
            return Err(Failure::NotFound(not_found_detail(&body)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{} returned {}: {}", url, status, body);
            return Err(Failure::Other {
                status: Some(status.as_u16()),
            });
        }

        response.json::<T>().await.map_err(|e| {
            warn!("Failed to decode response from {}: {}", url, e);
            Failure::Other {
                status: Some(status.as_u16()),
            }
        })
    }
}

/// Counts a request as in flight until dropped, including when the future
/// driving it is cancelled.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        InFlight(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Clients compare equal when they talk to the same backend.
impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

/// Fetches chart payloads for a selection.
///
/// Clones share the in-flight counter, so `is_loading` reflects every fetch
/// started from any clone. Being busy never prevents another fetch.
#[derive(Debug, Clone)]
pub struct DataFetcher {
    api: ApiClient,
    in_flight: Arc<AtomicUsize>,
}

/// Equal only to its own clones, which share the in-flight counter.
impl PartialEq for DataFetcher {
    fn eq(&self, other: &Self) -> bool {
        self.api == other.api && Arc::ptr_eq(&self.in_flight, &other.in_flight)
    }
}

impl DataFetcher {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// True while at least one fetch has not settled.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Request the payload serving `selection`.
    pub async fn fetch(&self, selection: &Selection) -> Result<TemperaturePayload, ClientError> {
        let _in_flight = InFlight::enter(&self.in_flight);
        let route = selection.route();

        let payload: TemperaturePayload = self.api.get_json(&route).await.map_err(|failure| match failure {
            Failure::NotFound(detail) => ClientError::NotFound(detail.unwrap_or_else(|| {
                format!("No temperature data available for {}", selection.target_name())
            })),
            Failure::Other { status } => ClientError::Fetch {
                message: FETCH_FAILED_MESSAGE,
                status,
            },
        })?;

        if let Err(e) = payload.validate() {
            warn!("Discarding malformed payload for {:?}: {}", route, e);
            return Err(ClientError::Fetch {
                message: FETCH_FAILED_MESSAGE,
                status: None,
            });
        }

        info!(
            "Fetched {} months for {} ({})",
            payload.months().len(),
            selection.target_name(),
            selection.period.label()
        );
        Ok(payload)
    }
}
