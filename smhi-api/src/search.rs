//! City search against the backend's station list.

use crate::city::City;
use crate::client::{ApiClient, Failure};
use crate::error::{ClientError, SEARCH_FAILED_MESSAGE};
use crate::route::ApiRoute;
use log::{debug, info};

/// Shortest query sent to the backend, in characters.
///
/// Counted after trimming surrounding whitespace, so `"  "` and `" a"` are
/// too short.
pub const MIN_QUERY_CHARS: usize = 2;

pub const NO_MATCHES_MESSAGE: &str = "No matching cities found";

/// Trim `query` and reject it when it is too short to search for.
pub fn validate_query(query: &str) -> Result<&str, ClientError> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_QUERY_CHARS {
        return Err(ClientError::validation(format!(
            "Please enter at least {} characters",
            MIN_QUERY_CHARS
        )));
    }
    Ok(trimmed)
}

/// Issues free-text station searches.
///
/// Every accepted call sends exactly one request. Concurrent searches are
/// neither coalesced nor cancelled.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchController {
    api: ApiClient,
}

impl SearchController {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<City>, ClientError> {
        let query = validate_query(query)?;
        let route = ApiRoute::Search(query.to_string());

        let cities: Vec<City> = match self.api.get_json(&route).await {
            Ok(cities) => cities,
            Err(Failure::NotFound(_)) => {
                debug!("Search '{}' returned 404, treating as no matches", query);
                Vec::new()
            }
            Err(failure) => {
                return Err(ClientError::Fetch {
                    message: SEARCH_FAILED_MESSAGE,
                    status: failure.status(),
                })
            }
        };

        info!("Search '{}' matched {} stations", query, cities.len());
        Ok(cities)
    }
}

/// What the search result list currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchResults {
    #[default]
    Idle,
    NoMatches,
    Matches(Vec<City>),
    Failed(String),
}

impl SearchResults {
    pub fn from_outcome(outcome: Result<Vec<City>, ClientError>) -> Self {
        match outcome {
            Ok(cities) if cities.is_empty() => SearchResults::NoMatches,
            Ok(cities) => SearchResults::Matches(cities),
            Err(e) => SearchResults::Failed(e.user_message()),
        }
    }

    pub fn matches(&self) -> &[City] {
        match self {
            SearchResults::Matches(cities) => cities,
            _ => &[],
        }
    }

    /// Status line to show instead of (or above) the list.
    pub fn message(&self) -> Option<&str> {
        match self {
            SearchResults::NoMatches => Some(NO_MATCHES_MESSAGE),
            SearchResults::Failed(message) => Some(message.as_str()),
            SearchResults::Idle | SearchResults::Matches(_) => None,
        }
    }

    /// Pick the candidate at `index`, clearing the list.
    ///
    /// Leaves the results untouched when `index` does not name a candidate.
    pub fn take(&mut self, index: usize) -> Option<City> {
        match self {
            SearchResults::Matches(cities) if index < cities.len() => {
                let city = cities.swap_remove(index);
                *self = SearchResults::Idle;
                Some(city)
            }
            _ => None,
        }
    }
}
