//! REST endpoints exposed by the temperature backend.
//!
//! All paths are relative to the configured API base (which already carries
//! the `/api` prefix). Path parameters are percent-encoded per segment, so
//! names such as "Göteborg" or queries containing `/` stay a single segment.

use crate::error::ClientError;
use reqwest::Url;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ApiRoute {
    /// `GET /graph/cities`: all major cities, recent data
    AllCities,
    /// `GET /graph/city/{name}`: one city, recent data
    City(String),
    /// `GET /graph/monthly/{name}`: one city, last twelve months
    Monthly(String),
    /// `GET /graph/historical/{name}`: one city, full archive
    Historical(String),
    /// `GET /cities/search/{query}`: station name search
    Search(String),
}

impl ApiRoute {
    /// Unencoded path segments below the API base.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            ApiRoute::AllCities => vec!["graph", "cities"],
            ApiRoute::City(name) => vec!["graph", "city", name.as_str()],
            ApiRoute::Monthly(name) => vec!["graph", "monthly", name.as_str()],
            ApiRoute::Historical(name) => vec!["graph", "historical", name.as_str()],
            ApiRoute::Search(query) => vec!["cities", "search", query.as_str()],
        }
    }

    /// Resolve against `base`, appending the encoded segments.
    pub fn url(&self, base: &Url) -> Result<Url, ClientError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Config(format!("API base URL cannot hold a path: {}", base)))?
            .pop_if_empty()
            .extend(self.segments());
        Ok(url)
    }
}
