//! Pathfinder HTTP client.
//!
//! Queries the external graph traversal service for transit paths. One
//! `reqwest::Client` is built per `PathfinderClient` and reused for every
//! request; cloning the client shares its connection pool.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::{debug, trace};

use crate::domain::UnLocode;

use super::error::PathfinderError;
use super::provider::TransitPathProvider;
use super::types::TransitPath;

/// Default URL of the graph traversal resource.
pub const DEFAULT_BASE_URL: &str =
    "http://localhost:8080/cargo-tracker/rest/graph-traversal/shortest-path";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How much of an unparseable body to keep in the error.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Configuration for the pathfinder client.
#[derive(Debug, Clone)]
pub struct PathfinderConfig {
    /// Full URL of the shortest-path resource. Query parameters are appended.
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl PathfinderConfig {
    /// Create a new config pointing at the given resource URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for PathfinderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Graph traversal service client.
#[derive(Debug, Clone)]
pub struct PathfinderClient {
    http: reqwest::Client,
    base_url: String,
}

impl PathfinderClient {
    /// Create a new pathfinder client with the given configuration.
    pub fn new(config: PathfinderConfig) -> Result<Self, PathfinderError> {
        if config.base_url.is_empty() {
            return Err(PathfinderError::NotConfigured(
                "pathfinder base URL is empty".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// The resource URL this client queries.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch transit paths between two locations.
    ///
    /// Issues `GET {base_url}?origin=..&destination=..`. An empty body or a
    /// JSON `null` is treated as "no paths".
    pub async fn fetch_transit_paths(
        &self,
        origin: &UnLocode,
        destination: &UnLocode,
    ) -> Result<Vec<TransitPath>, PathfinderError> {
        debug!(%origin, %destination, "querying pathfinder");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("origin", origin.as_str()), ("destination", destination.as_str())])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(PathfinderError::NotFound(self.base_url.clone()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(PathfinderError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PathfinderError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        trace!(bytes = body.len(), "pathfinder response received");

        parse_transit_paths(&body)
    }
}

impl TransitPathProvider for PathfinderClient {
    async fn find_shortest_path(
        &self,
        origin: &UnLocode,
        destination: &UnLocode,
    ) -> Result<Vec<TransitPath>, PathfinderError> {
        self.fetch_transit_paths(origin, destination).await
    }
}

/// Parse a pathfinder response body.
fn parse_transit_paths(body: &str) -> Result<Vec<TransitPath>, PathfinderError> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }

    serde_json::from_str(trimmed).map_err(|e| PathfinderError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(MAX_ERROR_BODY_CHARS).collect()),
    })
}
