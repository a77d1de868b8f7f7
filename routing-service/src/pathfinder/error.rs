//! Pathfinder client error types.

/// Errors from the pathfinder HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum PathfinderError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The configured endpoint does not exist
    #[error("pathfinder endpoint not found: {0}")]
    NotFound(String),

    /// Rate limited by the API
    #[error("rate limited by pathfinder")]
    RateLimited,

    /// Client could not be set up
    #[error("not configured: {0}")]
    NotConfigured(String),
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_ref()
        .map(|b| format!(" (body: {b})"))
        .unwrap_or_default()
}
