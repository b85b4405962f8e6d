use thiserror::Error;

use opencall_core::{ParseError, SelectorError};

use crate::http::HttpError;

/// Anything a spec load or request execution can fail with.
///
/// Transport-level failures pass through unreclassified; everything else maps
/// to exactly one taxonomy entry. Nothing is recovered or suppressed here;
/// the host decides what a failure means for the rest of its batch.
#[derive(Debug, Error)]
pub enum CallError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Transport(#[from] HttpError),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("specification URL is empty; provide a valid URL")]
    EmptyUrl,
    #[error("invalid URL format: {0}; provide a valid URL")]
    InvalidUrl(String),
    #[error(transparent)]
    Selector(#[from] SelectorError),
    #[error("invalid JSON in request body: {0}")]
    Body(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("No server URL found in the specification and no base URL override provided")]
    MissingServerUrl,
    #[error("the specification declares a relative server URL ({0}); provide a base URL override")]
    RelativeServerUrl(String),
}

/// The specification fetch itself came back non-2xx.
#[derive(Debug, Error)]
#[error("specification fetch failed: HTTP {status} {status_text} for {url}")]
pub struct NetworkError {
    pub status: u16,
    pub status_text: String,
    pub url: String,
}

/// The resolved API call came back non-2xx.
#[derive(Debug, Error)]
#[error("request failed with status code {status}: {body}")]
pub struct RequestError {
    pub status: u16,
    pub body: String,
}
