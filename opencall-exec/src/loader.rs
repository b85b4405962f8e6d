use std::time::Duration;

use indexmap::IndexMap;
use opencall_core::{detect_format, parse_document_str, SpecDocument};
use url::Url;

use crate::error::{CallError, NetworkError, ValidationError};
use crate::http::{HttpClient, HttpRequestParts};

const SPEC_ACCEPT: &str = "application/json, application/yaml, text/yaml";

/// Fetch and decode a specification document.
///
/// One outbound GET per call; no caching, no retry. A failed fetch surfaces
/// immediately, and transport errors pass through as-is.
pub async fn load_spec(
    client: &dyn HttpClient,
    url: &str,
    timeout: Duration,
) -> Result<SpecDocument, CallError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ValidationError::EmptyUrl.into());
    }
    let parsed: Url = url
        .parse()
        .map_err(|_| ValidationError::InvalidUrl(url.to_string()))?;

    let mut headers = IndexMap::new();
    headers.insert("Accept".to_string(), SPEC_ACCEPT.to_string());
    let resp = client
        .send(
            HttpRequestParts {
                method: "GET".to_string(),
                url: parsed.to_string(),
                headers,
                body: None,
            },
            timeout,
        )
        .await?;

    if !resp.is_success() {
        return Err(NetworkError {
            status: resp.status,
            status_text: resp.status_text.clone(),
            url: url.to_string(),
        }
        .into());
    }

    let format = detect_format(resp.headers.get("content-type").map(String::as_str), url);
    tracing::debug!(?format, url, "decoding specification document");
    let text = String::from_utf8_lossy(&resp.body);
    Ok(parse_document_str(&text, format)?)
}
