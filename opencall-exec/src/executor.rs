use std::time::Duration;

use opencall_core::types::{OperationRef, RequestParameter};
use opencall_core::SpecDocument;
use serde_json::Value as JsonValue;

use crate::credentials::Credentials;
use crate::error::{CallError, RequestError, ValidationError};
use crate::http::HttpClient;
use crate::request::build_request;

/// Resolve one request from the document and caller inputs, perform it, and
/// decode the JSON response.
///
/// One call in, one result or one error out; batching and continue-on-fail
/// policy belong to the host.
#[allow(clippy::too_many_arguments)]
pub async fn execute(
    client: &dyn HttpClient,
    doc: &SpecDocument,
    operation: &OperationRef,
    parameters: &[RequestParameter],
    body: &JsonValue,
    credentials: Option<&Credentials>,
    base_url_override: Option<&str>,
    timeout: Duration,
) -> Result<JsonValue, CallError> {
    let parts = build_request(
        doc,
        &operation.method,
        &operation.path,
        parameters,
        body,
        credentials,
        base_url_override,
    )?;

    tracing::debug!(method = %parts.method, url = %parts.url, "sending request");
    let resp = client.send(parts, timeout).await?;
    tracing::debug!(status = resp.status, "response received");

    if !resp.is_success() {
        return Err(RequestError {
            status: resp.status,
            body: resp.body_text(),
        }
        .into());
    }

    let value = serde_json::from_slice(&resp.body)
        .map_err(|e| CallError::Parse(e.into()))?;
    Ok(value)
}

/// Parse a literal JSON body field.
///
/// Empty and whitespace-only text mean "no body"; so does `{}`, though that
/// is decided at attach time. Anything else must be valid JSON.
pub fn parse_body_text(text: &str) -> Result<JsonValue, CallError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(JsonValue::Object(serde_json::Map::new()));
    }
    serde_json::from_str(trimmed).map_err(|e| ValidationError::Body(e).into())
}
