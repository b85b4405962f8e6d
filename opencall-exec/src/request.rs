use base64::Engine as _;
use indexmap::IndexMap;
use opencall_core::types::{
    ApiKeyLocation, DeclaredAuth, ParameterKind, RequestParameter, SpecDocument,
};
use serde_json::Value as JsonValue;

use crate::credentials::Credentials;
use crate::error::{CallError, ConfigurationError, ValidationError};
use crate::http::HttpRequestParts;

/// Methods that never carry a body, whatever the caller supplied.
const BODYLESS_METHODS: [&str; 4] = ["GET", "HEAD", "DELETE", "OPTIONS"];

/// Resolve one call into concrete request parts.
///
/// Pure assembly: no network, no mutation of the document. The resolved URL
/// keeps unmatched `{placeholder}` segments verbatim; the remote side gets to
/// reject them.
pub fn build_request(
    doc: &SpecDocument,
    method: &str,
    path: &str,
    parameters: &[RequestParameter],
    body: &JsonValue,
    credentials: Option<&Credentials>,
    base_url_override: Option<&str>,
) -> Result<HttpRequestParts, CallError> {
    let server_url = resolve_server_url(doc, base_url_override)?;
    let mut url = join_url_parts(&server_url, path);

    // Literal substitution, first occurrence per parameter; parameters that
    // match no placeholder are ignored.
    for p in parameters.iter().filter(|p| p.kind == ParameterKind::Path) {
        url = url.replacen(&format!("{{{}}}", p.name), &p.value, 1);
    }

    let mut query = Vec::<(String, String)>::new();
    for p in parameters.iter().filter(|p| p.kind == ParameterKind::Query) {
        query.push((p.name.clone(), p.value.clone()));
    }

    let mut headers = IndexMap::<String, String>::new();
    for p in parameters
        .iter()
        .filter(|p| p.kind == ParameterKind::Header)
    {
        headers.insert(p.name.clone(), p.value.clone());
    }

    for p in parameters
        .iter()
        .filter(|p| p.kind == ParameterKind::Cookie)
    {
        headers
            .entry("Cookie".to_string())
            .and_modify(|c| {
                c.push_str("; ");
                c.push_str(&format!("{}={}", p.name, p.value));
            })
            .or_insert_with(|| format!("{}={}", p.name, p.value));
    }

    if let Some(credentials) = credentials.filter(|c| !c.is_empty()) {
        apply_auth(doc, credentials, &mut headers, &mut query);
    }

    if !query.is_empty() {
        url.push('?');
        url.push_str(&encode_query(&query));
    }

    let method = method.to_ascii_uppercase();
    let body = if method_allows_body(&method) && !is_empty_body(body) {
        Some(serde_json::to_vec(body).map_err(ValidationError::Body)?)
    } else {
        None
    };

    tracing::debug!(method = %method, url = %url, "resolved request");
    Ok(HttpRequestParts {
        method,
        url,
        headers,
        body,
    })
}

fn resolve_server_url(
    doc: &SpecDocument,
    base_url_override: Option<&str>,
) -> Result<String, ConfigurationError> {
    if let Some(base) = base_url_override.filter(|b| !b.is_empty()) {
        return Ok(base.to_string());
    }
    match doc.servers.first() {
        Some(server) if !server.url.is_empty() => {
            if !is_absolute_http(&server.url) {
                return Err(ConfigurationError::RelativeServerUrl(server.url.clone()));
            }
            Ok(server.url.clone())
        }
        _ => Err(ConfigurationError::MissingServerUrl),
    }
}

fn is_absolute_http(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Join base and path with exactly one slash at the boundary.
fn join_url_parts(base: &str, path: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

fn encode_query(query: &[(String, String)]) -> String {
    query
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Inject authentication derived from the document's declared schemes.
///
/// The three checks are independent, so a document declaring several scheme
/// kinds can inject several at once. A Bearer write lands after a Basic one
/// and overwrites the Authorization header; last write wins.
fn apply_auth(
    doc: &SpecDocument,
    credentials: &Credentials,
    headers: &mut IndexMap<String, String>,
    query: &mut Vec<(String, String)>,
) {
    let auth = DeclaredAuth::from_document(doc);

    if let Some(api_key) = &auth.api_key {
        let value = credentials
            .get(&api_key.name)
            .or_else(|| credentials.api_key());
        if let Some(value) = value {
            match api_key.location {
                ApiKeyLocation::Header => {
                    headers.insert(api_key.name.clone(), value.to_string());
                }
                ApiKeyLocation::Query => {
                    query.push((api_key.name.clone(), value.to_string()));
                }
                // Keys declared for cookies are never injected.
                ApiKeyLocation::Cookie => {}
            }
        }
    }

    if auth.basic {
        if let (Some(username), Some(password)) = (credentials.username(), credentials.password())
        {
            let encoded = base64::engine::general_purpose::STANDARD
                .encode(format!("{username}:{password}"));
            headers.insert("Authorization".to_string(), format!("Basic {encoded}"));
        }
    }

    if auth.bearer {
        if let Some(token) = credentials.token() {
            headers.insert("Authorization".to_string(), format!("Bearer {token}"));
        }
    }
}

fn method_allows_body(method: &str) -> bool {
    !BODYLESS_METHODS.contains(&method)
}

/// A body is attached only for non-empty structures; `null`, `{}`, `[]`, and
/// scalars serialize to nothing rather than a literal.
fn is_empty_body(body: &JsonValue) -> bool {
    match body {
        JsonValue::Object(map) => map.is_empty(),
        JsonValue::Array(items) => items.is_empty(),
        JsonValue::String(s) => s.is_empty(),
        _ => true,
    }
}
