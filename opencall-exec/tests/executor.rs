use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use opencall_core::types::{OperationRef, RequestParameter};
use opencall_core::SpecDocument;
use opencall_exec::{
    execute, parse_body_text, CallError, HttpClient, HttpError, HttpRequestParts,
    HttpResponseParts, RequestError, ValidationError,
};
use serde_json::{json, Value as JsonValue};

// Mock HTTP client that records every request it is handed.
struct MockHttpClient {
    response: HttpResponseParts,
    fail_with: Option<HttpError>,
    requests: Mutex<Vec<HttpRequestParts>>,
}

impl MockHttpClient {
    fn ok_json(body: JsonValue) -> Self {
        Self::with_status(200, "OK", serde_json::to_vec(&body).unwrap())
    }

    fn with_status(status: u16, status_text: &str, body: Vec<u8>) -> Self {
        Self {
            response: HttpResponseParts {
                status,
                status_text: status_text.to_string(),
                headers: BTreeMap::new(),
                body,
            },
            fail_with: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn failing(err: HttpError) -> Self {
        let mut mock = Self::with_status(200, "OK", Vec::new());
        mock.fail_with = Some(err);
        mock
    }

    fn sent(&self) -> Vec<HttpRequestParts> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(
        &self,
        req: HttpRequestParts,
        _timeout: Duration,
    ) -> Result<HttpResponseParts, HttpError> {
        self.requests.lock().unwrap().push(req);
        if let Some(ref err) = self.fail_with {
            return Err(err.clone());
        }
        Ok(self.response.clone())
    }
}

fn doc(value: JsonValue) -> SpecDocument {
    serde_json::from_value(value).unwrap()
}

const TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::test]
async fn end_to_end_get_with_path_parameter() {
    let client = MockHttpClient::ok_json(json!({"id": 123, "name": "Test"}));
    let result = execute(
        &client,
        &doc(json!({"openapi": "3.0.0"})),
        &OperationRef::new("GET", "/users/{userId}"),
        &[RequestParameter::path("userId", "123")],
        &JsonValue::Null,
        None,
        Some("https://api.example.com"),
        TIMEOUT,
    )
    .await
    .unwrap();

    assert_eq!(result, json!({"id": 123, "name": "Test"}));

    let sent = client.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, "GET");
    assert_eq!(sent[0].url, "https://api.example.com/users/123");
    assert!(sent[0].body.is_none());
}

#[tokio::test]
async fn post_sends_exact_serialized_body() {
    let client = MockHttpClient::ok_json(json!({"id": 1}));
    let body = json!({"name": "Test User", "email": "test@example.com"});
    execute(
        &client,
        &doc(json!({"openapi": "3.0.0"})),
        &OperationRef::new("post", "/users"),
        &[],
        &body,
        None,
        Some("https://api.example.com"),
        TIMEOUT,
    )
    .await
    .unwrap();

    let sent = client.sent();
    assert_eq!(sent[0].method, "POST");
    assert_eq!(
        sent[0].body.as_deref(),
        Some(serde_json::to_vec(&body).unwrap().as_slice())
    );
}

#[tokio::test]
async fn non_success_status_is_a_request_error() {
    let client = MockHttpClient::with_status(
        500,
        "Internal Server Error",
        b"upstream exploded".to_vec(),
    );
    let err = execute(
        &client,
        &doc(json!({"openapi": "3.0.0"})),
        &OperationRef::new("GET", "/users"),
        &[],
        &JsonValue::Null,
        None,
        Some("https://api.example.com"),
        TIMEOUT,
    )
    .await
    .unwrap_err();

    match err {
        CallError::Request(RequestError { status, ref body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("expected request error, got {other:?}"),
    }
    let rendered = err.to_string();
    assert!(rendered.contains("500"));
    assert!(rendered.contains("upstream exploded"));
}

#[tokio::test]
async fn undecodable_success_body_is_a_parse_error() {
    let client = MockHttpClient::with_status(200, "OK", b"<html>not json</html>".to_vec());
    let err = execute(
        &client,
        &doc(json!({"openapi": "3.0.0"})),
        &OperationRef::new("GET", "/users"),
        &[],
        &JsonValue::Null,
        None,
        Some("https://api.example.com"),
        TIMEOUT,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CallError::Parse(_)));
}

#[tokio::test]
async fn transport_failures_pass_through() {
    let client = MockHttpClient::failing(HttpError::Network("connection refused".to_string()));
    let err = execute(
        &client,
        &doc(json!({"openapi": "3.0.0"})),
        &OperationRef::new("GET", "/users"),
        &[],
        &JsonValue::Null,
        None,
        Some("https://api.example.com"),
        TIMEOUT,
    )
    .await
    .unwrap_err();

    match err {
        CallError::Transport(HttpError::Network(msg)) => {
            assert!(msg.contains("connection refused"));
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn configuration_error_short_circuits_before_sending() {
    let client = MockHttpClient::ok_json(json!({}));
    let err = execute(
        &client,
        &doc(json!({"openapi": "3.0.0"})),
        &OperationRef::new("GET", "/users"),
        &[],
        &JsonValue::Null,
        None,
        None,
        TIMEOUT,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CallError::Configuration(_)));
    assert!(client.sent().is_empty());
}

#[test]
fn body_text_empty_means_no_body() {
    assert_eq!(parse_body_text("").unwrap(), json!({}));
    assert_eq!(parse_body_text("   \n").unwrap(), json!({}));
    assert_eq!(parse_body_text("{}").unwrap(), json!({}));
}

#[test]
fn body_text_parses_json() {
    assert_eq!(
        parse_body_text(r#"{"name": "Test"}"#).unwrap(),
        json!({"name": "Test"})
    );
}

#[test]
fn body_text_rejects_malformed_json() {
    let err = parse_body_text("{not json").unwrap_err();
    assert!(matches!(
        err,
        CallError::Validation(ValidationError::Body(_))
    ));
    assert!(err.to_string().contains("invalid JSON in request body"));
}
