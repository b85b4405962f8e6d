use std::path::Path;
use std::time::Duration;

use opencall_core::types::{OperationRef, RequestParameter};
use opencall_core::SpecDocument;
use opencall_exec::{
    execute, load_spec, parse_body_text, CallError, Credentials, ReqwestHttpClient,
};
use serde_json::Value as JsonValue;
use zeroize::Zeroizing;

use crate::cmd::exit_code_for;
use crate::exit_codes;
use crate::items::{parse_param, CallItem};
use crate::output::{print_error, print_result};
use crate::{CallArgs, OutputArgs, SpecArgs};

pub async fn call_cmd(spec: SpecArgs, call: CallArgs, output: OutputArgs) -> i32 {
    // Credentials are optional: a missing flag means an empty set, an
    // unreadable or undecodable file is fatal.
    let credentials = match load_credentials(call.credentials.as_deref()) {
        Ok(c) => c,
        Err(message) => {
            print_error(output.format, output.quiet, &message);
            return exit_codes::RUNTIME_ERROR;
        }
    };

    let mut default_params = Vec::with_capacity(call.params.len());
    for raw in &call.params {
        match parse_param(raw) {
            Ok(p) => default_params.push(p),
            Err(message) => {
                print_error(output.format, output.quiet, &message);
                return exit_codes::VALIDATION_FAILED;
            }
        }
    }

    let items = match load_items(call.items.as_deref()) {
        Ok(items) => items,
        Err(message) => {
            print_error(output.format, output.quiet, &message);
            return exit_codes::VALIDATION_FAILED;
        }
    };

    let client = ReqwestHttpClient::default();
    let timeout = Duration::from_millis(spec.timeout);

    // The specification is fetched once per invocation batch.
    let doc = match load_spec(&client, &spec.spec_url, timeout).await {
        Ok(doc) => doc,
        Err(e) => {
            print_error(
                output.format,
                output.quiet,
                &format!("failed to load specification: {e}"),
            );
            return exit_code_for(&e);
        }
    };

    // Items run strictly sequentially; each call completes before the next
    // starts. Results stay positionally paired with their item.
    let mut results = Vec::<JsonValue>::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match run_item(
            &client,
            &doc,
            &spec,
            &call,
            &default_params,
            &credentials,
            item,
            timeout,
        )
        .await
        {
            Ok(value) => results.push(value),
            Err(e) => {
                if call.continue_on_fail {
                    results.push(serde_json::json!({ "error": e.to_string() }));
                    continue;
                }
                print_error(
                    output.format,
                    output.quiet,
                    &format!("item {index}: {e}"),
                );
                return exit_code_for(&e);
            }
        }
    }

    print_result(output.format, output.quiet, &results);
    exit_codes::SUCCESS
}

#[allow(clippy::too_many_arguments)]
async fn run_item(
    client: &ReqwestHttpClient,
    doc: &SpecDocument,
    spec: &SpecArgs,
    call: &CallArgs,
    default_params: &[RequestParameter],
    credentials: &Credentials,
    item: CallItem,
    timeout: Duration,
) -> Result<JsonValue, CallError> {
    let selector = item
        .operation
        .as_deref()
        .or(call.operation.as_deref())
        .unwrap_or("");
    let operation = OperationRef::parse(selector)
        .map_err(|e| CallError::Validation(e.into()))?;

    let mut parameters = default_params.to_vec();
    parameters.extend(
        item.parameters
            .into_iter()
            .map(|p| p.into_request_parameter()),
    );

    let body = match (item.body, call.body.as_deref()) {
        (Some(v), _) => v,
        (None, Some(text)) => parse_body_text(text)?,
        (None, None) => JsonValue::Object(serde_json::Map::new()),
    };

    let credentials = (!credentials.is_empty()).then_some(credentials);
    execute(
        client,
        doc,
        &operation,
        &parameters,
        &body,
        credentials,
        spec.base_url.as_deref(),
        timeout,
    )
    .await
}

fn load_credentials(path: Option<&Path>) -> Result<Credentials, String> {
    let Some(path) = path else {
        return Ok(Credentials::default());
    };
    let raw = Zeroizing::new(
        std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read credentials file {}: {e}", path.display()))?,
    );
    Credentials::from_json_str(&raw)
        .map_err(|e| format!("invalid credentials file {}: {e}", path.display()))
}

fn load_items(path: Option<&Path>) -> Result<Vec<CallItem>, String> {
    let Some(path) = path else {
        // No items file: one call described entirely by the flags.
        return Ok(vec![CallItem::default()]);
    };
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read items file {}: {e}", path.display()))?;
    let items: Vec<CallItem> = serde_json::from_str(&raw)
        .map_err(|e| format!("invalid items file {}: {e}", path.display()))?;
    Ok(items)
}
