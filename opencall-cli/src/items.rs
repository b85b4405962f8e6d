use opencall_core::types::{ParameterKind, RequestParameter};
use serde::Deserialize;
use serde_json::Value as JsonValue;

/// One unit of work in a batch run. Missing fields fall back to the
/// command-line defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallItem {
    #[serde(default)]
    pub operation: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ItemParameter>,
    #[serde(default)]
    pub body: Option<JsonValue>,
}

/// Parameter row as it appears in an items file; `value` may be any scalar.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemParameter {
    #[serde(rename = "type", alias = "kind")]
    pub kind: ParameterKind,
    pub name: String,
    #[serde(default)]
    pub value: JsonValue,
}

impl ItemParameter {
    pub fn into_request_parameter(self) -> RequestParameter {
        let value = value_to_string(&self.value);
        RequestParameter::new(self.kind, self.name, value)
    }
}

fn value_to_string(v: &JsonValue) -> String {
    match v {
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

/// Parse a `kind:name=value` command-line parameter.
pub fn parse_param(raw: &str) -> Result<RequestParameter, String> {
    let malformed = || format!("invalid parameter '{raw}': expected 'kind:name=value'");
    let (kind, rest) = raw.split_once(':').ok_or_else(malformed)?;
    let (name, value) = rest.split_once('=').ok_or_else(malformed)?;
    if name.is_empty() {
        return Err(malformed());
    }
    let kind = match kind {
        "query" => ParameterKind::Query,
        "path" => ParameterKind::Path,
        "header" => ParameterKind::Header,
        "cookie" => ParameterKind::Cookie,
        other => {
            return Err(format!(
                "invalid parameter kind '{other}': expected query|path|header|cookie"
            ))
        }
    };
    Ok(RequestParameter::new(kind, name, value))
}
