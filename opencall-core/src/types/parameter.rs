/// Where a request parameter is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Query,
    Path,
    Header,
    Cookie,
}

/// A caller-supplied (name, value, kind) tuple. Ordering among parameters of
/// the same kind is insertion order and is preserved in the assembled
/// request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RequestParameter {
    pub name: String,
    pub value: String,

    #[serde(rename = "type", alias = "kind")]
    pub kind: ParameterKind,
}

impl RequestParameter {
    pub fn new(kind: ParameterKind, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind,
        }
    }

    pub fn query(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(ParameterKind::Query, name, value)
    }

    pub fn path(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(ParameterKind::Path, name, value)
    }

    pub fn header(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(ParameterKind::Header, name, value)
    }

    pub fn cookie(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(ParameterKind::Cookie, name, value)
    }
}
