use std::sync::Arc;

use indexmap::IndexMap;
use zeroize::Zeroizing;

/// A credential value that is not `Debug`/`Display` printable and is
/// zeroized on drop.
#[derive(Clone)]
pub struct CredentialValue(Arc<Zeroizing<String>>);

impl CredentialValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Arc::new(Zeroizing::new(value.into())))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for CredentialValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CredentialValue(<redacted>)")
    }
}

impl<'de> serde::Deserialize<'de> for CredentialValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Self::new(String::deserialize(deserializer)?))
    }
}

/// Caller-supplied credential map.
///
/// Keys are free-form so an apiKey scheme can look itself up by its declared
/// name; the recognized fixed keys are `apiKey`, `username`, `password`, and
/// `token`. Entries with empty values count toward `is_empty` but never
/// resolve, mirroring how an all-blank credential form behaves.
#[derive(Clone, Default, serde::Deserialize)]
#[serde(transparent)]
pub struct Credentials(IndexMap<String, CredentialValue>);

impl Credentials {
    /// Parse a flat JSON object of string values.
    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), CredentialValue::new(value));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The non-empty value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(CredentialValue::expose)
            .filter(|v| !v.is_empty())
    }

    pub fn api_key(&self) -> Option<&str> {
        self.get("apiKey")
    }

    pub fn username(&self) -> Option<&str> {
        self.get("username")
    }

    pub fn password(&self) -> Option<&str> {
        self.get("password")
    }

    pub fn token(&self) -> Option<&str> {
        self.get("token")
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credentials(<{} redacted entries>)", self.0.len())
    }
}

impl<K, V> FromIterator<(K, V)> for Credentials
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut out = Self::default();
        for (name, value) in iter {
            out.insert(name, value);
        }
        out
    }
}
