use indexmap::IndexMap;

use crate::types::SpecDocument;

/// Where an apiKey scheme places its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyLocation {
    Header,
    Query,
    Cookie,
}

/// A declared security scheme, narrowed to the fields request assembly reads.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum SecurityScheme {
    #[serde(rename = "apiKey")]
    ApiKey {
        #[serde(rename = "in")]
        location: ApiKeyLocation,
        name: String,
    },
    #[serde(rename = "http")]
    Http {
        #[serde(default)]
        scheme: String,
    },
    /// oauth2, openIdConnect, and anything newer; never injected.
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyAuth {
    pub name: String,
    pub location: ApiKeyLocation,
}

/// The first declared scheme of each kind request assembly can inject.
///
/// Built in one pass over the scheme map. The three slots are independent,
/// so a document declaring several kinds can end up injecting several at
/// once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclaredAuth {
    pub api_key: Option<ApiKeyAuth>,
    pub basic: bool,
    pub bearer: bool,
}

impl DeclaredAuth {
    pub fn classify(schemes: &IndexMap<String, SecurityScheme>) -> Self {
        let mut out = Self::default();
        for scheme in schemes.values() {
            match scheme {
                SecurityScheme::ApiKey { location, name } => {
                    if out.api_key.is_none() {
                        out.api_key = Some(ApiKeyAuth {
                            name: name.clone(),
                            location: *location,
                        });
                    }
                }
                SecurityScheme::Http { scheme } => match scheme.as_str() {
                    "basic" => out.basic = true,
                    "bearer" => out.bearer = true,
                    _ => {}
                },
                SecurityScheme::Unsupported => {}
            }
        }
        out
    }

    pub fn from_document(doc: &SpecDocument) -> Self {
        doc.security_schemes()
            .map(Self::classify)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.api_key.is_none() && !self.basic && !self.bearer
    }
}
