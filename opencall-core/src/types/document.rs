use indexmap::IndexMap;

use crate::types::{PathItem, SecurityScheme};

/// The subset of an OpenAPI/Swagger document this crate reads.
///
/// Everything else in the document is ignored on decode, and the document is
/// never mutated after loading.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpecDocument {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub paths: IndexMap<String, PathItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
}

impl SpecDocument {
    /// Declared security schemes, in document order.
    pub fn security_schemes(&self) -> Option<&IndexMap<String, SecurityScheme>> {
        self.components
            .as_ref()
            .map(|c| &c.security_schemes)
            .filter(|schemes| !schemes.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Server {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Components {
    #[serde(
        rename = "securitySchemes",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub security_schemes: IndexMap<String, SecurityScheme>,
}
