use crate::error::ParseError;
use crate::types::SpecDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

/// Decide how a fetched specification body should be decoded.
///
/// The content-type header is checked first for a "yaml"/"yml" substring.
/// Some servers mislabel YAML responses, so the URL extension is the
/// fallback; everything else decodes as JSON.
pub fn detect_format(content_type: Option<&str>, url: &str) -> DocumentFormat {
    if let Some(ct) = content_type {
        if ct.contains("yaml") || ct.contains("yml") {
            return DocumentFormat::Yaml;
        }
    }
    let lower = url.to_ascii_lowercase();
    if lower.ends_with(".yaml") || lower.ends_with(".yml") {
        return DocumentFormat::Yaml;
    }
    DocumentFormat::Json
}

pub fn parse_document_str(input: &str, format: DocumentFormat) -> Result<SpecDocument, ParseError> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str::<SpecDocument>(input)?),
        DocumentFormat::Yaml => Ok(serde_yaml::from_str::<SpecDocument>(input)?),
    }
}
