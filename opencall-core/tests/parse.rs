use opencall_core::{detect_format, parse_document_str, DocumentFormat};

#[test]
fn content_type_yaml_routes_to_yaml() {
    let format = detect_format(Some("application/yaml"), "https://example.com/spec");
    assert_eq!(format, DocumentFormat::Yaml);
}

#[test]
fn content_type_yml_substring_routes_to_yaml() {
    let format = detect_format(Some("text/x-yml; charset=utf-8"), "https://example.com/spec");
    assert_eq!(format, DocumentFormat::Yaml);
}

#[test]
fn extension_fallback_when_content_type_is_not_yaml() {
    let format = detect_format(Some("text/plain"), "https://example.com/openapi.yaml");
    assert_eq!(format, DocumentFormat::Yaml);
}

#[test]
fn extension_check_is_case_insensitive() {
    let format = detect_format(None, "https://example.com/OPENAPI.YML");
    assert_eq!(format, DocumentFormat::Yaml);
}

#[test]
fn content_type_wins_over_extension() {
    let format = detect_format(Some("application/yaml"), "https://example.com/spec.json");
    assert_eq!(format, DocumentFormat::Yaml);
}

#[test]
fn defaults_to_json_without_any_hint() {
    let format = detect_format(Some("application/json"), "https://example.com/spec");
    assert_eq!(format, DocumentFormat::Json);
    assert_eq!(
        detect_format(None, "https://example.com/spec"),
        DocumentFormat::Json
    );
}

#[test]
fn parses_json_document() {
    let input = r#"{
        "openapi": "3.0.0",
        "servers": [{"url": "https://api.example.com"}],
        "paths": {
            "/users": {
                "get": {"summary": "List users", "operationId": "listUsers"}
            }
        }
    }"#;

    let doc = parse_document_str(input, DocumentFormat::Json).unwrap();
    assert_eq!(doc.servers[0].url, "https://api.example.com");
    let item = doc.paths.get("/users").unwrap();
    assert_eq!(item.get.as_ref().unwrap().summary.as_deref(), Some("List users"));
    assert_eq!(
        item.get.as_ref().unwrap().operation_id.as_deref(),
        Some("listUsers")
    );
}

#[test]
fn parses_yaml_document() {
    let input = r#"
openapi: 3.0.0
servers:
  - url: https://api.example.com
paths:
  /pets:
    get:
      summary: List pets
    post:
      operationId: createPet
"#;

    let doc = parse_document_str(input, DocumentFormat::Yaml).unwrap();
    assert_eq!(doc.servers[0].url, "https://api.example.com");
    let item = doc.paths.get("/pets").unwrap();
    assert!(item.get.is_some());
    assert!(item.post.is_some());
    assert!(item.delete.is_none());
}

#[test]
fn unknown_document_content_is_ignored() {
    let input = r#"{
        "openapi": "3.0.0",
        "info": {"title": "Test API", "version": "1.0.0"},
        "paths": {
            "/users": {
                "parameters": [{"name": "tenant", "in": "query"}],
                "get": {"summary": "List users", "responses": {"200": {"description": "ok"}}}
            }
        }
    }"#;

    let doc = parse_document_str(input, DocumentFormat::Json).unwrap();
    assert!(doc.servers.is_empty());
    assert!(doc.paths.get("/users").unwrap().get.is_some());
}

#[test]
fn document_without_paths_or_servers_parses() {
    let doc = parse_document_str(r#"{"openapi": "3.0.0"}"#, DocumentFormat::Json).unwrap();
    assert!(doc.servers.is_empty());
    assert!(doc.paths.is_empty());
    assert!(doc.components.is_none());
}

#[test]
fn json_parse_error_carries_parser_message() {
    let err = parse_document_str("not json", DocumentFormat::Json).unwrap_err();
    assert!(err.to_string().starts_with("failed to parse as JSON"));
}

#[test]
fn yaml_parse_error_carries_parser_message() {
    let err = parse_document_str("{unbalanced", DocumentFormat::Yaml).unwrap_err();
    assert!(err.to_string().starts_with("failed to parse as YAML"));
}

#[test]
fn paths_preserve_document_order() {
    let input = r#"{
        "paths": {
            "/zebras": {"get": {}},
            "/apples": {"get": {}},
            "/middle": {"get": {}}
        }
    }"#;

    let doc = parse_document_str(input, DocumentFormat::Json).unwrap();
    let order: Vec<&str> = doc.paths.keys().map(String::as_str).collect();
    assert_eq!(order, ["/zebras", "/apples", "/middle"]);
}
