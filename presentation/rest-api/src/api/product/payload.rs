use poem::Body;
use serde_json::{Map, Value};

const JSON_MIME: &str = "application/json";

/// Reads a create/update body without letting the framework answer first.
///
/// Only `application/json` bodies are parsed. A missing or different content
/// type, an empty body, or malformed JSON all yield `{}`, which the validator
/// then rejects as invalid product data.
pub async fn read_write_body(content_type: Option<&str>, body: Body) -> Value {
    if !is_json(content_type) {
        return empty_object();
    }

    match body.into_vec().await {
        Ok(bytes) => parse(&bytes),
        Err(err) => {
            tracing::warn!(error = %err, "Failed to read request body");
            empty_object()
        }
    }
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(JSON_MIME))
}

fn parse(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return empty_object();
    }
    serde_json::from_slice(bytes).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "Request body is not valid JSON");
        empty_object()
    })
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_recognise_json_content_type_with_parameters() {
        assert!(is_json(Some("application/json")));
        assert!(is_json(Some("Application/JSON; charset=utf-8")));
        assert!(!is_json(Some("text/plain")));
        assert!(!is_json(Some("application/x-www-form-urlencoded")));
        assert!(!is_json(None));
    }

    #[tokio::test]
    async fn should_parse_json_body() {
        let value = read_write_body(
            Some("application/json"),
            Body::from_string(r#"{"name":"Laptop"}"#.to_string()),
        )
        .await;

        assert_eq!(value, json!({ "name": "Laptop" }));
    }

    #[tokio::test]
    async fn should_ignore_body_without_json_content_type() {
        let missing = read_write_body(None, Body::from_string(r#"{"name":"x"}"#.to_string())).await;
        let text = read_write_body(
            Some("text/plain"),
            Body::from_string(r#"{"name":"x"}"#.to_string()),
        )
        .await;

        assert_eq!(missing, json!({}));
        assert_eq!(text, json!({}));
    }

    #[tokio::test]
    async fn should_treat_empty_or_malformed_json_as_empty_object() {
        let empty = read_write_body(Some("application/json"), Body::empty()).await;
        let malformed = read_write_body(
            Some("application/json"),
            Body::from_string("{\"name\":".to_string()),
        )
        .await;

        assert_eq!(empty, json!({}));
        assert_eq!(malformed, json!({}));
    }

    #[tokio::test]
    async fn should_pass_non_object_json_through_for_validation() {
        let value = read_write_body(Some("application/json"), Body::from_string("[1]".to_string())).await;

        assert_eq!(value, json!([1]));
    }
}
