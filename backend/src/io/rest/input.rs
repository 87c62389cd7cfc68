//! Request preparation shared by the mutating handlers:
//! raw body/query → sanitized records → validated → typed request.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header,
    Form, Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::convert::Infallible;

use crate::domain::sanitizer::{sanitize, FieldSanitizer, Record};
use crate::domain::validation::{validate, FieldRule};
use crate::io::rest::errors::ApiError;

/// Request body as a record, read from JSON or from a url-encoded form.
///
/// A missing, unparsable or non-object body is an empty record, so it fails
/// validation instead of being rejected by the extractor.
#[derive(Debug, Default)]
pub struct RecordBody(pub Record);

#[async_trait]
impl<S> FromRequest<S> for RecordBody
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        let record = if is_form {
            match Form::<HashMap<String, String>>::from_request(req, state).await {
                Ok(Form(fields)) => query_record(fields),
                Err(_) => Record::new(),
            }
        } else {
            match Json::<Value>::from_request(req, state).await {
                Ok(Json(value)) => body_record(value),
                Err(_) => Record::new(),
            }
        };

        Ok(RecordBody(record))
    }
}

/// A JSON value as a record; anything but an object is empty
pub fn body_record(body: Value) -> Record {
    match body {
        Value::Object(map) => map,
        _ => Record::new(),
    }
}

/// Query parameters or form fields as a record of string values
pub fn query_record(params: HashMap<String, String>) -> Record {
    params
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect()
}

/// Sanitized value of a required query parameter.
///
/// Fails with `message` when the parameter is absent or blank.
pub fn required_param(
    params: HashMap<String, String>,
    name: &'static str,
    message: &'static str,
) -> Result<String, ApiError> {
    let query = sanitize(query_record(params), &[FieldSanitizer::text(name)]);

    match query.get(name).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(ApiError::MissingParameter(message)),
    }
}

/// Sanitize and validate a body, then read it as `T`
pub fn prepare_body<T: DeserializeOwned>(
    body: RecordBody,
    sanitizers: &[FieldSanitizer],
    rules: &[FieldRule],
) -> Result<T, ApiError> {
    let record = sanitize(body.0, sanitizers);
    validate(&record, &Record::new(), rules).map_err(ApiError::Validation)?;

    serde_json::from_value(Value::Object(record)).map_err(|e| ApiError::MalformedBody(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::Rule;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Greeting {
        name: String,
    }

    const SANITIZERS: &[FieldSanitizer] = &[FieldSanitizer::text("name")];

    fn json_body(value: Value) -> RecordBody {
        RecordBody(body_record(value))
    }

    fn request(content_type: &str, body: &'static str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, content_type)
            .body(axum::body::Body::from(body))
            .unwrap()
    }
    const RULES: &[FieldRule] = &[FieldRule::body("name", Rule::RequiredString)];

    #[test]
    fn test_prepare_body_sanitizes_before_parsing() {
        let greeting: Greeting =
            prepare_body(json_body(json!({ "name": "  Tom & Jerry " })), SANITIZERS, RULES).unwrap();
        assert_eq!(greeting.name, "Tom &amp; Jerry");
    }

    #[test]
    fn test_missing_body_fails_validation() {
        let result: Result<Greeting, ApiError> = prepare_body(RecordBody::default(), SANITIZERS, RULES);
        assert!(matches!(result, Err(ApiError::Validation(errors)) if errors.len() == 1));
    }

    #[test]
    fn test_non_object_body_is_treated_as_empty() {
        let result: Result<Greeting, ApiError> =
            prepare_body(json_body(json!(["name"])), SANITIZERS, RULES);
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_required_param() {
        let mut params = HashMap::new();
        params.insert("customerCode".to_string(), " C00001 ".to_string());
        let code = required_param(params, "customerCode", "Customer Code is required").unwrap();
        assert_eq!(code, "C00001");

        let mut blank = HashMap::new();
        blank.insert("customerCode".to_string(), "   ".to_string());
        let result = required_param(blank, "customerCode", "Customer Code is required");
        assert!(matches!(result, Err(ApiError::MissingParameter("Customer Code is required"))));

        let result = required_param(HashMap::new(), "customerCode", "Customer Code is required");
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_record_body_reads_json_and_forms() {
        let RecordBody(json) = RecordBody::from_request(request("application/json", r#"{"name":"Ann"}"#), &())
            .await
            .unwrap();
        assert_eq!(json.get("name"), Some(&json!("Ann")));

        let RecordBody(form) = RecordBody::from_request(
            request("application/x-www-form-urlencoded", "name=Ann+Lee&grade=2"),
            &(),
        )
        .await
        .unwrap();
        assert_eq!(form.get("name"), Some(&json!("Ann Lee")));
        assert_eq!(form.get("grade"), Some(&json!("2")));
    }

    #[tokio::test]
    async fn test_record_body_is_empty_when_unreadable() {
        let RecordBody(record) = RecordBody::from_request(request("application/json", "{not json"), &())
            .await
            .unwrap();
        assert!(record.is_empty());

        let RecordBody(record) = RecordBody::from_request(request("text/plain", "name=Ann"), &())
            .await
            .unwrap();
        assert!(record.is_empty());
    }
}
