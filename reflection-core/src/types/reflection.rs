//! Reflection payloads and responses

use crate::error::{IssueKind, Result, ValidationError, ValidationIssue};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Confirmation message returned for every accepted reflection
pub const RECEIVED_MESSAGE: &str = "Reflection received";

/// A reflection as listed to readers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reflection {
    pub id: u64,
    pub content: String,
}

/// A reflection submitted by a client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewReflection {
    /// Free-text note
    pub content: String,
}

/// Response to a submitted reflection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReflectionReceipt {
    pub message: String,
    pub content: String,
}

impl NewReflection {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Decode and type-check a raw request body.
    ///
    /// `is_json` says whether the request declared a JSON body (or declared
    /// no content type at all). An empty body is a missing body. A non-JSON
    /// body is checked as an opaque string, which never has the right shape.
    pub fn from_body(body: &[u8], is_json: bool) -> Result<Self> {
        if body.is_empty() {
            return Err(ValidationError::single(ValidationIssue::new(
                IssueKind::Missing,
                ["body"],
                "Field required",
            )));
        }

        if !is_json {
            let raw = Value::String(String::from_utf8_lossy(body).into_owned());
            return Self::from_value(&raw);
        }

        let value: Value = serde_json::from_slice(body).map_err(|err| {
            ValidationError::single(
                ValidationIssue::new(IssueKind::JsonInvalid, ["body"], "JSON decode error")
                    .with_input(json!({}))
                    .with_ctx(json!({ "error": err.to_string() })),
            )
        })?;
        Self::from_value(&value)
    }

    /// Type-check a decoded JSON body.
    ///
    /// The body must be an object whose `content` field is a string. Values
    /// are never coerced, so `{"content": 5}` is rejected. Any other fields
    /// are ignored.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Some(object) = value.as_object() else {
            return Err(ValidationError::single(
                ValidationIssue::new(
                    IssueKind::ModelAttributesType,
                    ["body"],
                    "Input should be a valid dictionary or object to extract fields from",
                )
                .with_input(value.clone()),
            ));
        };

        match object.get("content") {
            Some(Value::String(content)) => Ok(Self::new(content.as_str())),
            Some(other) => Err(ValidationError::single(
                ValidationIssue::new(
                    IssueKind::StringType,
                    ["body", "content"],
                    "Input should be a valid string",
                )
                .with_input(other.clone()),
            )),
            None => Err(ValidationError::single(
                ValidationIssue::new(IssueKind::Missing, ["body", "content"], "Field required")
                    .with_input(value.clone()),
            )),
        }
    }

    /// Build the confirmation for this reflection. Nothing is recorded.
    pub fn acknowledge(self) -> ReflectionReceipt {
        ReflectionReceipt {
            message: RECEIVED_MESSAGE.to_string(),
            content: self.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_value_accepts_string_content() {
        let reflection = NewReflection::from_value(&json!({"content": "hello"})).unwrap();
        assert_eq!(reflection.content, "hello");
    }

    #[test]
    fn test_from_value_accepts_empty_string() {
        let reflection = NewReflection::from_value(&json!({"content": ""})).unwrap();
        assert_eq!(reflection.content, "");
    }

    #[test]
    fn test_from_value_ignores_extra_fields() {
        let reflection =
            NewReflection::from_value(&json!({"content": "hi", "mood": "calm", "id": 7})).unwrap();
        assert_eq!(reflection, NewReflection::new("hi"));
    }

    #[test]
    fn test_from_value_missing_content() {
        let err = NewReflection::from_value(&json!({})).unwrap_err();
        assert_eq!(err.issues.len(), 1);
        assert_eq!(err.issues[0].kind, IssueKind::Missing);
        assert_eq!(err.issues[0].loc, vec!["body", "content"]);
        assert_eq!(err.issues[0].msg, "Field required");
    }

    #[test]
    fn test_missing_content_reports_whole_body_as_input() {
        let body = json!({"mood": "calm"});
        let err = NewReflection::from_value(&body).unwrap_err();
        assert_eq!(err.issues[0].input, body);
    }

    #[test]
    fn test_wrong_type_reports_offending_value_as_input() {
        let err = NewReflection::from_value(&json!({"content": 5})).unwrap_err();
        assert_eq!(err.issues[0].input, json!(5));
    }

    #[test]
    fn test_from_body_parses_json() {
        let reflection = NewReflection::from_body(br#"{"content":"hello"}"#, true).unwrap();
        assert_eq!(reflection, NewReflection::new("hello"));
    }

    #[test]
    fn test_from_body_empty_is_missing() {
        for is_json in [true, false] {
            let err = NewReflection::from_body(b"", is_json).unwrap_err();
            assert_eq!(err.issues[0].kind, IssueKind::Missing);
            assert_eq!(err.issues[0].loc, vec!["body"]);
            assert!(err.issues[0].input.is_null());
        }
    }

    #[test]
    fn test_from_body_invalid_json() {
        let err = NewReflection::from_body(br#"{"content": "#, true).unwrap_err();
        let issue = &err.issues[0];
        assert_eq!(issue.kind, IssueKind::JsonInvalid);
        assert_eq!(issue.msg, "JSON decode error");
        assert_eq!(issue.input, json!({}));
        assert!(issue.ctx.as_ref().unwrap()["error"].is_string());
    }

    #[test]
    fn test_from_body_non_json_is_opaque_string() {
        let err = NewReflection::from_body(br#"{"content":"hello"}"#, false).unwrap_err();
        assert_eq!(err.issues[0].kind, IssueKind::ModelAttributesType);
        assert_eq!(err.issues[0].input, json!(r#"{"content":"hello"}"#));
    }

    #[test]
    fn test_from_value_rejects_null_content() {
        let err = NewReflection::from_value(&json!({"content": null})).unwrap_err();
        assert_eq!(err.issues[0].kind, IssueKind::StringType);
    }

    #[test]
    fn test_from_value_rejects_non_object_body() {
        for body in [json!([]), json!("content"), json!(42), json!(null)] {
            let err = NewReflection::from_value(&body).unwrap_err();
            assert_eq!(err.issues[0].kind, IssueKind::ModelAttributesType);
            assert_eq!(err.issues[0].loc, vec!["body"]);
        }
    }

    #[test]
    fn test_acknowledge_echoes_content() {
        let receipt = NewReflection::new("今日は集中できた").acknowledge();
        assert_eq!(
            serde_json::to_value(&receipt).unwrap(),
            json!({"message": "Reflection received", "content": "今日は集中できた"})
        );
    }

    fn non_string_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            any::<f64>()
                .prop_filter("finite", |f| f.is_finite())
                .prop_map(Value::from),
            prop::collection::vec(any::<i32>(), 0..4).prop_map(Value::from),
            Just(json!({"nested": "text"})),
        ]
    }

    proptest! {
        #[test]
        fn prop_any_string_is_echoed(content in ".*") {
            let body = json!({"content": content.clone()});
            let receipt = NewReflection::from_value(&body).unwrap().acknowledge();
            prop_assert_eq!(receipt.content, content);
            prop_assert_eq!(receipt.message, RECEIVED_MESSAGE);
        }

        #[test]
        fn prop_non_string_content_is_rejected(value in non_string_value()) {
            let err = NewReflection::from_value(&json!({"content": value})).unwrap_err();
            prop_assert_eq!(err.issues.len(), 1);
            prop_assert_eq!(err.issues[0].kind, IssueKind::StringType);
        }
    }
}
