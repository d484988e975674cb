//! Error types for Reflection Core

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Result type alias using ValidationError
pub type Result<T> = std::result::Result<T, ValidationError>;

/// A request payload that could not be coerced into the expected shape.
///
/// Serializes as the list of issues; the HTTP layer wraps it in a
/// `detail` field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{} validation issue(s): {}", .issues.len(), summary(.issues))]
#[serde(transparent)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

/// One problem found in a payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,

    /// Path to the offending value, starting at `body`
    pub loc: Vec<String>,

    pub msg: String,

    /// The value that failed, `null` when there was none
    pub input: Value,

    /// Extra detail, such as the decoder's message for `json_invalid`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctx: Option<Value>,
}

/// Machine-readable category of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A required field is absent
    Missing,

    /// A field is present but is not a string
    StringType,

    /// The body is not a JSON object
    ModelAttributesType,

    /// The body could not be decoded as JSON at all
    JsonInvalid,
}

impl ValidationIssue {
    pub fn new<L, S>(kind: IssueKind, loc: L, msg: impl Into<String>) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            loc: loc.into_iter().map(Into::into).collect(),
            msg: msg.into(),
            input: Value::Null,
            ctx: None,
        }
    }

    /// Set the offending input
    pub fn with_input(mut self, input: Value) -> Self {
        self.input = input;
        self
    }

    /// Attach extra context
    pub fn with_ctx(mut self, ctx: Value) -> Self {
        self.ctx = Some(ctx);
        self
    }
}

impl ValidationError {
    pub fn single(issue: ValidationIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }
}

fn summary(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.loc.join("."), issue.msg))
        .collect::<Vec<_>>()
        .join("; ")
}
