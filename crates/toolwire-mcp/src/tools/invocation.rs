//! Outcome of a single tool invocation.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::schema::ValidationError;

/// Category of a tool-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolErrorKind {
    InvalidArguments,
    Failed,
    Panicked,
}

/// A failure reported by a tool, surfaced to the client as `isError: true`.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ToolError {
    pub kind: ToolErrorKind,
    pub message: String,
}

impl ToolError {
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self {
            kind: ToolErrorKind::InvalidArguments,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            kind: ToolErrorKind::Failed,
            message: message.into(),
        }
    }

    pub fn panicked(message: impl Into<String>) -> Self {
        Self {
            kind: ToolErrorKind::Panicked,
            message: message.into(),
        }
    }

    pub fn to_value(&self) -> Value {
        json!({ "kind": self.kind, "message": self.message })
    }
}

impl From<ValidationError> for ToolError {
    fn from(e: ValidationError) -> Self {
        ToolError::invalid_arguments(e.to_string())
    }
}

impl From<toolwire::ToolkitError> for ToolError {
    fn from(e: toolwire::ToolkitError) -> Self {
        ToolError::failed(e.to_string())
    }
}

/// Successful tool output: the structured value plus an optional text rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    pub value: Value,
    pub text: Option<String>,
}

impl ToolOutput {
    pub fn new(value: Value) -> Self {
        Self { value, text: None }
    }

    pub fn with_text(value: Value, text: impl Into<String>) -> Self {
        Self {
            value,
            text: Some(text.into()),
        }
    }

    /// Serialize any value as the structured output.
    pub fn json(value: &impl Serialize) -> InvocationResult {
        serde_json::to_value(value)
            .map(Self::new)
            .map_err(|e| ToolError::failed(format!("Failed to serialize result: {e}")))
    }

    /// The handler-supplied text, or a rendering of the structured value.
    pub fn rendered_text(&self) -> String {
        self.text
            .clone()
            .unwrap_or_else(|| render_text(&self.value))
    }
}

impl From<Value> for ToolOutput {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

pub type InvocationResult = Result<ToolOutput, ToolError>;

/// Render a structured value as human-readable text.
pub fn render_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|e| e.to_string())
        }
        other => other.to_string(),
    }
}

/// Encode a float, using an integer representation when it has no fractional part.
pub fn json_number(value: f64) -> Value {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        assert_eq!(render_text(&json!("hi")), "hi");
        assert_eq!(render_text(&json!(40)), "40");
        assert_eq!(render_text(&json!(true)), "true");
        assert!(render_text(&json!({"a": 1})).contains("\"a\": 1"));
    }

    #[test]
    fn test_json_number() {
        assert_eq!(json_number(40.0), json!(40));
        assert_eq!(json_number(2.5), json!(2.5));
        assert_eq!(json_number(-3.0), json!(-3));
        assert!(json_number(f64::NAN).is_null());
    }

    #[test]
    fn test_handler_text_wins() {
        let out = ToolOutput::with_text(json!({"x": 1}), "one");
        assert_eq!(out.rendered_text(), "one");
    }

    #[test]
    fn test_error_value_shape() {
        let err = ToolError::failed("boom");
        assert_eq!(err.to_value(), json!({"kind": "failed", "message": "boom"}));
    }
}
