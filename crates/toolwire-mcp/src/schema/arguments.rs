//! Validated tool arguments with typed accessors.

use serde_json::{Map, Value};

use crate::tools::ToolError;

/// Arguments that have passed schema validation.
///
/// Accessors fail with [`ToolError::invalid_arguments`] when a handler asks for
/// a name or type the schema never guaranteed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    values: Map<String, Value>,
}

impl Arguments {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    fn require(&self, name: &str) -> Result<&Value, ToolError> {
        self.values
            .get(name)
            .ok_or_else(|| ToolError::invalid_arguments(format!("Missing argument '{name}'")))
    }

    fn wrong_type(name: &str, expected: &str) -> ToolError {
        ToolError::invalid_arguments(format!("Argument '{name}' is not {expected}"))
    }

    pub fn str(&self, name: &str) -> Result<&str, ToolError> {
        self.require(name)?
            .as_str()
            .ok_or_else(|| Self::wrong_type(name, "a string"))
    }

    pub fn i64(&self, name: &str) -> Result<i64, ToolError> {
        self.require(name)?
            .as_i64()
            .ok_or_else(|| Self::wrong_type(name, "an integer"))
    }

    pub fn f64(&self, name: &str) -> Result<f64, ToolError> {
        self.require(name)?
            .as_f64()
            .ok_or_else(|| Self::wrong_type(name, "a number"))
    }

    pub fn str_list(&self, name: &str) -> Result<Vec<&str>, ToolError> {
        self.require(name)?
            .as_array()
            .and_then(|items| items.iter().map(Value::as_str).collect())
            .ok_or_else(|| Self::wrong_type(name, "an array of strings"))
    }
}
