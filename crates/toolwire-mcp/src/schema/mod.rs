//! Tool argument schemas — declared parameter lists and their JSON Schema rendering.

pub mod arguments;
pub mod validate;

use serde_json::{json, Map, Value};

pub use arguments::Arguments;
pub use validate::{validate, ValidationError};

/// Primitive type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Integer,
    Float,
    Boolean,
    StringList,
    Object,
}

impl ParamType {
    /// Human-readable name used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Integer => "integer",
            ParamType::Float => "number",
            ParamType::Boolean => "boolean",
            ParamType::StringList => "array of strings",
            ParamType::Object => "object",
        }
    }

    fn json_schema(self) -> Map<String, Value> {
        let schema = match self {
            ParamType::String => json!({ "type": "string" }),
            ParamType::Integer => json!({ "type": "integer" }),
            ParamType::Float => json!({ "type": "number" }),
            ParamType::Boolean => json!({ "type": "boolean" }),
            ParamType::StringList => json!({ "type": "array", "items": { "type": "string" } }),
            ParamType::Object => json!({ "type": "object" }),
        };
        match schema {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}

/// One declared parameter of a tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: String,
    pub param_type: ParamType,
    pub required: bool,
    pub default: Option<Value>,
    pub description: Option<String>,
}

impl ParamSpec {
    pub fn required(name: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            param_type,
            required: true,
            default: None,
            description: None,
        }
    }

    pub fn optional(name: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            required: false,
            ..Self::required(name, param_type)
        }
    }

    /// Set the value filled in when the argument is omitted. Implies optional.
    pub fn with_default(mut self, default: Value) -> Self {
        self.required = false;
        self.default = Some(default);
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Ordered parameter list for a tool.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSchema {
    params: Vec<ParamSpec>,
}

impl InputSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, spec: ParamSpec) -> Self {
        self.params.push(spec);
        self
    }

    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    pub fn get(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Render as a JSON Schema object, keeping declaration order.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        for spec in &self.params {
            let mut prop = spec.param_type.json_schema();
            if let Some(description) = &spec.description {
                prop.insert("description".into(), Value::String(description.clone()));
            }
            if let Some(default) = &spec.default {
                prop.insert("default".into(), default.clone());
            }
            properties.insert(spec.name.clone(), Value::Object(prop));
        }

        let required: Vec<Value> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| Value::String(p.name.clone()))
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_rendering() {
        let schema = InputSchema::new()
            .param(ParamSpec::required("text", ParamType::String).describe("Input text"))
            .param(ParamSpec::optional("length", ParamType::Integer).with_default(json!(12)))
            .param(ParamSpec::optional("tags", ParamType::StringList));

        let rendered = schema.to_json_schema();
        assert_eq!(rendered["type"], "object");
        assert_eq!(rendered["required"], json!(["text"]));
        assert_eq!(rendered["properties"]["text"]["description"], "Input text");
        assert_eq!(rendered["properties"]["length"]["default"], 12);
        assert_eq!(rendered["properties"]["tags"]["items"]["type"], "string");
    }

    #[test]
    fn test_properties_keep_declaration_order() {
        let schema = InputSchema::new()
            .param(ParamSpec::required("zeta", ParamType::Float))
            .param(ParamSpec::required("alpha", ParamType::Float));
        let rendered = schema.to_json_schema();
        let keys: Vec<_> = rendered["properties"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }

    #[test]
    fn test_default_implies_optional() {
        let spec = ParamSpec::required("n", ParamType::Integer).with_default(json!(5));
        assert!(!spec.required);
    }
}
