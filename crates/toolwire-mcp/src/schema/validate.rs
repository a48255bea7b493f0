//! Argument validation against a tool's declared schema.

use serde_json::{Map, Number, Value};

use super::{Arguments, InputSchema, ParamSpec, ParamType};

/// Why a set of arguments was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Arguments must be an object, got {0}")]
    NotAnObject(&'static str),

    #[error("Unknown argument '{0}'")]
    UnknownArgument(String),

    #[error("Missing required argument '{0}'")]
    MissingArgument(String),

    #[error("Argument '{name}' must be {expected}, got {found}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// JSON type name of `value`, distinguishing integers from other numbers.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Check `args` against `schema` and return the coerced argument set.
///
/// Absent or `null` arguments count as an empty object. Defaults are filled in
/// for omitted optional parameters, and an explicit `null` for an optional
/// parameter is treated as omitted.
pub fn validate(args: Option<&Value>, schema: &InputSchema) -> Result<Arguments, ValidationError> {
    let empty = Map::new();
    let provided = match args {
        None | Some(Value::Null) => &empty,
        Some(Value::Object(map)) => map,
        Some(other) => return Err(ValidationError::NotAnObject(type_name(other))),
    };

    if let Some(unknown) = provided.keys().find(|k| schema.get(k).is_none()) {
        return Err(ValidationError::UnknownArgument(unknown.clone()));
    }

    let mut coerced = Map::new();
    for spec in schema.params() {
        match provided.get(&spec.name) {
            Some(Value::Null) | None => {
                if spec.required {
                    return Err(ValidationError::MissingArgument(spec.name.clone()));
                }
                if let Some(default) = &spec.default {
                    coerced.insert(spec.name.clone(), default.clone());
                }
            }
            Some(value) => {
                coerced.insert(spec.name.clone(), coerce(spec, value)?);
            }
        }
    }

    Ok(Arguments::new(coerced))
}

fn coerce(spec: &ParamSpec, value: &Value) -> Result<Value, ValidationError> {
    let mismatch = || ValidationError::TypeMismatch {
        name: spec.name.clone(),
        expected: spec.param_type.label(),
        found: type_name(value),
    };

    match (spec.param_type, value) {
        (ParamType::String, Value::String(_))
        | (ParamType::Boolean, Value::Bool(_))
        | (ParamType::Object, Value::Object(_))
        | (ParamType::Float, Value::Number(_)) => Ok(value.clone()),

        (ParamType::Integer, Value::Number(n)) => integral(n).ok_or_else(mismatch),

        (ParamType::StringList, Value::Array(items)) => {
            if items.iter().all(Value::is_string) {
                Ok(value.clone())
            } else {
                Err(mismatch())
            }
        }

        _ => Err(mismatch()),
    }
}

/// Accept integers as-is and floats with no fractional part as integers.
fn integral(n: &Number) -> Option<Value> {
    if n.is_i64() || n.is_u64() {
        return Some(Value::Number(n.clone()));
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(Value::from(f as i64))
    } else {
        None
    }
}
