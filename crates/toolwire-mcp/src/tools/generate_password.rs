//! Tool: generate_password — Random password from letters, digits, and symbols.

use serde_json::{json, Value};

use crate::schema::{Arguments, ParamSpec, ParamType};

use super::{InvocationResult, ToolDescriptor, ToolError, ToolOutput};

pub const DEFAULT_LENGTH: i64 = 12;

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor::new("generate_password", "Generate a secure random password")
        .param(
            ParamSpec::optional("length", ParamType::Integer)
                .with_default(json!(DEFAULT_LENGTH))
                .describe("Number of characters (1-256)"),
        )
        .output("password string")
}

pub fn execute(args: &Arguments) -> InvocationResult {
    let length = usize::try_from(args.i64("length")?)
        .map_err(|_| ToolError::invalid_arguments("Argument 'length' must be positive"))?;
    let password = toolwire::generate_password(length)?;
    Ok(ToolOutput::new(Value::String(password)))
}
