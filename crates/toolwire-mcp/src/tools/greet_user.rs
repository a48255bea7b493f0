//! Tool: greet_user — Greet a user by name.

use serde_json::Value;

use crate::schema::{Arguments, ParamSpec, ParamType};

use super::{InvocationResult, ToolDescriptor, ToolOutput};

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor::new("greet_user", "Greet a user by name")
        .param(ParamSpec::required("name", ParamType::String).describe("Name to greet"))
        .output("greeting string")
}

pub fn execute(args: &Arguments) -> InvocationResult {
    let name = args.str("name")?;
    Ok(ToolOutput::new(Value::String(format!(
        "Hello, {name}! Welcome to the Toolwire MCP server!"
    ))))
}
