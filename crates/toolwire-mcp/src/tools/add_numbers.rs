//! Tool: add_numbers — Add two numbers.

use crate::schema::{Arguments, ParamSpec, ParamType};

use super::{json_number, InvocationResult, ToolDescriptor, ToolOutput};

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor::new("add_numbers", "Add two numbers")
        .param(ParamSpec::required("a", ParamType::Float).describe("First addend"))
        .param(ParamSpec::required("b", ParamType::Float).describe("Second addend"))
        .output("number: a + b")
}

pub fn execute(args: &Arguments) -> InvocationResult {
    let sum = toolwire::add(args.f64("a")?, args.f64("b")?);
    Ok(ToolOutput::new(json_number(sum)))
}
