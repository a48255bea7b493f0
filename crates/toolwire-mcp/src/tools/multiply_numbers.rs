//! Tool: multiply_numbers — Multiply two numbers.

use crate::schema::{Arguments, ParamSpec, ParamType};

use super::{json_number, InvocationResult, ToolDescriptor, ToolOutput};

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor::new("multiply_numbers", "Multiply two numbers")
        .param(ParamSpec::required("a", ParamType::Float))
        .param(ParamSpec::required("b", ParamType::Float))
        .output("number: a * b")
}

pub fn execute(args: &Arguments) -> InvocationResult {
    let product = toolwire::multiply(args.f64("a")?, args.f64("b")?);
    Ok(ToolOutput::new(json_number(product)))
}
