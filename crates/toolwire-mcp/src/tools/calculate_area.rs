//! Tool: calculate_area — Area and perimeter of a rectangle.

use serde_json::json;

use crate::schema::{Arguments, ParamSpec, ParamType};

use super::{json_number, InvocationResult, ToolDescriptor, ToolOutput};

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor::new("calculate_area", "Calculate area and perimeter of a rectangle")
        .param(ParamSpec::required("length", ParamType::Float))
        .param(ParamSpec::required("width", ParamType::Float))
        .output("{length, width, area, perimeter}")
}

pub fn execute(args: &Arguments) -> InvocationResult {
    let r = toolwire::rectangle(args.f64("length")?, args.f64("width")?);
    Ok(ToolOutput::new(json!({
        "length": json_number(r.length),
        "width": json_number(r.width),
        "area": json_number(r.area),
        "perimeter": json_number(r.perimeter),
    })))
}
