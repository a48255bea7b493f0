//! Tool: convert_temperature — Celsius / Fahrenheit / Kelvin conversion.

use crate::schema::{Arguments, ParamSpec, ParamType};

use super::{InvocationResult, ToolDescriptor, ToolOutput};

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor::new(
        "convert_temperature",
        "Convert temperature between Celsius, Fahrenheit, and Kelvin",
    )
    .param(ParamSpec::required("value", ParamType::Float))
    .param(ParamSpec::required("from_unit", ParamType::String).describe("celsius, fahrenheit, or kelvin"))
    .param(ParamSpec::required("to_unit", ParamType::String).describe("celsius, fahrenheit, or kelvin"))
    .output("{original_value, original_unit, converted_value, converted_unit}")
}

pub fn execute(args: &Arguments) -> InvocationResult {
    let conversion = toolwire::convert_temperature(
        args.f64("value")?,
        args.str("from_unit")?,
        args.str("to_unit")?,
    );
    let text = format!(
        "{} {} = {} {}",
        conversion.original_value,
        conversion.original_unit,
        conversion.converted_value,
        conversion.converted_unit
    );
    Ok(ToolOutput {
        text: Some(text),
        ..ToolOutput::json(&conversion)?
    })
}
