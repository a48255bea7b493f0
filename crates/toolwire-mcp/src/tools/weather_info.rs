//! Tool: weather_info — Simulated weather for a city.

use crate::schema::{Arguments, ParamSpec, ParamType};

use super::{InvocationResult, ToolDescriptor, ToolOutput};

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor::new("weather_info", "Get weather information for a city (simulated)")
        .param(ParamSpec::required("city", ParamType::String))
        .output("{city, current_temperature, min_temperature, max_temperature, condition, humidity, wind_speed}")
}

pub fn execute(args: &Arguments) -> InvocationResult {
    ToolOutput::json(&toolwire::weather_report(args.str("city")?))
}
