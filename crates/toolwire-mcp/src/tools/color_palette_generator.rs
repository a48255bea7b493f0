//! Tool: color_palette_generator — Random color palette.

use serde_json::json;

use crate::schema::{Arguments, ParamSpec, ParamType};

use super::{InvocationResult, ToolDescriptor, ToolError, ToolOutput};

pub const DEFAULT_COLOR_COUNT: i64 = 5;

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor::new("color_palette_generator", "Generate a random color palette")
        .param(
            ParamSpec::optional("color_count", ParamType::Integer)
                .with_default(json!(DEFAULT_COLOR_COUNT))
                .describe("Number of colors (1-64)"),
        )
        .output("{palette_name, color_count, colors: [{hex, rgb, name}]}")
}

pub fn execute(args: &Arguments) -> InvocationResult {
    let count = usize::try_from(args.i64("color_count")?)
        .map_err(|_| ToolError::invalid_arguments("Argument 'color_count' must be positive"))?;
    let palette = toolwire::color_palette(count)?;
    let text = palette
        .colors
        .iter()
        .map(|c| c.hex.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(ToolOutput {
        text: Some(text),
        ..ToolOutput::json(&palette)?
    })
}
