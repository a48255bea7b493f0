//! Tool: url_shortener — Simulated short link.

use crate::schema::{Arguments, ParamSpec, ParamType};

use super::{InvocationResult, ToolDescriptor, ToolOutput};

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor::new("url_shortener", "Create a shortened URL (simulated)")
        .param(ParamSpec::required("url", ParamType::String))
        .output("{original_url, short_url, short_code}")
}

pub fn execute(args: &Arguments) -> InvocationResult {
    let short = toolwire::shorten_url(args.str("url")?);
    let text = short.short_url.clone();
    Ok(ToolOutput {
        text: Some(text),
        ..ToolOutput::json(&short)?
    })
}
