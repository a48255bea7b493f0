//! Tool: get_system_info — Describe the host and this server.

use serde_json::json;

use crate::schema::Arguments;
use crate::types::Implementation;

use super::{InvocationResult, ToolDescriptor, ToolOutput};

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor::new("get_system_info", "Get system information")
        .output("{os, family, arch, server_name, server_version}")
}

pub fn execute(_args: &Arguments, server: &Implementation) -> InvocationResult {
    let info = toolwire::system_info();
    Ok(ToolOutput::new(json!({
        "os": info.os,
        "family": info.family,
        "arch": info.arch,
        "server_name": server.name,
        "server_version": server.version,
    })))
}
