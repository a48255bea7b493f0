//! MCP version negotiation and the `initialize` result.

use crate::config::ServerConfig;
use crate::types::{
    InitializeResult, McpError, McpResult, ServerCapabilities, SUPPORTED_PROTOCOL_VERSIONS,
};

/// Accept `requested` if it is one of the supported revisions.
pub fn negotiate_version(requested: &str) -> McpResult<&'static str> {
    SUPPORTED_PROTOCOL_VERSIONS
        .iter()
        .copied()
        .find(|v| *v == requested)
        .ok_or_else(|| {
            tracing::warn!("Client requested unsupported protocol version {requested}");
            McpError::UnsupportedProtocolVersion {
                requested: requested.to_string(),
                supported: SUPPORTED_PROTOCOL_VERSIONS
                    .iter()
                    .map(|v| v.to_string())
                    .collect(),
            }
        })
}

pub fn initialize_result(config: &ServerConfig, agreed: &str, tool_count: usize) -> InitializeResult {
    let instructions = config.instructions.clone().unwrap_or_else(|| {
        format!(
            "{} exposes {tool_count} tools. Call tools/list to discover them and tools/call to invoke one.",
            config.name
        )
    });

    InitializeResult {
        protocol_version: agreed.to_string(),
        capabilities: ServerCapabilities::default_capabilities(),
        server_info: config.server_info(),
        instructions: Some(instructions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_versions_accepted() {
        for v in SUPPORTED_PROTOCOL_VERSIONS {
            assert_eq!(negotiate_version(v).unwrap(), *v);
        }
    }

    #[test]
    fn test_unknown_version_rejected() {
        assert!(negotiate_version("2023-01-01").is_err());
        assert!(negotiate_version("").is_err());
    }

    #[test]
    fn test_instructions_mention_tool_count() {
        let result = initialize_result(&ServerConfig::default(), "2024-11-05", 16);
        assert!(result.instructions.unwrap().contains("16 tools"));
        assert!(result.capabilities.tools.is_some());
    }
}
