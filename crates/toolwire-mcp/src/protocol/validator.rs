//! JSON-RPC envelope checks shared by requests and notifications.

use crate::types::{McpError, McpResult, JSONRPC_VERSION};

/// Validate the envelope fields shared by requests and notifications.
pub fn validate_envelope(jsonrpc: &str, method: &str) -> McpResult<()> {
    if jsonrpc != JSONRPC_VERSION {
        return Err(McpError::InvalidRequest(format!(
            "Expected jsonrpc version \"{JSONRPC_VERSION}\", got \"{jsonrpc}\""
        )));
    }

    if method.is_empty() {
        return Err(McpError::InvalidRequest(
            "Method name must not be empty".to_string(),
        ));
    }

    Ok(())
}
