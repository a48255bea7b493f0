//! Error types and JSON-RPC error codes for the MCP server.

use serde_json::{json, Value};

use super::message::{JsonRpcError, JsonRpcErrorObject, RequestId, JSONRPC_VERSION};

/// Standard JSON-RPC 2.0 error codes.
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// MCP-specific error codes.
pub mod mcp_error_codes {
    /// Server: request arrived before the handshake reached the required state.
    pub const OUT_OF_SEQUENCE: i32 = -32002;
    pub const TOOL_NOT_FOUND: i32 = -32803;
    pub const UNSUPPORTED_PROTOCOL_VERSION: i32 = -32805;
}

/// All errors that can occur in the MCP server.
///
/// Only protocol-level failures live here. Argument validation and tool
/// failures are reported inside a successful `tools/call` result.
#[derive(thiserror::Error, Debug)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Method '{method}' is not allowed while the session is {state}")]
    OutOfSequence { method: String, state: String },

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Tool already registered: {0}")]
    DuplicateTool(String),

    #[error("Unsupported protocol version '{requested}' (supported: {})", .supported.join(", "))]
    UnsupportedProtocolVersion {
        requested: String,
        supported: Vec<String>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    pub fn code(&self) -> i32 {
        use error_codes::*;
        use mcp_error_codes::*;
        match self {
            McpError::ParseError(_) => PARSE_ERROR,
            McpError::InvalidRequest(_) => INVALID_REQUEST,
            McpError::MethodNotFound(_) => METHOD_NOT_FOUND,
            McpError::InvalidParams(_) => INVALID_PARAMS,
            McpError::OutOfSequence { .. } => OUT_OF_SEQUENCE,
            McpError::ToolNotFound(_) => TOOL_NOT_FOUND,
            McpError::UnsupportedProtocolVersion { .. } => UNSUPPORTED_PROTOCOL_VERSION,
            McpError::InternalError(_)
            | McpError::DuplicateTool(_)
            | McpError::Io(_) => INTERNAL_ERROR,
            McpError::Json(_) => PARSE_ERROR,
        }
    }

    /// Structured detail attached to the error object, when there is any.
    pub fn data(&self) -> Option<Value> {
        match self {
            McpError::UnsupportedProtocolVersion {
                requested,
                supported,
            } => Some(json!({ "requested": requested, "supported": supported })),
            McpError::OutOfSequence { state, .. } => Some(json!({ "state": state })),
            _ => None,
        }
    }

    pub fn to_json_rpc_error(&self, id: RequestId) -> JsonRpcError {
        JsonRpcError {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            error: JsonRpcErrorObject {
                code: self.code(),
                message: self.to_string(),
                data: self.data(),
            },
        }
    }
}

pub type McpResult<T> = Result<T, McpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_by_class() {
        assert_eq!(McpError::ParseError("x".into()).code(), -32700);
        assert_eq!(McpError::InvalidRequest("x".into()).code(), -32600);
        assert_eq!(McpError::MethodNotFound("x".into()).code(), -32601);
        assert_eq!(McpError::ToolNotFound("x".into()).code(), -32803);
        let seq = McpError::OutOfSequence {
            method: "tools/list".into(),
            state: "uninitialized".into(),
        };
        assert_eq!(seq.code(), -32002);
    }

    #[test]
    fn test_unsupported_version_carries_data() {
        let err = McpError::UnsupportedProtocolVersion {
            requested: "1999-01-01".into(),
            supported: vec!["2024-11-05".into()],
        };
        let rpc = err.to_json_rpc_error(RequestId::Number(3));
        assert_eq!(rpc.id, RequestId::Number(3));
        assert_eq!(rpc.error.code, -32805);
        assert!(rpc.error.message.contains("1999-01-01"));
        assert_eq!(rpc.error.data.unwrap()["supported"][0], "2024-11-05");
    }
}
