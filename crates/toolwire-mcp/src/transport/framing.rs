//! Message framing for newline-delimited JSON.

use serde_json::Value;

use crate::types::{
    JsonRpcMessage, JsonRpcNotification, JsonRpcRequest, McpError, McpResult, RequestId,
};

/// A line that could not be turned into a message, with the id to answer to.
#[derive(Debug)]
pub struct FrameError {
    pub id: RequestId,
    pub error: McpError,
    /// The line named a method but carried no id. Such lines get no reply.
    pub notification: bool,
}

impl FrameError {
    fn new(id: RequestId, error: McpError) -> Self {
        Self {
            id,
            error,
            notification: false,
        }
    }

    fn for_notification(error: McpError) -> Self {
        Self {
            id: RequestId::Null,
            error,
            notification: true,
        }
    }
}

/// Parse a single line of text as a JSON-RPC message.
///
/// Invalid JSON is a parse error answered with a `null` id. Valid JSON that is
/// not a well-formed message is an invalid request, answered with the message's
/// id when one can be recovered.
pub fn parse_message(line: &str) -> Result<JsonRpcMessage, FrameError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(FrameError::new(
            RequestId::Null,
            McpError::ParseError("Empty message".to_string()),
        ));
    }

    let value: Value = serde_json::from_str(trimmed)
        .map_err(|e| FrameError::new(RequestId::Null, McpError::ParseError(e.to_string())))?;

    classify(value)
}

enum MethodField {
    String,
    Other,
    Absent,
}

fn classify(value: Value) -> Result<JsonRpcMessage, FrameError> {
    let invalid = |id: RequestId, msg: &str| FrameError::new(id, McpError::InvalidRequest(msg.to_string()));

    let Some(obj) = value.as_object() else {
        return Err(invalid(RequestId::Null, "Message must be a JSON object"));
    };

    let id = match obj.get("id") {
        None => None,
        Some(raw) => Some(
            parse_id(raw).ok_or_else(|| invalid(RequestId::Null, &format!("Invalid id: {raw}")))?,
        ),
    };
    let method = match obj.get("method") {
        Some(Value::String(_)) => MethodField::String,
        Some(_) => MethodField::Other,
        None => MethodField::Absent,
    };
    let is_response = obj.contains_key("result") || obj.contains_key("error");

    match (method, id) {
        (MethodField::String, Some(id)) => serde_json::from_value::<JsonRpcRequest>(value)
            .map(JsonRpcMessage::Request)
            .map_err(|e| invalid(id, &e.to_string())),
        (MethodField::String, None) => serde_json::from_value::<JsonRpcNotification>(value)
            .map(JsonRpcMessage::Notification)
            .map_err(|e| FrameError::for_notification(McpError::InvalidRequest(e.to_string()))),
        (MethodField::Other, id) => Err(invalid(
            id.unwrap_or(RequestId::Null),
            "Method must be a string",
        )),
        (MethodField::Absent, _) if is_response => Ok(JsonRpcMessage::Response(value)),
        (MethodField::Absent, id) => Err(invalid(id.unwrap_or(RequestId::Null), "Missing method")),
    }
}

/// Ids must be strings, integers, or null.
fn parse_id(raw: &Value) -> Option<RequestId> {
    match raw {
        Value::String(s) => Some(RequestId::String(s.clone())),
        Value::Number(n) => n.as_i64().map(RequestId::Number),
        Value::Null => Some(RequestId::Null),
        _ => None,
    }
}

/// Serialize a value to a JSON line (with trailing newline).
pub fn frame_message(value: &Value) -> McpResult<String> {
    let mut json = serde_json::to_string(value).map_err(McpError::Json)?;
    json.push('\n');
    Ok(json)
}
