//! Main request dispatcher — receives JSON-RPC messages, routes to handlers.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ServerConfig;
use crate::session::{Session, SessionState};
use crate::tools::ToolRegistry;
use crate::types::*;

use super::invocation::invoke_tool;
use super::negotiation::initialize_result;
use super::validator::validate_envelope;

/// Dispatches incoming JSON-RPC messages for one session.
///
/// Methods take `&mut self`: messages are handled strictly one at a time.
pub struct ProtocolHandler {
    registry: ToolRegistry,
    session: Session,
    config: ServerConfig,
}

impl ProtocolHandler {
    pub fn new(registry: ToolRegistry, config: ServerConfig) -> Self {
        Self {
            registry,
            session: Session::new(),
            config,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Mark the session closed, e.g. on end of input.
    pub fn close(&mut self) {
        self.session.close();
    }

    /// Handle one message. Returns the response for requests, `None` otherwise.
    pub fn handle_message(&mut self, msg: JsonRpcMessage) -> Option<Value> {
        match msg {
            JsonRpcMessage::Request(req) => Some(self.handle_request(req)),
            JsonRpcMessage::Notification(notif) => {
                self.handle_notification(notif);
                None
            }
            JsonRpcMessage::Response(_) => {
                tracing::warn!("Ignoring response message from client");
                None
            }
        }
    }

    fn handle_request(&mut self, request: JsonRpcRequest) -> Value {
        let id = request.id.clone();
        let result = validate_envelope(&request.jsonrpc, &request.method)
            .and_then(|()| self.dispatch_request(&request));

        match result {
            Ok(value) => to_value_or_null(&JsonRpcResponse::new(id, value)),
            Err(e) => {
                tracing::debug!("Request {id} ({}) failed: {e}", request.method);
                to_value_or_null(&e.to_json_rpc_error(id))
            }
        }
    }

    fn dispatch_request(&mut self, request: &JsonRpcRequest) -> McpResult<Value> {
        if self.session.is_closed() {
            return Err(McpError::OutOfSequence {
                method: request.method.clone(),
                state: SessionState::Closed.to_string(),
            });
        }

        match request.method.as_str() {
            "initialize" => self.handle_initialize(request.params.as_ref()),
            "shutdown" => self.handle_shutdown(),
            "ping" => Ok(Value::Object(serde_json::Map::new())),

            "tools/list" => {
                self.session.require_ready("tools/list")?;
                self.handle_tools_list()
            }
            "tools/call" => {
                self.session.require_ready("tools/call")?;
                self.handle_tools_call(request.params.as_ref())
            }

            _ => Err(McpError::MethodNotFound(request.method.clone())),
        }
    }

    fn handle_notification(&mut self, notification: JsonRpcNotification) {
        if let Err(e) = validate_envelope(&notification.jsonrpc, &notification.method) {
            tracing::warn!("Dropping malformed notification: {e}");
            return;
        }

        match notification.method.as_str() {
            "notifications/initialized" | "initialized" => {
                self.session.mark_initialized();
            }
            "notifications/cancelled" => {
                tracing::info!("Received cancellation notification");
            }
            _ => {
                tracing::debug!("Unknown notification: {}", notification.method);
            }
        }
    }

    fn handle_initialize(&mut self, params: Option<&Value>) -> McpResult<Value> {
        // Checked before parsing so a repeated initialize is reported as such.
        if self.session.state() != SessionState::Uninitialized {
            return Err(McpError::OutOfSequence {
                method: "initialize".to_string(),
                state: self.session.state().to_string(),
            });
        }

        let init_params: InitializeParams = parse_params(params, "Initialize params required")?;
        let agreed = self.session.initialize(&init_params)?;
        let result = initialize_result(&self.config, agreed, self.registry.len());

        serialize(&result)
    }

    fn handle_shutdown(&mut self) -> McpResult<Value> {
        tracing::info!("Shutdown requested");
        self.session.close();
        Ok(Value::Object(serde_json::Map::new()))
    }

    fn handle_tools_list(&self) -> McpResult<Value> {
        let result = ToolListResult {
            tools: self.registry.definitions(),
            next_cursor: None,
        };
        serialize(&result)
    }

    fn handle_tools_call(&self, params: Option<&Value>) -> McpResult<Value> {
        let call_params: ToolCallParams = parse_params(params, "Tool call params required")?;

        let tool = self.registry.lookup(&call_params.name)?;
        tracing::debug!("Calling tool {}", tool.name());
        let result = invoke_tool(&tool, call_params.arguments.as_ref());

        serialize(&result)
    }
}

fn parse_params<T: DeserializeOwned>(params: Option<&Value>, missing: &str) -> McpResult<T> {
    let params = params.ok_or_else(|| McpError::InvalidParams(missing.to_string()))?;
    T::deserialize(params).map_err(|e| McpError::InvalidParams(e.to_string()))
}

fn serialize(value: &impl Serialize) -> McpResult<Value> {
    serde_json::to_value(value).map_err(|e| McpError::InternalError(e.to_string()))
}

fn to_value_or_null(value: &impl Serialize) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize response: {e}");
        Value::Null
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{shared_store, ToolRegistry};
    use serde_json::json;

    fn handler() -> ProtocolHandler {
        let config = ServerConfig::default();
        let registry = ToolRegistry::builtin(shared_store(), config.server_info()).unwrap();
        ProtocolHandler::new(registry, config)
    }

    fn request(id: i64, method: &str, params: Option<Value>) -> JsonRpcMessage {
        JsonRpcMessage::Request(JsonRpcRequest::new(RequestId::Number(id), method, params))
    }

    #[test]
    fn test_initialize_reports_server_info() {
        let mut h = handler();
        let resp = h
            .handle_message(request(
                1,
                "initialize",
                Some(json!({"protocolVersion": "2024-11-05", "capabilities": {}})),
            ))
            .unwrap();
        assert_eq!(resp["id"], 1);
        assert_eq!(resp["result"]["serverInfo"]["name"], "toolwire-mcp");
        assert_eq!(resp["result"]["protocolVersion"], "2024-11-05");
        assert_eq!(h.state(), SessionState::Initializing);
    }

    #[test]
    fn test_missing_protocol_version_is_invalid_params() {
        let mut h = handler();
        let resp = h
            .handle_message(request(1, "initialize", Some(json!({"capabilities": {}}))))
            .unwrap();
        assert_eq!(resp["error"]["code"], -32602);
        assert_eq!(h.state(), SessionState::Uninitialized);

        let resp = h
            .handle_message(request(2, "initialize", Some(json!({"protocolVersion": 20241105}))))
            .unwrap();
        assert_eq!(resp["error"]["code"], -32602);
    }

    #[test]
    fn test_notification_has_no_response() {
        let mut h = handler();
        let notif = JsonRpcMessage::Notification(JsonRpcNotification::new(
            "notifications/initialized",
            None,
        ));
        assert!(h.handle_message(notif).is_none());
    }

    #[test]
    fn test_ping_allowed_before_handshake() {
        let mut h = handler();
        let resp = h.handle_message(request(9, "ping", None)).unwrap();
        assert_eq!(resp["result"], json!({}));
    }

    #[test]
    fn test_shutdown_closes_session() {
        let mut h = handler();
        let resp = h.handle_message(request(1, "shutdown", None)).unwrap();
        assert_eq!(resp["result"], json!({}));
        assert_eq!(h.state(), SessionState::Closed);

        let resp = h.handle_message(request(2, "ping", None)).unwrap();
        assert_eq!(resp["error"]["code"], -32002);
    }

    #[test]
    fn test_wrong_jsonrpc_version() {
        let mut h = handler();
        let mut req = JsonRpcRequest::new(RequestId::Number(4), "ping", None);
        req.jsonrpc = "1.0".into();
        let resp = h.handle_message(JsonRpcMessage::Request(req)).unwrap();
        assert_eq!(resp["error"]["code"], -32600);
        assert_eq!(resp["id"], 4);
    }
}
