//! Handshake, listing and invocation tests driven through `ProtocolHandler`.

use serde_json::{json, Value};

use toolwire_mcp::protocol::ProtocolHandler;
use toolwire_mcp::schema::{ParamSpec, ParamType};
use toolwire_mcp::tools::{shared_store, ToolOutput, BUILTIN_TOOLS};
use toolwire_mcp::transport::framing;
use toolwire_mcp::types::McpError;
use toolwire_mcp::{ServerConfig, SessionState, ToolDescriptor, ToolRegistry};

// ─────────────────────── helpers ───────────────────────

fn builtin_handler() -> ProtocolHandler {
    let config = ServerConfig::default();
    let registry = ToolRegistry::builtin(shared_store(), config.server_info()).unwrap();
    ProtocolHandler::new(registry, config)
}

/// Build an MCP JSON-RPC request.
fn mcp_request(id: i64, method: &str, params: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params
    })
}

/// Build an initialize request.
fn init_request() -> Value {
    mcp_request(
        0,
        "initialize",
        json!({
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": { "name": "test-client", "version": "1.0" }
        }),
    )
}

fn initialized_notification() -> Value {
    json!({ "jsonrpc": "2.0", "method": "notifications/initialized" })
}

/// Send a JSON-RPC message through the handler and return the response.
fn send(handler: &mut ProtocolHandler, msg: Value) -> Option<Value> {
    let parsed = framing::parse_message(&msg.to_string()).unwrap();
    handler.handle_message(parsed)
}

/// Send and unwrap the response.
fn send_unwrap(handler: &mut ProtocolHandler, msg: Value) -> Value {
    send(handler, msg).expect("expected response")
}

/// Run the full handshake.
fn ready(handler: &mut ProtocolHandler) {
    let resp = send_unwrap(handler, init_request());
    assert!(resp.get("result").is_some(), "initialize failed: {resp}");
    assert!(send(handler, initialized_notification()).is_none());
    assert_eq!(handler.state(), SessionState::Ready);
}

fn call(handler: &mut ProtocolHandler, id: i64, name: &str, arguments: Value) -> Value {
    send_unwrap(
        handler,
        mcp_request(id, "tools/call", json!({ "name": name, "arguments": arguments })),
    )
}

// ─────────────────────── handshake ───────────────────────

#[test]
fn test_handshake_progresses_to_ready() {
    let mut h = builtin_handler();
    assert_eq!(h.state(), SessionState::Uninitialized);

    let resp = send_unwrap(&mut h, init_request());
    assert_eq!(resp["id"], 0);
    assert_eq!(resp["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(resp["result"]["capabilities"]["tools"]["listChanged"], false);
    assert_eq!(h.state(), SessionState::Initializing);
    assert_eq!(h.session().protocol_version(), Some("2024-11-05"));
    assert_eq!(h.session().client_info().map(|c| c.name.as_str()), Some("test-client"));

    assert!(send(&mut h, initialized_notification()).is_none());
    assert_eq!(h.state(), SessionState::Ready);
}

#[test]
fn test_legacy_initialized_alias() {
    let mut h = builtin_handler();
    send_unwrap(&mut h, init_request());
    assert!(send(&mut h, json!({"jsonrpc": "2.0", "method": "initialized"})).is_none());
    assert_eq!(h.state(), SessionState::Ready);
}

#[test]
fn test_unsupported_protocol_version() {
    let mut h = builtin_handler();
    let resp = send_unwrap(
        &mut h,
        mcp_request(1, "initialize", json!({"protocolVersion": "1999-01-01"})),
    );
    assert_eq!(resp["error"]["code"], -32805);
    let supported = resp["error"]["data"]["supported"].as_array().unwrap();
    assert!(supported.contains(&json!("2024-11-05")));
    assert_eq!(h.state(), SessionState::Uninitialized);

    // A later valid attempt still succeeds.
    let resp = send_unwrap(&mut h, init_request());
    assert!(resp.get("result").is_some());
}

#[test]
fn test_second_initialize_is_out_of_sequence() {
    let mut h = builtin_handler();
    ready(&mut h);

    let resp = send_unwrap(
        &mut h,
        mcp_request(
            7,
            "initialize",
            json!({"protocolVersion": "2025-03-26", "clientInfo": {"name": "other", "version": "2"}}),
        ),
    );
    assert_eq!(resp["id"], 7);
    assert_eq!(resp["error"]["code"], -32002);
    assert_eq!(h.state(), SessionState::Ready);
    assert_eq!(h.session().protocol_version(), Some("2024-11-05"));
    assert_eq!(h.session().client_info().map(|c| c.name.as_str()), Some("test-client"));
}

#[test]
fn test_initialized_before_initialize_is_ignored() {
    let mut h = builtin_handler();
    assert!(send(&mut h, initialized_notification()).is_none());
    assert_eq!(h.state(), SessionState::Uninitialized);
}

#[test]
fn test_tools_call_before_initialize() {
    let mut h = builtin_handler();
    let resp = call(&mut h, 1, "add_numbers", json!({"a": 1, "b": 2}));
    assert_eq!(resp["error"]["code"], -32002);
    assert_eq!(resp["error"]["data"]["state"], "uninitialized");
    assert_eq!(h.state(), SessionState::Uninitialized);
}

#[test]
fn test_tools_list_while_initializing() {
    let mut h = builtin_handler();
    send_unwrap(&mut h, init_request());
    let resp = send_unwrap(&mut h, mcp_request(2, "tools/list", json!({})));
    assert_eq!(resp["error"]["code"], -32002);
    assert_eq!(resp["error"]["data"]["state"], "initializing");
    assert_eq!(h.state(), SessionState::Initializing);
}

#[test]
fn test_unknown_method() {
    let mut h = builtin_handler();
    ready(&mut h);
    let resp = send_unwrap(&mut h, mcp_request(3, "resources/list", json!({})));
    assert_eq!(resp["error"]["code"], -32601);
    assert_eq!(resp["id"], 3);
}

#[test]
fn test_unknown_notification_is_ignored() {
    let mut h = builtin_handler();
    ready(&mut h);
    assert!(send(&mut h, json!({"jsonrpc": "2.0", "method": "notifications/progress"})).is_none());
    assert_eq!(h.state(), SessionState::Ready);
}

#[test]
fn test_peer_response_is_ignored() {
    let mut h = builtin_handler();
    assert!(send(&mut h, json!({"jsonrpc": "2.0", "id": 5, "result": {}})).is_none());
}

// ─────────────────────── tools/list ───────────────────────

#[test]
fn test_tools_list_in_registration_order() {
    let mut h = builtin_handler();
    ready(&mut h);
    let resp = send_unwrap(&mut h, mcp_request(1, "tools/list", json!({})));
    let names: Vec<&str> = resp["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, BUILTIN_TOOLS);

    let add = &resp["result"]["tools"][1];
    assert_eq!(add["inputSchema"]["type"], "object");
    assert_eq!(add["inputSchema"]["required"], json!(["a", "b"]));
}

#[test]
fn test_tools_list_is_stable() {
    let mut h = builtin_handler();
    ready(&mut h);
    let first = send_unwrap(&mut h, mcp_request(1, "tools/list", json!({})));
    let second = send_unwrap(&mut h, mcp_request(1, "tools/list", json!({})));
    assert_eq!(first, second);
}

// ─────────────────────── tools/call ───────────────────────

#[test]
fn test_add_numbers() {
    let mut h = builtin_handler();
    ready(&mut h);
    let resp = call(&mut h, 4, "add_numbers", json!({"a": 15, "b": 25}));
    let result = &resp["result"];
    assert_eq!(result["isError"], false);
    assert_eq!(result["structuredContent"], 40);
    assert_eq!(result["content"][0]["type"], "text");
    assert_eq!(result["content"][0]["text"], "40");
}

#[test]
fn test_missing_argument_is_tool_error() {
    let mut h = builtin_handler();
    ready(&mut h);
    let resp = call(&mut h, 5, "add_numbers", json!({"a": 15}));
    assert!(resp.get("error").is_none());
    let result = &resp["result"];
    assert_eq!(result["isError"], true);
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("'b'"), "message should name the argument: {text}");
    assert_eq!(result["structuredContent"]["kind"], "invalid_arguments");
}

#[test]
fn test_type_mismatch_is_tool_error() {
    let mut h = builtin_handler();
    ready(&mut h);
    let resp = call(&mut h, 6, "add_numbers", json!({"a": "fifteen", "b": 25}));
    assert_eq!(resp["result"]["isError"], true);
}

#[test]
fn test_unknown_argument_is_tool_error() {
    let mut h = builtin_handler();
    ready(&mut h);
    let resp = call(&mut h, 6, "greet_user", json!({"name": "Ada", "title": "Dr"}));
    assert_eq!(resp["result"]["isError"], true);
    let text = resp["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("title"));
}

#[test]
fn test_unknown_tool() {
    let mut h = builtin_handler();
    ready(&mut h);
    let resp = call(&mut h, 8, "does_not_exist", json!({}));
    assert_eq!(resp["error"]["code"], -32803);
    assert_eq!(resp["id"], 8);
}

#[test]
fn test_tools_call_without_name() {
    let mut h = builtin_handler();
    ready(&mut h);
    let resp = send_unwrap(&mut h, mcp_request(9, "tools/call", json!({"arguments": {}})));
    assert_eq!(resp["error"]["code"], -32602);
}

#[test]
fn test_default_argument_filled() {
    let mut h = builtin_handler();
    ready(&mut h);
    let resp = call(&mut h, 10, "generate_password", json!({}));
    assert_eq!(resp["result"]["isError"], false);
    let password = resp["result"]["structuredContent"].as_str().unwrap();
    assert_eq!(password.chars().count(), 12);
}

#[test]
fn test_store_state_shared_across_tools() {
    let mut h = builtin_handler();
    ready(&mut h);

    let resp = call(
        &mut h,
        1,
        "create_user_mcp",
        json!({"name": "Ada", "email": "ada@example.com", "age": 36}),
    );
    assert_eq!(resp["result"]["isError"], false);
    call(&mut h, 2, "create_todo_mcp", json!({"task": "write tests"}));

    let resp = call(&mut h, 3, "get_all_users", json!({}));
    assert_eq!(resp["result"]["structuredContent"]["count"], 1);
    assert_eq!(resp["result"]["structuredContent"]["users"][0]["name"], "Ada");

    let resp = call(&mut h, 4, "get_app_stats", json!({}));
    let stats = &resp["result"]["structuredContent"];
    assert_eq!(stats["total_users"], 1);
    assert_eq!(stats["total_todos"], 1);
    assert_eq!(stats["completed_todos"], 0);
    assert_eq!(stats["mcp_tools_count"], BUILTIN_TOOLS.len());
}

#[test]
fn test_create_todo_list_takes_string_list() {
    let mut h = builtin_handler();
    ready(&mut h);

    let resp = call(&mut h, 1, "create_todo_list", json!({"items": ["milk", "eggs"]}));
    let result = &resp["result"];
    assert_eq!(result["isError"], false);
    assert_eq!(
        result["structuredContent"],
        json!({"todo_list": ["milk", "eggs"], "total_items": 2, "status": "created"})
    );

    let resp = call(&mut h, 2, "create_todo_list", json!({"items": ["milk", 2]}));
    assert_eq!(resp["result"]["isError"], true);
    assert_eq!(resp["result"]["structuredContent"]["kind"], "invalid_arguments");
}

#[test]
fn test_url_shortener_short_code() {
    let mut h = builtin_handler();
    ready(&mut h);
    let resp = call(&mut h, 1, "url_shortener", json!({"url": "abc"}));
    let short = &resp["result"]["structuredContent"];
    assert_eq!(short["short_code"], "90015098");
    assert_eq!(short["short_url"], "https://short.ly/90015098");
}

#[test]
fn test_integer_argument_beyond_i64_rejected() {
    let mut h = builtin_handler();
    ready(&mut h);
    let resp = call(
        &mut h,
        1,
        "generate_password",
        json!({"length": 9_223_372_036_854_775_808.0_f64}),
    );
    assert_eq!(resp["result"]["isError"], true);
    assert_eq!(resp["result"]["structuredContent"]["kind"], "invalid_arguments");
}

#[test]
fn test_handler_panic_becomes_tool_error() {
    let config = ServerConfig::default();
    let registry = ToolRegistry::new()
        .with_tool(
            ToolDescriptor::new("explode", "Always panics")
                .param(ParamSpec::required("reason", ParamType::String)),
            |args| {
                let reason = args.str("reason")?;
                panic!("{reason}");
            },
        )
        .unwrap()
        .with_tool(ToolDescriptor::new("echo", "Returns a constant"), |_| {
            Ok(ToolOutput::new(json!("still here")))
        })
        .unwrap();
    let mut h = ProtocolHandler::new(registry, config);
    ready(&mut h);

    let resp = call(&mut h, 1, "explode", json!({"reason": "boom"}));
    assert_eq!(resp["result"]["isError"], true);
    assert_eq!(resp["result"]["structuredContent"]["kind"], "panicked");
    assert!(resp["result"]["content"][0]["text"]
        .as_str()
        .unwrap()
        .contains("boom"));

    // The session survives the panic.
    let resp = call(&mut h, 2, "echo", json!({}));
    assert_eq!(resp["result"]["structuredContent"], "still here");
    assert_eq!(h.state(), SessionState::Ready);
}

#[test]
fn test_duplicate_registration_rejected() {
    let mut registry = ToolRegistry::new();
    registry
        .register(ToolDescriptor::new("dup", "first"), |_| {
            Ok(ToolOutput::new(json!(1)))
        })
        .unwrap();
    let err = registry
        .register(ToolDescriptor::new("dup", "second"), |_| {
            Ok(ToolOutput::new(json!(2)))
        })
        .unwrap_err();
    assert!(matches!(err, McpError::DuplicateTool(ref name) if name == "dup"));

    // The original entry is untouched.
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.lookup("dup").unwrap().descriptor().description, "first");
}

#[test]
fn test_lookup_returns_registered_descriptor() {
    let config = ServerConfig::default();
    let registry = ToolRegistry::builtin(shared_store(), config.server_info()).unwrap();
    let tool = registry.lookup("url_shortener").unwrap();
    assert_eq!(tool.name(), "url_shortener");
    assert!(tool.descriptor().input_schema.get("url").is_some());
    assert!(matches!(
        registry.lookup("nope"),
        Err(McpError::ToolNotFound(_))
    ));
}

#[test]
fn test_shutdown_then_requests_rejected() {
    let mut h = builtin_handler();
    ready(&mut h);
    let resp = send_unwrap(&mut h, mcp_request(1, "shutdown", json!({})));
    assert_eq!(resp["result"], json!({}));
    assert_eq!(h.state(), SessionState::Closed);

    let resp = send_unwrap(&mut h, mcp_request(2, "tools/list", json!({})));
    assert_eq!(resp["error"]["code"], -32002);
    assert_eq!(resp["error"]["data"]["state"], "closed");
}
