//! Tool: get_app_stats — Counts over the in-memory store.

use serde_json::json;

use crate::schema::Arguments;

use super::{lock_store, InvocationResult, SharedStore, ToolDescriptor, ToolOutput};

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor::new("get_app_stats", "Get application statistics")
        .output("{total_users, total_todos, completed_todos, server_status, mcp_tools_count}")
}

pub fn execute(_args: &Arguments, store: &SharedStore, tools_count: usize) -> InvocationResult {
    let store = lock_store(store)?;
    Ok(ToolOutput::new(json!({
        "total_users": store.users().len(),
        "total_todos": store.todos().len(),
        "completed_todos": store.completed_todos(),
        "server_status": "Running",
        "mcp_tools_count": tools_count,
    })))
}
