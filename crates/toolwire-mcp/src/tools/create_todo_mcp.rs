//! Tool: create_todo_mcp — Add a todo to the in-memory store.

use serde_json::json;

use crate::schema::{Arguments, ParamSpec, ParamType};

use super::{lock_store, InvocationResult, SharedStore, ToolDescriptor, ToolOutput};

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor::new("create_todo_mcp", "Create a new todo")
        .param(ParamSpec::required("task", ParamType::String).describe("What needs doing"))
        .output("{message, todo: {id, task, completed, created_at}}")
}

pub fn execute(args: &Arguments, store: &SharedStore) -> InvocationResult {
    let todo = lock_store(store)?.create_todo(args.str("task")?)?;

    Ok(ToolOutput::with_text(
        json!({ "message": "Todo created successfully", "todo": todo }),
        format!("Created todo: {}", todo.task),
    ))
}
