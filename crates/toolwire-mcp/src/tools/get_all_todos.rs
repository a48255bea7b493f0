//! Tool: get_all_todos — List every stored todo.

use serde_json::json;

use crate::schema::Arguments;

use super::{lock_store, InvocationResult, SharedStore, ToolDescriptor, ToolOutput};

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor::new("get_all_todos", "Get all todos").output("{todos: [todo], count}")
}

pub fn execute(_args: &Arguments, store: &SharedStore) -> InvocationResult {
    let store = lock_store(store)?;
    let todos = store.todos();
    Ok(ToolOutput::new(json!({ "todos": todos, "count": todos.len() })))
}
