//! Tool: get_all_users — List every stored user.

use serde_json::json;

use crate::schema::Arguments;

use super::{lock_store, InvocationResult, SharedStore, ToolDescriptor, ToolOutput};

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor::new("get_all_users", "Get all users").output("{users: [user], count}")
}

pub fn execute(_args: &Arguments, store: &SharedStore) -> InvocationResult {
    let store = lock_store(store)?;
    let users = store.users();
    Ok(ToolOutput::new(json!({ "users": users, "count": users.len() })))
}
