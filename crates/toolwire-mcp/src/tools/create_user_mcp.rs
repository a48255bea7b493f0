//! Tool: create_user_mcp — Add a user to the in-memory store.

use serde_json::json;

use crate::schema::{Arguments, ParamSpec, ParamType};

use super::{lock_store, InvocationResult, SharedStore, ToolDescriptor, ToolError, ToolOutput};

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor::new("create_user_mcp", "Create a new user")
        .param(ParamSpec::required("name", ParamType::String))
        .param(ParamSpec::required("email", ParamType::String))
        .param(ParamSpec::required("age", ParamType::Integer))
        .output("{message, user: {id, name, email, age, created_at}}")
}

pub fn execute(args: &Arguments, store: &SharedStore) -> InvocationResult {
    let name = args.str("name")?;
    let email = args.str("email")?;
    let age = u32::try_from(args.i64("age")?)
        .map_err(|_| ToolError::invalid_arguments("Argument 'age' must be a non-negative integer"))?;

    let user = lock_store(store)?.create_user(name, email, age)?;

    Ok(ToolOutput::with_text(
        json!({ "message": "User created successfully", "user": user }),
        format!("Created user {} <{}>", user.name, user.email),
    ))
}
