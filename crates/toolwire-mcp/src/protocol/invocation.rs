//! Validate-then-invoke path shared by `tools/call` and the REPL.

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde_json::Value;

use crate::schema::validate;
use crate::tools::{RegisteredTool, ToolError};
use crate::types::ToolCallResult;

/// Validate `arguments` against the tool's schema and run it.
///
/// Validation failures, handler errors, and handler panics all come back as
/// `isError: true` results.
pub fn invoke_tool(tool: &RegisteredTool, arguments: Option<&Value>) -> ToolCallResult {
    let args = match validate(arguments, &tool.descriptor().input_schema) {
        Ok(args) => args,
        Err(e) => {
            tracing::debug!("Rejected arguments for {}: {e}", tool.name());
            return failure(ToolError::from(e));
        }
    };

    let outcome = catch_unwind(AssertUnwindSafe(|| tool.call(&args)))
        .unwrap_or_else(|panic| Err(ToolError::panicked(panic_message(panic.as_ref()))));

    match outcome {
        Ok(output) => ToolCallResult::success(output.rendered_text(), output.value),
        Err(e) => {
            tracing::warn!("Tool {} failed: {e}", tool.name());
            failure(e)
        }
    }
}

fn failure(error: ToolError) -> ToolCallResult {
    ToolCallResult::error(error.message.clone(), Some(error.to_value()))
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        format!("Tool panicked: {s}")
    } else if let Some(s) = panic.downcast_ref::<String>() {
        format!("Tool panicked: {s}")
    } else {
        "Tool panicked".to_string()
    }
}
