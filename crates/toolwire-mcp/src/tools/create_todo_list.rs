//! Tool: create_todo_list — Build a checklist from a list of items.

use crate::schema::{Arguments, ParamSpec, ParamType};

use super::{InvocationResult, ToolDescriptor, ToolOutput};

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor::new("create_todo_list", "Create a todo list from items")
        .param(ParamSpec::required("items", ParamType::StringList).describe("Items, in order"))
        .output("{todo_list, total_items, status}")
}

pub fn execute(args: &Arguments) -> InvocationResult {
    let list = toolwire::todo_list(&args.str_list("items")?);
    let text = format!("Created a todo list with {} items", list.total_items);
    Ok(ToolOutput {
        text: Some(text),
        ..ToolOutput::json(&list)?
    })
}
