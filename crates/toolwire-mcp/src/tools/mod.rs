//! MCP tool registry and the built-in tool set.

pub mod builtin;
pub mod invocation;
pub mod registry;

pub mod add_numbers;
pub mod calculate_area;
pub mod color_palette_generator;
pub mod convert_temperature;
pub mod create_todo_list;
pub mod create_todo_mcp;
pub mod create_user_mcp;
pub mod generate_password;
pub mod get_all_todos;
pub mod get_all_users;
pub mod get_app_stats;
pub mod get_system_info;
pub mod greet_user;
pub mod multiply_numbers;
pub mod text_analyzer;
pub mod url_shortener;
pub mod weather_info;

use std::sync::{Arc, Mutex, MutexGuard};

use toolwire::MemoryStore;

pub use builtin::BUILTIN_TOOLS;
pub use invocation::{json_number, render_text, InvocationResult, ToolError, ToolErrorKind, ToolOutput};
pub use registry::{RegisteredTool, ToolDescriptor, ToolHandler, ToolRegistry};

/// Record store shared by the tools that read or append to it.
pub type SharedStore = Arc<Mutex<MemoryStore>>;

pub fn shared_store() -> SharedStore {
    Arc::new(Mutex::new(MemoryStore::new()))
}

/// Lock the store for the duration of one handler call.
pub(crate) fn lock_store(store: &SharedStore) -> Result<MutexGuard<'_, MemoryStore>, ToolError> {
    store
        .lock()
        .map_err(|_| ToolError::failed("Record store is unavailable (a previous call panicked while holding it)"))
}
