//! Registration of the built-in tools.

use crate::types::{Implementation, McpResult};

use super::{
    add_numbers, calculate_area, color_palette_generator, convert_temperature, create_todo_list,
    create_todo_mcp, create_user_mcp, generate_password, get_all_todos, get_all_users, get_app_stats,
    get_system_info, greet_user, multiply_numbers, text_analyzer, url_shortener, weather_info,
    SharedStore, ToolRegistry,
};

/// Names of the built-in tools, in registration order.
pub const BUILTIN_TOOLS: &[&str] = &[
    "greet_user",
    "add_numbers",
    "multiply_numbers",
    "create_user_mcp",
    "get_all_users",
    "create_todo_mcp",
    "get_all_todos",
    "create_todo_list",
    "calculate_area",
    "get_system_info",
    "get_app_stats",
    "generate_password",
    "convert_temperature",
    "text_analyzer",
    "url_shortener",
    "weather_info",
    "color_palette_generator",
];

impl ToolRegistry {
    /// Build a registry holding every built-in tool.
    ///
    /// `store` is injected into the tools that keep records; `server` is
    /// reported by `get_system_info`.
    pub fn builtin(store: SharedStore, server: Implementation) -> McpResult<Self> {
        let mut registry = ToolRegistry::new();

        registry.register(greet_user::descriptor(), greet_user::execute)?;
        registry.register(add_numbers::descriptor(), add_numbers::execute)?;
        registry.register(multiply_numbers::descriptor(), multiply_numbers::execute)?;

        let s = store.clone();
        registry.register(create_user_mcp::descriptor(), move |args| {
            create_user_mcp::execute(args, &s)
        })?;
        let s = store.clone();
        registry.register(get_all_users::descriptor(), move |args| {
            get_all_users::execute(args, &s)
        })?;
        let s = store.clone();
        registry.register(create_todo_mcp::descriptor(), move |args| {
            create_todo_mcp::execute(args, &s)
        })?;
        let s = store.clone();
        registry.register(get_all_todos::descriptor(), move |args| {
            get_all_todos::execute(args, &s)
        })?;

        registry.register(create_todo_list::descriptor(), create_todo_list::execute)?;
        registry.register(calculate_area::descriptor(), calculate_area::execute)?;
        registry.register(get_system_info::descriptor(), move |args| {
            get_system_info::execute(args, &server)
        })?;

        let tools_count = BUILTIN_TOOLS.len();
        registry.register(get_app_stats::descriptor(), move |args| {
            get_app_stats::execute(args, &store, tools_count)
        })?;

        registry.register(generate_password::descriptor(), generate_password::execute)?;
        registry.register(convert_temperature::descriptor(), convert_temperature::execute)?;
        registry.register(text_analyzer::descriptor(), text_analyzer::execute)?;
        registry.register(url_shortener::descriptor(), url_shortener::execute)?;
        registry.register(weather_info::descriptor(), weather_info::execute)?;
        registry.register(
            color_palette_generator::descriptor(),
            color_palette_generator::execute,
        )?;

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::shared_store;

    #[test]
    fn test_builtin_names_match_registration_order() {
        let registry = ToolRegistry::builtin(shared_store(), Implementation::default()).unwrap();
        let names: Vec<_> = registry.list().map(|d| d.name.as_str()).collect();
        assert_eq!(names, BUILTIN_TOOLS);
    }

    #[test]
    fn test_every_builtin_has_a_description() {
        let registry = ToolRegistry::builtin(shared_store(), Implementation::default()).unwrap();
        for descriptor in registry.list() {
            assert!(!descriptor.description.is_empty(), "{}", descriptor.name);
            assert!(!descriptor.output_shape.is_empty(), "{}", descriptor.name);
        }
    }
}
