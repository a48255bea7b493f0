//! Ad-hoc todo lists.

use crate::types::TodoList;

/// Collect `items` into a list, keeping their order. Blank items are kept.
pub fn todo_list<S: AsRef<str>>(items: &[S]) -> TodoList {
    let todo_list: Vec<String> = items.iter().map(|s| s.as_ref().to_string()).collect();
    TodoList {
        total_items: todo_list.len(),
        todo_list,
        status: "created".to_string(),
    }
}
