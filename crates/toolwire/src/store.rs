//! Append-only in-memory store for users and todos.

use chrono::Utc;
use uuid::Uuid;

use crate::types::{Todo, ToolkitError, ToolkitResult, User};

/// In-memory container for user and todo records. Lives for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    users: Vec<User>,
    todos: Vec<Todo>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user and return the stored record.
    pub fn create_user(&mut self, name: &str, email: &str, age: u32) -> ToolkitResult<User> {
        if name.trim().is_empty() {
            return Err(ToolkitError::InvalidInput("User name must not be empty".to_string()));
        }

        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            age,
            created_at: Utc::now(),
        };
        self.users.push(user.clone());
        tracing::debug!("Stored user {} ({} total)", user.id, self.users.len());
        Ok(user)
    }

    /// Append a todo and return the stored record.
    pub fn create_todo(&mut self, task: &str) -> ToolkitResult<Todo> {
        if task.trim().is_empty() {
            return Err(ToolkitError::InvalidInput("Todo task must not be empty".to_string()));
        }

        let todo = Todo {
            id: Uuid::new_v4(),
            task: task.to_string(),
            completed: false,
            created_at: Utc::now(),
        };
        self.todos.push(todo.clone());
        tracing::debug!("Stored todo {} ({} total)", todo.id, self.todos.len());
        Ok(todo)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn completed_todos(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }
}
