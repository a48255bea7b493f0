//! Tool registration and lookup.

use std::collections::HashMap;
use std::sync::Arc;

use crate::schema::{Arguments, InputSchema, ParamSpec};
use crate::types::{McpError, McpResult, ToolDefinition};

use super::invocation::InvocationResult;

/// Handler invoked with validated arguments.
pub type ToolHandler = Arc<dyn Fn(&Arguments) -> InvocationResult + Send + Sync>;

/// Static description of a tool. Immutable once registered.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: InputSchema,
    /// Informal description of the returned structure.
    pub output_shape: String,
}

impl ToolDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema: InputSchema::new(),
            output_shape: String::new(),
        }
    }

    pub fn param(mut self, spec: ParamSpec) -> Self {
        self.input_schema = self.input_schema.param(spec);
        self
    }

    pub fn output(mut self, shape: impl Into<String>) -> Self {
        self.output_shape = shape.into();
        self
    }

    /// Wire form used by `tools/list`.
    pub fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name.clone(),
            description: Some(self.description.clone()),
            input_schema: self.input_schema.to_json_schema(),
        }
    }
}

/// A registry entry handed out by [`ToolRegistry::lookup`].
///
/// Owns shared handles to the descriptor and handler, so invoking it keeps no
/// borrow on the registry.
#[derive(Clone)]
pub struct RegisteredTool {
    descriptor: Arc<ToolDescriptor>,
    handler: ToolHandler,
}

impl RegisteredTool {
    pub fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// Run the handler directly. Callers are expected to validate first.
    pub fn call(&self, args: &Arguments) -> InvocationResult {
        (self.handler)(args)
    }
}

impl std::fmt::Debug for RegisteredTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredTool")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Insertion-ordered set of tools keyed by unique name.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool. Fails if a tool with the same name is already registered.
    pub fn register<F>(&mut self, descriptor: ToolDescriptor, handler: F) -> McpResult<()>
    where
        F: Fn(&Arguments) -> InvocationResult + Send + Sync + 'static,
    {
        if self.index.contains_key(&descriptor.name) {
            return Err(McpError::DuplicateTool(descriptor.name));
        }

        tracing::debug!("Registered tool {}", descriptor.name);
        self.index.insert(descriptor.name.clone(), self.tools.len());
        self.tools.push(RegisteredTool {
            descriptor: Arc::new(descriptor),
            handler: Arc::new(handler),
        });
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_tool<F>(mut self, descriptor: ToolDescriptor, handler: F) -> McpResult<Self>
    where
        F: Fn(&Arguments) -> InvocationResult + Send + Sync + 'static,
    {
        self.register(descriptor, handler)?;
        Ok(self)
    }

    /// Descriptors in registration order.
    pub fn list(&self) -> impl ExactSizeIterator<Item = &ToolDescriptor> + '_ {
        self.tools.iter().map(|t| t.descriptor.as_ref())
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.list().map(ToolDescriptor::definition).collect()
    }

    pub fn lookup(&self, name: &str) -> McpResult<RegisteredTool> {
        self.index
            .get(name)
            .map(|&i| self.tools[i].clone())
            .ok_or_else(|| McpError::ToolNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
