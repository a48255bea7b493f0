//! MCP protocol handling — JSON-RPC dispatch.

pub mod handler;
pub mod invocation;
pub mod negotiation;
pub mod validator;

pub use handler::ProtocolHandler;
pub use invocation::invoke_tool;
