//! Toolwire MCP Server — typed tools over line-delimited JSON-RPC on stdio.

pub mod config;
pub mod protocol;
pub mod repl;
pub mod schema;
pub mod session;
pub mod tools;
pub mod transport;
pub mod types;

pub use config::ServerConfig;
pub use protocol::ProtocolHandler;
pub use session::{Session, SessionState};
pub use tools::{ToolDescriptor, ToolRegistry};
pub use transport::StdioTransport;
