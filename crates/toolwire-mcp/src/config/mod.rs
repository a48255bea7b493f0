//! Configuration loading and resolution.

use crate::types::{Implementation, SERVER_NAME, SERVER_VERSION};

/// Environment variable overriding the advertised server name.
pub const SERVER_NAME_ENV: &str = "TOOLWIRE_SERVER_NAME";

/// Identity the server advertises during the handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
    pub instructions: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: SERVER_NAME.to_string(),
            version: SERVER_VERSION.to_string(),
            instructions: None,
        }
    }
}

impl ServerConfig {
    /// Resolve the configuration: explicit value, then environment, then default.
    pub fn resolve(explicit_name: Option<&str>) -> Self {
        Self {
            name: resolve_server_name(explicit_name),
            ..Self::default()
        }
    }

    pub fn server_info(&self) -> Implementation {
        Implementation {
            name: self.name.clone(),
            version: self.version.clone(),
        }
    }
}

/// Resolve the advertised server name.
pub fn resolve_server_name(explicit: Option<&str>) -> String {
    if let Some(name) = explicit.filter(|n| !n.trim().is_empty()) {
        return name.to_string();
    }

    match std::env::var(SERVER_NAME_ENV) {
        Ok(name) if !name.trim().is_empty() => name,
        _ => SERVER_NAME.to_string(),
    }
}
