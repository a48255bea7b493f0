//! Handshake state machine: `Uninitialized → Initializing → Ready → Closed`.

use crate::protocol::negotiation::negotiate_version;
use crate::types::{Implementation, InitializeParams, McpError, McpResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Initializing,
    Ready,
    Closed,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionState::Uninitialized => "uninitialized",
            SessionState::Initializing => "initializing",
            SessionState::Ready => "ready",
            SessionState::Closed => "closed",
        };
        f.write_str(name)
    }
}

/// State for one transport connection. Nothing here outlives the process.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    protocol_version: Option<String>,
    client_info: Option<Implementation>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::Uninitialized,
            protocol_version: None,
            client_info: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn protocol_version(&self) -> Option<&str> {
        self.protocol_version.as_deref()
    }

    pub fn client_info(&self) -> Option<&Implementation> {
        self.client_info.as_ref()
    }

    pub fn is_closed(&self) -> bool {
        self.state == SessionState::Closed
    }

    /// Handle an `initialize` request. Only valid once, from `Uninitialized`.
    ///
    /// On an unsupported version the session stays `Uninitialized` so the
    /// client may retry with another version.
    pub fn initialize(&mut self, params: &InitializeParams) -> McpResult<&'static str> {
        if self.state != SessionState::Uninitialized {
            return Err(self.out_of_sequence("initialize"));
        }

        let agreed = negotiate_version(&params.protocol_version)?;

        tracing::info!(
            "Initializing session with client: {} v{} (protocol {agreed})",
            params.client_info.name,
            params.client_info.version
        );

        self.protocol_version = Some(agreed.to_string());
        self.client_info = Some(params.client_info.clone());
        self.state = SessionState::Initializing;
        Ok(agreed)
    }

    /// Handle the `initialized` notification. Returns whether the state changed.
    pub fn mark_initialized(&mut self) -> bool {
        if self.state != SessionState::Initializing {
            tracing::warn!("Ignoring initialized notification while {}", self.state);
            return false;
        }
        self.state = SessionState::Ready;
        tracing::info!("MCP handshake complete");
        true
    }

    /// Fail with an out-of-sequence error unless the handshake is complete.
    pub fn require_ready(&self, method: &str) -> McpResult<()> {
        if self.state == SessionState::Ready {
            Ok(())
        } else {
            Err(self.out_of_sequence(method))
        }
    }

    /// Move to the terminal state.
    pub fn close(&mut self) {
        if self.state != SessionState::Closed {
            tracing::info!("Session closed (was {})", self.state);
            self.state = SessionState::Closed;
        }
    }

    fn out_of_sequence(&self, method: &str) -> McpError {
        McpError::OutOfSequence {
            method: method.to_string(),
            state: self.state.to_string(),
        }
    }
}
