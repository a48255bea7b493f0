//! Stdio transport — reads JSON-RPC from stdin, writes to stdout.

use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::protocol::ProtocolHandler;
use crate::types::{McpError, McpResult, RequestId};

use super::framing;

/// Line-delimited transport. One message is read, dispatched, and answered
/// before the next is read.
pub struct StdioTransport {
    handler: ProtocolHandler,
}

impl StdioTransport {
    pub fn new(handler: ProtocolHandler) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &ProtocolHandler {
        &self.handler
    }

    pub fn into_handler(self) -> ProtocolHandler {
        self.handler
    }

    /// Run the transport loop — reads from stdin, writes to stdout.
    pub async fn run(&mut self) -> McpResult<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Run the transport loop over arbitrary streams until EOF or shutdown.
    pub async fn serve<R, W>(&mut self, mut reader: R, mut writer: W) -> McpResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        tracing::info!("Stdio transport started");

        loop {
            buf.clear();
            let bytes_read = reader
                .read_until(b'\n', &mut buf)
                .await
                .map_err(McpError::Io)?;

            if bytes_read == 0 {
                tracing::info!("EOF on input, shutting down");
                self.handler.close();
                break;
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_line(line),
                Err(e) => {
                    tracing::warn!("Discarding non-UTF-8 input line: {e}");
                    Some(error_value(
                        RequestId::Null,
                        &McpError::ParseError(format!("Invalid UTF-8: {e}")),
                    ))
                }
            };

            if let Some(response) = response {
                let framed = framing::frame_message(&response)?;
                writer
                    .write_all(framed.as_bytes())
                    .await
                    .map_err(McpError::Io)?;
                writer.flush().await.map_err(McpError::Io)?;
            }

            if self.handler.session().is_closed() {
                tracing::info!("Session closed, stopping transport");
                break;
            }
        }

        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Option<Value> {
        match framing::parse_message(line) {
            Ok(msg) => self.handler.handle_message(msg),
            Err(frame_error) if frame_error.notification => {
                tracing::warn!("Dropping malformed notification: {}", frame_error.error);
                None
            }
            Err(frame_error) => {
                tracing::warn!("Rejected message: {}", frame_error.error);
                Some(error_value(frame_error.id, &frame_error.error))
            }
        }
    }
}

fn error_value(id: RequestId, error: &McpError) -> Value {
    serde_json::to_value(error.to_json_rpc_error(id)).unwrap_or(Value::Null)
}
