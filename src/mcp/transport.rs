//! Stdio transport for MCP protocol
//!
//! Responses are written as newline-delimited JSON on stdout. Logging goes
//! to stderr so it never corrupts the protocol stream.

use crate::mcp::error::McpError;
use crate::mcp::protocol::JsonRpcResponse;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::debug;

pub struct StdioTransport {
    stdout: BufWriter<tokio::io::Stdout>,
}

impl StdioTransport {
    pub fn new() -> Self {
        Self {
            stdout: BufWriter::new(tokio::io::stdout()),
        }
    }

    /// Send a JSON-RPC response to stdout, one message per line.
    pub async fn send_response(&mut self, response: JsonRpcResponse) -> Result<(), McpError> {
        let line = match encode_response(&response)? {
            Some(line) => line,
            None => return Ok(()),
        };
        debug!("Sending: {}", line);

        self.stdout.write_all(line.as_bytes()).await?;
        self.stdout.write_all(b"\n").await?;
        self.stdout.flush().await?;

        Ok(())
    }
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize a response for the wire. Returns `None` for notification
/// acknowledgements, which must not be written back to the client.
fn encode_response(response: &JsonRpcResponse) -> Result<Option<String>, McpError> {
    if response.id.is_none() && response.result.is_none() && response.error.is_none() {
        return Ok(None);
    }
    Ok(Some(serde_json::to_string(response)?))
}
