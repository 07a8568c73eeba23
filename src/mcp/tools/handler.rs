//! Tool handler trait and envelope helpers

use crate::mcp::error::McpError;
use crate::mcp::protocol::{ContentBlock, ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::Value;

/// Trait for MCP tool implementations
///
/// Each tool (tabelog_top, tabelog_snapshot) implements this trait to
/// provide schema and execution logic. `execute` returns `Err` only for
/// adapter-internal failures; domain failures are enveloped with
/// `isError: true` and never propagate past this boundary.
#[async_trait]
pub trait McpToolHandler: Send + Sync {
    /// Tool name (e.g., "tabelog_top")
    fn name(&self) -> &str;

    /// Tool schema for tools/list
    fn schema(&self) -> ToolSchema;

    /// Execute tool with arguments
    async fn execute(&self, args: Value) -> Result<ToolResult, McpError>;
}

/// Successful text envelope.
pub fn text_content(text: String) -> ToolResult {
    ToolResult {
        content: vec![ContentBlock::Text { text }],
        is_error: false,
    }
}

/// Error text envelope (`isError: true`).
pub fn error_content(text: String) -> ToolResult {
    ToolResult {
        content: vec![ContentBlock::Text { text }],
        is_error: true,
    }
}
