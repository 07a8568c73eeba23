//! tabelog_snapshot tool handler

use super::handler::{error_content, text_content, McpToolHandler};
use crate::core::services::Services;
use crate::core::types::SnapshotArgs;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct TabelogSnapshotHandler {
    services: Arc<Services>,
}

impl TabelogSnapshotHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for TabelogSnapshotHandler {
    fn name(&self) -> &str {
        "tabelog_snapshot"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "tabelog_snapshot".to_string(),
            description: "Take a snapshot of the Tabelog page for a specific region".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "region": {
                        "type": "string",
                        "description": "Region slug (e.g., 'kyoto', 'tokyo', 'osaka')",
                        "default": self.services.config.scrape.default_region
                    }
                },
                "required": []
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: SnapshotArgs = match serde_json::from_value(args) {
            Ok(a) => a,
            Err(e) => {
                return Ok(error_content(format!(
                    "Error: Invalid arguments for tabelog_snapshot: {e}"
                )))
            }
        };

        let region = args
            .region
            .unwrap_or_else(|| self.services.config.scrape.default_region.clone());

        // take_snapshot never fails; capture errors arrive as a
        // success=false result inside a non-error envelope.
        let result = self.services.client.take_snapshot(&region).await;
        let text = serde_json::to_string_pretty(&result)?;
        Ok(text_content(text))
    }
}
