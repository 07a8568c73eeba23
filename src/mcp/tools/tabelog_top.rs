//! tabelog_top tool handler

use super::handler::{error_content, text_content, McpToolHandler};
use crate::core::services::Services;
use crate::core::types::TopArgs;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct TabelogTopHandler {
    services: Arc<Services>,
}

impl TabelogTopHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for TabelogTopHandler {
    fn name(&self) -> &str {
        "tabelog_top"
    }

    fn schema(&self) -> ToolSchema {
        let defaults = &self.services.config.scrape;
        ToolSchema {
            name: "tabelog_top".to_string(),
            description:
                "Get top-rated restaurants from Tabelog for a specific region with optional \
                 price filtering"
                    .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "region": {
                        "type": "string",
                        "description": "Region slug (e.g., 'kyoto', 'tokyo', 'osaka')",
                        "default": defaults.default_region
                    },
                    "limit": {
                        "type": "integer",
                        "description": format!(
                            "Number of restaurants to return (max {} per page)",
                            defaults.max_limit
                        ),
                        "default": defaults.default_limit,
                        "minimum": 1,
                        "maximum": defaults.max_limit
                    },
                    "priceRange": {
                        "type": "object",
                        "description": "Price range filter for dinner prices (in JPY)",
                        "properties": {
                            "min": {
                                "type": "integer",
                                "description": "Minimum dinner price in JPY",
                                "minimum": 0
                            },
                            "max": {
                                "type": "integer",
                                "description": "Maximum dinner price in JPY",
                                "minimum": 0
                            }
                        }
                    }
                },
                "required": []
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        // Structural validation only; malformed shapes become error
        // envelopes, never a crash.
        let args: TopArgs = match serde_json::from_value(args) {
            Ok(a) => a,
            Err(e) => {
                return Ok(error_content(format!(
                    "Error: Invalid arguments for tabelog_top: {e}"
                )))
            }
        };

        // Default-filling is a separate step from validation.
        let (region, limit) = resolve_args(&args, &self.services.config.scrape);

        match self
            .services
            .client
            .scrape_restaurants(&region, limit, args.price_range.as_ref())
            .await
        {
            Ok(result) => {
                let text = serde_json::to_string_pretty(&result)?;
                Ok(text_content(text))
            }
            Err(e) => Ok(error_content(format!("Error: {e}"))),
        }
    }
}

/// Fill config defaults for omitted fields and clamp `limit` to the
/// configured cap. A zero `limit` counts as absent and takes the default.
fn resolve_args(args: &TopArgs, scrape: &crate::core::config::ScrapeConfig) -> (String, u32) {
    let region = args
        .region
        .clone()
        .unwrap_or_else(|| scrape.default_region.clone());
    let limit = args
        .limit
        .filter(|l| *l > 0)
        .unwrap_or(scrape.default_limit)
        .min(scrape.max_limit);
    (region, limit)
}
