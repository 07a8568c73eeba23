//! MCP tool implementations
//!
//! This module contains the tool handlers that expose the Tabelog
//! scraping client to MCP clients.

pub mod handler;
pub mod registry;
pub mod tabelog_snapshot;
pub mod tabelog_top;

pub use handler::{error_content, text_content, McpToolHandler};
pub use registry::ToolRegistry;
pub use tabelog_snapshot::TabelogSnapshotHandler;
pub use tabelog_top::TabelogTopHandler;
