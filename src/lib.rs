//! Tabelog MCP - restaurant scraping tools over the Model Context Protocol
//!
//! A stdio MCP server exposing two tools backed by a shared headless
//! Chrome session:
//!
//! - `tabelog_top`: scrape the top-rated restaurants for a region
//! - `tabelog_snapshot`: capture a full-page screenshot of a region's
//!   listing page
//!
//! # Architecture
//!
//! - **core**: domain logic (protocol-agnostic)
//!   - config, error, types
//!   - browser (shared Chrome session, single-flight lazy launch)
//!   - extract (listing-page HTML to restaurant records)
//!   - client (navigation + extraction orchestration)
//!   - services (unified service container)
//!
//! - **mcp**: MCP adapter (depends on core)
//!   - server, handlers, tools, protocol, transport

// Core domain logic (protocol-agnostic)
pub mod core;

// MCP (Model Context Protocol) adapter
pub mod mcp;

// Re-export commonly used types for convenience
pub use crate::core::client::TabelogClient;
pub use crate::core::config::Config;
pub use crate::core::error::{Result, TabelogError};
pub use crate::core::services::Services;
pub use crate::core::types::*;
