//! Core domain logic (protocol-agnostic).
//!
//! Scraping client, browser session, extraction engine, configuration,
//! and domain types. The MCP adapter builds on top of this module.

pub mod browser;
pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod services;
pub mod types;
