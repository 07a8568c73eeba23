//! Tabelog MCP (Model Context Protocol) Server
//!
//! A stdio-based MCP server that exposes Tabelog restaurant scraping
//! as tools for MCP clients.

use std::sync::Arc;
use tabelog_mcp::core::config::Config;
use tabelog_mcp::core::services::Services;
use tabelog_mcp::mcp::McpServer;

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr) // Critical: stderr not stdout
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false) // No color codes
        .compact() // Concise format
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });

    // Create services
    let services = Arc::new(Services::new(config));

    // Create and run MCP server
    let mut server = McpServer::new(services);

    if let Err(e) = server.run().await {
        eprintln!("MCP server error: {e}");
        std::process::exit(1);
    }
}
