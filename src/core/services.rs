//! Shared service container for MCP tool handlers.

use crate::core::client::TabelogClient;
use crate::core::config::Config;
use std::sync::Arc;

/// Shared access to configuration and the scraping client for all tool
/// handlers.
pub struct Services {
    pub config: Arc<Config>,
    pub client: Arc<TabelogClient>,
}

impl Services {
    /// Create new services from configuration
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let client = Arc::new(TabelogClient::new(Arc::clone(&config)));
        Self { config, client }
    }
}
