//! Error types for the Tabelog scraping core.
//!
//! Protocol-specific error handling (JSON-RPC error codes, tool
//! envelopes) lives in the MCP adapter module.

use thiserror::Error;

/// Result type alias for scraping operations
pub type Result<T> = std::result::Result<T, TabelogError>;

/// Main error type for the scraping core
#[derive(Error, Debug)]
pub enum TabelogError {
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Navigation failed for {url}: {reason}")]
    Navigation { url: String, reason: String },

    #[error("Timed out after {timeout_secs}s waiting for '{selector}' on {url}")]
    ElementWaitTimeout {
        url: String,
        selector: String,
        timeout_secs: u64,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl TabelogError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error came from page navigation or element waits
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            TabelogError::Navigation { .. } | TabelogError::ElementWaitTimeout { .. }
        )
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, TabelogError::Config(_))
    }
}
