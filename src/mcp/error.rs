//! MCP-specific error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<crate::core::error::TabelogError> for McpError {
    fn from(err: crate::core::error::TabelogError) -> Self {
        use crate::core::error::TabelogError;
        match err {
            TabelogError::Config(s) => McpError::InvalidParams(format!("Configuration error: {s}")),
            TabelogError::Navigation { url, reason } => {
                McpError::InternalError(format!("Navigation failed for {url}: {reason}"))
            }
            TabelogError::ElementWaitTimeout { .. } => McpError::InternalError(err.to_string()),
            TabelogError::Browser(s) => McpError::InternalError(format!("Browser error: {s}")),
            TabelogError::Io(e) => McpError::InternalError(format!("I/O error: {e}")),
            TabelogError::Serde(e) => McpError::InternalError(format!("Serialization error: {e}")),
            TabelogError::Toml(e) => {
                McpError::InternalError(format!("Configuration parse error: {e}"))
            }
        }
    }
}
