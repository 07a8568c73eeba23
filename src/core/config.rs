//! Configuration management for the Tabelog MCP server.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, TabelogError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub scrape: ScrapeConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
    #[serde(default)]
    pub snapshot: SnapshotConfig,
}

/// Scrape behavior configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScrapeConfig {
    /// Region slug used when the caller omits one
    #[serde(default = "default_region")]
    pub default_region: String,

    /// Result count used when the caller omits a limit
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Hard cap on requested limits (tabelog listing pages carry 20 rows)
    #[serde(default = "default_max_limit")]
    pub max_limit: u32,

    /// Seconds to wait for the listing container before failing
    #[serde(default = "default_element_timeout")]
    pub element_timeout_secs: u64,
}

/// Headless browser configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BrowserConfig {
    /// Run Chrome headless (disable only for local debugging)
    #[serde(default = "default_headless")]
    pub headless: bool,

    #[serde(default = "default_window_width")]
    pub window_width: u32,

    #[serde(default = "default_window_height")]
    pub window_height: u32,

    /// User-Agent override sent with every page, reduces bot blocking
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Explicit Chrome executable path; autodetected when unset
    #[serde(default)]
    pub executable: Option<PathBuf>,
}

/// Snapshot artifact configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnapshotConfig {
    /// Directory where full-page PNGs are written
    #[serde(default = "default_snapshot_dir")]
    pub dir: PathBuf,
}

// Default value functions
fn default_region() -> String {
    "kyoto".to_string()
}

fn default_limit() -> u32 {
    10
}

fn default_max_limit() -> u32 {
    20
}

fn default_element_timeout() -> u64 {
    10
}

fn default_headless() -> bool {
    true
}

fn default_window_width() -> u32 {
    1280
}

fn default_window_height() -> u32 {
    720
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
        .to_string()
}

fn default_snapshot_dir() -> PathBuf {
    env::temp_dir().join("tabelog-mcp")
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            default_region: default_region(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            element_timeout_secs: default_element_timeout(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: default_headless(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            user_agent: default_user_agent(),
            executable: None,
        }
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            dir: default_snapshot_dir(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| TabelogError::Config(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File resolution order:
    /// 1. TABELOG_MCP_CONFIG env var
    /// 2. ~/.config/tabelog-mcp/config.toml
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("TABELOG_MCP_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let user_config = Self::user_config_file();
            if user_config.exists() {
                Self::from_file(user_config)?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Default per-user config file location
    pub fn user_config_file() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tabelog-mcp")
            .join("config.toml")
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(region) = env::var("TABELOG_MCP_REGION") {
            self.scrape.default_region = region;
        }
        if let Ok(limit) = env::var("TABELOG_MCP_LIMIT") {
            if let Ok(limit) = limit.parse() {
                self.scrape.default_limit = limit;
            }
        }
        if let Ok(max) = env::var("TABELOG_MCP_MAX_LIMIT") {
            if let Ok(max) = max.parse() {
                self.scrape.max_limit = max;
            }
        }
        if let Ok(secs) = env::var("TABELOG_MCP_ELEMENT_TIMEOUT") {
            if let Ok(secs) = secs.parse() {
                self.scrape.element_timeout_secs = secs;
            }
        }
        if let Ok(headless) = env::var("TABELOG_MCP_HEADLESS") {
            self.browser.headless = headless != "0" && headless.to_lowercase() != "false";
        }
        if let Ok(path) = env::var("TABELOG_MCP_CHROME") {
            self.browser.executable = Some(PathBuf::from(path));
        }
        if let Ok(dir) = env::var("TABELOG_MCP_SNAPSHOT_DIR") {
            self.snapshot.dir = PathBuf::from(dir);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.scrape.max_limit == 0 || self.scrape.max_limit > 50 {
            return Err(TabelogError::Config(format!(
                "scrape.max_limit must be between 1 and 50, got {}",
                self.scrape.max_limit
            )));
        }
        if self.scrape.default_limit == 0 {
            return Err(TabelogError::Config(
                "scrape.default_limit must be at least 1".to_string(),
            ));
        }
        if self.scrape.element_timeout_secs == 0 {
            return Err(TabelogError::Config(
                "scrape.element_timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.scrape.default_region.trim().is_empty() {
            return Err(TabelogError::Config(
                "scrape.default_region must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scrape.default_region, "kyoto");
        assert_eq!(config.scrape.default_limit, 10);
        assert_eq!(config.scrape.max_limit, 20);
        assert_eq!(config.scrape.element_timeout_secs, 10);
        assert!(config.browser.headless);
    }

    #[test]
    fn test_from_file_partial_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[scrape]\ndefault_region = \"osaka\"\nmax_limit = 15\n"
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.scrape.default_region, "osaka");
        assert_eq!(config.scrape.max_limit, 15);
        // Untouched sections fall back to defaults
        assert_eq!(config.scrape.default_limit, 10);
        assert_eq!(config.browser.window_width, 1280);
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not toml {{").unwrap();
        assert!(Config::from_file(file.path()).is_err());
    }

    #[test]
    fn test_from_file_missing() {
        let result = Config::from_file("/nonexistent/tabelog-mcp.toml");
        assert!(matches!(result, Err(TabelogError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_max_limit() {
        let mut config = Config::default();
        config.scrape.max_limit = 0;
        assert!(config.validate().is_err());

        config.scrape.max_limit = 51;
        assert!(config.validate().is_err());

        config.scrape.max_limit = 50;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.scrape.element_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_region() {
        let mut config = Config::default();
        config.scrape.default_region = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
