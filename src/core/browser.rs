//! Shared headless Chrome session.
//!
//! One browser process serves all tool calls; each call opens and closes
//! its own page inside that session. Creation is lazy and single-flight:
//! the state mutex is held across the launch, so concurrent first callers
//! never race two Chrome processes into existence.

use crate::core::config::BrowserConfig;
use crate::core::error::{Result, TabelogError};
use chromiumoxide::browser::{Browser, BrowserConfig as ChromeConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Live browser session state.
pub struct BrowserState {
    /// Chrome handle. Locked briefly for page creation and teardown.
    browser: Mutex<Browser>,
    /// CDP event pump. Chrome stalls without it.
    handler_task: JoinHandle<()>,
}

/// Owner of the process-wide browser session.
pub struct BrowserHandle {
    config: BrowserConfig,
    state: Mutex<Option<Arc<BrowserState>>>,
}

impl BrowserHandle {
    /// Create a handle with no browser process started yet.
    pub fn new(config: BrowserConfig) -> Self {
        Self {
            config,
            state: Mutex::new(None),
        }
    }

    /// Ensure the session exists, launching Chrome on first call.
    ///
    /// Idempotent and race-free: callers that arrive while a launch is in
    /// progress wait on the mutex and then reuse the created session.
    pub async fn ensure(&self) -> Result<Arc<BrowserState>> {
        let mut guard = self.state.lock().await;

        if let Some(state) = guard.as_ref() {
            return Ok(Arc::clone(state));
        }

        info!("Launching headless Chrome");

        let mut builder = ChromeConfig::builder()
            .no_sandbox()
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .window_size(self.config.window_width, self.config.window_height);
        if let Some(path) = &self.config.executable {
            builder = builder.chrome_executable(path);
        }
        if !self.config.headless {
            builder = builder.with_head();
        }
        let chrome_config = builder.build().map_err(TabelogError::Browser)?;

        let (browser, mut handler) = Browser::launch(chrome_config)
            .await
            .map_err(|e| TabelogError::Browser(format!("Failed to launch browser: {e}")))?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    debug!("CDP handler event loop ended");
                    break;
                }
            }
        });

        info!("Headless Chrome launched");

        let state = Arc::new(BrowserState {
            browser: Mutex::new(browser),
            handler_task,
        });
        *guard = Some(Arc::clone(&state));

        Ok(state)
    }

    /// Open an isolated page in the shared session, ensuring it first.
    pub async fn new_page(&self, url: &str) -> Result<Page> {
        let state = self.ensure().await?;
        let browser = state.browser.lock().await;
        browser
            .new_page(url)
            .await
            .map_err(|e| TabelogError::Browser(format!("Failed to open page: {e}")))
    }

    /// Whether a session is currently live.
    pub async fn is_initialized(&self) -> bool {
        self.state.lock().await.is_some()
    }

    /// Tear down the session if present. Idempotent; safe when never
    /// initialized.
    pub async fn close(&self) {
        let mut guard = self.state.lock().await;
        if let Some(state) = guard.take() {
            info!("Shutting down browser");
            {
                let mut browser = state.browser.lock().await;
                if let Err(e) = browser.close().await {
                    warn!("Error closing browser: {e}");
                }
            }
            state.handler_task.abort();
            info!("Browser shut down");
        }
    }
}
