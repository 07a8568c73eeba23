//! Scraping client orchestrating navigation and extraction.

use crate::core::browser::BrowserHandle;
use crate::core::config::Config;
use crate::core::error::{Result, TabelogError};
use crate::core::extract::{self, BASE_URL};
use crate::core::types::{ListingResult, PriceRange, Restaurant, SnapshotResult};
use chromiumoxide::Page;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Selector whose presence signals a loaded listing page.
const LISTING_SELECTOR: &str = ".list-rst";

/// Client over the shared browser session.
///
/// Each call opens its own page inside the session, so concurrent calls
/// do not disturb each other's DOM state.
pub struct TabelogClient {
    config: Arc<Config>,
    browser: BrowserHandle,
}

impl TabelogClient {
    pub fn new(config: Arc<Config>) -> Self {
        let browser = BrowserHandle::new(config.browser.clone());
        Self { config, browser }
    }

    /// Ranked-listing address for a region, sorted by rating descending.
    pub fn listing_url(region: &str) -> String {
        format!("{BASE_URL}/en/{region}/rstLst/RC/?SrtT=rt")
    }

    /// Create the shared browser session if absent. Idempotent.
    pub async fn initialize(&self) -> Result<()> {
        self.browser.ensure().await?;
        Ok(())
    }

    /// Tear down the session. Idempotent; safe when never initialized.
    pub async fn close(&self) {
        self.browser.close().await;
    }

    /// Scrape up to `limit` top-rated restaurants for `region`.
    ///
    /// A `price_range` drops restaurants whose parsed dinner price falls
    /// outside it and reranks the survivors.
    pub async fn scrape_restaurants(
        &self,
        region: &str,
        limit: u32,
        price_range: Option<&PriceRange>,
    ) -> Result<ListingResult> {
        let url = Self::listing_url(region);
        info!("Scraping top restaurants: region={region} limit={limit}");

        let page = self.browser.new_page("about:blank").await?;
        let result = self.scrape_page(&page, &url, limit as usize).await;
        if let Err(e) = page.close().await {
            debug!("Error closing page: {e}");
        }

        let mut restaurants = result?;
        if let Some(range) = price_range {
            let before = restaurants.len();
            restaurants = extract::apply_price_filter(restaurants, range);
            debug!(
                "Price filter kept {} of {} restaurants",
                restaurants.len(),
                before
            );
        }

        info!("Scraped {} restaurants for {region}", restaurants.len());
        Ok(ListingResult::new(region.to_string(), restaurants))
    }

    async fn scrape_page(
        &self,
        page: &Page,
        url: &str,
        limit: usize,
    ) -> Result<Vec<Restaurant>> {
        page.set_user_agent(self.config.browser.user_agent.as_str())
            .await
            .map_err(|e| TabelogError::Browser(format!("Failed to set user agent: {e}")))?;

        page.goto(url).await.map_err(|e| TabelogError::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        self.wait_for_selector(page, url, LISTING_SELECTOR).await?;

        let html = page
            .content()
            .await
            .map_err(|e| TabelogError::Browser(format!("Failed to read page content: {e}")))?;

        Ok(extract::extract_restaurants(&html, limit))
    }

    /// Poll for a selector until it appears or the configured timeout
    /// elapses.
    async fn wait_for_selector(&self, page: &Page, url: &str, selector: &str) -> Result<()> {
        let timeout_secs = self.config.scrape.element_timeout_secs;
        let timeout = Duration::from_secs(timeout_secs);
        let poll_interval = Duration::from_millis(250);
        let start = std::time::Instant::now();

        loop {
            if page.find_element(selector).await.is_ok() {
                debug!(
                    "Selector '{selector}' present after {}ms",
                    start.elapsed().as_millis()
                );
                return Ok(());
            }
            if start.elapsed() >= timeout {
                return Err(TabelogError::ElementWaitTimeout {
                    url: url.to_string(),
                    selector: selector.to_string(),
                    timeout_secs,
                });
            }
            tokio::time::sleep(poll_interval).await;
        }
    }

    /// Capture a full-page snapshot of the region's listing page.
    ///
    /// Never fails toward the caller: any navigation or capture error is
    /// folded into `SnapshotResult { success: false, .. }`. The PNG is
    /// written under the configured snapshot directory; the response
    /// carries only the summary.
    pub async fn take_snapshot(&self, region: &str) -> SnapshotResult {
        let url = Self::listing_url(region);
        info!("Taking snapshot: region={region}");

        let outcome = async {
            let page = self.browser.new_page("about:blank").await?;
            let result = self.capture_page(&page, &url, region).await;
            if let Err(e) = page.close().await {
                debug!("Error closing page: {e}");
            }
            result
        }
        .await;

        match outcome {
            Ok(path) => SnapshotResult {
                success: true,
                message: format!(
                    "Snapshot taken for {region} region. Saved to {}.",
                    path.display()
                ),
                url,
            },
            Err(e) => {
                warn!("Snapshot failed for {region}: {e}");
                SnapshotResult {
                    success: false,
                    message: format!("Error taking snapshot: {e}"),
                    url,
                }
            }
        }
    }

    async fn capture_page(&self, page: &Page, url: &str, region: &str) -> Result<PathBuf> {
        use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
        use chromiumoxide::page::ScreenshotParams;

        page.goto(url).await.map_err(|e| TabelogError::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        page.wait_for_navigation()
            .await
            .map_err(|e| TabelogError::Navigation {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let png = page
            .screenshot(
                ScreenshotParams::builder()
                    .format(CaptureScreenshotFormat::Png)
                    .full_page(true)
                    .build(),
            )
            .await
            .map_err(|e| TabelogError::Browser(format!("Screenshot failed: {e}")))?;

        let dir = &self.config.snapshot.dir;
        tokio::fs::create_dir_all(dir).await?;
        let filename = format!(
            "tabelog_{region}_{}.png",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        let path = dir.join(filename);
        tokio::fs::write(&path, &png).await?;

        debug!("Snapshot written to {}", path.display());
        Ok(path)
    }
}
