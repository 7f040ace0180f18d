//! Browser sessions driven through WebDriver
//!
//! Test cases only see the [`Page`] trait: a handful of DOM interactions by
//! element id or CSS selector. [`WebDriverLauncher`] opens real sessions via
//! `thirtyfour`; anything else implementing [`Launcher`] can stand in for it.

use async_trait::async_trait;
use thirtyfour::prelude::*;
use thirtyfour::ChromiumLikeCapabilities;
use tracing::{debug, info, warn};

use crate::config::{Browser, SuiteConfig};
use crate::error::{E2eError, E2eResult};

/// One open browser window, exclusively owned by a single test
#[async_trait]
pub trait Page: Send + Sync {
    /// Navigate to an absolute URL and wait for the page load.
    async fn goto(&self, url: &str) -> E2eResult<()>;

    async fn current_url(&self) -> E2eResult<String>;

    async fn title(&self) -> E2eResult<String>;

    /// Type text into the element with the given id.
    async fn type_into(&self, id: &str, text: &str) -> E2eResult<()>;

    /// Click the element with the given id.
    async fn click(&self, id: &str) -> E2eResult<()>;

    /// Rendered text of every element matching a CSS selector, in DOM order.
    async fn texts(&self, selector: &str) -> E2eResult<Vec<String>>;

    /// End the session. Consumes the page so it cannot be used afterwards.
    async fn close(self: Box<Self>) -> E2eResult<()>;
}

/// Opens browser sessions
#[async_trait]
pub trait Launcher: Send + Sync {
    async fn launch(&self) -> E2eResult<Box<dyn Page>>;

    /// Short description for logs and reports.
    fn describe(&self) -> String;
}

/// Launches sessions on a WebDriver server
#[derive(Debug, Clone)]
pub struct WebDriverLauncher {
    webdriver_url: String,
    browser: Browser,
    headless: bool,
}

impl WebDriverLauncher {
    pub fn new(config: &SuiteConfig) -> Self {
        Self {
            webdriver_url: config.webdriver_url.clone(),
            browser: config.browser,
            headless: config.headless,
        }
    }

    async fn connect(&self) -> WebDriverResult<WebDriver> {
        let server = self.webdriver_url.as_str();
        match self.browser {
            Browser::Firefox => {
                let mut caps = DesiredCapabilities::firefox();
                if self.headless {
                    caps.set_headless()?;
                }
                WebDriver::new(server, caps).await
            }
            Browser::Chrome => {
                let mut caps = DesiredCapabilities::chrome();
                if self.headless {
                    caps.set_headless()?;
                }
                WebDriver::new(server, caps).await
            }
        }
    }
}

#[async_trait]
impl Launcher for WebDriverLauncher {
    async fn launch(&self) -> E2eResult<Box<dyn Page>> {
        debug!("Opening {} session via {}", self.browser.as_str(), self.webdriver_url);

        let driver = self.connect().await.map_err(|e| {
            E2eError::SessionStart(format!(
                "{} via {}: {}",
                self.browser.as_str(),
                self.webdriver_url,
                e
            ))
        })?;

        info!("Browser session started ({})", self.browser.as_str());
        Ok(Box::new(WebDriverPage { driver }))
    }

    fn describe(&self) -> String {
        let mode = if self.headless { "headless " } else { "" };
        format!("{}{} via {}", mode, self.browser.as_str(), self.webdriver_url)
    }
}

/// [`Page`] backed by a live WebDriver session
pub struct WebDriverPage {
    driver: WebDriver,
}

impl WebDriverPage {
    async fn element(&self, id: &str) -> E2eResult<WebElement> {
        self.driver
            .find(By::Id(id))
            .await
            .map_err(|e| E2eError::ElementNotFound(format!("#{id}: {e}")))
    }
}

#[async_trait]
impl Page for WebDriverPage {
    async fn goto(&self, url: &str) -> E2eResult<()> {
        debug!("goto {}", url);
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn current_url(&self) -> E2eResult<String> {
        Ok(self.driver.current_url().await?.to_string())
    }

    async fn title(&self) -> E2eResult<String> {
        Ok(self.driver.title().await?)
    }

    async fn type_into(&self, id: &str, text: &str) -> E2eResult<()> {
        debug!("type into #{}: {}", id, text);
        self.element(id).await?.send_keys(text).await?;
        Ok(())
    }

    async fn click(&self, id: &str) -> E2eResult<()> {
        debug!("click #{}", id);
        self.element(id).await?.click().await?;
        Ok(())
    }

    async fn texts(&self, selector: &str) -> E2eResult<Vec<String>> {
        let elements = self.driver.find_all(By::Css(selector)).await?;
        debug!("{} element(s) match {}", elements.len(), selector);

        let mut texts = Vec::with_capacity(elements.len());
        for element in elements {
            texts.push(element.text().await?);
        }
        Ok(texts)
    }

    async fn close(self: Box<Self>) -> E2eResult<()> {
        if let Err(e) = self.driver.quit().await {
            warn!("Failed to end browser session: {}", e);
            return Err(e.into());
        }
        debug!("Browser session closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launcher_description_names_browser_and_server() {
        let launcher = WebDriverLauncher::new(&SuiteConfig::default());
        assert_eq!(launcher.describe(), "firefox via http://localhost:4444");

        let launcher = WebDriverLauncher::new(&SuiteConfig {
            browser: Browser::Chrome,
            headless: true,
            ..Default::default()
        });
        assert_eq!(launcher.describe(), "headless chrome via http://localhost:4444");
    }
}
