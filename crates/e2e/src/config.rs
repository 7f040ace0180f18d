//! Suite configuration

use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{E2eError, E2eResult};

/// Path of the address listing page.
pub const INDEX_PATH: &str = "/addressbook";

/// Path of the add-address form.
pub const ADD_PATH: &str = "/addressbook/add";

/// Browser driven through the WebDriver server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    #[default]
    Firefox,
    Chrome,
}

impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Firefox => "firefox",
            Browser::Chrome => "chrome",
        }
    }
}

/// Configuration for a suite run
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Base URL of the address book application
    pub base_url: String,

    /// WebDriver server (geckodriver, chromedriver, selenium)
    pub webdriver_url: String,

    /// Browser to request from the WebDriver server
    pub browser: Browser,

    /// Run the browser without a window
    pub headless: bool,

    /// Probe the application before launching any browser
    pub probe: bool,

    /// How long the reachability probe keeps retrying
    pub probe_timeout: Duration,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            webdriver_url: "http://localhost:4444".to_string(),
            browser: Browser::Firefox,
            headless: false,
            probe: true,
            probe_timeout: Duration::from_secs(10),
        }
    }
}

impl SuiteConfig {
    /// Validate URLs and normalize the base URL so routes can be appended.
    pub fn validated(mut self) -> E2eResult<Self> {
        self.base_url = normalize_base(&self.base_url)?;
        self.webdriver_url = normalize_base(&self.webdriver_url)?;
        Ok(self)
    }

    pub fn routes(&self) -> Routes {
        Routes::new(&self.base_url)
    }
}

/// Absolute URLs of the pages under test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    base: String,
}

impl Routes {
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Listing page, e.g. `http://localhost:8080/addressbook`
    pub fn index(&self) -> String {
        format!("{}{}", self.base, INDEX_PATH)
    }

    /// Add form, e.g. `http://localhost:8080/addressbook/add`
    pub fn add(&self) -> String {
        format!("{}{}", self.base, ADD_PATH)
    }
}

impl Default for Routes {
    fn default() -> Self {
        SuiteConfig::default().routes()
    }
}

fn normalize_base(raw: &str) -> E2eResult<String> {
    let url = Url::parse(raw)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(E2eError::InvalidConfig(format!(
            "unsupported scheme '{}' in {}",
            url.scheme(),
            raw
        )));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(E2eError::InvalidConfig(format!(
            "base URL must not carry a query or fragment: {raw}"
        )));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}
