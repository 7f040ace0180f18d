//! Error types for the acceptance suite

use thiserror::Error;

#[derive(Error, Debug)]
pub enum E2eError {
    #[error("Application not reachable at {url} after {attempts} attempts")]
    AppUnreachable { url: String, attempts: usize },

    #[error("Browser session could not be started: {0}")]
    SessionStart(String),

    #[error("Assertion failed: {0}")]
    AssertionFailed(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No test matches '{0}'")]
    NoTestsSelected(String),

    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl E2eError {
    /// Build an assertion failure comparing an expected and an observed value.
    pub fn mismatch(what: &str, expected: impl std::fmt::Debug, actual: impl std::fmt::Debug) -> Self {
        E2eError::AssertionFailed(format!("{what}: expected {expected:?}, got {actual:?}"))
    }

    /// Whether this error is a failed expectation rather than a broken environment.
    pub fn is_assertion(&self) -> bool {
        matches!(self, E2eError::AssertionFailed(_))
    }
}

pub type E2eResult<T> = Result<T, E2eError>;
