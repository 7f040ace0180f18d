//! Test runner: probes the application, then runs each case in its own
//! browser session

use std::path::{Path, PathBuf};
use std::time::Instant;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::app;
use crate::browser::{Launcher, Page, WebDriverLauncher};
use crate::case::TestCase;
use crate::config::{Routes, SuiteConfig};
use crate::error::{E2eError, E2eResult};
use crate::suite::TestSuite;

/// How a test ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Passed,
    /// An expectation did not hold
    Failed,
    /// The environment broke: browser, driver, missing element
    Errored,
}

/// Where a test stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    SetUp,
    Test,
    TearDown,
}

/// Result of running a single test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    pub name: String,
    pub outcome: Outcome,
    pub phase: Option<Phase>,
    pub duration_ms: u64,
    pub error: Option<String>,
}

impl TestResult {
    fn passed(name: String, duration_ms: u64) -> Self {
        Self {
            name,
            outcome: Outcome::Passed,
            phase: None,
            duration_ms,
            error: None,
        }
    }

    fn from_error(name: String, phase: Phase, err: &E2eError, duration_ms: u64) -> Self {
        let outcome = if err.is_assertion() {
            Outcome::Failed
        } else {
            Outcome::Errored
        };
        Self {
            name,
            outcome,
            phase: Some(phase),
            duration_ms,
            error: Some(err.to_string()),
        }
    }

    pub fn success(&self) -> bool {
        self.outcome == Outcome::Passed
    }
}

/// Result of running a whole suite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResult {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub duration_ms: u64,
    pub results: Vec<TestResult>,
}

impl SuiteResult {
    pub fn from_results(results: Vec<TestResult>, duration_ms: u64) -> Self {
        let count = |outcome: Outcome| results.iter().filter(|r| r.outcome == outcome).count();
        Self {
            total: results.len(),
            passed: count(Outcome::Passed),
            failed: count(Outcome::Failed),
            errors: count(Outcome::Errored),
            duration_ms,
            results,
        }
    }

    pub fn was_successful(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }
}

/// Runs suites against one application with one kind of browser
pub struct TestRunner {
    config: SuiteConfig,
    launcher: Box<dyn Launcher>,
}

impl TestRunner {
    /// Create a runner that opens sessions on the configured WebDriver server
    pub fn new(config: SuiteConfig) -> E2eResult<Self> {
        let config = config.validated()?;
        let launcher = WebDriverLauncher::new(&config);
        Self::with_launcher(config, launcher)
    }

    /// Create a runner with a custom session launcher
    pub fn with_launcher(config: SuiteConfig, launcher: impl Launcher + 'static) -> E2eResult<Self> {
        Ok(Self {
            config: config.validated()?,
            launcher: Box::new(launcher),
        })
    }

    pub fn routes(&self) -> Routes {
        self.config.routes()
    }

    /// Fail fast when the application does not answer.
    pub async fn probe(&self) -> E2eResult<()> {
        if !self.config.probe {
            debug!("Reachability probe disabled");
            return Ok(());
        }
        app::wait_until_reachable(&self.routes().index(), self.config.probe_timeout).await?;
        Ok(())
    }

    /// Probe the application, then run every case sequentially.
    pub async fn run(&self, suite: &TestSuite) -> E2eResult<SuiteResult> {
        self.probe().await?;
        Ok(self.run_cases(suite).await)
    }

    /// Run every case sequentially; one failing case never stops the others.
    pub async fn run_cases(&self, suite: &TestSuite) -> SuiteResult {
        let start = Instant::now();
        let routes = self.routes();

        info!(
            "Running {} test(s) against {} with {}",
            suite.len(),
            self.config.base_url,
            self.launcher.describe()
        );

        let mut results = Vec::with_capacity(suite.len());
        for case in suite.cases() {
            let result = self.run_case(case.as_ref(), &routes).await;
            match result.outcome {
                Outcome::Passed => info!("✓ {} ({} ms)", result.name, result.duration_ms),
                _ => error!(
                    "✗ {} - {}",
                    result.name,
                    result.error.as_deref().unwrap_or("unknown error")
                ),
            }
            results.push(result);
        }

        let result = SuiteResult::from_results(results, start.elapsed().as_millis() as u64);
        info!(
            "Test Results: {} passed, {} failed, {} errors ({} ms)",
            result.passed, result.failed, result.errors, result.duration_ms
        );
        result
    }

    /// Run one case: open a session, set up, run, and always close the session.
    pub async fn run_case(&self, case: &dyn TestCase, routes: &Routes) -> TestResult {
        let start = Instant::now();
        let name = case.name();
        debug!("Running test: {}", name);

        let page = match self.launcher.launch().await {
            Ok(page) => page,
            Err(e) => {
                let elapsed = start.elapsed().as_millis() as u64;
                return TestResult::from_error(name, Phase::SetUp, &e, elapsed);
            }
        };

        let body = set_up_and_run(case, page.as_ref(), routes).await;

        let closed = page.close().await;
        let elapsed = start.elapsed().as_millis() as u64;

        match (body, closed) {
            (Ok(()), Ok(())) => TestResult::passed(name, elapsed),
            (Ok(()), Err(e)) => TestResult::from_error(name, Phase::TearDown, &e, elapsed),
            (Err((phase, e)), closed) => {
                if let Err(close_err) = closed {
                    warn!("{}: tear-down also failed: {}", name, close_err);
                }
                TestResult::from_error(name, phase, &e, elapsed)
            }
        }
    }
}

async fn set_up_and_run(
    case: &dyn TestCase,
    page: &dyn Page,
    routes: &Routes,
) -> Result<(), (Phase, E2eError)> {
    case.landing()
        .open(page, routes)
        .await
        .map_err(|e| (Phase::SetUp, e))?;
    case.run(page, routes).await.map_err(|e| (Phase::Test, e))
}

/// Process exit code when every test passed
pub const EXIT_PASSED: i32 = 0;

/// Process exit code when any test failed or errored
pub const EXIT_FAILED: i32 = 1;

/// Process exit code when the run could not start
pub const EXIT_NOT_STARTED: i32 = 2;

/// Map the outcome of a run to the process exit code.
pub fn exit_code(run: &E2eResult<SuiteResult>) -> i32 {
    match run {
        Ok(results) if results.was_successful() => EXIT_PASSED,
        Ok(_) => EXIT_FAILED,
        Err(_) => EXIT_NOT_STARTED,
    }
}

/// Write suite results to `test-results.json` inside `dir`
pub fn write_results(dir: &Path, results: &SuiteResult) -> E2eResult<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let path = dir.join("test-results.json");
    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(&path, json)?;

    info!("Results written to: {}", path.display());
    Ok(path)
}
