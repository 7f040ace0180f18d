//! Address book acceptance suite - entry point
//!
//! Runs every acceptance test against a running address book and prints the
//! report on stdout. Without flags it targets `http://localhost:8080` with
//! Firefox through a WebDriver server on `http://localhost:4444`.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::error;

use addressbook_e2e::report::{self, ReportFormat};
use addressbook_e2e::runner::{exit_code, write_results};
use addressbook_e2e::{cases, Browser, E2eResult, SuiteConfig, SuiteResult, TestRunner};

#[derive(Parser, Debug)]
#[command(name = "addressbook-e2e")]
#[command(author, version, about = "Acceptance tests for the address book", long_about = None)]
struct Args {
    /// Base URL of the address book application
    #[arg(long, default_value = "http://localhost:8080")]
    base_url: String,

    /// WebDriver server (geckodriver, chromedriver, selenium)
    #[arg(long, default_value = "http://localhost:4444")]
    webdriver_url: String,

    /// Browser to drive
    #[arg(long, value_enum, default_value_t = Browser::Firefox)]
    browser: Browser,

    /// Run the browser without a window
    #[arg(long)]
    headless: bool,

    /// Do not check that the application answers before running
    #[arg(long)]
    skip_probe: bool,

    /// Seconds to wait for the application to answer
    #[arg(long, default_value = "10")]
    probe_timeout_secs: u64,

    /// Run only tests whose name contains this text
    #[arg(short, long)]
    filter: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Also write test-results.json into this directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Logs go to stderr, stdout carries the report
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let outcome = run(&args).await;

    match &outcome {
        Ok(results) => {
            match report::render(results, args.format) {
                Ok(rendered) => print!("{rendered}"),
                Err(e) => error!("Failed to render report: {}", e),
            }
            // Write failures never change the exit code of a completed run
            if let Some(dir) = &args.output {
                if let Err(e) = write_results(dir, results) {
                    error!("Failed to write results to {}: {}", dir.display(), e);
                }
            }
        }
        Err(e) => eprintln!("Error: {e}"),
    }

    std::process::exit(exit_code(&outcome));
}

async fn run(args: &Args) -> E2eResult<SuiteResult> {
    let config = SuiteConfig {
        base_url: args.base_url.clone(),
        webdriver_url: args.webdriver_url.clone(),
        browser: args.browser,
        headless: args.headless,
        probe: !args.skip_probe,
        probe_timeout: Duration::from_secs(args.probe_timeout_secs),
    };
    let runner = TestRunner::new(config)?;
    let suite = cases::all().select(args.filter.as_deref())?;

    runner.run(&suite).await
}
