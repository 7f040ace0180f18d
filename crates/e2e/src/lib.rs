//! Address Book Acceptance Suite
//!
//! Browser-driven acceptance tests for the address book web application.
//! The application runs out of process; the suite reaches it over HTTP and
//! drives a real browser through a WebDriver server.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Acceptance Suite Runner (Rust)              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  TestRunner                                                 │
//! │    ├── probe() -> GET /addressbook until it answers         │
//! │    ├── run_case(case) per TestCase:                         │
//! │    │     ├── Launcher::launch() -> Box<dyn Page>            │
//! │    │     ├── set-up: landing page, exact URL + title        │
//! │    │     ├── TestCase::run(page)                            │
//! │    │     └── tear-down: Page::close() on every path         │
//! │    └── SuiteResult -> text / JSON report                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  cases::all()                                               │
//! │    ├── AddressesIndex::index_loads                          │
//! │    ├── AddressesIndex::index_add_link                       │
//! │    └── AddressesAdd::address_add                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod address;
pub mod app;
pub mod browser;
pub mod case;
pub mod cases;
pub mod config;
pub mod error;
pub mod pages;
pub mod report;
pub mod runner;
pub mod suite;

pub use browser::{Launcher, Page};
pub use case::TestCase;
pub use config::{Browser, Routes, SuiteConfig};
pub use error::{E2eError, E2eResult};
pub use runner::{Outcome, SuiteResult, TestResult, TestRunner};
pub use suite::TestSuite;
