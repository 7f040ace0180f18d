//! Test case abstraction

use async_trait::async_trait;

use crate::browser::Page;
use crate::config::Routes;
use crate::error::E2eResult;
use crate::pages::Landing;

/// A single acceptance test.
///
/// The runner owns the browser session: it opens a fresh page, lands it on
/// [`TestCase::landing`] (set-up), calls [`TestCase::run`] and closes the page
/// afterwards whatever the outcome.
#[async_trait]
pub trait TestCase: Send + Sync {
    /// Reported name, `Fixture::method`.
    fn name(&self) -> String;

    /// Page opened and checked before the body runs.
    fn landing(&self) -> Landing;

    /// Test body, starting on the landing page.
    async fn run(&self, page: &dyn Page, routes: &Routes) -> E2eResult<()>;
}
