//! Listing page tests

use async_trait::async_trait;
use tracing::info;

use crate::browser::Page;
use crate::case::TestCase;
use crate::config::Routes;
use crate::error::{E2eError, E2eResult};
use crate::pages::{self, Landing, ADD_LINK_ID};
use crate::suite::TestSuite;

const FIXTURE: &str = "AddressesIndex";

/// Both listing page tests, in declaration order.
pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new();
    suite.add(IndexLoads);
    suite.add(IndexAddLink);
    suite
}

/// The listing renders at least one entry.
///
/// Relies on the application already holding an address; the suite never
/// seeds one.
pub struct IndexLoads;

#[async_trait]
impl TestCase for IndexLoads {
    fn name(&self) -> String {
        format!("{FIXTURE}::index_loads")
    }

    fn landing(&self) -> Landing {
        Landing::Index
    }

    async fn run(&self, page: &dyn Page, _routes: &Routes) -> E2eResult<()> {
        let entries = pages::entries(page).await?;
        if entries.is_empty() {
            return Err(E2eError::AssertionFailed(
                "listing shows no entries (at least one stored address is required)".to_string(),
            ));
        }
        info!("Listing shows {} entries", entries.len());
        Ok(())
    }
}

/// The add control navigates to the add form.
pub struct IndexAddLink;

#[async_trait]
impl TestCase for IndexAddLink {
    fn name(&self) -> String {
        format!("{FIXTURE}::index_add_link")
    }

    fn landing(&self) -> Landing {
        Landing::Index
    }

    async fn run(&self, page: &dyn Page, routes: &Routes) -> E2eResult<()> {
        page.click(ADD_LINK_ID).await?;
        Landing::Add.expect(page, routes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_holds_both_tests_in_order() {
        assert_eq!(
            suite().names(),
            vec!["AddressesIndex::index_loads", "AddressesIndex::index_add_link"]
        );
    }

    #[test]
    fn both_tests_start_on_listing() {
        assert_eq!(IndexLoads.landing(), Landing::Index);
        assert_eq!(IndexAddLink.landing(), Landing::Index);
    }
}
