//! Add form test

use async_trait::async_trait;
use tracing::info;

use crate::address::unique_street_address;
use crate::browser::Page;
use crate::case::TestCase;
use crate::config::Routes;
use crate::error::{E2eError, E2eResult};
use crate::pages::{self, Landing, STREET_INPUT_ID, SUBMIT_ID};
use crate::suite::TestSuite;

pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new();
    suite.add(AddressAdd::new());
    suite
}

/// Submitting a street address redirects to the listing, which then shows it.
pub struct AddressAdd {
    make_address: fn() -> String,
}

impl AddressAdd {
    pub fn new() -> Self {
        Self {
            make_address: unique_street_address,
        }
    }

    /// Use a custom address source instead of the random one.
    pub fn with_generator(make_address: fn() -> String) -> Self {
        Self { make_address }
    }
}

impl Default for AddressAdd {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TestCase for AddressAdd {
    fn name(&self) -> String {
        "AddressesAdd::address_add".to_string()
    }

    fn landing(&self) -> Landing {
        Landing::Add
    }

    async fn run(&self, page: &dyn Page, routes: &Routes) -> E2eResult<()> {
        let street = (self.make_address)();
        info!("Submitting address '{}'", street);

        page.type_into(STREET_INPUT_ID, &street).await?;
        page.click(SUBMIT_ID).await?;

        // Redirect target is checked by URL only
        let url = page.current_url().await?;
        let expected = routes.index();
        if url != expected {
            return Err(E2eError::mismatch("URL after submit", expected, url));
        }

        let entries = pages::entries(page).await?;
        if !entries.iter().any(|entry| *entry == street) {
            return Err(E2eError::AssertionFailed(format!(
                "no entry with text {:?} among {} listed",
                street,
                entries.len()
            )));
        }
        Ok(())
    }
}
