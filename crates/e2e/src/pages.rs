//! Page contract of the address book: titles, element ids and selectors

use tracing::debug;

use crate::browser::Page;
use crate::config::Routes;
use crate::error::{E2eError, E2eResult};

/// Title of the listing page
pub const INDEX_TITLE: &str = "Addresses";

/// Title of the add form
pub const ADD_TITLE: &str = "Add Address";

/// Entries are the direct children of the `addresses` container.
pub const ENTRY_SELECTOR: &str = "div.addresses > div";

/// Control on the listing page leading to the add form
pub const ADD_LINK_ID: &str = "add-address";

/// Street input on the add form
pub const STREET_INPUT_ID: &str = "address-street";

/// Submit control on the add form
pub const SUBMIT_ID: &str = "address-submit";

/// Page a fixture lands on during set-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Index,
    Add,
}

impl Landing {
    pub fn url(&self, routes: &Routes) -> String {
        match self {
            Landing::Index => routes.index(),
            Landing::Add => routes.add(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Landing::Index => INDEX_TITLE,
            Landing::Add => ADD_TITLE,
        }
    }

    /// Navigate to the landing page and check where the browser ended up.
    pub async fn open(&self, page: &dyn Page, routes: &Routes) -> E2eResult<()> {
        page.goto(&self.url(routes)).await?;
        self.expect(page, routes).await
    }

    /// Assert the browser is on this page: exact URL, exact title.
    pub async fn expect(&self, page: &dyn Page, routes: &Routes) -> E2eResult<()> {
        let expected_url = self.url(routes);
        let url = page.current_url().await?;
        if url != expected_url {
            return Err(E2eError::mismatch("current URL", expected_url, url));
        }

        let title = page.title().await?;
        if title != self.title() {
            return Err(E2eError::mismatch("page title", self.title(), title));
        }

        debug!("On {:?} page ({})", self, url);
        Ok(())
    }
}

/// Text of every entry on the listing page.
pub async fn entries(page: &dyn Page) -> E2eResult<Vec<String>> {
    page.texts(ENTRY_SELECTOR).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_pages() {
        let routes = Routes::new("http://localhost:8080");
        assert_eq!(Landing::Index.url(&routes), "http://localhost:8080/addressbook");
        assert_eq!(Landing::Index.title(), "Addresses");
        assert_eq!(Landing::Add.url(&routes), "http://localhost:8080/addressbook/add");
        assert_eq!(Landing::Add.title(), "Add Address");
    }
}
