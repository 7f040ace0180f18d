//! The address book acceptance tests

pub mod add;
pub mod index;

pub use add::AddressAdd;
pub use index::{IndexAddLink, IndexLoads};

use crate::suite::TestSuite;

/// Every fixture, listing tests first, then the add form.
pub fn all() -> TestSuite {
    let mut suite = TestSuite::new();
    suite.add_suite(index::suite());
    suite.add_suite(add::suite());
    suite
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregates_fixtures_in_order() {
        assert_eq!(
            all().names(),
            vec![
                "AddressesIndex::index_loads",
                "AddressesIndex::index_add_link",
                "AddressesAdd::address_add",
            ]
        );
    }
}
