//! Ordered collection of test cases

use crate::case::TestCase;
use crate::error::{E2eError, E2eResult};

/// Runnable collection of test cases, executed in insertion order
#[derive(Default)]
pub struct TestSuite {
    cases: Vec<Box<dyn TestCase>>,
}

impl TestSuite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, case: impl TestCase + 'static) {
        self.cases.push(Box::new(case));
    }

    /// Append every case of another suite.
    pub fn add_suite(&mut self, other: TestSuite) {
        self.cases.extend(other.cases);
    }

    /// Keep only the cases whose name contains `pattern`.
    pub fn filter(self, pattern: &str) -> Self {
        Self {
            cases: self
                .cases
                .into_iter()
                .filter(|case| case.name().contains(pattern))
                .collect(),
        }
    }

    /// Apply an optional name filter, refusing to yield an empty suite.
    pub fn select(self, pattern: Option<&str>) -> E2eResult<Self> {
        let Some(pattern) = pattern else {
            return Ok(self);
        };
        let selected = self.filter(pattern);
        if selected.is_empty() {
            return Err(E2eError::NoTestsSelected(pattern.to_string()));
        }
        Ok(selected)
    }

    pub fn names(&self) -> Vec<String> {
        self.cases.iter().map(|case| case.name()).collect()
    }

    pub fn cases(&self) -> &[Box<dyn TestCase>] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
