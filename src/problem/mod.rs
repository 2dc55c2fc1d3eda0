//! Problem records produced by the parsers
//!
//! A [`ProblemRecord`] is immutable once built. The only way to obtain one
//! is through [`ProblemBuilder::build`], which consumes the builder.

mod builder;

pub use builder::ProblemBuilder;

use serde::Serialize;

/// A single sample test
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCase {
    /// Sample input, exactly as it appears in the page
    pub input: String,

    /// Expected output, exactly as it appears in the page
    pub output: String,
}

impl TestCase {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Finalized problem metadata extracted from a page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemRecord {
    site: &'static str,
    url: String,
    name: String,
    id: String,
    time_limit: u64,
    memory_limit: f64,
    tests: Vec<TestCase>,
}

impl ProblemRecord {
    /// Tag of the judge the record was extracted from
    pub fn site(&self) -> &str {
        self.site
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Problem identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Time limit in milliseconds
    pub fn time_limit(&self) -> u64 {
        self.time_limit
    }

    /// Memory limit in megabytes
    pub fn memory_limit(&self) -> f64 {
        self.memory_limit
    }

    pub fn tests(&self) -> &[TestCase] {
        &self.tests
    }
}
