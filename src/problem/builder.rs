use super::{ProblemRecord, TestCase};
use crate::{ParseError, ParseResult};

/// Staged construction of a [`ProblemRecord`]
///
/// Setters take and return the builder by value so calls can be chained.
/// [`build`](ProblemBuilder::build) consumes the builder, so a record can
/// only be finalized once.
///
/// # Example
///
/// ```
/// use nowcoder_problem::ProblemBuilder;
///
/// let record = ProblemBuilder::new("NowCoder")
///     .url("https://ac.nowcoder.com/acm/problem/12345")
///     .name("A + B", "12345")
///     .time_limit(1000)
///     .memory_limit(256.0)
///     .test("1 2\n", "3\n")
///     .build()
///     .unwrap();
///
/// assert_eq!(record.id(), "12345");
/// assert_eq!(record.tests().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ProblemBuilder {
    site: &'static str,
    url: Option<String>,
    name: Option<(String, String)>,
    time_limit: Option<u64>,
    memory_limit: Option<f64>,
    tests: Vec<TestCase>,
}

impl ProblemBuilder {
    pub fn new(site: &'static str) -> Self {
        Self {
            site,
            url: None,
            name: None,
            time_limit: None,
            memory_limit: None,
            tests: Vec::new(),
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the display name and the identifier, in that order
    pub fn name(mut self, name: impl Into<String>, id: impl Into<String>) -> Self {
        self.name = Some((name.into(), id.into()));
        self
    }

    /// Sets the time limit in milliseconds
    pub fn time_limit(mut self, millis: u64) -> Self {
        self.time_limit = Some(millis);
        self
    }

    /// Sets the memory limit in megabytes
    pub fn memory_limit(mut self, megabytes: f64) -> Self {
        self.memory_limit = Some(megabytes);
        self
    }

    /// Appends a sample test
    pub fn test(mut self, input: impl Into<String>, output: impl Into<String>) -> Self {
        self.tests.push(TestCase::new(input, output));
        self
    }

    /// Finalizes the record
    ///
    /// # Returns
    ///
    /// * `Ok(ProblemRecord)` - All required fields were set
    /// * `Err(ParseError::IncompleteRecord)` - A required field is missing,
    ///   or the URL or name is empty
    pub fn build(self) -> ParseResult<ProblemRecord> {
        let url = self
            .url
            .filter(|url| !url.is_empty())
            .ok_or(ParseError::IncompleteRecord { field: "url" })?;
        let (name, id) = self
            .name
            .filter(|(name, _)| !name.is_empty())
            .ok_or(ParseError::IncompleteRecord { field: "name" })?;
        let time_limit = self
            .time_limit
            .ok_or(ParseError::IncompleteRecord { field: "time_limit" })?;
        let memory_limit = self
            .memory_limit
            .ok_or(ParseError::IncompleteRecord {
                field: "memory_limit",
            })?;

        Ok(ProblemRecord {
            site: self.site,
            url,
            name,
            id,
            time_limit,
            memory_limit,
            tests: self.tests,
        })
    }
}
