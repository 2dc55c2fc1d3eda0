//! Problem page parsers
//!
//! This module contains:
//! - The [`ProblemParser`] trait implemented by every judge parser
//! - The [`Registry`] that picks a parser for a URL by glob pattern
//! - The NowCoder parser

pub mod dom;
mod matcher;
mod nowcoder;

pub use matcher::matches_glob;
pub use nowcoder::{problem_id, Layout, NowCoderParser, UNKNOWN_ID};

use crate::problem::ProblemRecord;
use crate::{NowCoderError, ParseResult};

/// A parser for the problem pages of one judge
pub trait ProblemParser: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// URL glob patterns this parser handles, in priority order
    fn match_patterns(&self) -> &'static [&'static str];

    /// Extracts a problem record from a page that matched one of the patterns
    fn parse(&self, url: &str, html: &str) -> ParseResult<ProblemRecord>;

    /// Returns true if any of the parser's patterns matches `url`
    fn matches(&self, url: &str) -> bool {
        self.match_patterns()
            .iter()
            .any(|pattern| matches_glob(pattern, url))
    }
}

/// Ordered collection of parsers
#[derive(Default)]
pub struct Registry {
    parsers: Vec<Box<dyn ProblemParser>>,
}

impl Registry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with every built-in parser
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(NowCoderParser);
        registry
    }

    pub fn register(&mut self, parser: impl ProblemParser + 'static) {
        self.parsers.push(Box::new(parser));
    }

    /// Finds the first registered parser that claims `url`
    pub fn find(&self, url: &str) -> Option<&dyn ProblemParser> {
        self.parsers
            .iter()
            .find(|parser| parser.matches(url))
            .map(|parser| &**parser)
    }

    /// All patterns of all parsers, in registration order
    pub fn patterns(&self) -> Vec<&'static str> {
        self.parsers
            .iter()
            .flat_map(|parser| parser.match_patterns().iter().copied())
            .collect()
    }

    /// Like [`find`](Registry::find), but fails with
    /// [`NowCoderError::UnsupportedUrl`] when no parser claims `url`
    pub fn resolve(&self, url: &str) -> crate::Result<&dyn ProblemParser> {
        self.find(url).ok_or_else(|| NowCoderError::UnsupportedUrl {
            url: url.to_string(),
        })
    }

    /// Parses `html` with the parser that claims `url`
    ///
    /// # Returns
    ///
    /// * `Ok(ProblemRecord)` - The page was recognized and extracted
    /// * `Err(NowCoderError::UnsupportedUrl)` - No parser claims the URL
    /// * `Err(NowCoderError::Parse)` - The page did not have the expected structure
    pub fn parse(&self, url: &str, html: &str) -> crate::Result<ProblemRecord> {
        let parser = self.resolve(url)?;
        tracing::debug!("Using {} parser for {}", parser.name(), url);
        Ok(parser.parse(url, html)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::ProblemBuilder;

    struct StubParser;

    impl ProblemParser for StubParser {
        fn name(&self) -> &'static str {
            "stub"
        }

        fn match_patterns(&self) -> &'static [&'static str] {
            &["https://judge.example/p/*"]
        }

        fn parse(&self, url: &str, _html: &str) -> ParseResult<ProblemRecord> {
            ProblemBuilder::new("Stub")
                .url(url)
                .name("stub", "0")
                .time_limit(1)
                .memory_limit(1.0)
                .build()
        }
    }

    #[test]
    fn test_default_registry_patterns() {
        let registry = Registry::with_defaults();
        assert_eq!(
            registry.patterns(),
            vec![
                "https://ac.nowcoder.com/acm/problem/*",
                "https://ac.nowcoder.com/acm/contest/*/*",
                "https://ac.nowcoder.com/pat/*/problem/*",
            ]
        );
    }

    #[test]
    fn test_find_nowcoder_parser() {
        let registry = Registry::with_defaults();
        for url in [
            "https://ac.nowcoder.com/acm/problem/12345",
            "https://ac.nowcoder.com/acm/contest/99458/A",
            "https://ac.nowcoder.com/pat/5/problem/4021",
        ] {
            let parser = registry.find(url).unwrap();
            assert_eq!(parser.name(), "NowCoder");
        }
    }

    #[test]
    fn test_find_unknown_url() {
        let registry = Registry::with_defaults();
        assert!(registry.find("https://codeforces.com/contest/1/problem/A").is_none());
    }

    #[test]
    fn test_registration_order() {
        let mut registry = Registry::with_defaults();
        registry.register(StubParser);

        let parser = registry.find("https://judge.example/p/7").unwrap();
        assert_eq!(parser.name(), "stub");
        assert_eq!(registry.patterns().len(), 4);
    }

    #[test]
    fn test_resolve() {
        let registry = Registry::with_defaults();
        let parser = registry
            .resolve("https://ac.nowcoder.com/acm/problem/12345")
            .unwrap();
        assert_eq!(parser.name(), "NowCoder");

        let err = registry
            .resolve("https://codeforces.com/contest/1/problem/A")
            .err()
            .unwrap();
        assert!(matches!(
            err,
            NowCoderError::UnsupportedUrl { url } if url == "https://codeforces.com/contest/1/problem/A"
        ));
    }

    #[test]
    fn test_parse_unsupported_url() {
        let registry = Registry::with_defaults();
        let err = registry.parse("https://example.com/", "<html></html>").unwrap_err();
        assert!(matches!(err, NowCoderError::UnsupportedUrl { .. }));
    }

    #[test]
    fn test_parse_propagates_parse_error() {
        let registry = Registry::with_defaults();
        let err = registry
            .parse("https://ac.nowcoder.com/acm/problem/1", "<html></html>")
            .unwrap_err();
        assert!(matches!(err, NowCoderError::Parse(_)));
    }
}
