//! NowCoder problem pages
//!
//! NowCoder serves two unrelated page layouts for problems:
//! - Contest pages under `/acm/` ([`Layout::Acm`])
//! - PAT exercise pages ([`Layout::Pat`])
//!
//! The layout is chosen once from the URL, then a layout-specific
//! extractor fills in the record.

mod acm;
mod id;
mod pat;

pub use id::{problem_id, UNKNOWN_ID};

use super::dom::Document;
use super::ProblemParser;
use crate::problem::{ProblemBuilder, ProblemRecord};
use crate::{ParseError, ParseResult};
use regex::Regex;

/// Site tag stored in every record
pub const SITE: &str = "NowCoder";

const MATCH_PATTERNS: &[&str] = &[
    "https://ac.nowcoder.com/acm/problem/*",
    "https://ac.nowcoder.com/acm/contest/*/*",
    "https://ac.nowcoder.com/pat/*/problem/*",
];

/// Page layouts served by NowCoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Contest and problem-set pages
    Acm,
    /// PAT exercise pages
    Pat,
}

impl Layout {
    /// Picks the layout for a URL
    ///
    /// Any URL containing `/acm/` uses the contest layout, everything else
    /// the PAT layout.
    pub fn detect(url: &str) -> Self {
        if url.contains("/acm/") {
            Self::Acm
        } else {
            Self::Pat
        }
    }
}

/// Parser for ac.nowcoder.com problem pages
#[derive(Debug, Clone, Copy, Default)]
pub struct NowCoderParser;

impl ProblemParser for NowCoderParser {
    fn name(&self) -> &'static str {
        SITE
    }

    fn match_patterns(&self) -> &'static [&'static str] {
        MATCH_PATTERNS
    }

    fn parse(&self, url: &str, html: &str) -> ParseResult<ProblemRecord> {
        let document = Document::parse(html);
        let layout = Layout::detect(url);
        tracing::debug!("Extracting {} with {:?} layout", url, layout);

        let builder = ProblemBuilder::new(SITE).url(url);
        let builder = match layout {
            Layout::Acm => acm::extract(&document, url, builder)?,
            Layout::Pat => pat::extract(&document, url, builder)?,
        };

        builder.build()
    }
}

/// Reads the first capture group of `pattern` in `text` as an integer
fn capture_number(pattern: &Regex, text: &str, field: &'static str) -> ParseResult<u64> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| ParseError::Format {
            field,
            text: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_acm_layout() {
        assert_eq!(
            Layout::detect("https://ac.nowcoder.com/acm/problem/12345"),
            Layout::Acm
        );
        assert_eq!(
            Layout::detect("https://ac.nowcoder.com/acm/contest/99458/A"),
            Layout::Acm
        );
    }

    #[test]
    fn test_detect_pat_layout() {
        assert_eq!(
            Layout::detect("https://ac.nowcoder.com/pat/5/problem/4021"),
            Layout::Pat
        );
    }

    #[test]
    fn test_detect_is_plain_substring_test() {
        assert_eq!(Layout::detect("https://example.com/x/acm/y"), Layout::Acm);
        assert_eq!(Layout::detect("https://example.com/acm"), Layout::Pat);
    }

    #[test]
    fn test_capture_number() {
        let digits = Regex::new(r"([0-9]+)").unwrap();
        assert_eq!(capture_number(&digits, "abc 42 7", "n").unwrap(), 42);

        let err = capture_number(&digits, "none", "n").unwrap_err();
        assert_eq!(
            err,
            ParseError::Format {
                field: "n",
                text: "none".to_string()
            }
        );
    }

    #[test]
    fn test_capture_number_overflow() {
        let digits = Regex::new(r"([0-9]+)").unwrap();
        assert!(capture_number(&digits, "99999999999999999999999", "n").is_err());
    }

    #[test]
    fn test_patterns_cover_every_page_kind() {
        let parser = NowCoderParser;
        assert_eq!(parser.match_patterns().len(), 3);
        assert!(parser.matches("https://ac.nowcoder.com/acm/problem/12345"));
        assert!(parser.matches("https://ac.nowcoder.com/acm/contest/99458/A"));
        assert!(parser.matches("https://ac.nowcoder.com/pat/5/problem/4021"));
        assert!(!parser.matches("https://www.nowcoder.com/discuss/1"));
    }
}
