//! nowcoder-problem: problem metadata extraction for NowCoder pages
//!
//! This crate turns the HTML of a NowCoder problem page into a
//! [`ProblemRecord`]: title, time and memory limits, and sample tests.
//! Two page layouts are understood, the contest ("ACM") layout and the
//! exercise ("PAT") layout.

pub mod config;
pub mod fetcher;
pub mod output;
pub mod parser;
pub mod problem;

use thiserror::Error;

/// Main error type for nowcoder-problem operations
#[derive(Debug, Error)]
pub enum NowCoderError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("No parser recognizes {url}")]
    UnsupportedUrl { url: String },
}

/// Extraction errors
///
/// Every variant is fatal: a page either yields a complete record or
/// the extraction fails outright.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected element not found: {selector}")]
    MissingElement { selector: String },

    #[error("Unexpected {field} format: {text:?}")]
    Format { field: &'static str, text: String },

    #[error("Sample block {index} is incomplete")]
    MissingTestBlock { index: usize },

    #[error("Record is missing required field: {field}")]
    IncompleteRecord { field: &'static str },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for nowcoder-problem operations
pub type Result<T> = std::result::Result<T, NowCoderError>;

/// Result type alias for extraction
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use parser::{NowCoderParser, ProblemParser, Registry};
pub use problem::{ProblemBuilder, ProblemRecord, TestCase};
