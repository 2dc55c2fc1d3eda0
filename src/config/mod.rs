//! Configuration module for nowcoder-problem
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; missing values fall back to defaults.
//!
//! # Example
//!
//! ```no_run
//! use nowcoder_problem::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("nowcoder.toml")).unwrap();
//! println!("Requests time out after {}s", config.fetch.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetchConfig, OutputConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
