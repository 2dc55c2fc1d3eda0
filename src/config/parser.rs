use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
///
/// # Example
///
/// ```
/// use nowcoder_problem::config::parse_config;
///
/// let config = parse_config("[fetch]\ntimeout-secs = 5\nconnect-timeout-secs = 2\n").unwrap();
/// assert_eq!(config.fetch.timeout_secs, 5);
/// assert!(config.output.pretty);
/// ```
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[user-agent]
name = "TestClient"
version = "2.0"
contact-url = "https://example.com/about"

[fetch]
timeout-secs = 20
connect-timeout-secs = 5

[output]
pretty = false
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.user_agent.name, "TestClient");
        assert_eq!(config.user_agent.version, "2.0");
        assert_eq!(
            config.user_agent.contact_url.as_deref(),
            Some("https://example.com/about")
        );
        assert_eq!(config.fetch.timeout_secs, 20);
        assert_eq!(config.fetch.connect_timeout_secs, 5);
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.user_agent.name, "nowcoder-problem");
        assert_eq!(config.user_agent.contact_url, None);
        assert_eq!(config.fetch.timeout_secs, 30);
        assert_eq!(config.fetch.connect_timeout_secs, 10);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config = parse_config("[fetch]\ntimeout-secs = 60\n").unwrap();
        assert_eq!(config.fetch.timeout_secs, 60);
        assert_eq!(config.fetch.connect_timeout_secs, 10);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result.unwrap_err(), ConfigError::Io(_)));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let file = create_temp_config("[fetch]\ntimeout-secs = 0\n");
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }
}
