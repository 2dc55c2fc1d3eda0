use crate::config::types::{Config, FetchConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_user_agent_config(&config.user_agent)?;
    validate_fetch_config(&config.fetch)?;
    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Name: non-empty, alphanumeric + hyphens only
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent name cannot be empty".to_string(),
        ));
    }

    if !config
        .name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "user-agent name must contain only alphanumeric characters and hyphens, got '{}'",
            config.name
        )));
    }

    if config.version.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent version cannot be empty".to_string(),
        ));
    }

    if let Some(contact_url) = &config.contact_url {
        Url::parse(contact_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;
    }

    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 || config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be between 1 and timeout-secs ({}), got {}",
            config.timeout_secs, config.connect_timeout_secs
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_user_agent_name() {
        let mut config = UserAgentConfig::default();
        assert!(validate_user_agent_config(&config).is_ok());

        config.name = String::new();
        assert!(validate_user_agent_config(&config).is_err());

        config.name = "bad name".to_string();
        assert!(validate_user_agent_config(&config).is_err());

        config.name = "good-name2".to_string();
        assert!(validate_user_agent_config(&config).is_ok());
    }

    #[test]
    fn test_validate_contact_url() {
        let mut config = UserAgentConfig::default();
        config.contact_url = Some("https://example.com/about".to_string());
        assert!(validate_user_agent_config(&config).is_ok());

        config.contact_url = Some("not a url".to_string());
        assert!(matches!(
            validate_user_agent_config(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_validate_timeouts() {
        let ok = FetchConfig {
            timeout_secs: 30,
            connect_timeout_secs: 30,
        };
        assert!(validate_fetch_config(&ok).is_ok());

        let zero = FetchConfig {
            timeout_secs: 0,
            connect_timeout_secs: 0,
        };
        assert!(validate_fetch_config(&zero).is_err());

        let too_long = FetchConfig {
            timeout_secs: 301,
            connect_timeout_secs: 10,
        };
        assert!(validate_fetch_config(&too_long).is_err());

        let connect_exceeds_total = FetchConfig {
            timeout_secs: 5,
            connect_timeout_secs: 10,
        };
        assert!(validate_fetch_config(&connect_exceeds_total).is_err());
    }
}
