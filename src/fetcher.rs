//! HTTP fetcher for problem pages
//!
//! Extraction works on HTML already in hand; this module is the only place
//! that touches the network.

use crate::config::Config;
use crate::{NowCoderError, Result};
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// The user agent has the form `Name/Version (+ContactURL)`, with the
/// contact part omitted when no contact URL is configured.
///
/// # Example
///
/// ```no_run
/// use nowcoder_problem::config::Config;
/// use nowcoder_problem::fetcher::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(user_agent(config))
        .timeout(Duration::from_secs(config.fetch.timeout_secs))
        .connect_timeout(Duration::from_secs(config.fetch.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

fn user_agent(config: &Config) -> String {
    let agent = &config.user_agent;
    match &agent.contact_url {
        Some(contact) => format!("{}/{} (+{})", agent.name, agent.version, contact),
        None => format!("{}/{}", agent.name, agent.version),
    }
}

/// Fetches the HTML of a page
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(NowCoderError::Http)` - Transport failure or non-success status
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    tracing::debug!("Fetching {}", url);

    let http_error = |source: reqwest::Error| NowCoderError::Http {
        url: url.to_string(),
        source,
    };

    let response = client
        .get(url)
        .send()
        .await
        .map_err(http_error)?
        .error_for_status()
        .map_err(http_error)?;

    let body = response.text().await.map_err(http_error)?;
    tracing::debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserAgentConfig;

    #[test]
    fn test_user_agent_without_contact() {
        let config = Config {
            user_agent: UserAgentConfig {
                name: "Client".to_string(),
                version: "1.2".to_string(),
                contact_url: None,
            },
            ..Config::default()
        };
        assert_eq!(user_agent(&config), "Client/1.2");
    }

    #[test]
    fn test_user_agent_with_contact() {
        let config = Config {
            user_agent: UserAgentConfig {
                name: "Client".to_string(),
                version: "1.2".to_string(),
                contact_url: Some("https://example.com".to_string()),
            },
            ..Config::default()
        };
        assert_eq!(user_agent(&config), "Client/1.2 (+https://example.com)");
    }

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client(&Config::default()).is_ok());
    }
}
