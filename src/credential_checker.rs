use crate::config::Config;
use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use std::future::Future;

/// Live probe confirming a pair of credentials authenticates against an endpoint
pub trait CredentialChecker {
    /// Returns true only if the endpoint accepted the credentials.
    /// Any failure to reach the endpoint counts as a rejection.
    fn check_credentials(
        &self,
        url: &str,
        access_key: &str,
        secret_key: &str,
    ) -> impl Future<Output = bool> + Send;
}

/// Credential checker issuing a basic-auth GET through a reqwest client
pub struct HttpCredentialChecker {
    client: Client,
}

impl HttpCredentialChecker {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder =
            Client::builder().danger_accept_invalid_certs(config.accept_invalid_certs);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().context("Failed to create HTTP client")?;
        Ok(Self::with_client(client))
    }

    /// Wraps an already configured client, e.g. one shared with the rest of the process
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl CredentialChecker for HttpCredentialChecker {
    async fn check_credentials(&self, url: &str, access_key: &str, secret_key: &str) -> bool {
        let response = self
            .client
            .get(url)
            .basic_auth(access_key, Some(secret_key))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .send()
            .await;

        match response {
            Ok(response) if response.status() == StatusCode::OK => true,
            Ok(response) => {
                log::debug!("Credential check against {} returned {}", url, response.status());
                false
            }
            Err(e) => {
                log::warn!("Credential check against {} failed: {}", url, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_url_is_a_rejection() {
        let checker = HttpCredentialChecker::new(&Config::default()).unwrap();
        let ok = tokio_test::block_on(checker.check_credentials("https://:0/*", "", ""));
        assert!(!ok);
    }

    #[test]
    fn builds_with_timeout_and_relaxed_certs() {
        let config = Config {
            timeout: Some(std::time::Duration::from_secs(2)),
            accept_invalid_certs: true,
        };
        assert!(HttpCredentialChecker::new(&config).is_ok());
    }
}
