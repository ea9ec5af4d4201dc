use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Settings for the outbound credential check
/// Loads settings from environment variables, a missing variable keeps the default
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Request timeout for the credential check (default: none)
    pub timeout: Option<Duration>,
    /// Skip TLS certificate validation, for clusters with self-signed certs (default: false)
    pub accept_invalid_certs: bool,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Arguments
    /// * `config_path` - Path to .env file to load (falls back to default .env)
    ///
    /// # Environment Variables
    /// * `CREDENTIAL_CHECK_TIMEOUT_SECS` - Request timeout in seconds (default: no timeout)
    /// * `CREDENTIAL_CHECK_ACCEPT_INVALID_CERTS` - "true" to skip cert validation
    ///   (default: "false")
    pub fn load(config_path: &str) -> Result<Self> {
        if std::path::Path::new(config_path).exists() {
            dotenvy::from_filename(config_path).ok();
        } else if env::var("DEPLOYMENT").unwrap_or_default() != "PROD" {
            dotenv().ok();
        }

        Self::from_vars(
            env::var("CREDENTIAL_CHECK_TIMEOUT_SECS").ok().as_deref(),
            env::var("CREDENTIAL_CHECK_ACCEPT_INVALID_CERTS").ok().as_deref(),
        )
    }

    fn from_vars(timeout_secs: Option<&str>, accept_invalid_certs: Option<&str>) -> Result<Self> {
        let timeout = match timeout_secs.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .with_context(|| {
                        format!("CREDENTIAL_CHECK_TIMEOUT_SECS must be a number, got '{}'", raw)
                    })?;
                // Zero would make every check fail immediately
                if secs == 0 {
                    anyhow::bail!("CREDENTIAL_CHECK_TIMEOUT_SECS must be greater than zero");
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let accept_invalid_certs = accept_invalid_certs.map(str::trim).filter(|s| !s.is_empty());
        let accept_invalid_certs = match accept_invalid_certs {
            Some(raw) => raw.to_ascii_lowercase().parse::<bool>().with_context(|| {
                format!(
                    "CREDENTIAL_CHECK_ACCEPT_INVALID_CERTS must be true or false, got '{}'",
                    raw
                )
            })?,
            None => false,
        };

        Ok(Self {
            timeout,
            accept_invalid_certs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_vars_give_defaults() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.timeout.is_none());
    }

    #[test]
    fn empty_timeout_means_no_timeout() {
        let config = Config::from_vars(Some("  "), Some("")).unwrap();
        assert!(config.timeout.is_none());
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn parses_timeout_and_cert_flag() {
        let config = Config::from_vars(Some("15"), Some("TRUE")).unwrap();
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert!(config.accept_invalid_certs);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::from_vars(Some("soon"), None).is_err());
        assert!(Config::from_vars(Some("0"), None).is_err());
        assert!(Config::from_vars(None, Some("yes")).is_err());
    }
}
