use std::env;
use std::fmt;

use crate::error::{BudpayError, Result};

/// BudPay production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.budpay.com/api";

/// BudPay client configuration.
#[derive(Clone)]
pub struct BudpayConfig {
    /// Secret key issued from the BudPay dashboard.
    pub secret_key: String,
    /// API base URL, defaults to the production root.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for BudpayConfig {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl BudpayConfig {
    /// Config with the given secret key and production defaults.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            ..Self::default()
        }
    }

    /// Point the client at a different API root, e.g. a sandbox.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load config from `BUDPAY_SECRET_KEY`, `BUDPAY_BASE_URL` and
    /// `BUDPAY_TIMEOUT_SECS` environment variables.
    pub fn from_env() -> Result<Self> {
        let secret_key = env::var("BUDPAY_SECRET_KEY").map_err(|_| {
            BudpayError::Configuration(
                "BUDPAY_SECRET_KEY environment variable is required".to_string(),
            )
        })?;

        let base_url =
            env::var("BUDPAY_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = env::var("BUDPAY_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        let config = Self {
            secret_key,
            base_url,
            timeout_secs,
        };

        config.validate()?;
        Ok(config)
    }

    /// Fail fast on a config the client cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.secret_key.trim().is_empty() {
            return Err(BudpayError::Configuration(
                "secret key cannot be empty".to_string(),
            ));
        }

        if self.base_url.trim().is_empty() {
            return Err(BudpayError::Configuration(
                "base URL cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

// The secret key stays out of logs and debug output.
impl fmt::Debug for BudpayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BudpayConfig")
            .field("secret_key", &"[redacted]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_production() {
        let config = BudpayConfig::default();
        assert_eq!(config.base_url, "https://api.budpay.com/api");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn validate_rejects_empty_secret_key() {
        let config = BudpayConfig::new("");
        assert!(config.validate().is_err());

        let config = BudpayConfig::new("   ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_a_real_key() {
        let config = BudpayConfig::new("sk_test_x");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn with_base_url_overrides_the_root() {
        let config = BudpayConfig::new("sk_test_x").with_base_url("http://localhost:9090");
        assert_eq!(config.base_url, "http://localhost:9090");
    }

    #[test]
    fn from_env_fails_without_a_secret_key() {
        std::env::remove_var("BUDPAY_SECRET_KEY");

        let config = BudpayConfig::from_env();
        assert!(config.is_err(), "config should fail without a secret key");
    }

    #[test]
    fn debug_never_prints_the_secret() {
        let config = BudpayConfig::new("sk_live_supersecret");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("supersecret"));
        assert!(printed.contains("[redacted]"));
    }
}
