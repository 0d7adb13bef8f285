//! Gateway configuration
//!
//! Values come from an explicit builder or from the environment (optionally via a
//! `.env` file). The configuration is immutable once a client has been built from it.

use crate::error::{GatewayError, GatewayResult};
use std::time::Duration;

/// Environment variable holding the Resend API key
pub const ENV_API_KEY: &str = "RESEND_API_KEY";
/// Environment variable holding the default sender address
pub const ENV_FROM_EMAIL: &str = "RESEND_FROM_EMAIL";
/// Environment variable holding the default reply-to address
pub const ENV_REPLY_TO: &str = "RESEND_REPLY_TO";
/// Environment variable holding the request timeout in milliseconds
pub const ENV_TIMEOUT_MS: &str = "RESEND_TIMEOUT_MS";
/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "RESEND_BASE_URL";

/// Sender used when neither the call nor the configuration names one
pub const DEFAULT_FROM: &str = "onboarding@resend.dev";
/// Default request timeout (30 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
/// Resend API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.resend.com";

/// Resend gateway configuration
#[derive(Clone, PartialEq, Eq)]
pub struct ResendConfig {
    /// API credential; `None` leaves the gateway unconfigured
    pub api_key: Option<String>,
    /// Default sender address
    pub from: String,
    /// Default reply-to address
    pub reply_to: Option<String>,
    /// Request timeout applied by the HTTP transport
    pub timeout: Duration,
    /// API base URL (no trailing slash)
    pub base_url: String,
}

impl Default for ResendConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            from: DEFAULT_FROM.to_string(),
            reply_to: None,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ResendConfig {
    /// Create a configuration with the given credential and defaults for the rest
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::default().with_api_key(api_key)
    }

    /// Load configuration from the process environment
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> GatewayResult<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as absent.
    pub fn from_lookup<F>(lookup: F) -> GatewayResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        if let Some(api_key) = get(ENV_API_KEY) {
            config.api_key = Some(api_key);
        }

        if let Some(from) = get(ENV_FROM_EMAIL) {
            config.from = from;
        }

        config.reply_to = get(ENV_REPLY_TO);

        if let Some(timeout) = get(ENV_TIMEOUT_MS) {
            let millis: u64 = timeout.parse().map_err(|_| {
                GatewayError::Configuration(format!(
                    "Invalid {} value '{}': expected milliseconds",
                    ENV_TIMEOUT_MS, timeout
                ))
            })?;
            config.timeout = Duration::from_millis(millis);
        }

        if let Some(base_url) = get(ENV_BASE_URL) {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }

        Ok(config)
    }

    /// Set the API credential
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the default sender address
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    /// Set the default reply-to address
    pub fn with_reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// True iff a non-empty credential is present
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Endpoint for the send-email operation
    pub fn emails_endpoint(&self) -> String {
        format!("{}/emails", self.base_url)
    }
}

impl std::fmt::Debug for ResendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("from", &self.from)
            .field("reply_to", &self.reply_to)
            .field("timeout", &self.timeout)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ResendConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.from, DEFAULT_FROM);
        assert_eq!(config.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
        assert_eq!(config.emails_endpoint(), "https://api.resend.com/emails");
    }

    #[test]
    fn test_from_lookup_reads_all_keys() {
        let config = ResendConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "re_123"),
            (ENV_FROM_EMAIL, "team@acme.dev"),
            (ENV_REPLY_TO, "support@acme.dev"),
            (ENV_TIMEOUT_MS, "5000"),
            (ENV_BASE_URL, "http://localhost:8025/"),
        ]))
        .unwrap();

        assert!(config.is_configured());
        assert_eq!(config.api_key.as_deref(), Some("re_123"));
        assert_eq!(config.from, "team@acme.dev");
        assert_eq!(config.reply_to.as_deref(), Some("support@acme.dev"));
        assert_eq!(config.timeout, Duration::from_millis(5000));
        assert_eq!(config.emails_endpoint(), "http://localhost:8025/emails");
    }

    #[test]
    fn test_empty_credential_is_not_configured() {
        let config = ResendConfig::from_lookup(lookup_from(&[(ENV_API_KEY, "  ")])).unwrap();
        assert!(config.api_key.is_none());
        assert!(!config.is_configured());

        let config = ResendConfig::default().with_api_key("");
        assert!(!config.is_configured());
    }

    #[test]
    fn test_invalid_timeout_is_configuration_error() {
        let err = ResendConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_MS, "soon")])).unwrap_err();
        assert!(matches!(err, GatewayError::Configuration(_)));
        assert!(err.to_string().contains(ENV_TIMEOUT_MS));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ResendConfig::new("re_secret");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("re_secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
