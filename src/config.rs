//! Client configuration.

use serde::Deserialize;

/// Configuration for the default HTTP transport.
///
/// Deserializable so it can be embedded in a host application's own config
/// file; `ClientConfig::new` covers the common programmatic case.
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Base URL of the service, e.g. `"http://localhost:5001/"`.
    pub base_url: String,
    /// Bearer token sent as `Authorization` when set.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl ClientConfig {
    /// Config pointing at `base_url` with no auth and the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Attach a bearer token.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the per-request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("http://localhost:5001/");
        assert_eq!(config.base_url, "http://localhost:5001/");
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new("https://ledger.example.com/")
            .with_api_key("secret")
            .with_timeout_secs(5);
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost:5001/"}"#).unwrap();
        assert_eq!(config.timeout_secs, 30);
        assert!(config.api_key.is_none());
    }
}
