//! Minting configuration: API key, endpoint, timeout and feature flags.
//!
//! The API key is held here and injected into the client at construction.
//! Request code never reads the process environment.

use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;
use crate::network::{self, DEFAULT_API_URL, DEFAULT_COLLECTION_ID, DEFAULT_TIMEOUT_SECS};

pub const ENV_API_KEY: &str = "CROSSMINT_API_KEY";
pub const ENV_API_URL: &str = "CROSSMINT_API_URL";
pub const ENV_COLLECTION_ID: &str = "CROSSMINT_COLLECTION_ID";
pub const ENV_TIMEOUT_SECS: &str = "MINT_TIMEOUT_SECS";
pub const ENV_VALIDATE_URLS: &str = "MINT_VALIDATE_URLS";
pub const ENV_LICENSE_TERMS: &str = "MINT_LICENSE_TERMS";

/// Secret API key. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// First four characters followed by an ellipsis, for logs.
    pub fn masked(&self) -> String {
        let prefix: String = self.0.chars().take(4).collect();
        format!("{}...", prefix)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({})", self.masked())
    }
}

/// Everything the mint client needs besides the three user inputs.
#[derive(Debug, Clone)]
pub struct MinterConfig {
    /// `None` is allowed at load time; minting then fails with
    /// [`ConfigError::MissingApiKey`] before any request is sent.
    pub api_key: Option<ApiKey>,
    pub api_url: String,
    pub collection_id: String,
    /// `None` leaves the request unbounded.
    pub timeout: Option<Duration>,
    /// HEAD-check both URLs before minting.
    pub validate_urls: bool,
    /// Attach the commercial-use license terms to the payload.
    pub license_terms: bool,
}

impl Default for MinterConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            collection_id: DEFAULT_COLLECTION_ID.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            validate_urls: false,
            license_terms: false,
        }
    }
}

impl MinterConfig {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Unset and empty values fall back to
    /// defaults; malformed numbers and booleans are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        config.api_key = get(ENV_API_KEY).map(ApiKey::new);
        if let Some(url) = get(ENV_API_URL) {
            config.api_url = url;
        }
        if let Some(id) = get(ENV_COLLECTION_ID) {
            config.collection_id = id;
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_TIMEOUT_SECS,
                value: raw.clone(),
            })?;
            config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        if let Some(raw) = get(ENV_VALIDATE_URLS) {
            config.validate_urls = parse_flag(ENV_VALIDATE_URLS, &raw)?;
        }
        if let Some(raw) = get(ENV_LICENSE_TERMS) {
            config.license_terms = parse_flag(ENV_LICENSE_TERMS, &raw)?;
        }

        Ok(config)
    }

    /// The API key, or the configuration error that blocks minting.
    pub fn require_api_key(&self) -> Result<&ApiKey, ConfigError> {
        self.api_key.as_ref().ok_or(ConfigError::MissingApiKey)
    }

    /// Full URL of the IP-asset creation endpoint.
    pub fn ipassets_url(&self) -> String {
        format!(
            "{}{}",
            self.api_url.trim_end_matches('/'),
            network::ipassets_path(&self.collection_id)
        )
    }
}

pub(crate) fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = MinterConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.collection_id, DEFAULT_COLLECTION_ID);
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert!(!config.validate_urls);
        assert!(!config.license_terms);
        assert_eq!(config.require_api_key(), Err(ConfigError::MissingApiKey));
    }

    #[test]
    fn test_empty_api_key_counts_as_missing() {
        let config = MinterConfig::from_lookup(lookup(&[(ENV_API_KEY, "  ")])).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = MinterConfig::from_lookup(lookup(&[
            (ENV_API_KEY, "sk_staging_abc123"),
            (ENV_API_URL, "http://127.0.0.1:9000/"),
            (ENV_COLLECTION_ID, "col-1"),
            (ENV_TIMEOUT_SECS, "0"),
            (ENV_VALIDATE_URLS, "true"),
            (ENV_LICENSE_TERMS, "1"),
        ]))
        .unwrap();

        assert_eq!(config.require_api_key().unwrap().expose(), "sk_staging_abc123");
        assert_eq!(config.timeout, None);
        assert!(config.validate_urls);
        assert!(config.license_terms);
        assert_eq!(
            config.ipassets_url(),
            "http://127.0.0.1:9000/api/v1/ip/collections/col-1/ipassets"
        );
    }

    #[test]
    fn test_malformed_timeout_rejected() {
        let err = MinterConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: ENV_TIMEOUT_SECS,
                value: "soon".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_flag_rejected() {
        assert!(MinterConfig::from_lookup(lookup(&[(ENV_VALIDATE_URLS, "maybe")])).is_err());
    }

    #[test]
    fn test_api_key_debug_is_masked() {
        let key = ApiKey::new("sk_staging_supersecret");
        let debug = format!("{:?}", key);
        assert_eq!(debug, "ApiKey(sk_s...)");
        assert!(!debug.contains("supersecret"));
    }
}
