//! High-level client — `MinterClient` with sub-client accessors.
//!
//! The mint sub-client lives in `domain/mint/client.rs`. This module keeps
//! the builder, the injected configuration and the accessor.

use std::time::Duration;

use crate::config::{ApiKey, MinterConfig};
use crate::domain::mint::client::Mint;
use crate::error::MintError;
use crate::http::MinterHttp;

pub use crate::domain::mint::client::Mint as MintClient;

/// The primary entry point: `client.mint().mint_ip_asset(&request)`.
#[derive(Debug, Clone)]
pub struct MinterClient {
    pub(crate) http: MinterHttp,
    pub(crate) config: MinterConfig,
}

impl MinterClient {
    pub fn builder() -> MinterClientBuilder {
        MinterClientBuilder::default()
    }

    pub fn from_config(config: MinterConfig) -> Result<Self, MintError> {
        Ok(Self {
            http: MinterHttp::new(config.timeout)?,
            config,
        })
    }

    pub fn mint(&self) -> Mint<'_> {
        Mint { client: self }
    }

    pub fn config(&self) -> &MinterConfig {
        &self.config
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Default)]
pub struct MinterClientBuilder {
    config: MinterConfig,
}

impl MinterClientBuilder {
    /// Start from an existing configuration (e.g. `MinterConfig::from_env()`).
    pub fn config(mut self, config: MinterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn api_key(mut self, key: &str) -> Self {
        self.config.api_key = Some(ApiKey::new(key));
        self
    }

    pub fn api_url(mut self, url: &str) -> Self {
        self.config.api_url = url.to_string();
        self
    }

    pub fn collection_id(mut self, id: &str) -> Self {
        self.config.collection_id = id.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    pub fn no_timeout(mut self) -> Self {
        self.config.timeout = None;
        self
    }

    pub fn validate_urls(mut self, enabled: bool) -> Self {
        self.config.validate_urls = enabled;
        self
    }

    pub fn license_terms(mut self, enabled: bool) -> Self {
        self.config.license_terms = enabled;
        self
    }

    pub fn build(self) -> Result<MinterClient, MintError> {
        MinterClient::from_config(self.config)
    }
}
