//! Mint sub-client — validation, reachability checks and submission.

use futures_util::future::join_all;

use crate::client::MinterClient;
use crate::error::{MintError, MintResult, UnreachableUrl, ValidationError};

use super::{LicenseTerm, MintRequest, MintRequestDocument};

/// Sub-client for minting operations.
pub struct Mint<'a> {
    pub(crate) client: &'a MinterClient,
}

impl<'a> Mint<'a> {
    /// Send an already-built document. One attempt, no retries.
    ///
    /// Fails with a configuration error, without touching the network, when
    /// no API key is configured.
    pub async fn submit(&self, document: &MintRequestDocument) -> MintResult {
        let api_key = self.client.config.require_api_key()?;
        let url = self.client.config.ipassets_url();
        self.client.http.post_json(&url, api_key, document).await
    }

    /// HEAD both URLs. Any non-200 answer or transport failure marks a URL
    /// unreachable; all failures are reported together.
    pub async fn check_urls(&self, request: &MintRequest) -> Result<(), MintError> {
        let checks = request.urls().map(|(field, url)| async move {
            self.client
                .http
                .head_ok(url)
                .await
                .map_err(|reason| UnreachableUrl {
                    field,
                    url: url.to_string(),
                    reason,
                })
        });

        let unreachable: Vec<UnreachableUrl> = join_all(checks)
            .await
            .into_iter()
            .filter_map(Result::err)
            .collect();

        if unreachable.is_empty() {
            Ok(())
        } else {
            tracing::warn!(count = unreachable.len(), "URL reachability check failed");
            Err(ValidationError::UnreachableUrls(unreachable).into())
        }
    }

    /// Full flow for one submit action: validate inputs, require the API key,
    /// optionally check reachability, build, submit.
    pub async fn mint_ip_asset(&self, request: &MintRequest) -> MintResult {
        request.validate()?;
        self.client.config.require_api_key()?;

        if self.client.config.validate_urls {
            self.check_urls(request).await?;
        }

        let mut document = request.to_document();
        if self.client.config.license_terms {
            document = document.with_license_terms(vec![LicenseTerm::commercial_use()]);
        }

        tracing::info!(character = %request.character_name, "Minting IP asset");
        let result = self.submit(&document).await;
        if result.is_ok() {
            tracing::info!(character = %request.character_name, "IP asset minted");
        }
        result
    }
}
