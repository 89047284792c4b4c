//! Low-level HTTP client — `MinterHttp`.
//!
//! One POST per mint, one HEAD per reachability check. Every outcome is
//! classified into [`MintError`]; nothing is retried here.

use std::error::Error as StdError;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::config::ApiKey;
use crate::error::{ConfigError, MintError, MintResult, ServiceError, TransportError};

/// Low-level HTTP client for the IP-asset API.
#[derive(Debug, Clone)]
pub struct MinterHttp {
    client: Client,
}

impl MinterHttp {
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(timeout: Option<Duration>) -> Result<Self, ConfigError> {
        let mut builder = Client::builder().pool_max_idle_per_host(4);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { client })
    }

    /// POST `body` as JSON with the API key header. Only HTTP 200 with a JSON
    /// body counts as success.
    pub async fn post_json<B: Serialize>(
        &self,
        url: &str,
        api_key: &ApiKey,
        body: &B,
    ) -> MintResult {
        tracing::debug!(url, api_key = %api_key.masked(), "Sending mint request");
        if tracing::enabled!(tracing::Level::DEBUG) {
            if let Ok(payload) = serde_json::to_string(body) {
                tracing::debug!(%payload, "Mint request payload");
            }
        }

        let resp = self
            .client
            .post(url)
            .header("X-API-KEY", api_key.expose())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = resp.status();
        let raw_body = resp.text().await.map_err(classify_transport)?;
        tracing::debug!(status = status.as_u16(), raw_body = %raw_body, "Mint response");

        classify_response(status, raw_body)
    }

    /// HEAD `url`; `Err` carries the reason it is not fetchable.
    pub async fn head_ok(&self, url: &str) -> Result<(), String> {
        match self.client.head(url).send().await {
            Ok(resp) if resp.status() == StatusCode::OK => Ok(()),
            Ok(resp) => Err(format!("HTTP {}", resp.status().as_u16())),
            Err(e) => Err(error_chain(&e)),
        }
    }
}

fn classify_response(status: StatusCode, raw_body: String) -> MintResult {
    match status {
        StatusCode::OK => {
            if raw_body.trim().is_empty() {
                return Err(MintError::parse("empty response from server", raw_body));
            }
            serde_json::from_str(&raw_body).map_err(|e| MintError::parse(e.to_string(), raw_body))
        }
        StatusCode::BAD_GATEWAY => {
            tracing::warn!("Minting service returned 502");
            Err(ServiceError::Unavailable.into())
        }
        other => {
            tracing::warn!(status = other.as_u16(), "Minting service rejected request");
            Err(ServiceError::Status {
                status: other.as_u16(),
                body: raw_body,
            }
            .into())
        }
    }
}

fn classify_transport(e: reqwest::Error) -> MintError {
    if e.is_timeout() {
        tracing::warn!("Mint request timed out");
        TransportError::Timeout.into()
    } else {
        let message = error_chain(&e);
        tracing::warn!(error = %message, "Mint request failed");
        TransportError::Connection(message).into()
    }
}

/// `reqwest` hides the OS-level cause (e.g. "Connection refused") in the
/// source chain; flatten it so the message survives.
fn error_chain(e: &dyn StdError) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_200_json() {
        let value = classify_response(StatusCode::OK, r#"{"id":"abc"}"#.to_string()).unwrap();
        assert_eq!(value, serde_json::json!({"id": "abc"}));
    }

    #[test]
    fn test_classify_200_empty_body() {
        let err = classify_response(StatusCode::OK, String::new()).unwrap_err();
        assert!(matches!(err, MintError::Parse { ref raw_body, .. } if raw_body.is_empty()));
    }

    #[test]
    fn test_classify_200_non_json_body() {
        let err = classify_response(StatusCode::OK, "<html>oops</html>".to_string()).unwrap_err();
        assert_eq!(err.raw_body(), Some("<html>oops</html>"));
    }

    #[test]
    fn test_classify_502() {
        let err = classify_response(StatusCode::BAD_GATEWAY, "bad gateway".to_string()).unwrap_err();
        assert!(matches!(err, MintError::Service(ServiceError::Unavailable)));
    }

    #[test]
    fn test_classify_other_status() {
        let err = classify_response(StatusCode::CREATED, "{}".to_string()).unwrap_err();
        assert!(matches!(
            err,
            MintError::Service(ServiceError::Status { status: 201, .. })
        ));

        let err = classify_response(StatusCode::UNAUTHORIZED, "invalid key".to_string())
            .unwrap_err();
        assert_eq!(err.raw_body(), Some("invalid key"));
        assert_eq!(err.user_message(), "Request failed with status code 401");
    }

    #[test]
    fn test_new_without_timeout() {
        assert!(MinterHttp::new(None).is_ok());
        assert!(MinterHttp::new(Some(Duration::from_secs(30))).is_ok());
    }
}
