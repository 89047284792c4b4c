//! Key-holding proxy server.
//!
//! Browsers post the three inputs to `POST /api/mint`; the server adds the
//! API key and performs the mint itself. `GET /config` only reports whether a
//! key is configured, never the key.
//!
//! ```text
//! GET     /health     → {"status":"ok"}
//! GET     /config     → non-secret configuration summary
//! POST    /api/mint   → upstream JSON, or an error body
//! OPTIONS *           → 204 + CORS headers
//! ```

pub mod cors;
pub mod error;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, routing::get, routing::post, Router};
use tokio::net::TcpListener;

use crate::client::MinterClient;
use crate::config::MinterConfig;
use crate::domain::mint::InFlightMints;
use crate::error::ConfigError;
use crate::network::DEFAULT_SERVER_PORT;

pub const ENV_PORT: &str = "PORT";

/// Shared state for all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: MinterClient,
    pub in_flight: InFlightMints,
}

impl AppState {
    pub fn new(client: MinterClient) -> Arc<Self> {
        Arc::new(Self {
            client,
            in_flight: InFlightMints::new(),
        })
    }
}

/// Listen address plus the minting configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub minter: MinterConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(ENV_PORT).map(|v| v.trim().to_string()) {
            Some(raw) if !raw.is_empty() => {
                raw.parse().map_err(|_| ConfigError::InvalidValue {
                    key: ENV_PORT,
                    value: raw.clone(),
                })?
            }
            _ => DEFAULT_SERVER_PORT,
        };
        Ok(Self {
            port,
            minter: MinterConfig::from_lookup(lookup)?,
        })
    }
}

/// Build the full router. Used by the binary and integration tests.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/config", get(routes::config))
        .route("/api/mint", post(routes::mint))
        .fallback(routes::not_found)
        .layer(middleware::from_fn(cors::permissive_cors))
        .with_state(state)
}

/// Bind `0.0.0.0:{port}` and serve until Ctrl-C.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    if config.minter.api_key.is_none() {
        tracing::warn!("CROSSMINT_API_KEY not set; /api/mint will answer 500 until it is");
    }

    let client = MinterClient::from_config(config.minter)?;
    let app = build_router(AppState::new(client));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
