//! # Voice IP Minter
//!
//! Mints voice IP assets through the Crossmint IP collections API.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Request Builder, wire types, configuration, errors (always available)
//! 2. **HTTP** — `MinterHttp`: one POST per mint, HEAD reachability checks
//! 3. **Client** — `MinterClient` with the `mint()` sub-client
//! 4. **Server** — key-holding proxy (`POST /api/mint`), behind the `server` feature
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use voice_ip_minter::prelude::*;
//!
//! let client = MinterClient::builder()
//!     .config(MinterConfig::from_env()?)
//!     .build()?;
//!
//! let request = MintRequest::new("Morgan Freeman", image_url, voice_url);
//! let response = client.mint().mint_ip_asset(&request).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Domain modules (vertical slices): inputs, wire types, construction, state.
pub mod domain;

/// Unified minting error types.
pub mod error;

/// Endpoint and default constants.
pub mod network;

/// Configuration: API key, endpoint, timeout, flags.
pub mod config;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP client with outcome classification.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: Client ──────────────────────────────────────────────────────────

/// `MinterClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Server ──────────────────────────────────────────────────────────

/// Key-holding proxy server.
#[cfg(feature = "server")]
pub mod server;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Request Builder
    pub use crate::domain::mint::{build, build_at, LicenseTerm, MintRequest, MintRequestDocument};

    // Errors
    pub use crate::error::{
        ConfigError, Field, MintError, MintResult, ServiceError, TransportError, ValidationError,
    };

    // Configuration
    pub use crate::config::{ApiKey, MinterConfig};

    // Client
    #[cfg(feature = "http")]
    pub use crate::client::{MintClient, MinterClient, MinterClientBuilder};
}
