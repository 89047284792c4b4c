//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Input types and validation
//! - `wire.rs` — Serde structs matching the remote API payloads
//! - `convert.rs` — Construction of wire payloads from inputs
//! - `state.rs` — Shared state used while requests are in flight
//! - `client.rs` — Sub-client with HTTP methods

pub mod mint;
