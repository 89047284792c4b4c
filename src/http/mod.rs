//! HTTP client layer — `MinterHttp`.

pub mod client;

pub use client::MinterHttp;
