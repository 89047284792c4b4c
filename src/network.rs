//! Network URL constants for the Crossmint IP-asset API.

/// Default REST API base URL (staging).
pub const DEFAULT_API_URL: &str = "https://staging.crossmint.com";

/// Collection every asset minted by this tool is created under.
pub const DEFAULT_COLLECTION_ID: &str = "f44f5c02-6fb4-4841-9423-e1e192a1c539";

/// Default bound on a single mint request, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default listen port for the proxy server.
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Path of the IP-asset creation endpoint for a collection.
pub fn ipassets_path(collection_id: &str) -> String {
    format!("/api/v1/ip/collections/{}/ipassets", collection_id)
}
