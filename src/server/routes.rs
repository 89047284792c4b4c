//! Proxy route handlers.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;

use crate::domain::mint::MintRequest;

use super::error::ApiError;
use super::AppState;

#[derive(Serialize)]
pub struct Health {
    status: &'static str,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Non-secret configuration summary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigView {
    pub api_key_configured: bool,
    pub collection_id: String,
    pub validate_urls: bool,
    pub license_terms: bool,
}

pub async fn config(State(state): State<Arc<AppState>>) -> Json<ConfigView> {
    let config = state.client.config();
    Json(ConfigView {
        api_key_configured: config.api_key.is_some(),
        collection_id: config.collection_id.clone(),
        validate_urls: config.validate_urls,
        license_terms: config.license_terms,
    })
}

pub async fn mint(
    State(state): State<Arc<AppState>>,
    body: Result<Json<MintRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::BadBody {
        message: rejection.body_text(),
    })?;

    request.validate().map_err(crate::error::MintError::from)?;

    let _guard = state
        .in_flight
        .begin(&request.character_name)
        .ok_or_else(|| ApiError::InFlight {
            character_name: request.character_name.clone(),
        })?;

    match state.client.mint().mint_ip_asset(&request).await {
        Ok(value) => Ok(Json(value)),
        Err(e) => {
            tracing::warn!(kind = e.kind(), error = %e, "mint failed");
            Err(e.into())
        }
    }
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
