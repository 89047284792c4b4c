//! HTTP error bodies for the proxy.
//!
//! Every failure is answered with
//! `{"error": true, "kind": ..., "message": ..., "retryable": ...}`
//! and, for parse failures, the upstream `rawBody`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{MintError, ServiceError, TransportError};

#[derive(Debug)]
pub enum ApiError {
    Mint(MintError),
    /// A mint for the same character name is already running.
    InFlight { character_name: String },
    /// Request body was not valid JSON for a mint request.
    BadBody { message: String },
    NotFound,
}

impl From<MintError> for ApiError {
    fn from(e: MintError) -> Self {
        ApiError::Mint(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Mint(e) => mint_status(e),
            ApiError::InFlight { .. } => StatusCode::CONFLICT,
            ApiError::BadBody { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

fn mint_status(e: &MintError) -> StatusCode {
    match e {
        MintError::Validation(_) => StatusCode::BAD_REQUEST,
        MintError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        MintError::Transport(TransportError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
        MintError::Transport(TransportError::Connection(_)) => StatusCode::BAD_GATEWAY,
        MintError::Service(ServiceError::Unavailable) => StatusCode::SERVICE_UNAVAILABLE,
        MintError::Service(ServiceError::Status { .. }) => StatusCode::BAD_GATEWAY,
        MintError::Parse { .. } => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Mint(e) => {
                let mut body = json!({
                    "error": true,
                    "kind": e.kind(),
                    "message": e.user_message(),
                    "retryable": e.is_retryable(),
                });
                if let MintError::Parse { raw_body, .. } = e {
                    body["rawBody"] = json!(raw_body);
                }
                body
            }
            ApiError::InFlight { character_name } => json!({
                "error": true,
                "kind": "in_flight",
                "message": format!("A mint for {} is already in progress.", character_name),
                "retryable": true,
            }),
            ApiError::BadBody { message } => json!({
                "error": true,
                "kind": "bad_request",
                "message": message,
                "retryable": false,
            }),
            ApiError::NotFound => json!({
                "error": true,
                "kind": "not_found",
                "message": "Not found",
                "retryable": false,
            }),
        };

        (status, Json(body)).into_response()
    }
}
