//! Unified error types for the facade
//!
//! Two layers, following the request pipeline:
//! - `SourceError`: outcomes of resolving facilities (fallback store miss,
//!   proxy transport/contract failures)
//! - `AppError`: handler-level errors; its `IntoResponse` is the single
//!   place where every failure becomes a status code and body

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcomes of a facility lookup, from either source. Every variant is
/// terminal for the current request; nothing is retried.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    #[error("customer '{0}' has no credit card facilities")]
    NotFound(String),

    #[error("proxy request timed out")]
    Timeout,

    #[error("proxy unreachable: {0}")]
    Unreachable(String),

    /// Non-success response from the proxy; status and body are relayed
    /// verbatim, never reshaped.
    #[error("proxy returned status {status}")]
    Relayed { status: u16, body: String },

    #[error("proxy response failed to decode: {0}")]
    InvalidPayload(String),

    #[error("proxy returned an empty payload")]
    EmptyPayload,
}

/// Application layer errors - used by the HTTP handler.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid customer id")]
    InvalidCustomerId,

    #[error("missing required headers: {0:?}")]
    MissingHeaders(Vec<String>),

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Uniform error body for every failure this facade shapes itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub category: String,
    pub message: String,
    pub details: Vec<String>,
}

impl ErrorBody {
    fn new(status: StatusCode, category: &str, message: String, details: Vec<String>) -> Self {
        Self {
            code: status.as_u16().to_string(),
            category: category.to_string(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidCustomerId => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new(
                    StatusCode::BAD_REQUEST,
                    "Validation",
                    "Invalid Customer ID format".to_string(),
                    vec!["CustomerId is required.".to_string()],
                ),
            ),
            AppError::MissingHeaders(missing) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new(
                    StatusCode::BAD_REQUEST,
                    "Validation",
                    "Missing required headers".to_string(),
                    missing
                        .iter()
                        .map(|name| format!("Header '{}' is required.", name))
                        .collect(),
                ),
            ),
            AppError::Source(SourceError::NotFound(customer_id)) => (
                StatusCode::NOT_FOUND,
                ErrorBody::new(
                    StatusCode::NOT_FOUND,
                    "Processing",
                    format!("CustomerId '{}' not found", customer_id),
                    vec!["No credit cards associated to the given customer id.".to_string()],
                ),
            ),
            AppError::Source(SourceError::Timeout) => {
                tracing::error!("proxy request timed out");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    ErrorBody::new(
                        StatusCode::GATEWAY_TIMEOUT,
                        "Processing",
                        "Upstream request timed out".to_string(),
                        Vec::new(),
                    ),
                )
            }
            AppError::Source(SourceError::Unreachable(reason)) => {
                tracing::error!("proxy unreachable: {}", reason);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorBody::new(
                        StatusCode::BAD_GATEWAY,
                        "Processing",
                        "Upstream unreachable".to_string(),
                        Vec::new(),
                    ),
                )
            }
            AppError::Source(SourceError::Relayed { status, body }) => {
                tracing::warn!(status, "relaying proxy error response");
                return relay_response(status, body);
            }
            AppError::Source(SourceError::InvalidPayload(reason)) => {
                tracing::error!("invalid proxy payload: {}", reason);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorBody::new(
                        StatusCode::BAD_GATEWAY,
                        "Processing",
                        "Invalid JSON from proxy".to_string(),
                        Vec::new(),
                    ),
                )
            }
            AppError::Source(SourceError::EmptyPayload) => {
                tracing::error!("empty proxy payload");
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorBody::new(
                        StatusCode::BAD_GATEWAY,
                        "Processing",
                        "Empty response from proxy".to_string(),
                        Vec::new(),
                    ),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Pass a proxy error through unchanged: its status, its body.
fn relay_response(status: u16, body: String) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
