//! Credit card facility handler
//!
//! The whole request pipeline for the single endpoint: path check, header
//! validation, source dispatch, response assembly. Failure mapping lives
//! in `AppError::into_response`.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};

use crate::context::RequestContext;
use crate::error::AppError;
use crate::AppState;

const TOTAL_COUNT_HEADER: &str = "Total-Count";

/// GET /api/bian/v1/credit-card/customer/:customer_id/retrieve
///
/// The customer id is checked before the headers; when both are invalid
/// the response reports the customer id failure.
pub async fn retrieve_credit_card_facility(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if customer_id.trim().is_empty() {
        return Err(AppError::InvalidCustomerId);
    }

    let ctx = RequestContext::from_headers(&headers).map_err(AppError::MissingHeaders)?;

    tracing::debug!(
        customer_id = %customer_id,
        correlation_id = %ctx.correlation_id,
        channel_id = %ctx.channel_id,
        "retrieving credit card facilities"
    );

    let retrieved = state.source.retrieve(&customer_id, &ctx).await?;

    // Backend-supplied count wins (it may be a total across pages);
    // otherwise count what was actually returned.
    let item_count = retrieved.collection.len();
    let count_header = retrieved
        .total_count
        .as_deref()
        .and_then(|count| HeaderValue::from_str(count).ok())
        .unwrap_or_else(|| HeaderValue::from(item_count));

    let mut response = Json(retrieved.collection).into_response();
    response
        .headers_mut()
        .insert(TOTAL_COUNT_HEADER, count_header);

    Ok(response)
}
