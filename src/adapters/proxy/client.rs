//! Legacy proxy client implementation
//!
//! One outbound GET per inbound request, bounded by a 10 second timeout.
//! Cancellation propagates by future drop: when axum abandons the handler
//! future the in-flight reqwest call is aborted with it.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::context::RequestContext;
use crate::domain::entities::FacilityCollection;
use crate::domain::ports::{FacilitySource, RetrievedFacilities};
use crate::error::SourceError;

/// Backend path for the legacy credit card lookup. The customer id is not
/// part of the proxy contract; the legacy service resolves it from the
/// channel context.
const LEGACY_CREDIT_CARD_PATH: &str = "/api/proxy/v1/legacy-service/credit-card";

/// Backend-specific name for the inbound channel id header.
const CHANNEL_HEADER: &str = "Canal";

const TOTAL_COUNT_HEADER: &str = "Total-Count";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// `FacilitySource` backed by the legacy proxy.
pub struct ProxyClient {
    http: Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(base_url: String) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn legacy_url(&self) -> String {
        format!("{}{}", self.base_url, LEGACY_CREDIT_CARD_PATH)
    }
}

fn transport_error(error: reqwest::Error) -> SourceError {
    if error.is_timeout() {
        SourceError::Timeout
    } else {
        SourceError::Unreachable(error.to_string())
    }
}

/// Inconsistent amounts are a data-quality signal, not a contract
/// violation; log and relay them.
fn warn_on_inconsistent_amounts(collection: &FacilityCollection) {
    let amounts = collection.credit_card_facilities.iter().flat_map(|f| {
        [
            f.billing_amount.as_ref(),
            f.billing_minimum_payment.as_ref(),
            f.product_agreement
                .as_ref()
                .and_then(|p| p.card_amount.as_ref()),
        ]
    });

    for amount in amounts.flatten() {
        if !amount.decimal_position_consistent() {
            tracing::warn!(?amount, "proxy amount disagrees with its decimal point position");
        }
    }
}

#[async_trait]
impl FacilitySource for ProxyClient {
    async fn retrieve(
        &self,
        _customer_id: &str,
        ctx: &RequestContext,
    ) -> Result<RetrievedFacilities, SourceError> {
        let response = self
            .http
            .get(self.legacy_url())
            .header(CHANNEL_HEADER, &ctx.channel_id)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let total_count = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Relayed {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(transport_error)?;

        // A JSON `null` top level is an empty payload; anything else that
        // fails to decode (malformed JSON, unknown enum values) is invalid.
        let decoded: Option<FacilityCollection> = serde_json::from_slice(&bytes)
            .map_err(|e| SourceError::InvalidPayload(e.to_string()))?;
        let collection = decoded.ok_or(SourceError::EmptyPayload)?;

        warn_on_inconsistent_amounts(&collection);

        Ok(RetrievedFacilities {
            collection,
            total_count,
        })
    }
}
