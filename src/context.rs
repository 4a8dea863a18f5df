//! Request-scoped context
//!
//! Every pipeline stage receives an explicit `RequestContext` carrying the
//! correlation headers instead of reaching into ambient request state.
//! Extraction doubles as the header validator: all five correlation
//! headers must be present with non-blank values.

use axum::http::HeaderMap;

/// Mandatory correlation headers, in the order they are reported when
/// missing. Lookup through `HeaderMap` is case-insensitive.
pub const REQUIRED_HEADERS: [&str; 5] = [
    "x-correlation-id",
    "x-channel-id",
    "x-application-id",
    "x-transaction-id",
    "x-parent-id",
];

/// Correlation metadata for one inbound request.
///
/// Cancellation is not carried here: axum drops the handler future when
/// the client disconnects, which aborts any in-flight upstream call.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub correlation_id: String,
    pub channel_id: String,
    pub application_id: String,
    pub transaction_id: String,
    pub parent_id: String,
    pub app_version: Option<String>,
    pub request_id: Option<String>,
}

impl RequestContext {
    /// Validate and extract the correlation headers.
    ///
    /// Returns the missing header names (canonical lowercase, in
    /// `REQUIRED_HEADERS` order) when any mandatory value is absent,
    /// blank, or not readable as a string. The optional headers are
    /// carried through but never validated.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, Vec<String>> {
        let missing: Vec<String> = REQUIRED_HEADERS
            .iter()
            .filter(|name| header_value(headers, name).is_none())
            .map(|name| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(Self {
            correlation_id: header_value(headers, "x-correlation-id").unwrap_or_default(),
            channel_id: header_value(headers, "x-channel-id").unwrap_or_default(),
            application_id: header_value(headers, "x-application-id").unwrap_or_default(),
            transaction_id: header_value(headers, "x-transaction-id").unwrap_or_default(),
            parent_id: header_value(headers, "x-parent-id").unwrap_or_default(),
            app_version: header_value(headers, "x-app-version"),
            request_id: header_value(headers, "x-request-id"),
        })
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
