//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod facilities;

pub use facilities::retrieve_credit_card_facility;
