//! Mock implementations of port traits
//!
//! Configurable in-memory implementations used to drive the handler
//! through every source outcome without a live proxy.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::domain::ports::{FacilitySource, RetrievedFacilities};
use crate::error::SourceError;

/// `FacilitySource` that returns a preconfigured outcome and records the
/// customer ids it was asked for.
pub struct MockFacilitySource {
    response: Mutex<Result<RetrievedFacilities, SourceError>>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl MockFacilitySource {
    pub fn returning(response: Result<RetrievedFacilities, SourceError>) -> Self {
        Self {
            response: Mutex::new(response),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requested_customer_ids(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl FacilitySource for MockFacilitySource {
    async fn retrieve(
        &self,
        customer_id: &str,
        _ctx: &RequestContext,
    ) -> Result<RetrievedFacilities, SourceError> {
        self.requested
            .lock()
            .unwrap()
            .push(customer_id.to_string());
        self.response.lock().unwrap().clone()
    }
}
