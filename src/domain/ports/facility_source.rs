//! Facility source port trait
//!
//! The single seam between the request pipeline and whatever resolves
//! facilities for a customer: the legacy proxy in proxy mode, the
//! in-memory fallback store in fallback mode, mocks in tests.

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::domain::entities::FacilityCollection;
use crate::error::SourceError;

/// A resolved facility set plus, when the backend reported one, its own
/// count value. The backend may report a total across pages that differs
/// from the number of items actually returned; the facade relays it
/// verbatim without any pagination logic of its own.
#[derive(Debug, Clone)]
pub struct RetrievedFacilities {
    pub collection: FacilityCollection,
    pub total_count: Option<String>,
}

impl RetrievedFacilities {
    pub fn new(collection: FacilityCollection) -> Self {
        Self {
            collection,
            total_count: None,
        }
    }
}

/// Resolves the credit card facilities held by a customer.
///
/// One retrieve call per inbound request, no retries. Cancellation of the
/// caller's future must abort any in-flight work.
#[async_trait]
pub trait FacilitySource: Send + Sync {
    async fn retrieve(
        &self,
        customer_id: &str,
        ctx: &RequestContext,
    ) -> Result<RetrievedFacilities, SourceError>;
}
