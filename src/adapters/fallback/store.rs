//! In-memory fallback store
//!
//! Read-only, case-insensitive customer lookup that lets the facade run
//! standalone (demos, deterministic tests) without a live proxy. The
//! mapping is built once at the composition root and injected; nothing
//! mutates it afterwards and concurrent reads need no synchronization.

use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::context::RequestContext;
use crate::domain::entities::{
    Amount, AmountType, CardNetwork, CardPaymentAgreement, CardRole, CreditCardFacility,
    FacilityCollection, InteractionSession, IssuedDevice, StatementSchedule, TextValue,
};
use crate::domain::ports::{FacilitySource, RetrievedFacilities};
use crate::error::SourceError;

/// `FacilitySource` backed by a canned in-memory mapping.
pub struct FallbackStore {
    records: HashMap<String, FacilityCollection>,
}

impl FallbackStore {
    /// Build a store from explicit records. Keys are matched
    /// case-insensitively.
    pub fn new(records: impl IntoIterator<Item = (String, FacilityCollection)>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|(customer_id, collection)| (customer_id.to_lowercase(), collection))
                .collect(),
        }
    }

    /// The canned customers mirroring the legacy system's demo data.
    pub fn with_seed_data() -> Self {
        Self::new([
            (
                "CUST-123".to_string(),
                FacilityCollection {
                    credit_card_facilities: vec![
                        card(
                            "ABC12345678",
                            "4562 **** **** 2365",
                            "VS012",
                            "Visa",
                            CardRole::Primary,
                            12550,
                            2500,
                            "2026-01-05",
                            Uuid::from_u128(1),
                        ),
                        card(
                            "XYZ98765432",
                            "4111 **** **** 1111",
                            "MC001",
                            "Mastercard",
                            CardRole::Additional,
                            98000,
                            8000,
                            "2026-01-05",
                            Uuid::from_u128(1),
                        ),
                    ],
                },
            ),
            (
                "CUST-1234".to_string(),
                FacilityCollection {
                    credit_card_facilities: vec![card(
                        "QWE11122233",
                        "5100 **** **** 9921",
                        "MC001",
                        "Mastercard",
                        CardRole::Primary,
                        3500,
                        1000,
                        "2026-01-12",
                        Uuid::from_u128(0x999),
                    )],
                },
            ),
        ])
    }
}

#[async_trait]
impl FacilitySource for FallbackStore {
    async fn retrieve(
        &self,
        customer_id: &str,
        _ctx: &RequestContext,
    ) -> Result<RetrievedFacilities, SourceError> {
        self.records
            .get(&customer_id.to_lowercase())
            .cloned()
            .map(RetrievedFacilities::new)
            .ok_or_else(|| SourceError::NotFound(customer_id.to_string()))
    }
}

#[allow(clippy::too_many_arguments)]
fn card(
    device_id: &str,
    masked_pan: &str,
    network_id: &str,
    network_name: &str,
    role: CardRole,
    used_minor_units: i64,
    min_pay_minor_units: i64,
    due_date: &str,
    session_id: Uuid,
) -> CreditCardFacility {
    CreditCardFacility {
        issued_device: Some(IssuedDevice {
            device_id: Some(device_id.to_string()),
            masked_identifier: Some(masked_pan.to_string()),
            network: Some(CardNetwork {
                network_id: Some(network_id.to_string()),
                network_name: Some(network_name.to_string()),
            }),
            role: Some(role),
        }),
        statement_schedule: Some(StatementSchedule {
            schedule_type: Some(TextValue::new("Monthly")),
        }),
        billing_amount: Some(Amount::from_minor_units(
            used_minor_units,
            "USD",
            AmountType::Used,
        )),
        billing_minimum_payment: Some(Amount::from_minor_units(
            min_pay_minor_units,
            "USD",
            AmountType::Minimum,
        )),
        payment_due_date: Some(due_date.to_string()),
        product_agreement: Some(CardPaymentAgreement {
            card_amount: Some(Amount::from_minor_units(
                used_minor_units,
                "USD",
                AmountType::Used,
            )),
        }),
        interaction_session: Some(InteractionSession {
            session_id: Some(session_id),
        }),
    }
}
