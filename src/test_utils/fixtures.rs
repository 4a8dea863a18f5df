//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use uuid::Uuid;

use crate::context::RequestContext;
use crate::domain::entities::{
    Amount, AmountType, CardNetwork, CardPaymentAgreement, CardRole, CreditCardFacility,
    FacilityCollection, InteractionSession, IssuedDevice, StatementSchedule, TextValue,
};

/// A fully-populated request context, as if every correlation header had
/// been supplied.
pub fn full_context() -> RequestContext {
    RequestContext {
        correlation_id: "corr-test".to_string(),
        channel_id: "web".to_string(),
        application_id: "app-test".to_string(),
        transaction_id: "txn-test".to_string(),
        parent_id: "parent-test".to_string(),
        app_version: None,
        request_id: None,
    }
}

/// The five mandatory correlation headers as (name, value) pairs, for
/// building inbound test requests.
pub fn required_header_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("x-correlation-id", "corr-test"),
        ("x-channel-id", "web"),
        ("x-application-id", "app-test"),
        ("x-transaction-id", "txn-test"),
        ("x-parent-id", "parent-test"),
    ]
}

/// A facility with every optional field populated.
pub fn test_facility() -> CreditCardFacility {
    CreditCardFacility {
        issued_device: Some(IssuedDevice {
            device_id: Some("TST00000001".to_string()),
            masked_identifier: Some("4000 **** **** 0002".to_string()),
            network: Some(CardNetwork {
                network_id: Some("VS012".to_string()),
                network_name: Some("Visa".to_string()),
            }),
            role: Some(CardRole::Primary),
        }),
        statement_schedule: Some(StatementSchedule {
            schedule_type: Some(TextValue::new("Monthly")),
        }),
        billing_amount: Some(Amount::from_minor_units(10000, "USD", AmountType::Used)),
        billing_minimum_payment: Some(Amount::from_minor_units(
            1500,
            "USD",
            AmountType::Minimum,
        )),
        payment_due_date: Some("2026-03-01".to_string()),
        product_agreement: Some(CardPaymentAgreement {
            card_amount: Some(Amount::from_minor_units(10000, "USD", AmountType::Used)),
        }),
        interaction_session: Some(InteractionSession {
            session_id: Some(Uuid::from_u128(0xabc)),
        }),
    }
}

/// A collection with `count` copies of the default test facility.
pub fn test_collection(count: usize) -> FacilityCollection {
    FacilityCollection {
        credit_card_facilities: (0..count).map(|_| test_facility()).collect(),
    }
}
