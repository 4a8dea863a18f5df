//! Credit card facility domain entities
//!
//! The legacy system of record is the source of truth; these records are
//! its facilities as seen through the BIAN contract. Internal field names
//! are semantic, the serde renames carry the wire's legacy keys
//! (`cardNetworkid`, `idsession`, ...).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Amount;
use super::amount::TextValue;

/// Top-level success payload: all facilities held by one customer.
/// The customer id itself travels alongside, never inside.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacilityCollection {
    #[serde(rename = "creditCardFacilities", default)]
    pub credit_card_facilities: Vec<CreditCardFacility>,
}

impl FacilityCollection {
    pub fn len(&self) -> usize {
        self.credit_card_facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credit_card_facilities.is_empty()
    }
}

/// One customer-held card product. Upstream data may be partial, so
/// every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreditCardFacility {
    #[serde(rename = "issuedDevice", skip_serializing_if = "Option::is_none")]
    pub issued_device: Option<IssuedDevice>,
    #[serde(rename = "statementSchedule", skip_serializing_if = "Option::is_none")]
    pub statement_schedule: Option<StatementSchedule>,
    /// Amount currently used/owed on the facility.
    #[serde(
        rename = "billingTransactionAmount",
        skip_serializing_if = "Option::is_none"
    )]
    pub billing_amount: Option<Amount>,
    #[serde(
        rename = "billingTransactionMinimumRequiredPayment",
        skip_serializing_if = "Option::is_none"
    )]
    pub billing_minimum_payment: Option<Amount>,
    /// ISO 8601 date, `YYYY-MM-DD`.
    #[serde(
        rename = "billingTransactionPaymentDueDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_due_date: Option<String>,
    #[serde(
        rename = "productInstanceReference",
        skip_serializing_if = "Option::is_none"
    )]
    pub product_agreement: Option<CardPaymentAgreement>,
    #[serde(rename = "customerInteraction", skip_serializing_if = "Option::is_none")]
    pub interaction_session: Option<InteractionSession>,
}

/// The physical/virtual card giving access to a facility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssuedDevice {
    #[serde(rename = "issuedDeviceId", skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    /// Masked card number such as `"4562 **** **** 2365"`, never the full PAN.
    #[serde(
        rename = "devicePropertySetting",
        skip_serializing_if = "Option::is_none"
    )]
    pub masked_identifier: Option<String>,
    #[serde(rename = "cardNetwork", skip_serializing_if = "Option::is_none")]
    pub network: Option<CardNetwork>,
    #[serde(rename = "cardRole", skip_serializing_if = "Option::is_none")]
    pub role: Option<CardRole>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardNetwork {
    #[serde(rename = "cardNetworkid", skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
    #[serde(rename = "cardNetwork", skip_serializing_if = "Option::is_none")]
    pub network_name: Option<String>,
}

/// Card holder role. Closed set: unknown wire values fail decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardRole {
    Primary,
    Additional,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatementSchedule {
    #[serde(rename = "scheduleType", skip_serializing_if = "Option::is_none")]
    pub schedule_type: Option<TextValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardPaymentAgreement {
    #[serde(rename = "cardAmount", skip_serializing_if = "Option::is_none")]
    pub card_amount: Option<Amount>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InteractionSession {
    #[serde(rename = "idsession", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AmountType;

    fn sample_facility() -> CreditCardFacility {
        CreditCardFacility {
            issued_device: Some(IssuedDevice {
                device_id: Some("ABC12345678".to_string()),
                masked_identifier: Some("4562 **** **** 2365".to_string()),
                network: Some(CardNetwork {
                    network_id: Some("VS012".to_string()),
                    network_name: Some("Visa".to_string()),
                }),
                role: Some(CardRole::Primary),
            }),
            statement_schedule: Some(StatementSchedule {
                schedule_type: Some(TextValue::new("Monthly")),
            }),
            billing_amount: Some(Amount::from_minor_units(12550, "USD", AmountType::Used)),
            billing_minimum_payment: Some(Amount::from_minor_units(
                2500,
                "USD",
                AmountType::Minimum,
            )),
            payment_due_date: Some("2026-01-05".to_string()),
            product_agreement: Some(CardPaymentAgreement {
                card_amount: Some(Amount::from_minor_units(12550, "USD", AmountType::Used)),
            }),
            interaction_session: Some(InteractionSession {
                session_id: Some(Uuid::from_u128(1)),
            }),
        }
    }

    #[test]
    fn wire_shape_matches_contract() {
        let collection = FacilityCollection {
            credit_card_facilities: vec![sample_facility()],
        };
        let json = serde_json::to_value(&collection).unwrap();
        let facility = &json["creditCardFacilities"][0];

        assert_eq!(facility["issuedDevice"]["issuedDeviceId"], "ABC12345678");
        assert_eq!(
            facility["issuedDevice"]["devicePropertySetting"],
            "4562 **** **** 2365"
        );
        assert_eq!(
            facility["issuedDevice"]["cardNetwork"]["cardNetworkid"],
            "VS012"
        );
        assert_eq!(facility["issuedDevice"]["cardNetwork"]["cardNetwork"], "Visa");
        assert_eq!(facility["issuedDevice"]["cardRole"], "Primary");
        assert_eq!(
            facility["statementSchedule"]["scheduleType"]["Text"],
            "Monthly"
        );
        assert_eq!(facility["billingTransactionPaymentDueDate"], "2026-01-05");
        assert_eq!(
            facility["productInstanceReference"]["cardAmount"]["amountType"],
            "Used"
        );
        assert_eq!(
            facility["customerInteraction"]["idsession"],
            "00000000-0000-0000-0000-000000000001"
        );
    }

    #[test]
    fn partial_facility_decodes() {
        let json = r#"{ "creditCardFacilities": [ { "billingTransactionPaymentDueDate": "2026-02-01" } ] }"#;
        let collection: FacilityCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.len(), 1);
        let facility = &collection.credit_card_facilities[0];
        assert!(facility.issued_device.is_none());
        assert_eq!(facility.payment_due_date.as_deref(), Some("2026-02-01"));
    }

    #[test]
    fn absent_facility_list_decodes_as_empty() {
        let collection: FacilityCollection = serde_json::from_str("{}").unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn unknown_card_role_rejected() {
        let json = r#"{ "cardRole": "Supplementary" }"#;
        assert!(serde_json::from_str::<IssuedDevice>(json).is_err());
    }

    #[test]
    fn invalid_session_id_rejected() {
        let json = r#"{ "idsession": "not-a-uuid" }"#;
        assert!(serde_json::from_str::<InteractionSession>(json).is_err());
    }
}
