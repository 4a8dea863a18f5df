//! Monetary amounts with explicit decimal placement
//!
//! The BIAN wire format carries amounts as string-encoded decimals wrapped
//! in single-field objects with legacy key casing (`Value`, `Currencycode`).
//! The serde renames keep those idiosyncrasies out of the field names.

use serde::{Deserialize, Serialize};

/// A monetary value as it appears in a credit card facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    #[serde(rename = "amountValue", skip_serializing_if = "Option::is_none")]
    pub value: Option<AmountValue>,
    #[serde(rename = "amountCurrency", skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(rename = "decimalPointPosition", skip_serializing_if = "Option::is_none")]
    pub decimal_point_position: Option<TextValue>,
    #[serde(rename = "amountType", skip_serializing_if = "Option::is_none")]
    pub amount_type: Option<AmountType>,
}

/// String-encoded decimal, e.g. `"125.50"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountValue {
    #[serde(rename = "Value")]
    pub value: Option<String>,
}

/// Three-letter currency code, e.g. `"USD"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    #[serde(rename = "Currencycode")]
    pub code: Option<String>,
}

/// Single-field text wrapper used by several schema nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextValue {
    #[serde(rename = "Text")]
    pub text: Option<String>,
}

impl TextValue {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Amount classification. Closed set: unknown wire values fail decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmountType {
    Principal,
    Actual,
    Estimated,
    Maximum,
    Default,
    Replacement,
    Incremental,
    Decremental,
    Reserved,
    Available,
    Used,
    DuePayable,
    Minimum,
    Open,
    Unknown,
    Fixed,
}

impl Amount {
    /// Build an amount from minor units (cents). Always produces a value
    /// with two fractional digits and `decimalPointPosition` of `"2"`.
    pub fn from_minor_units(minor_units: i64, currency: &str, amount_type: AmountType) -> Self {
        let sign = if minor_units < 0 { "-" } else { "" };
        let abs = minor_units.unsigned_abs();
        Self {
            value: Some(AmountValue {
                value: Some(format!("{}{}.{:02}", sign, abs / 100, abs % 100)),
            }),
            currency: Some(Currency {
                code: Some(currency.to_string()),
            }),
            decimal_point_position: Some(TextValue::new("2")),
            amount_type: Some(amount_type),
        }
    }

    /// True unless both the value and the decimal point position are
    /// present and the value's fractional digit count disagrees.
    pub fn decimal_position_consistent(&self) -> bool {
        let value = self
            .value
            .as_ref()
            .and_then(|v| v.value.as_deref());
        let position = self
            .decimal_point_position
            .as_ref()
            .and_then(|p| p.text.as_deref())
            .and_then(|p| p.parse::<usize>().ok());

        match (value, position) {
            (Some(value), Some(position)) => {
                let fractional = value.rsplit_once('.').map_or(0, |(_, f)| f.len());
                fractional == position
            }
            _ => true,
        }
    }
}
