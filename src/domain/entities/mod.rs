//! Domain entities
//!
//! Pure domain models for the credit card facility contract. Wire-format
//! idiosyncrasies live in serde attributes, not in the field names.

pub mod amount;
pub mod facility;

pub use amount::{Amount, AmountType, AmountValue, Currency, TextValue};
pub use facility::{
    CardNetwork, CardPaymentAgreement, CardRole, CreditCardFacility, FacilityCollection,
    InteractionSession, IssuedDevice, StatementSchedule,
};
