//! Domain ports (traits)
//!
//! Port traits define interfaces that the request pipeline requires.
//! Adapters provide concrete implementations of these traits.

pub mod facility_source;

pub use facility_source::{FacilitySource, RetrievedFacilities};
