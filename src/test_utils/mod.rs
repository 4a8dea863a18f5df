//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Manual mocks are used here rather than a mocking framework: the
//! `FacilitySource` port is small enough that a configurable in-memory
//! implementation is clearer than macro-generated expectations.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
