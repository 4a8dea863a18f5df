//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: the BIAN credit card facility data model
//! - `ports`: trait definitions for external dependencies

pub mod entities;
pub mod ports;
