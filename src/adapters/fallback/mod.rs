//! In-memory fallback adapter

pub mod store;

pub use store::FallbackStore;
