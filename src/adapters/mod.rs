//! Adapters layer
//!
//! Implementations of the `FacilitySource` port: the legacy proxy client
//! for proxy mode and the in-memory fallback store for standalone mode.

pub mod fallback;
pub mod proxy;

pub use fallback::FallbackStore;
pub use proxy::ProxyClient;
