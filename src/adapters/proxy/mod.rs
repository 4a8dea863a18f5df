//! Legacy proxy adapter

pub mod client;

pub use client::ProxyClient;
