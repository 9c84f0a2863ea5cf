//! HTTP transport for Kodi's JSON-RPC endpoint.

pub mod client;
pub mod error;

pub use client::KodiClient;
pub use error::KodiError;
