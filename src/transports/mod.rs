//! Supported Ethereum JSON-RPC transports.

#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "http")]
pub use self::http::Http;
