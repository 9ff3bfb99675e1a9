//! Proxy descriptor construction
//!
//! Turns a SOCKS proxy declaration, either structured ([`ProxySpec`]) or a
//! connection string, into an immutable [`ProxyDescriptor`].

pub mod builder;
pub mod scheme;
pub mod types;
mod url_handling;

pub use builder::{PortValue, ProxySpec};
pub use scheme::ProxyScheme;
pub use types::{DEFAULT_PROXY_PORT, ProxyDescriptor};
