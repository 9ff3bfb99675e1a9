//! # SOCKS Agent Client
//!
//! Connection establishment through SOCKS4, SOCKS4a, SOCKS5 and SOCKS5h
//! proxies for HTTP(S) clients.
//!
//! ## Features
//!
//! - **Scheme-driven setup**: the proxy scheme fixes the protocol version and
//!   whether the client or the proxy resolves target hostnames
//! - **Pluggable collaborators** for the SOCKS handshake, DNS and TLS
//! - **Post-tunnel TLS** with `rustls`, SNI set to the real destination
//! - **hyper-util integration** through `tower_service::Service<Uri>`
//! - **Deadlines and cancellation** per call
//!
//! ## Usage
//!
//! ```no_run
//! use socks_agent_client::{ConnectRequest, ProxyDescriptor, SocksConnector};
//!
//! # async fn run() -> Result<(), socks_agent_client::Error> {
//! let proxy: ProxyDescriptor = "socks5h://127.0.0.1:9050".parse()?;
//! let connector = SocksConnector::new(proxy)?;
//! let stream = connector
//!     .connect(ConnectRequest::new("example.com").secure(true))
//!     .await?;
//! assert!(stream.is_tls());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod connect;
pub mod dns;
pub mod error;
pub mod prelude;
pub mod proxy;
pub mod tls;

pub use crate::prelude::*;
