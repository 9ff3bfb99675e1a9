//! Connection establishment through a SOCKS proxy
//!
//! [`SocksConnector`] merges per-call options, applies the resolution policy,
//! delegates the handshake to a [`SocksClient`] and, for secure destinations,
//! upgrades the tunnel with a [`TlsUpgrade`](crate::tls::TlsUpgrade).

pub mod options;
pub mod proxy;
pub mod service;
pub mod tcp;
pub mod types;

pub use options::{ConnectRequest, DEFAULT_HTTP_PORT, DEFAULT_HTTPS_PORT, EffectiveOptions, TlsOptions};
pub use proxy::{
    SocksAuth, SocksClient, SocksCommand, SocksConnectionSpec, SocksProxyEndpoint, SocksTarget,
    SocksVersion,
};
pub use service::{Connect, Established, SocksConnector};
pub use tcp::{TokioSocksClient, configure_tcp_socket};
pub use types::{Conn, Io, MaybeTlsStream, Rewind, Tunnel};
