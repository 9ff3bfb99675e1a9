//! SOCKS Agent prelude
//!
//! The types callers need to build a proxy descriptor and open connections.
//! Only canonical types that are part of the public API belong here.

// Proxy description
pub use crate::proxy::{ProxyDescriptor, ProxyScheme, ProxySpec};

// Connection establishment
pub use crate::connect::{
    Conn, Connect, ConnectRequest, Established, MaybeTlsStream, SocksAuth, SocksClient,
    SocksConnectionSpec, SocksConnector, SocksVersion, TlsOptions, TokioSocksClient, Tunnel,
};

// Collaborators
pub use crate::dns::{GaiResolver, ResolutionPolicy, Resolve, StaticResolver};
#[cfg(feature = "hickory-dns")]
pub use crate::dns::HickoryResolver;
pub use crate::tls::{RustlsUpgrader, TlsUpgrade};

// Configuration
pub use crate::config::{ConnectorConfig, TcpConfig, TlsConfig};

// Error types
pub use crate::error::{Error, Kind, Result};
