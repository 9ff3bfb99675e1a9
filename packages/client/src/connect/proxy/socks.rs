//! SOCKS request types and the handshake seam
//!
//! The dispatcher describes one tunnel as a [`SocksConnectionSpec`] and hands
//! it to a [`SocksClient`], which owns the wire protocol.

use std::fmt;
use std::future::Future;
use std::io;
use std::sync::Arc;

use crate::connect::types::{Io, Tunnel};

/// SOCKS protocol version enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SocksVersion {
    V4,
    V5,
}

impl SocksVersion {
    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            SocksVersion::V4 => 4,
            SocksVersion::V5 => 5,
        }
    }
}

/// Credentials presented to the proxy.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum SocksAuth {
    #[default]
    None,
    /// SOCKS4 user id.
    UserId(String),
    /// SOCKS5 username/password (RFC 1929).
    UsernamePassword { username: String, password: String },
}

impl fmt::Debug for SocksAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SocksAuth::None => f.write_str("None"),
            SocksAuth::UserId(id) => f.debug_tuple("UserId").field(id).finish(),
            SocksAuth::UsernamePassword { username, .. } => f
                .debug_struct("UsernamePassword")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SocksCommand {
    #[default]
    Connect,
}

/// The proxy to talk to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocksProxyEndpoint {
    pub address: String,
    pub port: u16,
    pub version: SocksVersion,
}

/// Where the proxy should connect. `host` is an address literal when the
/// client resolved it, the original hostname otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocksTarget {
    pub host: String,
    pub port: u16,
}

/// Everything a SOCKS client needs for one CONNECT.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocksConnectionSpec {
    pub proxy: SocksProxyEndpoint,
    pub target: SocksTarget,
    pub command: SocksCommand,
    pub auth: SocksAuth,
}

/// Performs the SOCKS handshake and returns the established tunnel.
pub trait SocksClient: Send + Sync + 'static {
    type Stream: Io;

    fn create_connection(
        &self,
        spec: SocksConnectionSpec,
    ) -> impl Future<Output = io::Result<Tunnel<Self::Stream>>> + Send;
}

impl<C: SocksClient> SocksClient for Arc<C> {
    type Stream = C::Stream;

    fn create_connection(
        &self,
        spec: SocksConnectionSpec,
    ) -> impl Future<Output = io::Result<Tunnel<Self::Stream>>> + Send {
        (**self).create_connection(spec)
    }
}
