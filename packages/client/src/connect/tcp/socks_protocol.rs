//! SOCKS handshakes over `tokio-socks`

use std::io;
use std::net::SocketAddr;

use tokio::net::TcpStream;
use tokio_socks::tcp::{Socks4Stream, Socks5Stream};
use tokio_socks::{IntoTargetAddr, TargetAddr};

use super::socket_config::configure_tcp_socket;
use crate::config::TcpConfig;
use crate::connect::proxy::{SocksAuth, SocksClient, SocksConnectionSpec, SocksVersion};
use crate::connect::types::Tunnel;
use crate::dns::strategy::ip_literal;

/// The default SOCKS client: opens a TCP connection to the proxy and runs the
/// SOCKS4(a) or SOCKS5 handshake with `tokio-socks`.
#[derive(Clone, Debug, Default)]
pub struct TokioSocksClient {
    tcp: TcpConfig,
}

impl TokioSocksClient {
    #[must_use]
    pub fn new(tcp: TcpConfig) -> Self {
        Self { tcp }
    }
}

impl SocksClient for TokioSocksClient {
    type Stream = TcpStream;

    async fn create_connection(&self, spec: SocksConnectionSpec) -> io::Result<Tunnel<TcpStream>> {
        let proxy = (spec.proxy.address.as_str(), spec.proxy.port);
        let target = socks_target(&spec.target.host, spec.target.port)?;

        let stream = match (spec.proxy.version, &spec.auth) {
            (SocksVersion::V4, SocksAuth::UserId(user_id))
            | (SocksVersion::V4, SocksAuth::UsernamePassword { username: user_id, .. }) => {
                Socks4Stream::connect_with_userid(proxy, target, user_id)
                    .await
                    .map_err(into_io)?
                    .into_inner()
            }
            (SocksVersion::V4, SocksAuth::None) => Socks4Stream::connect(proxy, target)
                .await
                .map_err(into_io)?
                .into_inner(),
            (SocksVersion::V5, SocksAuth::UsernamePassword { username, password }) => {
                Socks5Stream::connect_with_password(proxy, target, username, password)
                    .await
                    .map_err(into_io)?
                    .into_inner()
            }
            (SocksVersion::V5, SocksAuth::UserId(username)) => {
                Socks5Stream::connect_with_password(proxy, target, username, "")
                    .await
                    .map_err(into_io)?
                    .into_inner()
            }
            (SocksVersion::V5, SocksAuth::None) => Socks5Stream::connect(proxy, target)
                .await
                .map_err(into_io)?
                .into_inner(),
        };

        configure_tcp_socket(&stream, &self.tcp)?;
        tracing::debug!(
            target: "socks_agent::socks",
            version = spec.proxy.version.as_u8(),
            proxy = %spec.proxy.address,
            "handshake complete"
        );
        Ok(Tunnel::new(stream))
    }
}

/// Address literals go out as addresses, anything else as a domain name for
/// the proxy to resolve.
fn socks_target(host: &str, port: u16) -> io::Result<TargetAddr<'static>> {
    match ip_literal(host) {
        Some(ip) => Ok(TargetAddr::Ip(SocketAddr::new(ip, port))),
        None => (host.to_owned(), port).into_target_addr().map_err(into_io),
    }
}

/// Transport failures keep their original `io::Error`; protocol failures
/// (rejections, bad replies) are wrapped.
fn into_io(err: tokio_socks::Error) -> io::Error {
    match err {
        tokio_socks::Error::Io(e) => e,
        other => io::Error::other(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_targets_are_addresses() {
        let target = socks_target("93.184.216.34", 443).ok();
        assert!(matches!(target, Some(TargetAddr::Ip(addr)) if addr.port() == 443));
    }

    #[test]
    fn hostnames_go_to_the_proxy() {
        let target = socks_target("example.com", 80).ok();
        assert!(matches!(target, Some(TargetAddr::Domain(ref d, 80)) if d == "example.com"));
    }
}
