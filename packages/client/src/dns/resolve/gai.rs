use std::io;
use std::net::IpAddr;

use super::traits::Resolve;
use crate::dns::strategy::ip_literal;
use crate::error::BoxError;

/// The system resolver (`getaddrinfo`), run through `tokio::net::lookup_host`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GaiResolver {
    _priv: (),
}

impl GaiResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Resolve for GaiResolver {
    async fn lookup(&self, host: &str) -> Result<IpAddr, BoxError> {
        if let Some(ip) = ip_literal(host) {
            return Ok(ip);
        }

        let mut addrs = tokio::net::lookup_host((host, 0)).await?;
        match addrs.next() {
            Some(addr) => Ok(addr.ip()),
            None => Err(Box::new(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no addresses found for {host}"),
            ))),
        }
    }
}
