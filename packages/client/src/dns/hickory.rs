//! DNS resolution via the [hickory-resolver](https://github.com/hickory-dns/hickory-dns) crate

use std::fmt;
use std::io;
use std::net::IpAddr;
use std::sync::Arc;

use hickory_resolver::config::LookupIpStrategy;
use hickory_resolver::{ResolveError, TokioResolver};
use tokio::sync::OnceCell;

use super::resolve::Resolve;
use super::strategy::ip_literal;
use crate::error::BoxError;

/// Async hickory resolver reading the system configuration.
#[derive(Default, Clone)]
pub struct HickoryResolver {
    /// Construction reads `/etc/resolv.conf`, so it is delayed to first use.
    state: Arc<OnceCell<TokioResolver>>,
}

#[derive(Debug)]
struct HickoryDnsSystemConfError(ResolveError);

impl fmt::Debug for HickoryResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HickoryResolver")
            .field("initialized", &self.state.initialized())
            .finish()
    }
}

impl HickoryResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Resolve for HickoryResolver {
    async fn lookup(&self, host: &str) -> Result<IpAddr, BoxError> {
        if let Some(ip) = ip_literal(host) {
            return Ok(ip);
        }

        let resolver = self.state.get_or_try_init(|| async { new_resolver() }).await?;
        let lookup = resolver.lookup_ip(host).await?;
        lookup.iter().next().ok_or_else(|| {
            Box::new(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no addresses found for {host}"),
            )) as BoxError
        })
    }
}

/// The options are overridden to prefer IPv4 and fall back to IPv6, matching
/// the platform's default record family on most systems.
fn new_resolver() -> Result<TokioResolver, HickoryDnsSystemConfError> {
    let mut builder = TokioResolver::builder_tokio().map_err(HickoryDnsSystemConfError)?;
    builder.options_mut().ip_strategy = LookupIpStrategy::Ipv4thenIpv6;
    Ok(builder.build())
}

impl fmt::Display for HickoryDnsSystemConfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error reading DNS system conf for hickory-dns")
    }
}

impl std::error::Error for HickoryDnsSystemConfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, Ipv6Addr};

    use super::*;

    #[tokio::test]
    async fn ip_literals_skip_system_config() {
        let resolver = HickoryResolver::new();
        let v4 = resolver.lookup("127.0.0.1").await.expect("v4 literal");
        assert_eq!(v4, IpAddr::V4(Ipv4Addr::LOCALHOST));
        let v6 = resolver.lookup("[::1]").await.expect("v6 literal");
        assert_eq!(v6, IpAddr::V6(Ipv6Addr::LOCALHOST));
        assert!(!resolver.state.initialized());
    }

    #[test]
    fn clones_share_the_lazy_resolver() {
        let resolver = HickoryResolver::new();
        let clone = resolver.clone();
        assert!(Arc::ptr_eq(&resolver.state, &clone.state));
    }
}
