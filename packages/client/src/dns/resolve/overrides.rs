//! Resolver with fixed hostname overrides
//!
//! Used for pinned routing and in tests. Hosts without an override fall through
//! to the inner resolver.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;

use super::gai::GaiResolver;
use super::traits::Resolve;
use crate::error::BoxError;

#[derive(Clone, Debug, Default)]
pub struct StaticResolver<R = GaiResolver> {
    overrides: Arc<HashMap<String, IpAddr>>,
    inner: R,
}

impl StaticResolver<GaiResolver> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_fallback(GaiResolver::new())
    }
}

impl<R: Resolve> StaticResolver<R> {
    #[must_use]
    pub fn with_fallback(inner: R) -> Self {
        StaticResolver {
            overrides: Arc::new(HashMap::new()),
            inner,
        }
    }

    /// Pin `host` to `addr`. Hostnames compare case-insensitively.
    #[must_use]
    pub fn with_override(mut self, host: &str, addr: IpAddr) -> Self {
        Arc::make_mut(&mut self.overrides).insert(host.to_ascii_lowercase(), addr);
        self
    }
}

impl<R: Resolve> Resolve for StaticResolver<R> {
    async fn lookup(&self, host: &str) -> Result<IpAddr, BoxError> {
        if let Some(addr) = self.overrides.get(&host.to_ascii_lowercase()) {
            tracing::trace!(target: "socks_agent::dns", host, %addr, "override hit");
            return Ok(*addr);
        }
        self.inner.lookup(host).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn override_wins() {
        let resolver =
            StaticResolver::new().with_override("Example.COM", IpAddr::from([93, 184, 216, 34]));
        let ip = resolver.lookup("example.com").await.ok();
        assert_eq!(ip, Some(IpAddr::from([93, 184, 216, 34])));
    }
}
