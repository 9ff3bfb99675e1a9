//! Who resolves the target hostname.
//!
//! The decision is a pure function of the scheme: plain `socks4` / `socks5`
//! resolve on the client, the `4a` / `5h` variants (and bare `socks`) hand the
//! hostname to the proxy.

use std::net::IpAddr;

use crate::proxy::ProxyScheme;

/// Where the target hostname is turned into an address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolutionPolicy {
    /// Resolve locally and send the proxy an address.
    ClientSide,
    /// Send the proxy the hostname unresolved.
    ProxySide,
}

impl ResolutionPolicy {
    #[must_use]
    pub fn client_resolves(self) -> bool {
        self == ResolutionPolicy::ClientSide
    }
}

#[must_use]
pub fn resolution_policy(scheme: ProxyScheme) -> ResolutionPolicy {
    match scheme {
        ProxyScheme::Socks4 | ProxyScheme::Socks5 => ResolutionPolicy::ClientSide,
        ProxyScheme::Socks4a | ProxyScheme::Socks5h => ResolutionPolicy::ProxySide,
    }
}

/// IP literals never need a lookup, whatever the policy.
#[must_use]
pub fn ip_literal(host: &str) -> Option<IpAddr> {
    host.trim_start_matches('[')
        .trim_end_matches(']')
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_per_scheme() {
        assert!(resolution_policy(ProxyScheme::Socks4).client_resolves());
        assert!(resolution_policy(ProxyScheme::Socks5).client_resolves());
        assert!(!resolution_policy(ProxyScheme::Socks4a).client_resolves());
        assert!(!resolution_policy(ProxyScheme::Socks5h).client_resolves());
    }

    #[test]
    fn literals() {
        assert_eq!(ip_literal("[::1]"), Some(IpAddr::from([0u16, 0, 0, 0, 0, 0, 0, 1])));
        assert_eq!(ip_literal("10.0.0.1"), Some(IpAddr::from([10, 0, 0, 1])));
        assert_eq!(ip_literal("example.com"), None);
    }
}
