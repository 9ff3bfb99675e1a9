//! SOCKS scheme tokens
//!
//! A scheme fixes both the wire version and who resolves the target hostname.

use std::fmt;
use std::str::FromStr;

use crate::connect::proxy::SocksVersion;
use crate::dns::strategy::{self, ResolutionPolicy};
use crate::error::{self, Error};

/// The SOCKS variant named by a proxy scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProxyScheme {
    /// `socks4://`
    Socks4,
    /// `socks4a://`
    Socks4a,
    /// `socks5://`
    Socks5,
    /// `socks5h://` and the bare `socks://`
    Socks5h,
}

impl ProxyScheme {
    /// Parse a scheme token.
    ///
    /// Matching is case-sensitive. A single trailing `:` (as left behind by URL
    /// parsers) is ignored.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error for any token that is not a SOCKS variant.
    pub fn parse(token: &str) -> Result<Self, Error> {
        let bare = token.strip_suffix(':').unwrap_or(token);
        match bare {
            "socks4" => Ok(ProxyScheme::Socks4),
            "socks4a" => Ok(ProxyScheme::Socks4a),
            "socks5" => Ok(ProxyScheme::Socks5),
            "socks" | "socks5h" => Ok(ProxyScheme::Socks5h),
            _ => Err(error::bad_scheme(token)),
        }
    }

    #[must_use]
    pub fn version(self) -> SocksVersion {
        match self {
            ProxyScheme::Socks4 | ProxyScheme::Socks4a => SocksVersion::V4,
            ProxyScheme::Socks5 | ProxyScheme::Socks5h => SocksVersion::V5,
        }
    }

    #[must_use]
    pub fn resolution_policy(self) -> ResolutionPolicy {
        strategy::resolution_policy(self)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProxyScheme::Socks4 => "socks4",
            ProxyScheme::Socks4a => "socks4a",
            ProxyScheme::Socks5 => "socks5",
            ProxyScheme::Socks5h => "socks5h",
        }
    }
}

impl FromStr for ProxyScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProxyScheme::parse(s)
    }
}

impl fmt::Display for ProxyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
