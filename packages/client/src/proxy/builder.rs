//! Structured proxy specification
//!
//! [`ProxySpec`] mirrors the fields a proxy is usually declared with in a
//! configuration document. It is deliberately loose (textual port, optional
//! everything) and [`ProxySpec::build`] does the normalization.

use serde::Deserialize;

use crate::connect::options::TlsOptions;
use crate::connect::proxy::{SocksAuth, SocksVersion};
use crate::error::{self, Error};

use super::scheme::ProxyScheme;
use super::types::{DEFAULT_PROXY_PORT, ProxyDescriptor};

/// A port as written in a configuration document.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PortValue {
    Number(i64),
    Text(String),
}

impl PortValue {
    /// Numeric coercion; `None` for anything outside `1..=65535`.
    #[must_use]
    pub fn coerce(&self) -> Option<u16> {
        let n = match self {
            PortValue::Number(n) => *n,
            PortValue::Text(s) => s.trim().parse::<i64>().ok()?,
        };
        u16::try_from(n).ok().filter(|p| *p != 0)
    }
}

impl From<u16> for PortValue {
    fn from(port: u16) -> Self {
        PortValue::Number(i64::from(port))
    }
}

impl From<&str> for PortValue {
    fn from(port: &str) -> Self {
        PortValue::Text(port.to_owned())
    }
}

/// Proxy endpoint given as separate fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProxySpec {
    pub protocol: Option<String>,
    pub host: Option<String>,
    /// Takes precedence over `host`.
    pub hostname: Option<String>,
    pub port: Option<PortValue>,
    pub path: Option<String>,
    pub pathname: Option<String>,
    pub secure_endpoint: Option<bool>,
    pub user_id: Option<String>,
    pub password: Option<String>,
    pub reject_unauthorized: Option<bool>,
    pub alpn_protocols: Option<Vec<String>>,
}

impl ProxySpec {
    #[must_use]
    pub fn new(protocol: impl Into<String>, host: impl Into<String>) -> Self {
        ProxySpec {
            protocol: Some(protocol.into()),
            host: Some(host.into()),
            ..ProxySpec::default()
        }
    }

    #[must_use]
    pub fn port(mut self, port: impl Into<PortValue>) -> Self {
        self.port = Some(port.into());
        self
    }

    #[must_use]
    pub fn credentials(mut self, user_id: impl Into<String>, password: Option<String>) -> Self {
        self.user_id = Some(user_id.into());
        self.password = password;
        self
    }

    /// Normalize into a descriptor.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error when no host is present or the protocol is
    /// missing or not a SOCKS variant.
    pub fn build(&self, secure_endpoint: bool) -> Result<ProxyDescriptor, Error> {
        let (host, host_port) = self.effective_host().ok_or_else(error::missing_host)?;

        let scheme = ProxyScheme::parse(self.protocol.as_deref().unwrap_or_default())?;

        let port = self
            .port
            .as_ref()
            .and_then(PortValue::coerce)
            .or(host_port)
            .unwrap_or(DEFAULT_PROXY_PORT);

        for remnant in [&self.path, &self.pathname].into_iter().flatten() {
            if !remnant.is_empty() {
                tracing::debug!(
                    target: "socks_agent::proxy",
                    path = %remnant,
                    "discarding path alongside proxy host"
                );
            }
        }

        let auth = match (scheme.version(), self.user_id.as_deref()) {
            (_, None | Some("")) => SocksAuth::None,
            (SocksVersion::V4, Some(user)) => SocksAuth::UserId(user.to_owned()),
            (SocksVersion::V5, Some(user)) => SocksAuth::UsernamePassword {
                username: user.to_owned(),
                password: self.password.clone().unwrap_or_default(),
            },
        };

        let tls = TlsOptions {
            reject_unauthorized: self.reject_unauthorized,
            alpn_protocols: self.alpn_protocols.clone(),
            ..TlsOptions::default()
        };

        Ok(ProxyDescriptor {
            scheme,
            host,
            port,
            secure_endpoint: secure_endpoint || self.secure_endpoint.unwrap_or(false),
            auth,
            tls,
        })
    }

    /// `hostname` if set, else `host`. A `host` may carry a `:port` suffix, which
    /// is split off and used when no explicit port is given.
    fn effective_host(&self) -> Option<(String, Option<u16>)> {
        if let Some(hostname) = self.hostname.as_deref().map(str::trim)
            && !hostname.is_empty()
        {
            return Some((trim_brackets(hostname).to_owned(), None));
        }

        let host = self.host.as_deref().map(str::trim).filter(|h| !h.is_empty())?;
        let (name, port) = split_host_port(host);
        if name.is_empty() {
            return None;
        }
        Some((name.to_owned(), port))
    }
}

fn trim_brackets(host: &str) -> &str {
    host.strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host)
}

fn split_host_port(host: &str) -> (&str, Option<u16>) {
    if let Some(rest) = host.strip_prefix('[') {
        return match rest.split_once(']') {
            Some((ip, tail)) => (ip, tail.strip_prefix(':').and_then(|p| p.parse().ok())),
            None => (host, None),
        };
    }
    // a bare IPv6 literal has more than one colon and no port
    match host.split_once(':') {
        Some((name, port)) if !port.contains(':') => {
            (name, port.parse().ok().filter(|p: &u16| *p != 0))
        }
        _ => (host, None),
    }
}
