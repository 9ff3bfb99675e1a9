//! Per-call connect options and their merge with proxy-level defaults

use std::collections::BTreeMap;
use std::time::Duration;

use http::Uri;

use crate::error::{self, Error};
use crate::proxy::ProxyDescriptor;

/// Destination port used for plain requests without one.
pub const DEFAULT_HTTP_PORT: u16 = 80;
/// Destination port used for secure requests without one.
pub const DEFAULT_HTTPS_PORT: u16 = 443;

/// TLS options for the upgrade after the tunnel is up.
///
/// Unset fields defer to whatever they are merged under.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TlsOptions {
    /// Verify the peer certificate. Defaults to `true`.
    pub reject_unauthorized: Option<bool>,
    pub alpn_protocols: Option<Vec<String>>,
    /// Opaque pass-through values for custom upgraders.
    pub extra: BTreeMap<String, String>,
}

impl TlsOptions {
    /// Field-wise merge; every field `overlay` sets wins.
    #[must_use]
    pub fn merge(&self, overlay: &TlsOptions) -> TlsOptions {
        let mut extra = self.extra.clone();
        extra.extend(overlay.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        TlsOptions {
            reject_unauthorized: overlay.reject_unauthorized.or(self.reject_unauthorized),
            alpn_protocols: overlay
                .alpn_protocols
                .clone()
                .or_else(|| self.alpn_protocols.clone()),
            extra,
        }
    }

    #[must_use]
    pub fn rejects_unauthorized(&self) -> bool {
        self.reject_unauthorized.unwrap_or(true)
    }
}

/// One outbound connection request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectRequest {
    pub host: String,
    /// `None` (or `0`) picks 80 or 443.
    pub port: Option<u16>,
    /// Overrides the descriptor's secure-endpoint flag.
    pub secure: Option<bool>,
    pub tls: TlsOptions,
    /// Overrides the connector's default deadline.
    pub timeout: Option<Duration>,
}

impl ConnectRequest {
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        ConnectRequest {
            host: host.into(),
            ..ConnectRequest::default()
        }
    }

    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    #[must_use]
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = Some(secure);
        self
    }

    #[must_use]
    pub fn tls(mut self, tls: TlsOptions) -> Self {
        self.tls = tls;
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Target of an HTTP request URI. `https` and `wss` URIs are secure.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the URI has no host.
    pub fn from_uri(uri: &Uri) -> Result<Self, Error> {
        let host = uri
            .host()
            .map(|h| h.trim_start_matches('[').trim_end_matches(']'))
            .filter(|h| !h.is_empty())
            .ok_or_else(|| error::config(format!("URI `{uri}` has no host")))?;

        let secure = matches!(uri.scheme_str(), Some("https" | "wss"));

        Ok(ConnectRequest {
            host: host.to_owned(),
            port: uri.port_u16(),
            secure: secure.then_some(true),
            ..ConnectRequest::default()
        })
    }
}

/// The options one call actually runs with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveOptions {
    pub host: String,
    pub port: u16,
    pub secure: bool,
    pub tls: TlsOptions,
}

impl EffectiveOptions {
    /// Proxy-level TLS defaults first, then the default destination port, then
    /// the caller's values on top.
    #[must_use]
    pub fn merge(descriptor: &ProxyDescriptor, request: &ConnectRequest) -> Self {
        let secure = request.secure.unwrap_or(descriptor.secure_endpoint());
        let default_port = if secure {
            DEFAULT_HTTPS_PORT
        } else {
            DEFAULT_HTTP_PORT
        };

        EffectiveOptions {
            host: request.host.clone(),
            port: request.port.filter(|p| *p != 0).unwrap_or(default_port),
            secure,
            tls: descriptor.tls().merge(&request.tls),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::ProxySpec;

    fn descriptor(secure: bool) -> ProxyDescriptor {
        ProxySpec {
            reject_unauthorized: Some(false),
            alpn_protocols: Some(vec!["http/1.1".into()]),
            ..ProxySpec::new("socks5h", "proxy.local")
        }
        .build(secure)
        .expect("valid spec")
    }

    #[test]
    fn default_destination_ports() {
        let plain = EffectiveOptions::merge(&descriptor(false), &ConnectRequest::new("a.test"));
        assert_eq!(plain.port, 80);
        let secure = EffectiveOptions::merge(&descriptor(true), &ConnectRequest::new("a.test"));
        assert_eq!(secure.port, 443);
        let zero = EffectiveOptions::merge(&descriptor(false), &ConnectRequest::new("a.test").port(0));
        assert_eq!(zero.port, 80);
    }

    #[test]
    fn request_secure_flag_overrides_descriptor() {
        let request = ConnectRequest::new("a.test").secure(false);
        let effective = EffectiveOptions::merge(&descriptor(true), &request);
        assert!(!effective.secure);
        assert_eq!(effective.port, 80);

        let request = ConnectRequest::new("a.test").secure(true);
        assert!(EffectiveOptions::merge(&descriptor(false), &request).secure);
    }

    #[test]
    fn caller_values_win() {
        let mut tls = TlsOptions {
            reject_unauthorized: Some(true),
            ..TlsOptions::default()
        };
        tls.extra.insert("servername".into(), "override".into());
        let request = ConnectRequest::new("a.test").port(8443).tls(tls);

        let effective = EffectiveOptions::merge(&descriptor(true), &request);
        assert_eq!(effective.port, 8443);
        assert_eq!(effective.tls.reject_unauthorized, Some(true));
        assert_eq!(effective.tls.alpn_protocols, Some(vec!["http/1.1".to_owned()]));
        assert_eq!(effective.tls.extra.get("servername").map(String::as_str), Some("override"));
    }

    #[test]
    fn uri_scheme_sets_secure() {
        let uri: Uri = "https://[::1]:8443/path".parse().expect("valid uri");
        let request = ConnectRequest::from_uri(&uri).expect("has host");
        assert_eq!(request.host, "::1");
        assert_eq!(request.port, Some(8443));
        assert_eq!(request.secure, Some(true));

        let uri: Uri = "http://example.com".parse().expect("valid uri");
        assert_eq!(ConnectRequest::from_uri(&uri).expect("has host").secure, None);
    }
}
