//! Connector configuration
//!
//! Transport-level settings shared by every call made through one connector:
//! the default per-call deadline, TCP socket options applied to the tunnel, and
//! the TLS root store and ALPN defaults used by the post-tunnel upgrade.

use std::time::Duration;

pub mod validation;

pub use validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};

/// TCP socket configuration applied to the connection with the proxy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TcpConfig {
    pub nodelay: bool,
    pub keepalive: Option<Duration>,
}

impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            nodelay: true,
            keepalive: Some(Duration::from_secs(60)),
        }
    }
}

/// TLS configuration for the upgrade performed over the tunnel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsConfig {
    /// Load the platform trust store; webpki roots are used when it is
    /// disabled or fails to load.
    pub use_native_certs: bool,
    /// ALPN protocols offered when the request does not name its own.
    pub alpn_protocols: Vec<String>,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            use_native_certs: true,
            alpn_protocols: Vec::new(),
        }
    }
}

/// Configuration for a [`SocksConnector`](crate::connect::SocksConnector)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorConfig {
    /// Deadline applied to calls that do not carry their own.
    pub connect_timeout: Option<Duration>,
    pub tcp: TcpConfig,
    pub tls: TlsConfig,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Some(Duration::from_secs(30)),
            tcp: TcpConfig::default(),
            tls: TlsConfig::default(),
        }
    }
}

impl ConnectorConfig {
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn nodelay(mut self, nodelay: bool) -> Self {
        self.tcp.nodelay = nodelay;
        self
    }

    #[must_use]
    pub fn keepalive(mut self, keepalive: Option<Duration>) -> Self {
        self.tcp.keepalive = keepalive;
        self
    }

    #[must_use]
    pub fn use_native_certs(mut self, enabled: bool) -> Self {
        self.tls.use_native_certs = enabled;
        self
    }

    #[must_use]
    pub fn alpn_protocols<I, P>(mut self, protocols: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.tls.alpn_protocols = protocols.into_iter().map(Into::into).collect();
        self
    }
}

impl Validator for ConnectorConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(timeout) = self.connect_timeout {
            ConfigValidator::validate_timeout(timeout, "connect_timeout")?;
        }
        if let Some(keepalive) = self.tcp.keepalive {
            ConfigValidator::validate_timeout(keepalive, "tcp keepalive")?;
        }
        for protocol in &self.tls.alpn_protocols {
            ConfigValidator::validate_alpn(protocol)?;
        }
        Ok(())
    }
}
