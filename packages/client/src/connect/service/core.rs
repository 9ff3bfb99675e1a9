//! The connection dispatcher
//!
//! One call runs INIT → (RESOLVING | SKIP_RESOLUTION) → HANDSHAKING →
//! (UPGRADING_TLS | DONE). Any failure is terminal and nothing is retried.

use std::fmt;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::config::{ConnectorConfig, Validator};
use crate::connect::options::{ConnectRequest, EffectiveOptions};
use crate::connect::proxy::{
    SocksClient, SocksCommand, SocksConnectionSpec, SocksProxyEndpoint, SocksTarget,
};
use crate::connect::tcp::TokioSocksClient;
use crate::connect::types::{MaybeTlsStream, Rewind};
use crate::dns::strategy::ip_literal;
use crate::dns::{GaiResolver, Resolve};
use crate::error::{self, Error};
use crate::proxy::ProxyDescriptor;
use crate::tls::{RustlsUpgrader, TlsUpgrade};

/// The stream a successful call yields.
pub type Established<C, T> = MaybeTlsStream<
    Rewind<<C as SocksClient>::Stream>,
    <T as TlsUpgrade>::Output<Rewind<<C as SocksClient>::Stream>>,
>;

/// Opens connections through one SOCKS proxy.
///
/// Cheap to clone; clones share the descriptor and collaborators.
pub struct SocksConnector<C = TokioSocksClient, R = GaiResolver, T = RustlsUpgrader> {
    inner: Arc<Inner<C, R, T>>,
}

struct Inner<C, R, T> {
    descriptor: ProxyDescriptor,
    socks: C,
    resolver: R,
    tls: T,
    config: ConnectorConfig,
}

impl SocksConnector {
    /// Connector with the default collaborators and configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the TLS configuration cannot be built.
    pub fn new(descriptor: ProxyDescriptor) -> Result<Self, Error> {
        Self::with_config(descriptor, ConnectorConfig::default())
    }

    /// # Errors
    ///
    /// Returns a `Config` error if `config` does not validate or the TLS
    /// configuration cannot be built.
    pub fn with_config(descriptor: ProxyDescriptor, config: ConnectorConfig) -> Result<Self, Error> {
        config.validate().map_err(error::config)?;
        let tls = RustlsUpgrader::new(&config.tls).map_err(error::config)?;
        let socks = TokioSocksClient::new(config.tcp.clone());
        Ok(Self::with_parts(descriptor, socks, GaiResolver::new(), tls, config))
    }
}

impl<C, R, T> SocksConnector<C, R, T> {
    /// Assemble a connector from explicit collaborators.
    pub fn with_parts(
        descriptor: ProxyDescriptor,
        socks: C,
        resolver: R,
        tls: T,
        config: ConnectorConfig,
    ) -> Self {
        SocksConnector {
            inner: Arc::new(Inner {
                descriptor,
                socks,
                resolver,
                tls,
                config,
            }),
        }
    }

    pub fn descriptor(&self) -> &ProxyDescriptor {
        &self.inner.descriptor
    }

    pub fn config(&self) -> &ConnectorConfig {
        &self.inner.config
    }
}

impl<C, R, T> SocksConnector<C, R, T>
where
    C: SocksClient,
    R: Resolve,
    T: TlsUpgrade,
{
    /// Open a connection to `request.host` through the proxy.
    ///
    /// The call runs under `request.timeout`, or the configured
    /// `connect_timeout` when the request has none.
    ///
    /// # Errors
    ///
    /// Fails with `Config`, `Dns`, `Socks`, `Tls` or `Timeout` depending on
    /// the stage that failed. Collaborator errors are kept as the source.
    pub async fn connect(&self, request: ConnectRequest) -> Result<Established<C, T>, Error> {
        let options = EffectiveOptions::merge(&self.inner.descriptor, &request);
        let deadline = request.timeout.or(self.inner.config.connect_timeout);

        let span = tracing::debug_span!(
            "socks_connect",
            proxy = %self.inner.descriptor,
            target = %options.host,
            port = options.port,
        );
        let establish = self.establish(options).instrument(span);

        match deadline {
            Some(deadline) => tokio::time::timeout(deadline, establish)
                .await
                .map_err(|_| error::timeout())?,
            None => establish.await,
        }
    }

    /// [`connect`](Self::connect), abandoned as soon as `token` is cancelled.
    ///
    /// # Errors
    ///
    /// As `connect`, plus `Canceled` when the token fires first.
    pub async fn connect_with_cancel(
        &self,
        request: ConnectRequest,
        token: CancellationToken,
    ) -> Result<Established<C, T>, Error> {
        tokio::select! {
            biased;
            () = token.cancelled() => Err(error::canceled()),
            res = self.connect(request) => res,
        }
    }

    async fn establish(&self, options: EffectiveOptions) -> Result<Established<C, T>, Error> {
        let inner = &*self.inner;
        let descriptor = &inner.descriptor;

        if options.host.is_empty() {
            return Err(error::config("request has no target host"));
        }

        let target_host = match ip_literal(&options.host) {
            Some(ip) => ip.to_string(),
            None if descriptor.resolution_policy().client_resolves() => {
                tracing::debug!(state = "resolving");
                let ip = inner
                    .resolver
                    .lookup(&options.host)
                    .await
                    .map_err(error::dns)?;
                ip.to_string()
            }
            None => {
                tracing::debug!(state = "skip_resolution");
                options.host.clone()
            }
        };

        let spec = SocksConnectionSpec {
            proxy: SocksProxyEndpoint {
                address: descriptor.host().to_owned(),
                port: descriptor.port(),
                version: descriptor.version(),
            },
            target: SocksTarget {
                host: target_host,
                port: options.port,
            },
            command: SocksCommand::Connect,
            auth: descriptor.auth().clone(),
        };

        tracing::debug!(state = "handshaking", socks_target = %spec.target.host);
        let tunnel = inner
            .socks
            .create_connection(spec)
            .await
            .map_err(error::socks)?;
        let stream = tunnel.resume();

        if !options.secure {
            tracing::info!("tunnel established");
            return Ok(MaybeTlsStream::Plain { stream });
        }

        let server_name = options
            .host
            .trim_start_matches('[')
            .trim_end_matches(']');
        tracing::debug!(state = "upgrading_tls", sni = server_name);
        let stream = inner
            .tls
            .wrap(stream, server_name, &options.tls)
            .await
            .map_err(error::tls)?;

        tracing::info!("tunnel established");
        Ok(MaybeTlsStream::Tls { stream })
    }
}

impl<C, R, T> Clone for SocksConnector<C, R, T> {
    fn clone(&self) -> Self {
        SocksConnector {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C, R, T> fmt::Debug for SocksConnector<C, R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SocksConnector")
            .field("proxy", &self.inner.descriptor)
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}
