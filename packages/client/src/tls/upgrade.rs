//! Post-tunnel TLS upgrade
//!
//! The upgrade never opens a connection of its own: it wraps the stream that
//! came out of the SOCKS handshake and names the original target in SNI.

use std::future::Future;
use std::io;
use std::sync::Arc;

use rustls::pki_types::ServerName;
use tokio::io::AsyncWriteExt;
use tokio_rustls::TlsConnector;
use tokio_rustls::client::TlsStream;

use super::errors::TlsError;
use super::tls_manager::TlsManager;
use crate::config::TlsConfig;
use crate::connect::options::TlsOptions;
use crate::connect::types::Io;

/// Wraps an established stream in a client TLS session.
pub trait TlsUpgrade: Send + Sync + 'static {
    type Output<S: Io>: Io;

    /// Perform the handshake over `stream`, sending `server_name` as SNI.
    fn wrap<S: Io>(
        &self,
        stream: S,
        server_name: &str,
        options: &TlsOptions,
    ) -> impl Future<Output = io::Result<Self::Output<S>>> + Send;
}

impl<T: TlsUpgrade> TlsUpgrade for Arc<T> {
    type Output<S: Io> = T::Output<S>;

    fn wrap<S: Io>(
        &self,
        stream: S,
        server_name: &str,
        options: &TlsOptions,
    ) -> impl Future<Output = io::Result<Self::Output<S>>> + Send {
        (**self).wrap(stream, server_name, options)
    }
}

/// The default upgrader, backed by `tokio-rustls`.
#[derive(Debug, Clone)]
pub struct RustlsUpgrader {
    manager: Arc<TlsManager>,
}

impl RustlsUpgrader {
    /// # Errors
    ///
    /// See [`TlsManager::new`].
    pub fn new(config: &TlsConfig) -> Result<Self, TlsError> {
        Ok(Self::from_manager(TlsManager::new(config)?))
    }

    #[must_use]
    pub fn from_manager(manager: TlsManager) -> Self {
        Self {
            manager: Arc::new(manager),
        }
    }
}

impl TlsUpgrade for RustlsUpgrader {
    type Output<S: Io> = TlsStream<S>;

    async fn wrap<S: Io>(
        &self,
        mut stream: S,
        server_name: &str,
        options: &TlsOptions,
    ) -> io::Result<TlsStream<S>> {
        let name = match ServerName::try_from(server_name.to_owned()) {
            Ok(name) => name,
            Err(_) => {
                let _ = stream.shutdown().await;
                return Err(TlsError::InvalidServerName(server_name.to_owned()).into());
            }
        };

        let connector = TlsConnector::from(self.manager.client_config(options));
        match connector.connect(name, stream).into_fallible().await {
            Ok(tls) => Ok(tls),
            Err((e, mut stream)) => {
                tracing::debug!(
                    target: "socks_agent::tls",
                    server_name,
                    error = %e,
                    "handshake failed, closing tunnel"
                );
                let _ = stream.shutdown().await;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::io::{AsyncReadExt, DuplexStream};

    use super::*;

    fn upgrader() -> RustlsUpgrader {
        let config = TlsConfig {
            use_native_certs: false,
            alpn_protocols: vec!["http/1.1".into()],
        };
        RustlsUpgrader::new(&config).expect("webpki roots load")
    }

    async fn read_client_hello(server: &mut DuplexStream) -> Vec<u8> {
        let mut hello = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = server.read(&mut buf).await.expect("read hello");
            assert!(n > 0, "tunnel closed before ClientHello");
            hello.extend_from_slice(&buf[..n]);
            if hello.len() >= 5 {
                let record = usize::from(u16::from_be_bytes([hello[3], hello[4]]));
                if hello.len() >= 5 + record {
                    return hello;
                }
            }
        }
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[tokio::test]
    async fn sni_names_target_and_failed_handshake_closes_tunnel() {
        let (client, mut server) = tokio::io::duplex(64 * 1024);
        let upgrader = upgrader();
        let handshake = tokio::spawn(async move {
            upgrader
                .wrap(client, "example.com", &TlsOptions::default())
                .await
                .map(|_| ())
        });

        let hello = read_client_hello(&mut server).await;
        assert_eq!(hello[0], 0x16, "handshake record");
        assert!(contains(&hello, b"example.com"));
        assert!(!contains(&hello, b"proxy.local"));

        server
            .write_all(b"HTTP/1.1 400 Bad Request\r\n\r\n")
            .await
            .expect("write reply");

        let result = handshake.await.expect("join");
        assert!(result.is_err());

        let mut rest = Vec::new();
        tokio::time::timeout(Duration::from_secs(5), server.read_to_end(&mut rest))
            .await
            .expect("peer sees EOF")
            .expect("read to end");
    }

    #[tokio::test]
    async fn invalid_server_name_closes_tunnel() {
        let (client, mut server) = tokio::io::duplex(1024);
        let err = upgrader()
            .wrap(client, "bad name!", &TlsOptions::default())
            .await
            .map(|_| ())
            .expect_err("name rejected");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        let mut rest = Vec::new();
        server.read_to_end(&mut rest).await.expect("read to end");
        assert!(rest.is_empty());
    }
}
