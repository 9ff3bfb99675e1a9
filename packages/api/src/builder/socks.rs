//! SOCKS client selection for the builder

use socks_agent_client::config::TcpConfig;
use socks_agent_client::{SocksClient, TokioSocksClient};

/// Marker for the default `tokio-socks` client, created at build time so it
/// picks up the builder's TCP settings.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultSocks;

/// Something the builder can turn into a SOCKS client.
pub trait IntoSocksClient {
    type Client: SocksClient;

    fn into_socks_client(self, tcp: &TcpConfig) -> Self::Client;
}

impl IntoSocksClient for DefaultSocks {
    type Client = TokioSocksClient;

    fn into_socks_client(self, tcp: &TcpConfig) -> TokioSocksClient {
        TokioSocksClient::new(tcp.clone())
    }
}

impl<C: SocksClient> IntoSocksClient for C {
    type Client = C;

    fn into_socks_client(self, _tcp: &TcpConfig) -> C {
        self
    }
}
