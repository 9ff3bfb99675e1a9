//! TCP-level pieces of the default SOCKS client

pub mod socket_config;
pub mod socks_protocol;

pub use socket_config::configure_tcp_socket;
pub use socks_protocol::TokioSocksClient;
