//! TCP socket options for the connection with the proxy

use std::io;

use socket2::{SockRef, TcpKeepalive};
use tokio::net::TcpStream;

use crate::config::TcpConfig;

/// Apply nodelay and keepalive settings to an established stream.
///
/// # Errors
///
/// Returns the OS error if a socket option cannot be set.
pub fn configure_tcp_socket(stream: &TcpStream, config: &TcpConfig) -> io::Result<()> {
    stream.set_nodelay(config.nodelay)?;

    if let Some(time) = config.keepalive {
        let keepalive = TcpKeepalive::new().with_time(time);
        SockRef::from(stream).set_tcp_keepalive(&keepalive)?;
    }
    Ok(())
}
