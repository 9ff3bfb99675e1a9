//! Stream types

pub mod connection;
pub mod tunnel;

pub use connection::{Conn, MaybeTlsStream};
pub use tunnel::{Io, Rewind, Tunnel};
