//! Connector service

pub mod core;
pub mod interface;
mod tower;

pub use self::core::{Established, SocksConnector};
pub use interface::Connect;
