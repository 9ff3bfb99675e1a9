//! Agent builder API

pub mod core;
pub mod socks;

pub use self::core::{Agent, AgentBuilder};
pub use socks::{DefaultSocks, IntoSocksClient};
