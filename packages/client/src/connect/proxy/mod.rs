//! SOCKS connection requests

pub mod socks;

pub use socks::{
    SocksAuth, SocksClient, SocksCommand, SocksConnectionSpec, SocksProxyEndpoint, SocksTarget,
    SocksVersion,
};
