//! The connect capability an HTTP agent depends on

use std::future::Future;

use super::core::{Established, SocksConnector};
use crate::connect::options::ConnectRequest;
use crate::connect::proxy::SocksClient;
use crate::connect::types::Io;
use crate::dns::Resolve;
use crate::error::Error;
use crate::tls::TlsUpgrade;

/// Something that turns a request into a ready socket.
pub trait Connect: Send + Sync {
    type Stream: Io;

    fn connect(&self, request: ConnectRequest) -> impl Future<Output = Result<Self::Stream, Error>> + Send;
}

impl<C, R, T> Connect for SocksConnector<C, R, T>
where
    C: SocksClient,
    R: Resolve,
    T: TlsUpgrade,
{
    type Stream = Established<C, T>;

    fn connect(&self, request: ConnectRequest) -> impl Future<Output = Result<Self::Stream, Error>> + Send {
        SocksConnector::connect(self, request)
    }
}
