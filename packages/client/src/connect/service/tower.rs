//! `tower_service::Service<Uri>` so hyper-util's legacy client can dial through
//! the proxy

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use http::Uri;
use tower_service::Service;

use super::core::{Established, SocksConnector};
use crate::connect::options::ConnectRequest;
use crate::connect::proxy::SocksClient;
use crate::connect::types::Conn;
use crate::dns::Resolve;
use crate::error::Error;
use crate::tls::TlsUpgrade;

impl<C, R, T> Service<Uri> for SocksConnector<C, R, T>
where
    C: SocksClient,
    R: Resolve,
    T: TlsUpgrade,
{
    type Response = Conn<Established<C, T>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, dst: Uri) -> Self::Future {
        let connector = self.clone();
        Box::pin(async move {
            let request = ConnectRequest::from_uri(&dst)?;
            let stream = connector.connect(request).await?;
            Ok(Conn::new(stream))
        })
    }
}
