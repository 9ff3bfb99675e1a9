//! The resolver seam used for client-side resolution

use std::future::Future;
use std::net::IpAddr;
use std::sync::Arc;

use crate::error::BoxError;

/// Resolve a hostname to a single address.
///
/// Only the first address matters: the SOCKS request carries exactly one
/// target, so there is no fallback across records.
pub trait Resolve: Send + Sync + 'static {
    fn lookup(&self, host: &str) -> impl Future<Output = Result<IpAddr, BoxError>> + Send;
}

impl<R: Resolve> Resolve for Arc<R> {
    fn lookup(&self, host: &str) -> impl Future<Output = Result<IpAddr, BoxError>> + Send {
        (**self).lookup(host)
    }
}
