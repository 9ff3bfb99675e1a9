//! DNS resolution
//!
//! [`strategy`] decides whether the client resolves at all; the resolvers in
//! [`resolve`] (and [`hickory`] behind the `hickory-dns` feature) do the lookup.

pub use resolve::{GaiResolver, Resolve, StaticResolver};
pub use strategy::{ResolutionPolicy, resolution_policy};

#[cfg(feature = "hickory-dns")]
pub use hickory::HickoryResolver;

#[cfg(feature = "hickory-dns")]
pub mod hickory;
pub mod resolve;
pub mod strategy;
