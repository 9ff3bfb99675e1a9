//! Resolver implementations

mod gai;
mod overrides;
mod traits;

pub use gai::GaiResolver;
pub use overrides::StaticResolver;
pub use traits::Resolve;
