//! TLS over an established tunnel

pub mod errors;
pub mod tls_manager;
pub mod upgrade;
mod verifier;

pub use errors::TlsError;
pub use tls_manager::TlsManager;
pub use upgrade::{RustlsUpgrader, TlsUpgrade};
