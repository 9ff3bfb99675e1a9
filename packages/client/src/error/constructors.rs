use super::helpers::{BadScheme, MissingHost, OperationCanceled, TimedOut};
use super::types::{BoxError, Error, Kind};

/// Creates an `Error` for invalid configuration.
pub fn config<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Config).with(e)
}

/// Creates an `Error` for a proxy specification without a usable host.
pub fn missing_host() -> Error {
    Error::new(Kind::Config).with(MissingHost)
}

/// Creates an `Error` for a scheme that does not name a SOCKS variant.
pub fn bad_scheme(scheme: impl Into<String>) -> Error {
    Error::new(Kind::Config).with(BadScheme(scheme.into()))
}

/// Creates an `Error` for a failed client-side lookup.
pub fn dns<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Dns).with(e)
}

/// Creates an `Error` for a failed SOCKS handshake.
pub fn socks<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Socks).with(e)
}

/// Creates an `Error` for a failed TLS upgrade.
pub fn tls<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Tls).with(e)
}

/// Creates an `Error` for an elapsed deadline.
pub fn timeout() -> Error {
    Error::new(Kind::Timeout).with(TimedOut)
}

/// Creates an `Error` for a canceled call.
pub fn canceled() -> Error {
    Error::new(Kind::Canceled).with(OperationCanceled)
}
