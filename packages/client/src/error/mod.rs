pub mod classification;
pub mod constructors;
pub mod helpers;
pub mod types;

pub use constructors::*;
pub use helpers::{BadScheme, MissingHost, OperationCanceled, TimedOut};
pub use types::{BoxError, Error, Kind, Result};

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::io;

    use super::*;

    #[test]
    fn config_errors_classify() {
        let err = bad_scheme("http:");
        assert!(err.is_config());
        assert!(!err.is_socks());
        assert!(err.to_string().contains("http:"));
    }

    #[test]
    fn collaborator_io_error_round_trips_unchanged() {
        let original = io::Error::new(io::ErrorKind::ConnectionRefused, "proxy refused");
        let err = socks(original);
        assert!(err.is_socks());

        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::ConnectionRefused);
        assert_eq!(io_err.to_string(), "proxy refused");
    }

    #[test]
    fn timeout_is_detected_through_source_chain() {
        assert!(timeout().is_timeout());

        let err = dns(io::Error::new(io::ErrorKind::TimedOut, "resolver timed out"));
        assert!(err.is_dns());
        assert!(err.is_timeout());
    }

    #[test]
    fn canceled_maps_to_interrupted() {
        let err = canceled();
        assert!(err.is_canceled());
        assert!(err.source().is_some());
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::Interrupted);
    }
}
