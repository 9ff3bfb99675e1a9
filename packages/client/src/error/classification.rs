use std::error::Error as StdError;
use std::io;

use super::helpers::TimedOut;
use super::types::{Error, Kind};

impl Error {
    /// Returns true if the error came from descriptor construction or an
    /// unusable request.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self.kind(), Kind::Config)
    }

    /// Returns true if client-side DNS resolution failed.
    #[must_use]
    pub fn is_dns(&self) -> bool {
        matches!(self.kind(), Kind::Dns)
    }

    /// Returns true if the SOCKS handshake failed.
    #[must_use]
    pub fn is_socks(&self) -> bool {
        matches!(self.kind(), Kind::Socks)
    }

    /// Returns true if the TLS upgrade failed.
    #[must_use]
    pub fn is_tls(&self) -> bool {
        matches!(self.kind(), Kind::Tls)
    }

    /// Returns true if the error is related to a timeout, either the call
    /// deadline or a collaborator reporting `TimedOut`.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        if matches!(self.kind(), Kind::Timeout) {
            return true;
        }

        let mut source = self.source();

        while let Some(err) = source {
            if err.is::<TimedOut>() {
                return true;
            }
            if let Some(io) = err.downcast_ref::<io::Error>()
                && io.kind() == io::ErrorKind::TimedOut
            {
                return true;
            }
            source = err.source();
        }

        false
    }

    /// Returns true if the call was canceled by the caller.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        matches!(self.kind(), Kind::Canceled)
    }
}
