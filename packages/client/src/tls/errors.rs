//! TLS-specific error types

/// Errors raised while building client TLS configuration or naming the peer
#[derive(Debug, thiserror::Error)]
pub enum TlsError {
    #[error("Protocol configuration failed: {0}")]
    Protocol(#[from] rustls::Error),
    #[error("No usable root certificates")]
    EmptyRootStore,
    #[error("Invalid server name `{0}`")]
    InvalidServerName(String),
}

impl From<TlsError> for std::io::Error {
    fn from(err: TlsError) -> Self {
        match err {
            TlsError::InvalidServerName(_) => {
                std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
            }
            other => std::io::Error::other(other),
        }
    }
}
