use std::error::Error as StdError;
use std::fmt;
use std::io;

/// A `Result` alias where the `Err` case is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Represents errors that can occur while building a proxy descriptor or
/// establishing a tunneled connection.
///
/// The collaborator error that caused the failure (resolver, SOCKS client,
/// TLS session factory) is kept untouched as the [`source`](StdError::source).
pub struct Error {
    inner: Box<Inner>,
}

struct Inner {
    kind: Kind,
    source: Option<BoxError>,
}

/// Classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Missing host, unsupported scheme or other invalid proxy configuration.
    /// Only ever raised while constructing a descriptor or before any I/O.
    Config,
    /// Client-side lookup of the target hostname failed.
    Dns,
    /// The proxy refused the request or the tunnel could not be established.
    Socks,
    /// TLS negotiation over the tunnel failed.
    Tls,
    /// The per-call deadline elapsed.
    Timeout,
    /// The caller cancelled the call.
    Canceled,
}

impl Error {
    pub(crate) fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner { kind, source: None }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub(crate) fn with<E: Into<BoxError>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    /// Returns the classification of this error.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.inner.kind
    }

    /// Consumes the error and returns the collaborator error it carries.
    #[must_use]
    pub fn into_source(self) -> Option<BoxError> {
        self.inner.source
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("socks_agent::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.inner.kind {
            Kind::Config => "invalid proxy configuration",
            Kind::Dns => "failed to resolve target host",
            Kind::Socks => "SOCKS handshake failed",
            Kind::Tls => "TLS upgrade failed",
            Kind::Timeout => "connect timed out",
            Kind::Canceled => "connect canceled",
        };

        match self.inner.source {
            Some(ref source) => write!(f, "{prefix}: {source}"),
            None => f.write_str(prefix),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}

impl From<Error> for io::Error {
    /// Hands the agent a plain transport error: when the collaborator failed
    /// with an `io::Error`, that exact error is returned.
    fn from(err: Error) -> io::Error {
        let Inner { kind, source } = *err.inner;
        let io_kind = match kind {
            Kind::Config => io::ErrorKind::InvalidInput,
            Kind::Timeout => io::ErrorKind::TimedOut,
            Kind::Canceled => io::ErrorKind::Interrupted,
            Kind::Dns | Kind::Socks | Kind::Tls => io::ErrorKind::Other,
        };

        match source {
            Some(source) => match source.downcast::<io::Error>() {
                Ok(io_err) => *io_err,
                Err(other) => io::Error::new(io_kind, other),
            },
            None => io::Error::new(io_kind, Error::new(kind)),
        }
    }
}
