use std::fmt;

/// A marker type to indicate that a connect call ran past its deadline.
#[derive(Debug)]
pub struct TimedOut;

impl fmt::Display for TimedOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("timed out")
    }
}

impl std::error::Error for TimedOut {}

/// A marker type to indicate that a connect call was canceled.
#[derive(Debug)]
pub struct OperationCanceled;

impl fmt::Display for OperationCanceled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("operation canceled")
    }
}

impl std::error::Error for OperationCanceled {}

/// A marker type to indicate that a proxy scheme is not a SOCKS scheme.
#[derive(Debug)]
pub struct BadScheme(pub(crate) String);

impl fmt::Display for BadScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a \"socks\" protocol must be specified, got `{}`", self.0)
    }
}

impl std::error::Error for BadScheme {}

/// A marker type to indicate that no usable host was given.
#[derive(Debug)]
pub struct MissingHost;

impl fmt::Display for MissingHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a SOCKS proxy server `host` must be specified")
    }
}

impl std::error::Error for MissingHost {}
