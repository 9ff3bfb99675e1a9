//! SOCKS Agent Public API
//!
//! Fluent construction of SOCKS4/4a/5/5h agents for HTTP(S) clients. The
//! built agent is a `socks_agent_client::SocksConnector`: call `connect`
//! directly, or hand it to hyper-util's legacy client as its connector.
//!
//! ```no_run
//! use socks_agent::{ConnectRequest, SocksAgent};
//!
//! # async fn run() -> Result<(), socks_agent::Error> {
//! let agent = SocksAgent::proxy("socks5h://127.0.0.1:9050")
//!     .alpn(["http/1.1"])
//!     .build()?;
//! let stream = agent.connect(ConnectRequest::new("example.com").secure(true)).await?;
//! # drop(stream);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::{Agent, AgentBuilder, DefaultSocks, IntoSocksClient};

// Re-export the canonical types from the client package
pub use socks_agent_client::prelude::*;
pub use socks_agent_client::{config, connect, dns, error, proxy, tls};

/// Entry point providing static builder methods
pub struct SocksAgent;

impl SocksAgent {
    /// Builder for a proxy given as a connection string.
    ///
    /// Shorthand for `AgentBuilder::proxy()`
    #[must_use]
    pub fn proxy(url: impl Into<String>) -> AgentBuilder {
        AgentBuilder::proxy(url)
    }

    /// Builder for a proxy given as structured fields.
    ///
    /// Shorthand for `AgentBuilder::from_spec()`
    #[must_use]
    pub fn from_spec(spec: ProxySpec) -> AgentBuilder {
        AgentBuilder::from_spec(spec)
    }

    /// Builder for an already parsed descriptor.
    #[must_use]
    pub fn from_descriptor(descriptor: ProxyDescriptor) -> AgentBuilder {
        AgentBuilder::from_descriptor(descriptor)
    }
}
