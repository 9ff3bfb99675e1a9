//! In-memory collaborators for connector tests
#![allow(dead_code)]

use std::io;
use std::net::IpAddr;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::task::{Context, Poll};
use std::time::Duration;

use bytes::Bytes;
use socks_agent_client::connect::Io;
use socks_agent_client::error::BoxError;
use socks_agent_client::{
    Resolve, SocksClient, SocksConnectionSpec, TlsOptions, TlsUpgrade, Tunnel,
};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, DuplexStream, ReadBuf};
use tracing_subscriber::EnvFilter;

/// Route connector tracing into the test harness. `RUST_LOG` picks the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("socks_agent=debug,socks_agent_client=debug")
        }))
        .with_test_writer()
        .try_init();
}

/// Records every spec and hands back one end of a duplex pipe.
#[derive(Default)]
pub struct MockSocks {
    pub specs: Mutex<Vec<SocksConnectionSpec>>,
    pub peers: Mutex<Vec<DuplexStream>>,
    pub fail: Option<io::ErrorKind>,
    pub pending: Bytes,
    pub delay: Option<Duration>,
}

impl MockSocks {
    pub fn failing(kind: io::ErrorKind) -> Self {
        MockSocks {
            fail: Some(kind),
            ..MockSocks::default()
        }
    }

    pub fn with_pending(pending: &'static [u8]) -> Self {
        MockSocks {
            pending: Bytes::from_static(pending),
            ..MockSocks::default()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        MockSocks {
            delay: Some(delay),
            ..MockSocks::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.specs.lock().expect("lock").len()
    }

    pub fn last_spec(&self) -> SocksConnectionSpec {
        self.specs
            .lock()
            .expect("lock")
            .last()
            .cloned()
            .expect("at least one handshake")
    }

    pub fn take_peer(&self) -> DuplexStream {
        self.peers.lock().expect("lock").pop().expect("a tunnel was opened")
    }
}

impl SocksClient for MockSocks {
    type Stream = DuplexStream;

    async fn create_connection(&self, spec: SocksConnectionSpec) -> io::Result<Tunnel<DuplexStream>> {
        self.specs.lock().expect("lock").push(spec);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(kind) = self.fail {
            return Err(io::Error::new(kind, "mock handshake failure"));
        }
        let (client, server) = tokio::io::duplex(4096);
        self.peers.lock().expect("lock").push(server);
        Ok(Tunnel::with_pending(client, self.pending.clone()))
    }
}

/// Answers every lookup with one fixed result and counts calls.
pub struct MockResolver {
    answer: Option<IpAddr>,
    pub calls: AtomicUsize,
}

impl MockResolver {
    pub fn answering(ip: [u8; 4]) -> Self {
        MockResolver {
            answer: Some(IpAddr::from(ip)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        MockResolver {
            answer: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Resolve for MockResolver {
    async fn lookup(&self, host: &str) -> Result<IpAddr, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.ok_or_else(|| {
            Box::new(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such host: {host}"),
            )) as BoxError
        })
    }
}

/// What the mock upgrader saw for one wrap.
#[derive(Clone, Debug)]
pub struct WrapCall {
    pub server_name: String,
    pub options: TlsOptions,
    pub prefix: Vec<u8>,
}

/// Pretends to upgrade: records the call and reads `peek` bytes first.
#[derive(Default)]
pub struct MockTls {
    pub calls: Mutex<Vec<WrapCall>>,
    pub peek: usize,
    pub fail: bool,
}

impl MockTls {
    pub fn peeking(peek: usize) -> Self {
        MockTls {
            peek,
            ..MockTls::default()
        }
    }

    pub fn last_call(&self) -> WrapCall {
        self.calls
            .lock()
            .expect("lock")
            .last()
            .cloned()
            .expect("at least one upgrade")
    }

    pub fn calls(&self) -> usize {
        self.calls.lock().expect("lock").len()
    }
}

/// Stand-in for a TLS stream.
#[derive(Debug)]
pub struct Wrapped<S> {
    pub server_name: String,
    pub inner: S,
}

impl TlsUpgrade for MockTls {
    type Output<S: Io> = Wrapped<S>;

    async fn wrap<S: Io>(
        &self,
        mut stream: S,
        server_name: &str,
        options: &TlsOptions,
    ) -> io::Result<Wrapped<S>> {
        let mut prefix = vec![0u8; self.peek];
        stream.read_exact(&mut prefix).await?;
        self.calls.lock().expect("lock").push(WrapCall {
            server_name: server_name.to_owned(),
            options: options.clone(),
            prefix,
        });
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "mock tls failure"));
        }
        Ok(Wrapped {
            server_name: server_name.to_owned(),
            inner: stream,
        })
    }
}

impl<S: AsyncRead + Unpin> AsyncRead for Wrapped<S> {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Pin::new(&mut self.inner).poll_read(cx, buf)
    }
}

impl<S: AsyncWrite + Unpin> AsyncWrite for Wrapped<S> {
    fn poll_write(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Pin::new(&mut self.inner).poll_write(cx, buf)
    }

    fn poll_flush(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.inner).poll_flush(cx)
    }

    fn poll_shutdown(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.inner).poll_shutdown(cx)
    }
}
