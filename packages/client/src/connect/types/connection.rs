//! Streams returned by the connector

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use hyper::rt::{Read, ReadBufCursor, Write};
use hyper_util::client::legacy::connect::{Connected, Connection};
use hyper_util::rt::TokioIo;
use pin_project_lite::pin_project;
use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};

pin_project! {
    /// A tunneled stream, upgraded to TLS or not.
    #[project = MaybeTlsProj]
    #[derive(Debug)]
    pub enum MaybeTlsStream<P, T> {
        Plain { #[pin] stream: P },
        Tls { #[pin] stream: T },
    }
}

impl<P, T> MaybeTlsStream<P, T> {
    pub fn is_tls(&self) -> bool {
        matches!(self, MaybeTlsStream::Tls { .. })
    }

    pub fn plain(&self) -> Option<&P> {
        match self {
            MaybeTlsStream::Plain { stream } => Some(stream),
            MaybeTlsStream::Tls { .. } => None,
        }
    }

    pub fn tls(&self) -> Option<&T> {
        match self {
            MaybeTlsStream::Tls { stream } => Some(stream),
            MaybeTlsStream::Plain { .. } => None,
        }
    }
}

impl<P: AsyncRead, T: AsyncRead> AsyncRead for MaybeTlsStream<P, T> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        match self.project() {
            MaybeTlsProj::Plain { stream } => AsyncRead::poll_read(stream, cx, buf),
            MaybeTlsProj::Tls { stream } => AsyncRead::poll_read(stream, cx, buf),
        }
    }
}

impl<P: AsyncWrite, T: AsyncWrite> AsyncWrite for MaybeTlsStream<P, T> {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        match self.project() {
            MaybeTlsProj::Plain { stream } => AsyncWrite::poll_write(stream, cx, buf),
            MaybeTlsProj::Tls { stream } => AsyncWrite::poll_write(stream, cx, buf),
        }
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        match self.project() {
            MaybeTlsProj::Plain { stream } => AsyncWrite::poll_flush(stream, cx),
            MaybeTlsProj::Tls { stream } => AsyncWrite::poll_flush(stream, cx),
        }
    }

    fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        match self.project() {
            MaybeTlsProj::Plain { stream } => AsyncWrite::poll_shutdown(stream, cx),
            MaybeTlsProj::Tls { stream } => AsyncWrite::poll_shutdown(stream, cx),
        }
    }
}

pin_project! {
    /// A connector stream in hyper's I/O traits, for the legacy client.
    #[derive(Debug)]
    pub struct Conn<S> {
        #[pin]
        inner: TokioIo<S>,
        tls: bool,
    }
}

impl<P, T> Conn<MaybeTlsStream<P, T>> {
    pub fn new(stream: MaybeTlsStream<P, T>) -> Self {
        let tls = stream.is_tls();
        Conn {
            inner: TokioIo::new(stream),
            tls,
        }
    }
}

impl<S> Conn<S> {
    pub fn is_tls(&self) -> bool {
        self.tls
    }

    pub fn into_inner(self) -> S {
        self.inner.into_inner()
    }
}

impl<S: AsyncRead> Read for Conn<S> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: ReadBufCursor<'_>,
    ) -> Poll<io::Result<()>> {
        Read::poll_read(self.project().inner, cx, buf)
    }
}

impl<S: AsyncWrite> Write for Conn<S> {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Write::poll_write(self.project().inner, cx, buf)
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Write::poll_flush(self.project().inner, cx)
    }

    fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Write::poll_shutdown(self.project().inner, cx)
    }
}

impl<S> Connection for Conn<S> {
    fn connected(&self) -> Connected {
        // not an HTTP proxy, so request targets stay in origin form
        Connected::new()
    }
}
