//! The tunnel handed back by a SOCKS client
//!
//! A handshake may read past its own reply. Those bytes belong to whatever
//! speaks next on the stream (usually a TLS server hello) and are replayed
//! by [`Rewind`] before the socket is read again.

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Buf, Bytes};
use pin_project_lite::pin_project;
use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};

/// Streams the connector can carry.
pub trait Io: AsyncRead + AsyncWrite + Unpin + Send + 'static {}

impl<T: AsyncRead + AsyncWrite + Unpin + Send + 'static> Io for T {}

/// An established tunnel: the stream plus any bytes read past the handshake.
#[derive(Debug)]
pub struct Tunnel<S> {
    stream: S,
    pending: Bytes,
}

impl<S> Tunnel<S> {
    pub fn new(stream: S) -> Self {
        Self::with_pending(stream, Bytes::new())
    }

    pub fn with_pending(stream: S, pending: Bytes) -> Self {
        Tunnel { stream, pending }
    }

    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    pub fn get_ref(&self) -> &S {
        &self.stream
    }

    /// Resume reading: pending bytes come first, then the socket.
    pub fn resume(self) -> Rewind<S> {
        Rewind {
            pre: Some(self.pending).filter(|b| !b.is_empty()),
            inner: self.stream,
        }
    }
}

pin_project! {
    /// A stream with a prefix of already-read bytes.
    #[derive(Debug)]
    pub struct Rewind<S> {
        pre: Option<Bytes>,
        #[pin]
        inner: S,
    }
}

impl<S> Rewind<S> {
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Bytes not yet replayed.
    pub fn pending(&self) -> &[u8] {
        self.pre.as_deref().unwrap_or_default()
    }

    pub fn into_inner(self) -> (S, Bytes) {
        (self.inner, self.pre.unwrap_or_default())
    }
}

impl<S: AsyncRead> AsyncRead for Rewind<S> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let this = self.project();
        if let Some(mut prefix) = this.pre.take()
            && !prefix.is_empty()
        {
            let n = prefix.len().min(buf.remaining());
            buf.put_slice(&prefix[..n]);
            prefix.advance(n);
            if !prefix.is_empty() {
                *this.pre = Some(prefix);
            }
            return Poll::Ready(Ok(()));
        }
        this.inner.poll_read(cx, buf)
    }
}

impl<S: AsyncWrite> AsyncWrite for Rewind<S> {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        self.project().inner.poll_write(cx, buf)
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        self.project().inner.poll_flush(cx)
    }

    fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        self.project().inner.poll_shutdown(cx)
    }

    fn poll_write_vectored(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        bufs: &[io::IoSlice<'_>],
    ) -> Poll<io::Result<usize>> {
        self.project().inner.poll_write_vectored(cx, bufs)
    }

    fn is_write_vectored(&self) -> bool {
        self.inner.is_write_vectored()
    }
}
