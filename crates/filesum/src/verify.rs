//! Pass-through verification conduits.
//!
//! Each conduit forwards every byte unchanged while feeding it to a hash
//! accumulator, then compares the finalized digest against the expected
//! value when the input side ends. Payload bytes are never withheld or
//! truncated on mismatch: the full (untrusted) payload reaches the consumer
//! first, and the failure surfaces through the conduit's native error
//! channel at end-of-input. Each conduit verifies exactly once.

use std::io::{self, Read};
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use filesum_hash::Hasher;
use futures_util::Stream;
use tokio::io::{AsyncRead, ReadBuf};
use tracing::debug;

use crate::error::{DigestError, Result};
use crate::options::DigestOptions;

/// Running accumulator plus the end-of-input comparison shared by all
/// conduits.
struct Verifier {
    hasher: Option<Box<dyn Hasher>>,
    expected: String,
}

impl Verifier {
    fn new(expected: impl Into<String>, options: &DigestOptions) -> Result<Self> {
        let algorithm = options.resolve()?;
        Ok(Self {
            hasher: Some(algorithm.hasher()),
            expected: expected.into(),
        })
    }

    fn update(&mut self, data: &[u8]) {
        if let Some(hasher) = self.hasher.as_mut() {
            hasher.update(data);
        }
    }

    /// Finalize on the first end-of-input; later calls are no-ops.
    fn finish(&mut self) -> Result<()> {
        let Some(hasher) = self.hasher.take() else {
            return Ok(());
        };
        let actual = hex::encode(hasher.finalize());
        if actual == self.expected {
            Ok(())
        } else {
            debug!(expected = %self.expected, %actual, "digest mismatch at end of input");
            Err(DigestError::Mismatch {
                expected: self.expected.clone(),
                actual,
            })
        }
    }
}

fn mismatch_to_io(err: DigestError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, err)
}

/// Blocking pass-through verifier over any [`Read`] source.
///
/// Reads delegate to the wrapped reader, so backpressure is whatever the
/// consumer's read pace imposes. The read observing end-of-input performs
/// the comparison; on mismatch it returns an [`io::Error`] of kind
/// [`InvalidData`](io::ErrorKind::InvalidData) wrapping
/// [`DigestError::Mismatch`], after all payload bytes have been delivered.
pub struct VerifyingReader<R> {
    inner: R,
    verifier: Verifier,
}

impl<R: Read> VerifyingReader<R> {
    /// Wrap `inner`, verifying against `expected` once it is exhausted.
    pub fn new(inner: R, expected: impl Into<String>, options: &DigestOptions) -> Result<Self> {
        Ok(Self {
            inner,
            verifier: Verifier::new(expected, options)?,
        })
    }

    /// Consume the conduit and return the wrapped reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for VerifyingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n > 0 {
            self.verifier.update(&buf[..n]);
        } else if !buf.is_empty() {
            self.verifier.finish().map_err(mismatch_to_io)?;
        }
        Ok(n)
    }
}

/// Asynchronous pass-through verifier over any [`AsyncRead`] source, with
/// the same contract as [`VerifyingReader`].
pub struct AsyncVerifyingReader<R> {
    inner: R,
    verifier: Verifier,
}

impl<R: AsyncRead + Unpin> AsyncVerifyingReader<R> {
    /// Wrap `inner`, verifying against `expected` once it is exhausted.
    pub fn new(inner: R, expected: impl Into<String>, options: &DigestOptions) -> Result<Self> {
        Ok(Self {
            inner,
            verifier: Verifier::new(expected, options)?,
        })
    }

    /// Consume the conduit and return the wrapped reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: AsyncRead + Unpin> AsyncRead for AsyncVerifyingReader<R> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let me = self.get_mut();
        let before = buf.filled().len();
        match Pin::new(&mut me.inner).poll_read(cx, buf) {
            Poll::Ready(Ok(())) => {
                let filled = &buf.filled()[before..];
                if !filled.is_empty() {
                    me.verifier.update(filled);
                } else if buf.remaining() > 0 {
                    // Zero bytes with capacity left means end-of-input.
                    if let Err(err) = me.verifier.finish() {
                        return Poll::Ready(Err(mismatch_to_io(err)));
                    }
                }
                Poll::Ready(Ok(()))
            }
            other => other,
        }
    }
}

/// Pass-through verifier over a [`Stream`] of byte chunks.
///
/// Chunks are forwarded unchanged. After the inner stream ends, a mismatch
/// is yielded as one final `Err(DigestError::Mismatch)` item; on match the
/// stream simply ends. An error from the inner stream propagates and
/// terminates the conduit without verification.
pub struct VerifyingStream<S> {
    inner: S,
    verifier: Verifier,
    done: bool,
}

impl<S> VerifyingStream<S>
where
    S: Stream<Item = io::Result<Bytes>> + Unpin,
{
    /// Wrap `inner`, verifying against `expected` once it is exhausted.
    pub fn new(inner: S, expected: impl Into<String>, options: &DigestOptions) -> Result<Self> {
        Ok(Self {
            inner,
            verifier: Verifier::new(expected, options)?,
            done: false,
        })
    }
}

impl<S> Stream for VerifyingStream<S>
where
    S: Stream<Item = io::Result<Bytes>> + Unpin,
{
    type Item = Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let me = self.get_mut();
        if me.done {
            return Poll::Ready(None);
        }
        match Pin::new(&mut me.inner).poll_next(cx) {
            Poll::Ready(Some(Ok(chunk))) => {
                me.verifier.update(&chunk);
                Poll::Ready(Some(Ok(chunk)))
            }
            Poll::Ready(Some(Err(err))) => {
                me.done = true;
                Poll::Ready(Some(Err(err.into())))
            }
            Poll::Ready(None) => {
                me.done = true;
                match me.verifier.finish() {
                    Ok(()) => Poll::Ready(None),
                    Err(err) => Poll::Ready(Some(Err(err))),
                }
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
