use std::sync::Weak;

use crate::shared::Shared;
use crate::spmc::RecvError;

/// A consumer side of an SPMC channel.
///
/// Copyable and movable: any number of `Receiver`s may exist concurrently,
/// each competing to consume from the same single [`Sender`](super::Sender).
/// A `Receiver` holds only a weak handle to the channel, so it can detect —
/// promptly, on the next `recv` — that the sender has been dropped.
pub struct Receiver<T> {
    inner: Weak<Shared<T>>,
}

impl<T> Receiver<T> {
    pub(crate) fn new(inner: Weak<Shared<T>>) -> Self {
        Self { inner }
    }

    /// Receives the next value.
    ///
    /// Blocks until one is available. Each value is delivered to exactly
    /// one receiver; if several receivers are waiting, which one wins is
    /// unspecified. Fails with [`RecvError`] once the sender has been
    /// dropped.
    pub fn recv(&self) -> Result<T, RecvError> {
        let Some(shared) = self.inner.upgrade() else {
            tracing::debug!("spmc recv failed: sender expired");
            return Err(RecvError);
        };
        Ok(shared.pop())
    }
}

impl<T> Clone for Receiver<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
