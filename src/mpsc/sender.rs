use std::sync::Weak;

use crate::mpsc::SendError;
use crate::shared::Shared;

/// The producer side of an MPSC channel.
///
/// Copyable and movable: any number of `Sender`s may exist concurrently,
/// each forwarding into the same single [`Receiver`](super::Receiver). A
/// `Sender` holds only a weak handle to the channel, so it can detect —
/// promptly, on the next `send` — that the receiver has been dropped.
pub struct Sender<T> {
    inner: Weak<Shared<T>>,
}

impl<T> Sender<T> {
    pub(crate) fn new(inner: Weak<Shared<T>>) -> Self {
        Self { inner }
    }

    /// Sends `value` to the receiver.
    ///
    /// Blocks per the channel's flavor (never for unbounded, while full for
    /// bounded, until a matching `recv` takes the value for rendezvous).
    /// Fails with [`SendError`] if the receiver has already been dropped,
    /// handing `value` back.
    pub fn send(&self, value: T) -> Result<(), SendError<T>> {
        let Some(shared) = self.inner.upgrade() else {
            tracing::debug!("mpsc send failed: receiver expired");
            return Err(SendError(value));
        };
        shared.push(value);
        Ok(())
    }
}

impl<T> Clone for Sender<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
