use std::sync::Arc;

use crate::buffer::Flavor;
use crate::mpsc::Sender;
use crate::shared::Shared;

/// The single consumer side of an MPSC channel.
///
/// Movable but not copyable: it strongly owns the buffer, so the buffer's
/// lifetime ends precisely when this `Receiver` is dropped. Construct
/// [`Sender`]s from it with [`Receiver::sender`].
pub struct Receiver<T> {
    inner: Arc<Shared<T>>,
}

impl<T> Receiver<T> {
    pub(crate) fn new(flavor: Flavor) -> Self {
        tracing::debug!(?flavor, "mpsc channel constructed");
        Self {
            inner: Arc::new(Shared::new(flavor)),
        }
    }

    /// Receives the next value, blocking until one is available.
    ///
    /// Cannot fail: as long as this `Receiver` exists, its buffer exists.
    pub fn recv(&self) -> T {
        self.inner.pop()
    }

    /// Creates a new [`Sender`] for this channel. Senders are cheaply
    /// cloned from one another afterwards; this is just the first one.
    pub fn sender(&self) -> Sender<T> {
        Sender::new(Arc::downgrade(&self.inner))
    }
}

impl<T> Drop for Receiver<T> {
    fn drop(&mut self) {
        tracing::debug!("mpsc receiver dropped, senders will observe expiration");
    }
}
