use std::sync::Arc;

use crate::buffer::Flavor;
use crate::shared::Shared;
use crate::spmc::Receiver;

/// The single producer side of an SPMC channel.
///
/// Movable but not copyable: it strongly owns the buffer, so the buffer's
/// lifetime ends precisely when this `Sender` is dropped. Construct
/// [`Receiver`]s from it with [`Sender::receiver`].
pub struct Sender<T> {
    inner: Arc<Shared<T>>,
}

impl<T> Sender<T> {
    pub(crate) fn new(flavor: Flavor) -> Self {
        tracing::debug!(?flavor, "spmc channel constructed");
        Self {
            inner: Arc::new(Shared::new(flavor)),
        }
    }

    /// Sends `value`, delivered to exactly one receiver.
    ///
    /// Blocks per the channel's flavor. Cannot fail: as long as this
    /// `Sender` exists, its buffer exists.
    pub fn send(&self, value: T) {
        self.inner.push(value);
    }

    /// Creates a new [`Receiver`] for this channel. Receivers are cheaply
    /// cloned from one another afterwards; this is just the first one.
    pub fn receiver(&self) -> Receiver<T> {
        Receiver::new(Arc::downgrade(&self.inner))
    }
}

impl<T> Drop for Sender<T> {
    fn drop(&mut self) {
        tracing::debug!("spmc sender dropped, receivers will observe expiration");
    }
}
