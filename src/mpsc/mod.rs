//! Multiple-producer, single-consumer channels.
//!
//! The [`Receiver`] is the non-copyable, strongly-owning side: it is
//! constructed with a [`Flavor`] and its lifetime bounds the channel's
//! buffer. [`Sender`]s are cheaply cloned and each holds only a weak handle,
//! so `send` fails with [`SendError`] the moment the receiver is gone.
//!
//! ```
//! use confluence::mpsc;
//!
//! let (tx, rx) = mpsc::unbounded::<i32>();
//! tx.send(1).unwrap();
//! tx.send(2).unwrap();
//! assert_eq!(rx.recv(), 1);
//! assert_eq!(rx.recv(), 2);
//! ```

mod error;
mod receiver;
mod sender;

pub use error::SendError;
pub use receiver::Receiver;
pub use sender::Sender;

use crate::buffer::Flavor;

/// Constructs an MPSC channel with the given [`Flavor`].
pub fn channel<T>(flavor: Flavor) -> (Sender<T>, Receiver<T>) {
    let rx = Receiver::new(flavor);
    let tx = rx.sender();
    (tx, rx)
}

/// Constructs an unbounded MPSC channel. `send` never blocks.
pub fn unbounded<T>() -> (Sender<T>, Receiver<T>) {
    channel(Flavor::Unbounded)
}

/// Constructs a bounded MPSC channel with the given positive capacity.
/// `send` blocks while the buffer holds `capacity` values.
///
/// # Panics
///
/// Panics if `capacity` is zero; use [`rendezvous`] for a zero-capacity
/// channel instead.
pub fn bounded<T>(capacity: usize) -> (Sender<T>, Receiver<T>) {
    channel(Flavor::Bounded(capacity))
}

/// Constructs a rendezvous (zero-capacity) MPSC channel. `send` blocks
/// until a matching `recv` has taken the value.
pub fn rendezvous<T>() -> (Sender<T>, Receiver<T>) {
    channel(Flavor::Rendezvous)
}

/// Bundles one [`Sender`] and the owning [`Receiver`] as a single object,
/// for callers who want both endpoints constructed in one step.
///
/// Not copyable (it owns the receiver's strong handle); movable.
pub struct Channel<T> {
    sender: Sender<T>,
    receiver: Receiver<T>,
}

impl<T> Channel<T> {
    pub fn new(flavor: Flavor) -> Self {
        let (sender, receiver) = channel(flavor);
        Self { sender, receiver }
    }

    pub fn send(&self, value: T) -> Result<(), SendError<T>> {
        self.sender.send(value)
    }

    pub fn recv(&self) -> T {
        self.receiver.recv()
    }

    /// Creates another sender bound to this channel.
    pub fn sender(&self) -> Sender<T> {
        self.receiver.sender()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_facade_delegates() {
        let chan = Channel::<i32>::new(Flavor::Unbounded);
        chan.send(7).unwrap();
        assert_eq!(chan.recv(), 7);
    }
}
