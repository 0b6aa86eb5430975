//! Single-producer, multiple-consumer channels.
//!
//! The [`Sender`] is the non-copyable, strongly-owning side: it is
//! constructed with a [`Flavor`] and its lifetime bounds the channel's
//! buffer. [`Receiver`]s are cheaply cloned and each holds only a weak
//! handle, so `recv` fails with [`RecvError`] the moment the sender is gone.
//! Each value sent is delivered to exactly one receiver.
//!
//! ```
//! use confluence::spmc;
//!
//! let (tx, rx) = spmc::unbounded::<i32>();
//! tx.send(1);
//! tx.send(2);
//! assert_eq!(rx.recv(), Ok(1));
//! assert_eq!(rx.recv(), Ok(2));
//! ```

mod error;
mod receiver;
mod sender;

pub use error::RecvError;
pub use receiver::Receiver;
pub use sender::Sender;

use crate::buffer::Flavor;

/// Constructs an SPMC channel with the given [`Flavor`].
pub fn channel<T>(flavor: Flavor) -> (Sender<T>, Receiver<T>) {
    let tx = Sender::new(flavor);
    let rx = tx.receiver();
    (tx, rx)
}

/// Constructs an unbounded SPMC channel. `send` never blocks.
pub fn unbounded<T>() -> (Sender<T>, Receiver<T>) {
    channel(Flavor::Unbounded)
}

/// Constructs a bounded SPMC channel with the given positive capacity.
///
/// # Panics
///
/// Panics if `capacity` is zero; use [`rendezvous`] for a zero-capacity
/// channel instead.
pub fn bounded<T>(capacity: usize) -> (Sender<T>, Receiver<T>) {
    channel(Flavor::Bounded(capacity))
}

/// Constructs a rendezvous (zero-capacity) SPMC channel. `send` blocks
/// until some `recv` has taken the value.
pub fn rendezvous<T>() -> (Sender<T>, Receiver<T>) {
    channel(Flavor::Rendezvous)
}

/// Bundles the owning [`Sender`] and one [`Receiver`] as a single object,
/// for callers who want both endpoints constructed in one step.
///
/// Not copyable (it owns the sender's strong handle); movable.
pub struct Channel<T> {
    sender: Sender<T>,
    receiver: Receiver<T>,
}

impl<T> Channel<T> {
    pub fn new(flavor: Flavor) -> Self {
        let (sender, receiver) = channel(flavor);
        Self { sender, receiver }
    }

    pub fn send(&self, value: T) {
        self.sender.send(value);
    }

    pub fn recv(&self) -> Result<T, RecvError> {
        self.receiver.recv()
    }

    /// Creates another receiver bound to this channel.
    pub fn receiver(&self) -> Receiver<T> {
        self.sender.receiver()
    }
}
