//! The buffer layer.
//!
//! A [`Buffer`] is the thread-safe queue discipline shared by every channel
//! flavor. All three variants expose the same two operations —
//! [`Buffer::push`] and [`Buffer::pop`] — and own every piece of
//! synchronization state (mutex, condition variables, capacity) internally;
//! nothing outside this module ever locks anything directly.
//!
//! The three disciplines are modeled as a tagged enum rather than as trait
//! objects: there are exactly three flavors, fixed at construction time, and
//! dispatching on a tag avoids both dynamic dispatch and an unnecessary
//! abstract base type.

mod bounded;
mod rendezvous;
mod unbounded;

pub use bounded::BoundedBuffer;
pub use rendezvous::RendezvousBuffer;
pub use unbounded::UnboundedBuffer;

/// The contract every buffer discipline implements: push a value in, pop one
/// out, blocking as the discipline requires. Exists to document that
/// contract in one place; dispatch still goes through [`Buffer`]'s tagged
/// `match`, not through a vtable.
trait BufferOps<T> {
    fn push(&self, value: T);
    fn pop(&self) -> T;
}

impl<T> BufferOps<T> for UnboundedBuffer<T> {
    fn push(&self, value: T) {
        UnboundedBuffer::push(self, value)
    }

    fn pop(&self) -> T {
        UnboundedBuffer::pop(self)
    }
}

impl<T> BufferOps<T> for BoundedBuffer<T> {
    fn push(&self, value: T) {
        BoundedBuffer::push(self, value)
    }

    fn pop(&self) -> T {
        BoundedBuffer::pop(self)
    }
}

impl<T> BufferOps<T> for RendezvousBuffer<T> {
    fn push(&self, value: T) {
        RendezvousBuffer::push(self, value)
    }

    fn pop(&self) -> T {
        RendezvousBuffer::pop(self)
    }
}

/// The buffering discipline a channel is constructed with.
///
/// - `Unbounded`: no capacity limit, `send` never blocks.
/// - `Bounded(n)`: FIFO with back-pressure, capacity `n` must be positive.
/// - `Rendezvous`: zero-capacity hand-off, `send` blocks until `recv` has
///   taken the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Unbounded,
    Bounded(usize),
    Rendezvous,
}

/// A thread-safe FIFO queue, one of three disciplines selected at
/// construction time via [`Flavor`].
pub(crate) enum Buffer<T> {
    Unbounded(UnboundedBuffer<T>),
    Bounded(BoundedBuffer<T>),
    Rendezvous(RendezvousBuffer<T>),
}

impl<T> Buffer<T> {
    pub(crate) fn new(flavor: Flavor) -> Self {
        match flavor {
            Flavor::Unbounded => Buffer::Unbounded(UnboundedBuffer::new()),
            Flavor::Bounded(capacity) => {
                assert!(capacity > 0, "bounded channel capacity must be positive");
                Buffer::Bounded(BoundedBuffer::new(capacity))
            }
            Flavor::Rendezvous => Buffer::Rendezvous(RendezvousBuffer::new()),
        }
    }

    /// Appends `value`. Blocks while the buffer cannot accept it yet
    /// (bounded: full; rendezvous: occupied, and again until taken).
    pub(crate) fn push(&self, value: T) {
        match self {
            Buffer::Unbounded(b) => BufferOps::push(b, value),
            Buffer::Bounded(b) => BufferOps::push(b, value),
            Buffer::Rendezvous(b) => BufferOps::push(b, value),
        }
    }

    /// Removes and returns the front value. Blocks while none is available.
    pub(crate) fn pop(&self) -> T {
        match self {
            Buffer::Unbounded(b) => BufferOps::pop(b),
            Buffer::Bounded(b) => BufferOps::pop(b),
            Buffer::Rendezvous(b) => BufferOps::pop(b),
        }
    }
}
