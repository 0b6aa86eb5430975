/// The sender has been dropped, and no more values will ever arrive.
///
/// This is the only error an SPMC [`Receiver`](super::Receiver) can
/// produce, and it is terminal: once observed, every later `recv` on any
/// clone of that receiver fails the same way.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("receiving on an spmc channel whose sender has been dropped")]
pub struct RecvError;
