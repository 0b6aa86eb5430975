//! `confluence`: typed, in-process, blocking message-passing channels.
//!
//! A channel carries values of a single type from one or more senders to
//! one or more receivers running on distinct OS threads. Two topologies are
//! offered:
//!
//! - [`mpsc`]: multiple producers, one consumer. `Sender` is cloneable;
//!   `Receiver` is not.
//! - [`spmc`]: one producer, multiple consumers. `Receiver` is cloneable;
//!   `Sender` is not.
//!
//! Each topology comes in three buffering flavors (see [`Flavor`]):
//! unbounded (asynchronous, no back-pressure), bounded (synchronous, fixed
//! capacity), and rendezvous (zero-capacity hand-off, a true synchronization
//! point between a matched send/recv pair).
//!
//! All synchronization — the mutex, the condition variables, the capacity
//! bookkeeping — lives in an internal buffer layer and is entirely internal;
//! callers only ever see `send`/`recv`. Endpoint expiration (the other side
//! having been dropped) is detected through `Arc`/`Weak` promotion, not
//! polling.
//!
//! This crate does not implement lock-free queues, `select`/`alt` across
//! channels, timed receive, or an explicit close/drain protocol distinct
//! from dropping an endpoint.

mod buffer;
mod shared;

pub mod mpsc;
pub mod spmc;

pub use buffer::Flavor;
