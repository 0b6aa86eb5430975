use std::sync::{Condvar, Mutex};

/// A zero-capacity hand-off: an optional cell holding at most one value, with
/// three condition variables coordinating the two-phase push protocol that
/// distinguishes rendezvous from a size-1 bounded buffer.
///
/// - `slot_empty`: producers wait here for the cell to be free.
/// - `slot_filled`: consumers wait here for the cell to hold a value.
/// - `slot_drained`: the producer that just filled the cell waits here until
///   a consumer has taken the value back out, so `push` only returns after
///   the matching `pop` has begun (and completed) taking it.
pub struct RendezvousBuffer<T> {
    slot: Mutex<Option<T>>,
    slot_empty: Condvar,
    slot_filled: Condvar,
    slot_drained: Condvar,
}

impl<T> RendezvousBuffer<T> {
    pub(crate) fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            slot_empty: Condvar::new(),
            slot_filled: Condvar::new(),
            slot_drained: Condvar::new(),
        }
    }

    pub(crate) fn push(&self, value: T) {
        let mut slot = self.slot.lock().unwrap();
        while slot.is_some() {
            tracing::trace!("rendezvous buffer occupied, sender waiting for slot_empty");
            slot = self.slot_empty.wait(slot).unwrap();
        }
        *slot = Some(value);
        drop(slot);
        tracing::trace!("rendezvous buffer: slot filled, waking a consumer");
        self.slot_filled.notify_one();

        let mut slot = self.slot.lock().unwrap();
        while slot.is_some() {
            tracing::trace!("rendezvous buffer: sender waiting for slot_drained");
            slot = self.slot_drained.wait(slot).unwrap();
        }
        // `push` returns only now: a `pop` has taken the value, establishing
        // the synchronization point invariant 5 requires.
    }

    pub(crate) fn pop(&self) -> T {
        let mut slot = self.slot.lock().unwrap();
        while slot.is_none() {
            tracing::trace!("rendezvous buffer empty, receiver waiting for slot_filled");
            slot = self.slot_filled.wait(slot).unwrap();
        }
        // Taking the value while still holding the lock is what makes
        // delivery to exactly one of several racing receivers atomic: any
        // other receiver woken from `slot_filled` re-checks the `while`
        // condition and finds the slot empty again before it can take it.
        let value = slot.take().expect("slot was just shown to hold a value");
        drop(slot);
        self.slot_drained.notify_one();
        self.slot_empty.notify_one();
        value
    }
}
